//! Implementations of `std::ops` and the `approx` traits.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation (or bitwise complement, for integers).
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

/// Implements a binary operator and its assigning form both between two vectors and between a
/// vector and a scalar.
macro_rules! binop {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $desc:literal;)+) => {
        $(
            #[doc = concat!("Element-wise ", $desc, ".")]
            impl<T, const N: usize> $Op for Vector<T, N>
            where
                T: $Op,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $op(self, rhs: Self) -> Self::Output {
                    self.zip_map(rhs, T::$op)
                }
            }

            #[doc = concat!("Element-wise ", $desc, " with a broadcast scalar.")]
            impl<T, const N: usize> $Op<T> for Vector<T, N>
            where
                T: $Op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output {
                    self.map(|elem| T::$op(elem, rhs))
                }
            }

            #[doc = concat!("Element-wise ", $desc, ".")]
            impl<T, const N: usize> $OpAssign for Vector<T, N>
            where
                T: $OpAssign,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: Self) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$op_assign(rhs));
                }
            }

            #[doc = concat!("Element-wise ", $desc, " with a broadcast scalar.")]
            impl<T, const N: usize> $OpAssign<T> for Vector<T, N>
            where
                T: $OpAssign + Copy,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$op_assign(rhs));
                }
            }
        )+
    };
}

binop! {
    Add::add, AddAssign::add_assign, "addition";
    Sub::sub, SubAssign::sub_assign, "subtraction";
    Mul::mul, MulAssign::mul_assign, "multiplication";
    Div::div, DivAssign::div_assign, "division";
    Rem::rem, RemAssign::rem_assign, "remainder";
    BitAnd::bitand, BitAndAssign::bitand_assign, "bitwise and";
    BitOr::bitor, BitOrAssign::bitor_assign, "bitwise or";
    BitXor::bitxor, BitXorAssign::bitxor_assign, "bitwise xor";
    Shl::shl, ShlAssign::shl_assign, "left shift";
    Shr::shr, ShrAssign::shr_assign, "right shift";
}

/// Implements `scalar <op> vector` for concrete primitive scalar types.
///
/// Coherence rules out a generic impl here, since the scalar is the `Self` type.
macro_rules! scalar_lhs {
    ($Op:ident::$op:ident for $($t:ty),+) => {
        $(
            impl<const N: usize> $Op<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| <$t as $Op>::$op(self, elem))
                }
            }
        )+
    };
}

scalar_lhs!(Add::add for f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(Sub::sub for f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(Mul::mul for f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(Div::div for f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(Rem::rem for f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(BitAnd::bitand for i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(BitOr::bitor for i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(BitXor::bitxor for i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(Shl::shl for i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_lhs!(Shr::shr for i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Bool8, Vec3f};

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(10, 20, 30);
        assert_eq!(a + b, vec3(11, 22, 33));
        assert_eq!(b - a, vec3(9, 18, 27));
        assert_eq!(a * b, vec3(10, 40, 90));
        assert_eq!(b / a, vec3(10, 10, 10));
        assert_eq!(b % vec3(3, 7, 4), vec3(1, 6, 2));
        assert_eq!(-a, vec3(-1, -2, -3));
    }

    #[test]
    fn scalar_broadcast() {
        let v = vec3(1.0f64, 2.0, 4.0);
        assert_eq!(v + 1.0, vec3(2.0, 3.0, 5.0));
        assert_eq!(1.0 + v, vec3(2.0, 3.0, 5.0));
        assert_eq!(v - 1.0, vec3(0.0, 1.0, 3.0));
        assert_eq!(1.0 - v, vec3(0.0, -1.0, -3.0));
        assert_eq!(v * 2.0, vec3(2.0, 4.0, 8.0));
        assert_eq!(2.0 * v, vec3(2.0, 4.0, 8.0));
        assert_eq!(v / 2.0, vec3(0.5, 1.0, 2.0));
        assert_eq!(4.0 / v, vec3(4.0, 2.0, 1.0));
        assert_eq!(7 % vec2(4i32, 5), vec2(3, 2));
    }

    #[test]
    fn bitwise() {
        let v = vec4(0b1100u8, 0b1010, 0xFF, 0);
        assert_eq!(v & 0b0110, vec4(0b0100, 0b0010, 0b0110, 0));
        assert_eq!(v | vec4(1, 1, 0, 1), vec4(0b1101, 0b1011, 0xFF, 1));
        assert_eq!(v ^ v, vec4(0, 0, 0, 0));
        assert_eq!(0x0F ^ v, vec4(0b0011, 0b0101, 0xF0, 0x0F));
        assert_eq!(!v, vec4(0b1111_0011, 0b1111_0101, 0, 0xFF));
        assert_eq!(v << 1, vec4(0b11000, 0b10100, 0xFE, 0));
        assert_eq!(v >> vec4(2, 1, 4, 0), vec4(0b11, 0b101, 0x0F, 0));
        assert_eq!(1 << vec3(0u32, 1, 4), vec3(1, 2, 16));

        let mask = vec2(Bool8::TRUE, Bool8::FALSE);
        assert_eq!(!mask, vec2(Bool8::FALSE, Bool8::TRUE));
        assert_eq!(mask & !mask, vec2(Bool8::FALSE, Bool8::FALSE));
    }

    #[test]
    fn assign() {
        let mut v = vec3(1, 2, 3);
        v += vec3(1, 1, 1);
        assert_eq!(v, [2, 3, 4]);
        v *= 3;
        assert_eq!(v, [6, 9, 12]);
        v -= 1;
        assert_eq!(v, [5, 8, 11]);
        v /= vec3(5, 4, 2);
        assert_eq!(v, [1, 2, 5]);
        v %= 2;
        assert_eq!(v, [1, 0, 1]);
        v <<= 3;
        assert_eq!(v, [8, 0, 8]);
        v >>= vec3(1, 0, 2);
        assert_eq!(v, [4, 0, 2]);
        v |= 1;
        assert_eq!(v, [5, 1, 3]);
        v &= vec3(4, 1, 1);
        assert_eq!(v, [4, 1, 1]);
        v ^= 1;
        assert_eq!(v, [5, 0, 0]);
    }

    #[test]
    fn equality() {
        let v = vec3(1.0f64, 2.0, 3.0);
        assert!(v == v);
        assert!(v == vec3(1.0, 2.0, 3.0));
        assert!(v != vec3(1.0, 2.0, 3.5));
        assert!(!(v != v));
        assert_eq!(v.plus(), v);
        assert_eq!(v + Vec3f::ZERO.cast::<f64>(), v);

        let nan = vec2(f32::NAN, 0.0);
        assert!(nan != nan);
    }
}
