//! Implementations of `std::ops` and the `approx` traits.
//!
//! Everything except `*` between matrices works column by column, delegating to the element-wise
//! vector operators.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector, Zero};

/// Indexing a matrix yields a column.
impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const C: usize, const R: usize> PartialEq<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, C, R>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl<T, const C: usize, const R: usize> Eq for Matrix<T, C, R> where T: Eq {}

impl<T, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R>
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

impl<T, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R>
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

impl<T, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R>
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
impl<T, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    T: Neg,
{
    type Output = Matrix<T::Output, C, R>;

    fn neg(self) -> Self::Output {
        self.map_columns(Vector::neg)
    }
}

/// Element-wise logical negation (or bitwise complement, for integers).
impl<T, const C: usize, const R: usize> Not for Matrix<T, C, R>
where
    T: Not,
{
    type Output = Matrix<T::Output, C, R>;

    fn not(self) -> Self::Output {
        self.map_columns(Vector::not)
    }
}

/// Implements the broadcast-scalar form of a binary operator and its assigning form.
macro_rules! scalar_binop {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $desc:literal;)+) => {
        $(
            #[doc = concat!("Element-wise ", $desc, " with a broadcast scalar.")]
            impl<T, const C: usize, const R: usize> $Op<T> for Matrix<T, C, R>
            where
                T: $Op + Copy,
            {
                type Output = Matrix<T::Output, C, R>;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output {
                    self.map_columns(|column| column.$op(rhs))
                }
            }

            #[doc = concat!("Element-wise ", $desc, " with a broadcast scalar.")]
            impl<T, const C: usize, const R: usize> $OpAssign<T> for Matrix<T, C, R>
            where
                T: $OpAssign + Copy,
            {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|column| column.$op_assign(rhs));
                }
            }
        )+
    };
}

/// Implements the matrix-matrix form of an element-wise binary operator and its assigning form.
macro_rules! elementwise_binop {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $desc:literal;)+) => {
        $(
            #[doc = concat!("Element-wise ", $desc, ".")]
            impl<T, const C: usize, const R: usize> $Op for Matrix<T, C, R>
            where
                T: $Op,
            {
                type Output = Matrix<T::Output, C, R>;

                #[inline]
                fn $op(self, rhs: Self) -> Self::Output {
                    self.zip_map_columns(rhs, Vector::$op)
                }
            }

            #[doc = concat!("Element-wise ", $desc, ".")]
            impl<T, const C: usize, const R: usize> $OpAssign for Matrix<T, C, R>
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
        )+
    };
}

scalar_binop! {
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

// `Mul` is missing here on purpose: `*` between matrices is the matrix product.
elementwise_binop! {
    Add::add, AddAssign::add_assign, "addition";
    Sub::sub, SubAssign::sub_assign, "subtraction";
    Div::div, DivAssign::div_assign, "division";
    Rem::rem, RemAssign::rem_assign, "remainder";
    BitAnd::bitand, BitAndAssign::bitand_assign, "bitwise and";
    BitOr::bitor, BitOrAssign::bitor_assign, "bitwise or";
    BitXor::bitxor, BitXorAssign::bitxor_assign, "bitwise xor";
    Shl::shl, ShlAssign::shl_assign, "left shift";
    Shr::shr, ShrAssign::shr_assign, "right shift";
}

/// Matrix * Column Vector.
///
/// The result is the linear combination of the columns of `self`, weighted by the elements of
/// `rhs`.
impl<T, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        self.0
            .into_iter()
            .zip(rhs.0)
            .fold(Vector::ZERO, |acc, (column, weight)| acc + column * weight)
    }
}

/// Row Vector * Matrix.
///
/// Element `i` of the result is the dot product of `self` and column `i` of `rhs`.
impl<T, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, C, R>) -> Self::Output {
        rhs.0.map(|column| self.dot(column)).into()
    }
}

/// Matrix * Matrix.
///
/// Requires the column count of `self` to match the row count of `rhs`.
impl<T, const K: usize, const C: usize, const R: usize> Mul<Matrix<T, C, K>> for Matrix<T, K, R>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Self::Output {
        Matrix(rhs.0.map(|column| self * column))
    }
}

/// Matrix * Matrix, in place.
///
/// Only square right-hand sides keep the shape of `self`.
impl<T, const C: usize, const R: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, R>
where
    T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Implements `scalar <op> matrix` for concrete primitive scalar types.
macro_rules! scalar_lhs {
    ($Op:ident::$op:ident for $($t:ty),+) => {
        $(
            impl<const C: usize, const R: usize> $Op<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn $op(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs.map_columns(|column| self.$op(column))
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
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Mat2, Mat2x3, Mat3x2, Matrix};

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(mat * vec, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
        assert_eq!(vec * mat, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        for col in 0..3 {
            for row in 0..4 {
                assert_eq!(c[col][row], a[0][row] * b[col][0] + a[1][row] * b[col][1]);
            }
        }
        assert_eq!(c.row(3), vec3(7 * 9 + 8 * 12, 7 * 10 + 8 * 13, 7 * 11 + 8 * 14));
    }

    #[test]
    fn non_square_product() {
        let a = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]);
        let b = Matrix::from_rows([[1, 0, 2, 1], [0, 1, 1, -1]]);
        let c: Matrix<i32, 4, 3> = a * b;
        #[rustfmt::skip]
        assert_eq!(c, Matrix::from_rows([
            [1, 2, 4, -1],
            [3, 4, 10, -1],
            [5, 6, 16, -1],
        ]));
    }

    #[test]
    fn mul_assign_square() {
        let mut m = Mat2x3::from_columns([[1, 2, 3], [4, 5, 6]]);
        let swap = Mat2::from_columns([[0, 1], [1, 0]]);
        m *= swap;
        assert_eq!(m, Mat2x3::from_columns([[4, 5, 6], [1, 2, 3]]));

        m *= Mat2::IDENTITY;
        assert_eq!(m, Mat2x3::from_columns([[4, 5, 6], [1, 2, 3]]));
    }

    #[test]
    fn elementwise() {
        let a = Mat3x2::from_columns([[1, 2], [3, 4], [5, 6]]);
        let b = Mat3x2::from_columns([[6, 5], [4, 3], [2, 1]]);
        assert_eq!(a + b, Mat3x2::from_columns([[7, 7], [7, 7], [7, 7]]));
        assert_eq!(a - b, Mat3x2::from_columns([[-5, -3], [-1, 1], [3, 5]]));
        assert_eq!(b / a, Mat3x2::from_columns([[6, 2], [1, 0], [0, 0]]));
        assert_eq!(a % 4, Mat3x2::from_columns([[1, 2], [3, 0], [1, 2]]));
        assert_eq!(a & 1, Mat3x2::from_columns([[1, 0], [1, 0], [1, 0]]));
        assert_eq!(a << 1, a * 2);
        assert_eq!(-a, a * -1);
        assert_eq!(10 - a, Mat3x2::from_columns([[9, 8], [7, 6], [5, 4]]));
        assert_eq!(2 * a, a + a);

        let mut c = a;
        c += b;
        c -= 7;
        assert_eq!(c, Mat3x2::<i32>::ZERO);
        c |= a;
        c ^= 1;
        assert_eq!(c, Mat3x2::from_columns([[0, 3], [2, 5], [4, 7]]));
    }

    #[test]
    fn approximate_equality() {
        let a = Mat2::from_columns([[1.0, 0.0], [0.0, 1.0]]);
        let b = a + 1e-12;
        assert_ne!(a, b);
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }
}
