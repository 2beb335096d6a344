//! Element-wise comparisons producing sized boolean masks.
//!
//! A comparison between two scalars first converts both operands to a common scalar type, then
//! yields a [`SizedBool`] as wide as that common type. Vectors and matrices compare element by
//! element and yield a vector or matrix of such masks, which can be fed to
//! [`select`][crate::math::select].

use std::mem::size_of;

use crate::{Matrix, SizedBool, SizedBoolean, Vector};

/// Ordering and equality comparisons that produce a mask instead of a `bool`.
///
/// # Examples
///
/// ```
/// # use kiln_linalg::*;
/// let mask = vec3(1i32, 5, 3).less(vec3(2.0f32, 4.0, 3.5));
/// assert_eq!(mask, vec3(Bool32::TRUE, Bool32::FALSE, Bool32::TRUE));
/// ```
pub trait Compare<Rhs = Self> {
    /// The mask type produced by the comparisons.
    type Mask;

    fn less(self, rhs: Rhs) -> Self::Mask;
    fn less_equal(self, rhs: Rhs) -> Self::Mask;
    fn greater(self, rhs: Rhs) -> Self::Mask;
    fn greater_equal(self, rhs: Rhs) -> Self::Mask;
    fn equal(self, rhs: Rhs) -> Self::Mask;
    fn not_equal(self, rhs: Rhs) -> Self::Mask;
}

#[inline]
fn mask<M: SizedBoolean>(value: bool) -> M {
    M::from_bool(value)
}

/// Implements [`Compare`] for a pair of scalar types, converting both to `$common` with `as`.
macro_rules! scalar_compare {
    ($($lhs:ty, $rhs:ty => $common:ty;)+) => {
        $(
            impl Compare<$rhs> for $lhs {
                type Mask = SizedBool<{ size_of::<$common>() }>;

                #[inline]
                fn less(self, rhs: $rhs) -> Self::Mask {
                    mask((self as $common) < (rhs as $common))
                }

                #[inline]
                fn less_equal(self, rhs: $rhs) -> Self::Mask {
                    mask((self as $common) <= (rhs as $common))
                }

                #[inline]
                fn greater(self, rhs: $rhs) -> Self::Mask {
                    mask((self as $common) > (rhs as $common))
                }

                #[inline]
                fn greater_equal(self, rhs: $rhs) -> Self::Mask {
                    mask((self as $common) >= (rhs as $common))
                }

                #[inline]
                fn equal(self, rhs: $rhs) -> Self::Mask {
                    mask((self as $common) == (rhs as $common))
                }

                #[inline]
                fn not_equal(self, rhs: $rhs) -> Self::Mask {
                    mask((self as $common) != (rhs as $common))
                }
            }
        )+
    };
}

scalar_compare! {
    i8, i8 => i8;
    i16, i16 => i16;
    i32, i32 => i32;
    i64, i64 => i64;
    u8, u8 => u8;
    u16, u16 => u16;
    u32, u32 => u32;
    u64, u64 => u64;
    isize, isize => isize;
    usize, usize => usize;
    f32, f32 => f32;
    f64, f64 => f64;

    i8, i16 => i16;
    i16, i8 => i16;
    i8, i32 => i32;
    i32, i8 => i32;
    i8, i64 => i64;
    i64, i8 => i64;
    i16, i32 => i32;
    i32, i16 => i32;
    i16, i64 => i64;
    i64, i16 => i64;
    i32, i64 => i64;
    i64, i32 => i64;
    u8, u16 => u16;
    u16, u8 => u16;
    u8, u32 => u32;
    u32, u8 => u32;
    u8, u64 => u64;
    u64, u8 => u64;
    u16, u32 => u32;
    u32, u16 => u32;
    u16, u64 => u64;
    u64, u16 => u64;
    u32, u64 => u64;
    u64, u32 => u64;
    u8, i16 => i16;
    i16, u8 => i16;
    u8, i32 => i32;
    i32, u8 => i32;
    u8, i64 => i64;
    i64, u8 => i64;
    u16, i32 => i32;
    i32, u16 => i32;
    u16, i64 => i64;
    i64, u16 => i64;
    u32, i64 => i64;
    i64, u32 => i64;

    i8, f32 => f32;
    f32, i8 => f32;
    i16, f32 => f32;
    f32, i16 => f32;
    i32, f32 => f32;
    f32, i32 => f32;
    i64, f32 => f32;
    f32, i64 => f32;
    u8, f32 => f32;
    f32, u8 => f32;
    u16, f32 => f32;
    f32, u16 => f32;
    u32, f32 => f32;
    f32, u32 => f32;
    u64, f32 => f32;
    f32, u64 => f32;
    isize, f32 => f32;
    f32, isize => f32;
    usize, f32 => f32;
    f32, usize => f32;
    i8, f64 => f64;
    f64, i8 => f64;
    i16, f64 => f64;
    f64, i16 => f64;
    i32, f64 => f64;
    f64, i32 => f64;
    i64, f64 => f64;
    f64, i64 => f64;
    u8, f64 => f64;
    f64, u8 => f64;
    u16, f64 => f64;
    f64, u16 => f64;
    u32, f64 => f64;
    f64, u32 => f64;
    u64, f64 => f64;
    f64, u64 => f64;
    isize, f64 => f64;
    f64, isize => f64;
    usize, f64 => f64;
    f64, usize => f64;
    f32, f64 => f64;
    f64, f32 => f64;
}

impl<T, U, const N: usize> Compare<Vector<U, N>> for Vector<T, N>
where
    T: Compare<U>,
{
    type Mask = Vector<T::Mask, N>;

    fn less(self, rhs: Vector<U, N>) -> Self::Mask {
        self.zip_map(rhs, T::less)
    }

    fn less_equal(self, rhs: Vector<U, N>) -> Self::Mask {
        self.zip_map(rhs, T::less_equal)
    }

    fn greater(self, rhs: Vector<U, N>) -> Self::Mask {
        self.zip_map(rhs, T::greater)
    }

    fn greater_equal(self, rhs: Vector<U, N>) -> Self::Mask {
        self.zip_map(rhs, T::greater_equal)
    }

    fn equal(self, rhs: Vector<U, N>) -> Self::Mask {
        self.zip_map(rhs, T::equal)
    }

    fn not_equal(self, rhs: Vector<U, N>) -> Self::Mask {
        self.zip_map(rhs, T::not_equal)
    }
}

impl<T, U, const C: usize, const R: usize> Compare<Matrix<U, C, R>> for Matrix<T, C, R>
where
    T: Compare<U>,
{
    type Mask = Matrix<T::Mask, C, R>;

    fn less(self, rhs: Matrix<U, C, R>) -> Self::Mask {
        self.zip_map_columns(rhs, Compare::less)
    }

    fn less_equal(self, rhs: Matrix<U, C, R>) -> Self::Mask {
        self.zip_map_columns(rhs, Compare::less_equal)
    }

    fn greater(self, rhs: Matrix<U, C, R>) -> Self::Mask {
        self.zip_map_columns(rhs, Compare::greater)
    }

    fn greater_equal(self, rhs: Matrix<U, C, R>) -> Self::Mask {
        self.zip_map_columns(rhs, Compare::greater_equal)
    }

    fn equal(self, rhs: Matrix<U, C, R>) -> Self::Mask {
        self.zip_map_columns(rhs, Compare::equal)
    }

    fn not_equal(self, rhs: Matrix<U, C, R>) -> Self::Mask {
        self.zip_map_columns(rhs, Compare::not_equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, vec4, Bool16, Bool32, Bool64, Bool8, Mask, Mat2};

    #[test]
    fn scalars() {
        assert_eq!(1i8.less(2i8), Bool8::TRUE);
        assert_eq!(2u16.less_equal(1u16), Bool16::FALSE);
        assert_eq!(3.0f32.greater(-3.0f32), Bool32::TRUE);
        assert_eq!(3.0f64.greater_equal(3.0f64), Bool64::TRUE);
        assert_eq!(f32::NAN.equal(f32::NAN), Bool32::FALSE);
        assert_eq!(f32::NAN.not_equal(f32::NAN), Bool32::TRUE);
    }

    #[test]
    fn common_type() {
        // Converted to `f32` before comparing, so the mask is 4 bytes wide.
        let m: Bool32 = 1i32.less(1.5f32);
        assert_eq!(m, Bool32::TRUE);

        // `u8` promotes to `i16`, so 200 stays larger than -1.
        assert_eq!(200u8.greater(-1i16), Bool16::TRUE);
        assert_eq!(0.5f32.less(0.5f64), Bool64::FALSE);
        assert_eq!(7i64.equal(7u32), Bool64::TRUE);
    }

    #[test]
    fn every_scalar_family() {
        assert_eq!(vec2(-1i8, 2).less(vec2(0i8, 2)), vec2(Bool8::TRUE, Bool8::FALSE));
        assert_eq!(vec2(-1i64, 2).greater(vec2(-2i8, 2)), vec2(Bool64::TRUE, Bool64::FALSE));
        assert_eq!(vec2(7u16, 9).equal(vec2(7u64, 8)), vec2(Bool64::TRUE, Bool64::FALSE));
        assert_eq!(
            vec2(1.5f32, 2.0).less_equal(vec2(2i64, 2)),
            vec2(Bool32::TRUE, Bool32::TRUE)
        );
        assert_eq!(3u8.greater(2.5f64), Bool64::TRUE);

        let sizes = vec2(1usize, 2).less(vec2(3usize, 0));
        assert!(sizes.x.is_true());
        assert!(!sizes.y.is_true());
        let offsets = vec2(-1isize, 2).greater_equal(vec2(-1isize, 3));
        assert!(offsets.x.is_true());
        assert!(!offsets.y.is_true());
        assert_eq!(4usize.not_equal(4.0f64), Bool64::FALSE);
        assert_eq!((-2isize).less(-1.5f32), Bool32::TRUE);
    }

    #[test]
    fn vectors() {
        let a = vec4(1.0f32, 2.0, 3.0, 4.0);
        let b = vec4(4.0f32, 3.0, 3.0, 1.0);
        let t = Bool32::TRUE;
        let f = Bool32::FALSE;
        assert_eq!(a.less(b), vec4(t, t, f, f));
        assert_eq!(a.less_equal(b), vec4(t, t, t, f));
        assert_eq!(a.greater(b), vec4(f, f, f, t));
        assert_eq!(a.greater_equal(b), vec4(f, f, t, t));
        assert_eq!(a.equal(b), vec4(f, f, t, f));
        assert_eq!(a.not_equal(b), vec4(t, t, f, t));

        assert_eq!(
            vec2(1u8, 9).greater(vec2(0u8, 10)),
            vec2(Bool8::TRUE, Bool8::FALSE)
        );
        assert_eq!(
            vec3(1i32, 2, 3).equal(vec3(1.0f64, 2.5, 3.0)),
            vec3(Bool64::TRUE, Bool64::FALSE, Bool64::TRUE)
        );
    }

    #[test]
    fn matrices() {
        let a = Mat2::from_rows([[1i32, 2], [3, 4]]);
        let b = Mat2::from_rows([[1i32, 0], [5, 4]]);
        let mask = a.greater_equal(b);
        assert_eq!(mask.row(0), vec2(Bool32::TRUE, Bool32::TRUE));
        assert_eq!(mask.row(1), vec2(Bool32::FALSE, Bool32::TRUE));
    }
}
