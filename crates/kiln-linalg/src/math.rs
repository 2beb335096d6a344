//! Free-function math namespace.
//!
//! Every function here works on scalars, [`Vector`]s and [`Matrix`]es alike wherever the
//! underlying trait is implemented for them, applying the scalar operation element by element.
//!
//! ```
//! use kiln_linalg::{math, vec2};
//!
//! let v = vec2(4.0f32, 9.0);
//! assert_eq!(math::sqrt(v), vec2(2.0, 3.0));
//! assert_eq!(math::sqrt(16.0f32), 4.0);
//! assert_eq!(math::min(v, vec2(5.0, 5.0)), vec2(4.0, 5.0));
//! ```

use std::ops::{Mul, Neg};

use crate::{
    Abs, Compare, Exp, Mask, Matrix, MinMax, Number, Pow, Quat, Recip, Sqrt, Trig, Vector, Zero,
};

/// Picks elements from one of two values according to a mask.
pub trait Select<M>: Sized {
    /// Returns `if_true` where `mask` is true and `if_false` elsewhere.
    fn select(mask: M, if_true: Self, if_false: Self) -> Self;
}

macro_rules! scalar_select {
    ($($t:ty),+) => {
        $(
            impl<M: Mask> Select<M> for $t {
                #[inline]
                fn select(mask: M, if_true: Self, if_false: Self) -> Self {
                    if mask.is_true() {
                        if_true
                    } else {
                        if_false
                    }
                }
            }
        )+
    };
}

scalar_select!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

impl<T, M, const N: usize> Select<Vector<M, N>> for Vector<T, N>
where
    T: Select<M>,
{
    fn select(mask: Vector<M, N>, if_true: Self, if_false: Self) -> Self {
        mask.zip(if_true)
            .zip_map(if_false, |(m, t), f| T::select(m, t, f))
    }
}

impl<T, M, const C: usize, const R: usize> Select<Matrix<M, C, R>> for Matrix<T, C, R>
where
    T: Select<M>,
{
    fn select(mask: Matrix<M, C, R>, if_true: Self, if_false: Self) -> Self {
        let columns = Vector(mask.0)
            .zip(Vector(if_true.0))
            .zip_map(Vector(if_false.0), |(m, t), f| <Vector<T, R>>::select(m, t, f));
        Matrix(columns.0)
    }
}

/// Component-wise (Hadamard) multiplication.
///
/// For vectors this is the same as `*`. For matrices it differs from `*`, which computes the
/// matrix product.
pub trait CompMult<Rhs = Self> {
    type Output;

    fn compmult(self, rhs: Rhs) -> Self::Output;
}

impl<T: Mul, const N: usize> CompMult for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn compmult(self, rhs: Self) -> Self::Output {
        self * rhs
    }
}

impl<T: Mul, const C: usize, const R: usize> CompMult for Matrix<T, C, R> {
    type Output = Matrix<T::Output, C, R>;

    fn compmult(self, rhs: Self) -> Self::Output {
        self.zip_map_columns(rhs, |a, b| a * b)
    }
}

pub fn sin<T: Trig>(x: T) -> T {
    x.sin()
}

pub fn cos<T: Trig>(x: T) -> T {
    x.cos()
}

pub fn tan<T: Trig>(x: T) -> T {
    x.tan()
}

/// Computes sine and cosine in one call, returning `(sin, cos)`.
pub fn sincos<T: Trig>(x: T) -> (T, T) {
    x.sin_cos()
}

pub fn exp<T: Exp>(x: T) -> T {
    x.exp()
}

/// The natural logarithm.
pub fn log<T: Exp>(x: T) -> T {
    x.ln()
}

pub fn pow<T: Pow<E>, E>(x: T, exponent: E) -> T {
    x.pow(exponent)
}

/// The reciprocal, `1 / x`.
pub fn rcp<T: Recip>(x: T) -> T {
    x.rcp()
}

pub fn sqrt<T: Sqrt>(x: T) -> T {
    x.sqrt()
}

/// The reciprocal square root, `1 / sqrt(x)`.
pub fn rsqrt<T: Sqrt>(x: T) -> T {
    x.rsqrt()
}

pub fn abs<T: Abs>(x: T) -> T {
    x.abs()
}

pub fn min<T: MinMax>(a: T, b: T) -> T {
    a.min(b)
}

pub fn max<T: MinMax>(a: T, b: T) -> T {
    a.max(b)
}

pub fn clamp<T: MinMax>(x: T, min: T, max: T) -> T {
    x.clamp(min, max)
}

/// Picks each element from `if_true` where `mask` is true, and from `if_false` otherwise.
///
/// # Examples
///
/// ```
/// # use kiln_linalg::{math, vec3};
/// let a = vec3(1.0f32, 2.0, 3.0);
/// let b = vec3(3.0f32, 2.0, 1.0);
/// assert_eq!(math::select(math::less(a, b), a, b), vec3(1.0, 2.0, 1.0));
/// ```
pub fn select<T: Select<M>, M>(mask: M, if_true: T, if_false: T) -> T {
    T::select(mask, if_true, if_false)
}

/// Keeps the elements of `value` where `mask` is true and zeroes the rest.
pub fn select_or_zero<T: Select<M> + Zero, M>(mask: M, value: T) -> T {
    T::select(mask, value, T::ZERO)
}

pub fn less<T: Compare<U>, U>(a: T, b: U) -> T::Mask {
    a.less(b)
}

pub fn less_equal<T: Compare<U>, U>(a: T, b: U) -> T::Mask {
    a.less_equal(b)
}

pub fn greater<T: Compare<U>, U>(a: T, b: U) -> T::Mask {
    a.greater(b)
}

pub fn greater_equal<T: Compare<U>, U>(a: T, b: U) -> T::Mask {
    a.greater_equal(b)
}

pub fn equal<T: Compare<U>, U>(a: T, b: U) -> T::Mask {
    a.equal(b)
}

pub fn not_equal<T: Compare<U>, U>(a: T, b: U) -> T::Mask {
    a.not_equal(b)
}

/// The dot product, `Σ a[i] * b[i]`.
pub fn dot<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// The squared length, `dot(v, v)`.
pub fn length2<T: Number, const N: usize>(v: Vector<T, N>) -> T {
    v.length2()
}

pub fn length<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Returns `v / length(v)`. A zero vector yields NaN elements.
pub fn normalize<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

pub fn compmult<T: CompMult<U>, U>(a: T, b: U) -> T::Output {
    a.compmult(b)
}

pub fn transpose<T, const C: usize, const R: usize>(m: Matrix<T, C, R>) -> Matrix<T, R, C> {
    m.transpose()
}

pub fn conjugate<T: Neg<Output = T>>(q: Quat<T>) -> Quat<T> {
    q.conjugate()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{vec2, vec3, vec4, Bool32, Bool64, Bool8, Mat2, Vec3f};

    #[test]
    fn elementwise_functions() {
        let v = vec2(0.5f64, -1.25);
        assert_eq!(sin(v), vec2(0.5f64.sin(), (-1.25f64).sin()));
        assert_eq!(cos(v), vec2(0.5f64.cos(), (-1.25f64).cos()));
        assert_eq!(sincos(v), (sin(v), cos(v)));
        assert_eq!(abs(v), vec2(0.5, 1.25));
        assert_eq!(rcp(v), vec2(2.0, -0.8));
        assert_eq!(pow(vec2(2.0f32, 3.0), 2.0), vec2(4.0, 9.0));
        assert_eq!(pow(vec2(2.0f32, 3.0), vec2(3.0, 0.0)), vec2(8.0, 1.0));
        assert_eq!(rsqrt(vec2(4.0f32, 0.25)), vec2(0.5, 2.0));
        assert_relative_eq!(log(exp(vec2(1.5f32, -2.0))), vec2(1.5, -2.0), epsilon = 1e-6);
        assert_relative_eq!(tan(0.25f32), 0.25f32.sin() / 0.25f32.cos(), epsilon = 1e-6);

        let m = Mat2::from_rows([[4.0f32, 9.0], [16.0, 25.0]]);
        assert_eq!(sqrt(m), Mat2::from_rows([[2.0, 3.0], [4.0, 5.0]]));
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(1i32, 5, -3);
        let b = vec3(2, 4, -3);
        assert_eq!(min(a, b), vec3(1, 4, -3));
        assert_eq!(max(a, b), vec3(2, 5, -3));
        assert_eq!(clamp(vec3(-5i32, 0, 5), vec3(-1, -1, -1), vec3(1, 1, 1)), vec3(-1, 0, 1));
        assert_eq!(max(1.5f32, -2.0), 1.5);
    }

    #[test]
    fn selection() {
        let mask = vec4(Bool8::TRUE, Bool8::FALSE, Bool8::FALSE, Bool8::TRUE);
        let a = vec4(1i32, 2, 3, 4);
        let b = vec4(10, 20, 30, 40);
        assert_eq!(select(mask, a, b), vec4(1, 20, 30, 4));
        assert_eq!(select_or_zero(mask, a), vec4(1, 0, 0, 4));
        assert_eq!(select(true, 1.0f32, 2.0), 1.0);
        assert_eq!(select(Bool64::FALSE, 1.0f64, 2.0), 2.0);

        let m = Mat2::from_rows([[1.0f32, 2.0], [3.0, 4.0]]);
        let n = Mat2::from_rows([[4.0f32, 3.0], [2.0, 1.0]]);
        let smaller = select(less(m, n), m, n);
        assert_eq!(smaller, Mat2::from_rows([[1.0, 2.0], [2.0, 1.0]]));
        assert_eq!(
            select_or_zero(greater(m, n), m),
            Mat2::from_rows([[0.0, 0.0], [3.0, 4.0]])
        );
    }

    #[test]
    fn comparisons() {
        let a = vec2(1.0f32, 2.0);
        let b = vec2(1.0f32, 3.0);
        let (t, f) = (Bool32::TRUE, Bool32::FALSE);
        assert_eq!(equal(a, b), vec2(t, f));
        assert_eq!(not_equal(a, b), vec2(f, t));
        assert_eq!(less(a, b), vec2(f, t));
        assert_eq!(less_equal(a, b), vec2(t, t));
        assert_eq!(greater(a, b), vec2(f, f));
        assert_eq!(greater_equal(a, b), vec2(t, f));
    }

    #[test]
    fn geometry() {
        let v = vec3(2.0f32, 3.0, 6.0);
        assert_eq!(dot(v, Vec3f::Y), 3.0);
        assert_eq!(length2(v), dot(v, v));
        assert_eq!(length(v), 7.0);
        assert_eq!(length(v), sqrt(length2(v)));
        assert_eq!(normalize(v), v / length(v));
        assert!(normalize(Vec3f::ZERO).as_array().iter().all(|e| e.is_nan()));
    }

    #[test]
    fn compmult_is_not_matrix_product() {
        let a = Mat2::from_rows([[1i32, 2], [3, 4]]);
        let b = Mat2::from_rows([[5i32, 6], [7, 8]]);
        assert_eq!(compmult(a, b), Mat2::from_rows([[5, 12], [21, 32]]));
        assert_eq!(a * b, Mat2::from_rows([[19, 22], [43, 50]]));
        assert_eq!(compmult(vec2(2i32, 3), vec2(4, 5)), vec2(8, 15));
        assert_eq!(transpose(transpose(a)), a);
        assert_eq!(transpose(a), Mat2::from_rows([[1, 3], [2, 4]]));
    }
}
