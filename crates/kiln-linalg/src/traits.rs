//! Scalar capability traits.
//!
//! Every trait in here is implemented for the primitive scalars it makes sense for, and again for
//! [`Vector`] and [`Matrix`] by applying the scalar operation to each element. The free functions
//! in [`crate::math`] dispatch through these traits.

use std::ops;

use crate::{Matrix, Vector};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;

    /// Computes sine and cosine of `self` in one call, returning `(sin, cos)`.
    ///
    /// Both values are guaranteed to be identical to what [`Trig::sin`] and [`Trig::cos`] would
    /// return.
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;

    /// Computes the reciprocal of the square root, `1 / sqrt(self)`.
    fn rsqrt(self) -> Self;
}

/// Types that support computing their reciprocal, `1 / self`.
pub trait Recip {
    fn rcp(self) -> Self;
}

/// Types that can be raised to a power of type `E`.
pub trait Pow<E = Self> {
    fn pow(self, exponent: E) -> Self;
}

/// Types that support the natural exponential and logarithm.
pub trait Exp {
    fn exp(self) -> Self;
    /// The natural logarithm.
    fn ln(self) -> Self;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`]. Vectors and matrices compare element by element.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! signed_abs {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }
        )+
    };
}
signed_abs!(i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    <$types>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$types>::max(self, other)
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    <$types>::abs(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    <$types>::sin(self)
                }

                fn cos(self) -> Self {
                    <$types>::cos(self)
                }

                fn tan(self) -> Self {
                    <$types>::tan(self)
                }

                fn asin(self) -> Self {
                    <$types>::asin(self)
                }

                fn acos(self) -> Self {
                    <$types>::acos(self)
                }

                fn atan(self) -> Self {
                    <$types>::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$types>::atan2(self, other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    <$types>::sin_cos(self)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }

                fn rsqrt(self) -> Self {
                    1.0 / <$types>::sqrt(self)
                }
            }

            impl Recip for $types {
                fn rcp(self) -> Self {
                    1.0 / self
                }
            }

            impl Pow for $types {
                fn pow(self, exponent: Self) -> Self {
                    <$types>::powf(self, exponent)
                }
            }

            impl Exp for $types {
                fn exp(self) -> Self {
                    <$types>::exp(self)
                }

                fn ln(self) -> Self {
                    <$types>::ln(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

// Element-wise lifting onto vectors and matrices.

impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Vector::<T, N>::ZERO;
}

impl<T: Zero, const C: usize, const R: usize> Zero for Matrix<T, C, R> {
    const ZERO: Self = Matrix::<T, C, R>::ZERO;
}

impl<T: Trig, const N: usize> Trig for Vector<T, N> {
    fn sin(self) -> Self {
        self.map(T::sin)
    }

    fn cos(self) -> Self {
        self.map(T::cos)
    }

    fn tan(self) -> Self {
        self.map(T::tan)
    }

    fn asin(self) -> Self {
        self.map(T::asin)
    }

    fn acos(self) -> Self {
        self.map(T::acos)
    }

    fn atan(self) -> Self {
        self.map(T::atan)
    }

    fn atan2(self, other: Self) -> Self {
        self.zip_map(other, T::atan2)
    }

    fn sin_cos(self) -> (Self, Self) {
        self.map(T::sin_cos).unzip()
    }
}

impl<T: Trig, const C: usize, const R: usize> Trig for Matrix<T, C, R> {
    fn sin(self) -> Self {
        self.map_columns(Trig::sin)
    }

    fn cos(self) -> Self {
        self.map_columns(Trig::cos)
    }

    fn tan(self) -> Self {
        self.map_columns(Trig::tan)
    }

    fn asin(self) -> Self {
        self.map_columns(Trig::asin)
    }

    fn acos(self) -> Self {
        self.map_columns(Trig::acos)
    }

    fn atan(self) -> Self {
        self.map_columns(Trig::atan)
    }

    fn atan2(self, other: Self) -> Self {
        self.zip_map_columns(other, Trig::atan2)
    }

    fn sin_cos(self) -> (Self, Self) {
        let (sin, cos) = Vector::from(self.into_columns()).map(Trig::sin_cos).unzip();
        (
            Matrix::from_columns(sin.into_array()),
            Matrix::from_columns(cos.into_array()),
        )
    }
}

impl<T: Sqrt, const N: usize> Sqrt for Vector<T, N> {
    fn sqrt(self) -> Self {
        self.map(T::sqrt)
    }

    fn rsqrt(self) -> Self {
        self.map(T::rsqrt)
    }
}

impl<T: Sqrt, const C: usize, const R: usize> Sqrt for Matrix<T, C, R> {
    fn sqrt(self) -> Self {
        self.map_columns(Sqrt::sqrt)
    }

    fn rsqrt(self) -> Self {
        self.map_columns(Sqrt::rsqrt)
    }
}

impl<T: Recip, const N: usize> Recip for Vector<T, N> {
    fn rcp(self) -> Self {
        self.map(T::rcp)
    }
}

impl<T: Recip, const C: usize, const R: usize> Recip for Matrix<T, C, R> {
    fn rcp(self) -> Self {
        self.map_columns(Recip::rcp)
    }
}

impl<T: Exp, const N: usize> Exp for Vector<T, N> {
    fn exp(self) -> Self {
        self.map(T::exp)
    }

    fn ln(self) -> Self {
        self.map(T::ln)
    }
}

impl<T: Exp, const C: usize, const R: usize> Exp for Matrix<T, C, R> {
    fn exp(self) -> Self {
        self.map_columns(Exp::exp)
    }

    fn ln(self) -> Self {
        self.map_columns(Exp::ln)
    }
}

impl<T: Abs, const N: usize> Abs for Vector<T, N> {
    fn abs(self) -> Self {
        self.map(T::abs)
    }
}

impl<T: Abs, const C: usize, const R: usize> Abs for Matrix<T, C, R> {
    fn abs(self) -> Self {
        self.map_columns(Abs::abs)
    }
}

/// Element-wise power with a per-element exponent.
impl<T: Pow, const N: usize> Pow for Vector<T, N> {
    fn pow(self, exponent: Self) -> Self {
        self.zip_map(exponent, T::pow)
    }
}

/// Element-wise power with a shared exponent.
impl<T: Pow + Copy, const N: usize> Pow<T> for Vector<T, N> {
    fn pow(self, exponent: T) -> Self {
        self.map(|elem| elem.pow(exponent))
    }
}

impl<T: Pow, const C: usize, const R: usize> Pow for Matrix<T, C, R> {
    fn pow(self, exponent: Self) -> Self {
        self.zip_map_columns(exponent, Pow::pow)
    }
}

impl<T: Pow + Copy, const C: usize, const R: usize> Pow<T> for Matrix<T, C, R> {
    fn pow(self, exponent: T) -> Self {
        self.map_columns(|column| column.pow(exponent))
    }
}

impl<T: MinMax, const N: usize> MinMax for Vector<T, N> {
    fn min(self, other: Self) -> Self {
        self.zip_map(other, T::min)
    }

    fn max(self, other: Self) -> Self {
        self.zip_map(other, T::max)
    }
}

impl<T: MinMax, const C: usize, const R: usize> MinMax for Matrix<T, C, R> {
    fn min(self, other: Self) -> Self {
        self.zip_map_columns(other, MinMax::min)
    }

    fn max(self, other: Self) -> Self {
        self.zip_map_columns(other, MinMax::max)
    }
}
