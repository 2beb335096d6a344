//! Booleans with a fixed width, encoded as all-ones or all-zeros bit patterns.
//!
//! These types are the element type of the masks produced by the element-wise comparison
//! functions in [`crate::math`] and consumed by [`crate::math::select`]. Since "true" has every
//! bit set, a mask element can be combined with same-sized data using plain bitwise operations.
//!
//! Only the two patterns exposed as `TRUE` and `FALSE` are legal. [`Bool32::from_bits`] and
//! friends do not check this: feeding any other pattern into a function that reads it as a mask
//! produces an unspecified result. Use the [`TryFrom`] impls when the input is untrusted.

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

/// Types that can be used as the mask argument of [`select`][crate::math::select].
pub trait Mask: Copy {
    /// Returns whether this mask element selects the "true" operand.
    fn is_true(self) -> bool;
}

impl Mask for bool {
    #[inline]
    fn is_true(self) -> bool {
        self
    }
}

/// Common interface of [`Bool8`], [`Bool16`], [`Bool32`] and [`Bool64`].
pub trait SizedBoolean: Mask + Not<Output = Self> + PartialEq + fmt::Debug + Into<bool> {
    /// The underlying unsigned integer type.
    type Bits: Copy;

    /// The "true" value, with every bit set.
    const TRUE: Self;
    /// The "false" value, with no bit set.
    const FALSE: Self;

    /// Converts a [`bool`] to the matching bit pattern.
    fn from_bool(value: bool) -> Self;
}

/// Error returned when converting an integer that is neither all-ones nor all-zeros into a sized
/// boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {size}-byte boolean bit pattern {bits:#x} (must be all ones or all zeros)")]
pub struct InvalidBoolBits {
    size: usize,
    bits: u64,
}

impl InvalidBoolBits {
    /// Returns the width of the boolean type that rejected the bit pattern, in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the rejected bit pattern, zero-extended to 64 bits.
    pub fn bits(&self) -> u64 {
        self.bits
    }
}

macro_rules! sized_bools {
    ($($name:ident($bits:ty) = $size:literal;)+) => {
        $(
            #[doc = concat!("A ", stringify!($size), "-byte boolean (all ones = true, all zeros = false).")]
            #[derive(Clone, Copy, PartialEq, Eq, Hash)]
            #[repr(transparent)]
            pub struct $name($bits);

            unsafe impl bytemuck::Zeroable for $name {}
            unsafe impl bytemuck::Pod for $name {}

            impl $name {
                /// The "true" value, with every bit set.
                pub const TRUE: Self = Self(<$bits>::MAX);
                /// The "false" value, with no bit set.
                pub const FALSE: Self = Self(0);

                /// Reinterprets `bits` as a boolean without checking it.
                ///
                /// `bits` must be either all ones or all zeros. Other patterns are not rejected,
                /// but any function reading the result as a mask will produce an unspecified
                /// result. Use the [`TryFrom`] impl to validate the pattern instead.
                #[inline]
                pub const fn from_bits(bits: $bits) -> Self {
                    Self(bits)
                }

                /// Returns the raw bit pattern.
                #[inline]
                pub const fn to_bits(self) -> $bits {
                    self.0
                }

                /// Converts to a [`bool`].
                #[inline]
                pub const fn to_bool(self) -> bool {
                    self.0 != 0
                }
            }

            impl Mask for $name {
                #[inline]
                fn is_true(self) -> bool {
                    self.to_bool()
                }
            }

            impl SizedBoolean for $name {
                type Bits = $bits;

                const TRUE: Self = $name::TRUE;
                const FALSE: Self = $name::FALSE;

                #[inline]
                fn from_bool(value: bool) -> Self {
                    if value { Self::TRUE } else { Self::FALSE }
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::FALSE
                }
            }

            impl From<bool> for $name {
                #[inline]
                fn from(value: bool) -> Self {
                    <Self as SizedBoolean>::from_bool(value)
                }
            }

            impl From<$name> for bool {
                #[inline]
                fn from(value: $name) -> Self {
                    value.to_bool()
                }
            }

            impl TryFrom<$bits> for $name {
                type Error = InvalidBoolBits;

                fn try_from(bits: $bits) -> Result<Self, Self::Error> {
                    match bits {
                        0 => Ok(Self::FALSE),
                        <$bits>::MAX => Ok(Self::TRUE),
                        _ => Err(InvalidBoolBits {
                            size: $size,
                            bits: bits.into(),
                        }),
                    }
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match *self {
                        Self::TRUE => write!(f, "true"),
                        Self::FALSE => write!(f, "false"),
                        Self(bits) => write!(f, "{}({:#x})", stringify!($name), bits),
                    }
                }
            }

            impl Not for $name {
                type Output = Self;

                #[inline]
                fn not(self) -> Self {
                    Self(!self.0)
                }
            }

            impl BitAnd for $name {
                type Output = Self;

                #[inline]
                fn bitand(self, rhs: Self) -> Self {
                    Self(self.0 & rhs.0)
                }
            }

            impl BitAndAssign for $name {
                #[inline]
                fn bitand_assign(&mut self, rhs: Self) {
                    self.0 &= rhs.0;
                }
            }

            impl BitOr for $name {
                type Output = Self;

                #[inline]
                fn bitor(self, rhs: Self) -> Self {
                    Self(self.0 | rhs.0)
                }
            }

            impl BitOrAssign for $name {
                #[inline]
                fn bitor_assign(&mut self, rhs: Self) {
                    self.0 |= rhs.0;
                }
            }

            impl BitXor for $name {
                type Output = Self;

                #[inline]
                fn bitxor(self, rhs: Self) -> Self {
                    Self(self.0 ^ rhs.0)
                }
            }

            impl BitXorAssign for $name {
                #[inline]
                fn bitxor_assign(&mut self, rhs: Self) {
                    self.0 ^= rhs.0;
                }
            }

            impl SupportedBoolSize for BoolSize<$size> {
                type Bool = $name;
            }
        )+
    };
}

sized_bools! {
    Bool8(u8) = 1;
    Bool16(u16) = 2;
    Bool32(u32) = 4;
    Bool64(u64) = 8;
}

/// Type-level boolean width, in bytes.
///
/// Only widths 1, 2, 4 and 8 implement [`SupportedBoolSize`].
pub struct BoolSize<const SIZE: usize>;

/// Maps a [`BoolSize`] to its sized boolean type.
pub trait SupportedBoolSize {
    /// The sized boolean type of this width.
    type Bool: SizedBoolean;
}

/// The sized boolean type that is `SIZE` bytes wide.
///
/// Resolved at compile time; naming a width other than 1, 2, 4 or 8 fails to build.
///
/// # Examples
///
/// ```
/// # use kiln_linalg::*;
/// let t: SizedBool<4> = Bool32::TRUE;
/// assert_eq!(t.to_bits(), 0xFFFF_FFFF);
/// assert_eq!(std::mem::size_of::<SizedBool<8>>(), 8);
/// ```
pub type SizedBool<const SIZE: usize> = <BoolSize<SIZE> as SupportedBoolSize>::Bool;
