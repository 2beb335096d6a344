//! Named-field views of 2 to 4 dimensional vectors.
//!
//! `Vector<T, N>` dereferences to a positional view (`x y z w`), which in turn dereferences to the
//! color view (`r g b a`) over the same storage.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($(
        $n:literal => $pos:ident { $($p:ident),+ } => $color:ident { $($c:ident),+ };
    )+) => {
        $(
            #[repr(C)]
            pub struct $pos<T> {
                $( pub $p: T, )+
                _priv: (),
            }

            #[repr(C)]
            pub struct $color<T> {
                $( pub $c: T, )+
                _priv: (),
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $pos<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: `$pos<T>` is `repr(C)` with `$n` fields of type `T` plus a ZST, so it
                    // has the same layout as `[T; $n]`.
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> Deref for $pos<T> {
                type Target = $color<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $pos<T> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y } => RG { r, g };
    3 => XYZ { x, y, z } => RGB { r, g, b };
    4 => XYZW { x, y, z, w } => RGBA { r, g, b, a };
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(mem::size_of::<XYZW<f64>>(), mem::size_of::<[f64; 4]>());
        assert_eq!(mem::align_of::<RGB<u8>>(), mem::align_of::<[u8; 3]>());
    }

    #[test]
    fn aliases_share_storage() {
        let mut v = Vector::from([1u8, 2, 3, 4]);
        v.a = 40;
        v.x = 10;
        assert_eq!(v.w, 40);
        assert_eq!(v.r, 10);
        assert_eq!(v.into_array(), [10, 2, 3, 40]);
    }
}
