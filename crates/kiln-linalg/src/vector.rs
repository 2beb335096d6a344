use std::{
    array, fmt,
    ops::{Add, AddAssign, Mul, SubAssign},
};

use num_traits::AsPrimitive;

use crate::{
    traits::{Number, Sqrt},
    One, Zero,
};

mod ops;
mod view;

pub use view::{RG, RGB, RGBA, XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of
///   the right length using [`TryFrom`].
/// - The [`Default`] implementation initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing along the
///   given axis.
/// - [`Vec2::extend`] and [`Vec3::extend`] append a component, [`Vec3::truncate`] and
///   [`Vec4::truncate`] drop the last one.
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`,
///   or through the color aliases `r`, `g`, `b`, and `a`. Both names refer to the same storage.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - Swizzles like [`Vec4::xyz`] copy out a leading group of components, and their `set_*`
///   counterparts write one back.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Conversion
///
/// Converting between element types is explicit via [`Vector::cast`], which behaves like `as`.
/// Conversions that can never lose information (like `i32` to `f64`) are also available through
/// [`From`].
///
/// # Arithmetic
///
/// All arithmetic and bitwise operators work element-wise, either between two vectors of the same
/// dimension or between a vector and a scalar (on either side). The scalar is broadcast to every
/// element. See also [`crate::math::compmult`] and the other functions in [`crate::math`].
///
/// Both operands must share an element type. Convert one of them first to mix element types:
///
/// ```
/// # use kiln_linalg::*;
/// let a = vec2(1.25f64, 3.5);
/// let b = vec2(5i32, 6);
/// assert_eq!(a + Vector::<f64, 2>::from(b), vec2(6.25, 9.5));
/// assert_eq!(a.cast::<i32>() + b, vec2(6, 9));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    #[inline]
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Combines the elements of `self` and `other` pairwise with `f`.
    ///
    /// This is the primitive that every element-wise binary operator is built on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec3(1, 2, 3).zip_map(vec3(10, 20, 30), |a, b| b - a);
    /// assert_eq!(v, vec3(9, 18, 27));
    /// ```
    #[inline]
    pub fn zip_map<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, U) -> V,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Converts each element to `U` using an `as` cast.
    ///
    /// Like `as`, this may truncate, saturate or lose precision.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec3(1.9, -2.5, 300.0).cast::<u8>();
    /// assert_eq!(v, vec3(1, 0, 255));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(AsPrimitive::as_)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Zero + Add<Output = T> + Mul<Output = T>,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This is the same as `self.dot(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Zero + Add<Output = T> + Mul<Output = T> + Copy,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The length is not checked: normalizing a zero vector yields NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Unary plus. Returns `self` unchanged.
    #[inline]
    pub fn plus(self) -> Self {
        self
    }

    /// Element-wise logical negation. An element becomes `true` if it equals zero.
    ///
    /// `!` is the bitwise complement on integer elements. This always produces a [`bool`] vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// assert_eq!(vec2(0, 1).logical_not(), vec2(true, false));
    /// assert_eq!(!vec2(0, 1), vec2(-1, -2));
    /// ```
    pub fn logical_not(self) -> Vector<bool, N>
    where
        T: Zero + PartialEq,
    {
        self.map(|elem| elem == T::ZERO)
    }

    /// Adds one to every element, then returns the updated vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mut v = vec2(1, 5);
    /// assert_eq!(v.pre_increment(), vec2(2, 6));
    /// assert_eq!(v, vec2(2, 6));
    /// ```
    pub fn pre_increment(&mut self) -> Self
    where
        T: One + AddAssign + Copy,
    {
        *self += T::ONE;
        *self
    }

    /// Adds one to every element, returning the vector as it was before.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mut v = vec2(1, 5);
    /// assert_eq!(v.post_increment(), vec2(1, 5));
    /// assert_eq!(v, vec2(2, 6));
    /// ```
    pub fn post_increment(&mut self) -> Self
    where
        T: One + AddAssign + Copy,
    {
        let old = *self;
        *self += T::ONE;
        old
    }

    /// Subtracts one from every element, then returns the updated vector.
    pub fn pre_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Copy,
    {
        *self -= T::ONE;
        *self
    }

    /// Subtracts one from every element, returning the vector as it was before.
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Copy,
    {
        let old = *self;
        *self -= T::ONE;
        old
    }
}

impl<A, B, const N: usize> Vector<(A, B), N> {
    /// Splits a vector of pairs into a pair of vectors.
    ///
    /// The inverse of [`Vector::zip`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let (a, b) = vec2((1, 'a'), (2, 'b')).unzip();
    /// assert_eq!(a, vec2(1, 2));
    /// assert_eq!(b, vec2('a', 'b'));
    /// ```
    pub fn unzip(self) -> (Vector<A, N>, Vector<B, N>) {
        let mut second: [Option<B>; N] = array::from_fn(|_| None);
        let mut i = 0;
        let first = self.map(|(a, b)| {
            second[i] = Some(b);
            i += 1;
            a
        });
        (first, Vector(second.map(|b| b.unwrap())))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Returns the `x` and `y` components.
    pub fn xy(&self) -> Vector<T, 2>
    where
        T: Copy,
    {
        Vector([self.0[0], self.0[1]])
    }

    /// Overwrites the `x` and `y` components, leaving `z` untouched.
    pub fn set_xy(&mut self, xy: Vector<T, 2>) {
        let [x, y] = xy.0;
        self.0[0] = x;
        self.0[1] = y;
    }

    /// Color alias of [`Vec3::xy`].
    pub fn rg(&self) -> Vector<T, 2>
    where
        T: Copy,
    {
        self.xy()
    }

    /// Color alias of [`Vec3::set_xy`].
    pub fn set_rg(&mut self, rg: Vector<T, 2>) {
        self.set_xy(rg);
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let v = vec4(1, 2, 3, 4).truncate();
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }

    /// Returns the `x` and `y` components.
    pub fn xy(&self) -> Vector<T, 2>
    where
        T: Copy,
    {
        Vector([self.0[0], self.0[1]])
    }

    /// Returns the `x`, `y` and `z` components.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let mut v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.xyz(), vec3(1, 2, 3));
    ///
    /// v.set_xyz(vec3(7, 8, 9));
    /// assert_eq!(v, vec4(7, 8, 9, 4));
    /// ```
    pub fn xyz(&self) -> Vector<T, 3>
    where
        T: Copy,
    {
        Vector([self.0[0], self.0[1], self.0[2]])
    }

    /// Overwrites the `x` and `y` components, leaving `z` and `w` untouched.
    pub fn set_xy(&mut self, xy: Vector<T, 2>) {
        let [x, y] = xy.0;
        self.0[0] = x;
        self.0[1] = y;
    }

    /// Overwrites the `x`, `y` and `z` components, leaving `w` untouched.
    pub fn set_xyz(&mut self, xyz: Vector<T, 3>) {
        let [x, y, z] = xyz.0;
        self.0[0] = x;
        self.0[1] = y;
        self.0[2] = z;
    }

    /// Color alias of [`Vec4::xy`].
    pub fn rg(&self) -> Vector<T, 2>
    where
        T: Copy,
    {
        self.xy()
    }

    /// Color alias of [`Vec4::xyz`].
    pub fn rgb(&self) -> Vector<T, 3>
    where
        T: Copy,
    {
        self.xyz()
    }

    /// Color alias of [`Vec4::set_xy`].
    pub fn set_rg(&mut self, rg: Vector<T, 2>) {
        self.set_xy(rg);
    }

    /// Color alias of [`Vec4::set_xyz`].
    pub fn set_rgb(&mut self, rgb: Vector<T, 3>) {
        self.set_xyz(rgb);
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Error returned when converting a slice of the wrong length into a [`Vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} elements, got {actual}")]
pub struct LengthMismatch {
    /// The dimension of the target vector.
    pub expected: usize,
    /// The length of the slice that was passed in.
    pub actual: usize,
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = LengthMismatch;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let array = <[T; N]>::try_from(slice).map_err(|_| LengthMismatch {
            expected: N,
            actual: slice.len(),
        })?;
        Ok(Self(array))
    }
}

/// Implements [`From`] for the element conversions that never lose information.
macro_rules! widening_from {
    ($($from:ty => $($to:ty),+;)+) => {
        $($(
            impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
                #[inline]
                fn from(value: Vector<$from, N>) -> Self {
                    value.map(<$to>::from)
                }
            }
        )+)+
    };
}
/// Invokes `$mac!` with every value-preserving scalar conversion.
macro_rules! widening_from_table {
    ($mac:ident) => {
        $mac! {
            f32 => f64;
            i8 => i16, i32, i64, f32, f64;
            i16 => i32, i64, f32, f64;
            i32 => i64, f64;
            u8 => u16, u32, u64, i16, i32, i64, f32, f64;
            u16 => u32, u64, i32, i64, f32, f64;
            u32 => u64, i64, f64;
        }
    };
}

pub(crate) use widening_from_table;

widening_from_table!(widening_from);

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec4f::W.a, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        v.y = 9;
        assert_eq!(v.g, 9);
        assert_eq!(v, [777, 9]);
    }

    #[test]
    fn swizzle() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.xy(), vec2(1, 2));
        assert_eq!(v.rg(), vec2(1, 2));
        v.set_rg(vec2(5, 6));
        assert_eq!(v, vec3(5, 6, 3));

        let mut c = vec4(0.1, 0.2, 0.3, 1.0);
        assert_eq!(c.rgb(), vec3(0.1, 0.2, 0.3));
        c.set_rgb(vec3(1.0, 1.0, 1.0));
        assert_eq!(c, Vec4f::splat(1.0));
        c.set_xy(Vec2f::ZERO);
        assert_eq!(c, vec4(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(1.0, 2.26)), "(1.0, 2.3)");
    }

    #[test]
    fn construction() {
        assert_eq!(Vec3::<i32>::default(), Vec3::<i32>::ZERO);
        assert_eq!(Vector::splat(7u8), vec4(7, 7, 7, 7));
        assert_eq!(Vector::from([1, 2]), vec2(1, 2));
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }

    #[test]
    fn try_from_slice() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let v = Vec3f::try_from(&data[..3]).unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));

        let err = Vec3f::try_from(&data[..]).unwrap_err();
        assert_eq!(
            err,
            LengthMismatch {
                expected: 3,
                actual: 4
            }
        );
        assert_eq!(err.to_string(), "expected 3 elements, got 4");
    }

    #[test]
    fn conversions() {
        let wide: Vec3<f64> = vec3(1.5f32, -2.0, 0.25).into();
        assert_eq!(wide, vec3(1.5f64, -2.0, 0.25));

        let wide: Vec2<i64> = Vec2::<i32>::from(vec2(-3i8, 4)).into();
        assert_eq!(wide, vec2(-3i64, 4));

        assert_eq!(vec2(2.7f64, -1.2).cast::<i32>(), vec2(2, -1));
        assert_eq!(vec2(-1i32, 256).cast::<u8>(), vec2(255, 0));

        let mixed = vec2(1.2f64, 3.4) + Vec2::<f64>::from(vec2(5i32, 6));
        assert_eq!(mixed, vec2(1.2 + 5.0, 3.4 + 6.0));
    }

    #[test]
    fn dot_and_length() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec3(1u32, 2, 3).length2(), 14);

        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);

        let v = vec3(2.0, -3.0, 6.0);
        assert_eq!(v.length2(), v.dot(v));
        assert_eq!(v.length(), 7.0);
        assert_relative_eq!(v.normalize(), vec3(2.0 / 7.0, -3.0 / 7.0, 6.0 / 7.0));
        assert_relative_eq!(v.normalize().length(), 1.0);
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vec2f::ZERO.normalize();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
    }

    #[test]
    fn increment_decrement() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.post_decrement(), vec3(1, 2, 3));
        assert_eq!(v, vec3(0, 1, 2));
        assert_eq!(v.pre_decrement(), vec3(-1, 0, 1));
        assert_eq!(v.plus(), v);

        let mut f = Vec2f::splat(0.5);
        f.pre_increment();
        assert_eq!(f, Vec2f::splat(1.5));
    }

    #[test]
    fn logical_not() {
        assert_eq!(vec2(0i32, 1).logical_not(), vec2(true, false));
        assert_eq!(vec4(0u8, 3, 0, 255).logical_not(), vec4(true, false, true, false));
        assert_eq!(vec3(0.0f32, -0.0, 0.5).logical_not(), vec3(true, true, false));
        assert_eq!(!vec2(true, false), vec2(false, true));
        assert_eq!(!vec2(0i32, 1), vec2(-1, -2));
    }

    #[test]
    fn zip_unzip() {
        let (s, c) = vec2(0.0f32, 1.0).map(f32::sin_cos).unzip();
        assert_eq!(s, vec2(0.0f32.sin(), 1.0f32.sin()));
        assert_eq!(c, vec2(0.0f32.cos(), 1.0f32.cos()));

        let (a, b) = vec3(1, 2, 3).zip(vec3(4, 5, 6)).unzip();
        assert_eq!(a, vec3(1, 2, 3));
        assert_eq!(b, vec3(4, 5, 6));
    }
}
