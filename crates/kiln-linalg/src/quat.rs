use std::{
    fmt, mem,
    ops::{Deref, DerefMut, Neg},
};

use crate::{vec4, Number, One, Sqrt, Trig, Vec3, Vector, Zero, XYZW};

mod ops;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space, and
/// [`rotation_mat`][crate::rotation_mat] converts them to a rotation matrix.
///
/// Quaternions are stored like a 4-dimensional vector, with an `x`, `y`, `z` and `w` component.
/// `x`, `y` and `z` form the vector (imaginary) part, `w` is the scalar (real) part.
///
/// No invariant is enforced on the length. Functions that interpret a quaternion as a rotation
/// expect it to be normalized, and produce unspecified (but not undefined) results otherwise.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T>(Vector<T, 4>);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion representing "no rotation".
    pub const IDENTITY: Self = Self(vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE));
}

impl<T> Quat<T> {
    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self(vec4(x, y, z, w))
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self(vec)
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.0
    }

    /// Returns the `x`, `y` and `z` components.
    pub fn vector_part(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.0.xyz()
    }

    /// Returns the `w` component.
    pub fn scalar_part(&self) -> T
    where
        T: Copy,
    {
        self.0[3]
    }

    /// Creates a quaternion representing a counterclockwise rotation of `radians` around `axis`.
    ///
    /// `axis` is expected to have unit length. It is not normalized here.
    ///
    /// [`rotation_mat`][crate::rotation_mat] reads quaternions as frame rotations, so the matrix of
    /// the result turns clockwise. Pass the [conjugate][Quat::conjugate] to get the matrix of the
    /// counterclockwise rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let q = Quat::from_axis_angle(Vec3f::Z, std::f32::consts::PI);
    /// assert!(q.w.abs() < 1e-6);
    /// assert_eq!(q.z, 1.0);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Number + Trig,
    {
        let half = T::ONE / (T::ONE + T::ONE);
        let (sin, cos) = (radians * half).sin_cos();
        Self((axis * sin).extend(cos))
    }

    /// Returns the conjugate of this quaternion, which has its vector part negated.
    ///
    /// For unit quaternions, this is the inverse rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiln_linalg::*;
    /// let q = Quat::new(1, 2, 3, 4);
    /// assert_eq!(q.conjugate(), Quat::new(-1, -2, -3, 4));
    /// ```
    pub fn conjugate(self) -> Self
    where
        T: Neg<Output = T>,
    {
        let [x, y, z, w] = self.0.into_array();
        Self::new(-x, -y, -z, w)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.0.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, this quaternion does not represent a pure rotation.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.0.length()
    }

    /// Returns a copy of this quaternion scaled to unit length.
    ///
    /// Like [`Vector::normalize`], this yields NaN components for a zero quaternion.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self(self.0.normalize())
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    #[inline]
    fn from(vec: Vector<T, 4>) -> Self {
        Self(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    #[inline]
    fn from(quat: Quat<T>) -> Self {
        quat.0
    }
}

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.0.as_array();
        f.debug_struct("Quat")
            .field("x", x)
            .field("y", y)
            .field("z", z)
            .field("w", w)
            .finish()
    }
}

// `Quat` must stay layout-compatible with `[T; 4]` for the `Pod` impl above.
const _: () = assert!(mem::size_of::<Quat<f32>>() == 16);
