//! Transformation matrix builders.
//!
//! 2D transforms operate on [`Vec2`]s, 3D transforms on [`Vec3`]s. Affine transforms are returned
//! as non-square matrices with an extra translation column ([`Mat3x2`] and [`Mat4x3`]), so they
//! can be multiplied with each other only after the linear part is applied, as in
//! `scale * rotation * translation`.
//!
//! Each builder accepts several argument shapes (loose scalars in a tuple, a vector, a
//! quaternion, ...). The accepted shapes are the implementors of the corresponding `*Args` trait.
//!
//! None of these functions validate their input. Rotation axes and quaternions are expected to
//! be normalized already.

use crate::{
    vec2, vec3, Mat2, Mat3, Mat3x2, Mat4, Mat4x3, Matrix, Number, One, Quat, Trig, Vec2, Vec3,
    Vector, Zero,
};

/// Argument shapes accepted by [`translation_mat`].
pub trait TranslationArgs {
    /// The affine matrix type produced.
    type Output;

    fn translation_mat(self) -> Self::Output;
}

impl<T: Zero + One> TranslationArgs for Vec2<T> {
    type Output = Mat3x2<T>;

    fn translation_mat(self) -> Self::Output {
        let mut mat = Mat3x2::IDENTITY;
        mat[2] = self;
        mat
    }
}

impl<T: Zero + One> TranslationArgs for (T, T) {
    type Output = Mat3x2<T>;

    fn translation_mat(self) -> Self::Output {
        vec2(self.0, self.1).translation_mat()
    }
}

impl<T: Zero + One> TranslationArgs for Vec3<T> {
    type Output = Mat4x3<T>;

    fn translation_mat(self) -> Self::Output {
        let mut mat = Mat4x3::IDENTITY;
        mat[3] = self;
        mat
    }
}

impl<T: Zero + One> TranslationArgs for (T, T, T) {
    type Output = Mat4x3<T>;

    fn translation_mat(self) -> Self::Output {
        vec3(self.0, self.1, self.2).translation_mat()
    }
}

/// Argument shapes accepted by [`rotation_mat`].
pub trait RotationArgs {
    /// The rotation matrix type produced.
    type Output;

    fn rotation_mat(self) -> Self::Output;
}

macro_rules! rotation_2d {
    ($($t:ty),+) => {
        $(
            /// A counterclockwise 2D rotation by the given angle in radians.
            impl RotationArgs for $t {
                type Output = Mat2<$t>;

                fn rotation_mat(self) -> Self::Output {
                    rotation_2d(self)
                }
            }
        )+
    };
}

rotation_2d!(f32, f64);

/// `(axis_x, axis_y, axis_z, radians)`
impl<T: Number + Trig> RotationArgs for (T, T, T, T) {
    type Output = Mat3<T>;

    fn rotation_mat(self) -> Self::Output {
        let (x, y, z, radians) = self;
        axis_angle(vec3(x, y, z), radians)
    }
}

/// `(axis, radians)`
impl<T: Number + Trig> RotationArgs for (Vec3<T>, T) {
    type Output = Mat3<T>;

    fn rotation_mat(self) -> Self::Output {
        axis_angle(self.0, self.1)
    }
}

/// A quaternion built by [`Quat::from_axis_angle`] with angle `a` yields the same matrix as the
/// axis and angle `-a`. `rotation_mat(q.conjugate())` gives the counterclockwise rotation.
impl<T: Number> RotationArgs for Quat<T> {
    type Output = Mat3<T>;

    fn rotation_mat(self) -> Self::Output {
        let [x, y, z, w] = self.into_vec().into_array();
        let two = T::ONE + T::ONE;

        let xx2 = x * x * two;
        let xy2 = x * y * two;
        let xz2 = x * z * two;
        let xw2 = x * w * two;
        let yy2 = y * y * two;
        let yz2 = y * z * two;
        let yw2 = y * w * two;
        let zz2 = z * z * two;
        let zw2 = z * w * two;

        Matrix::from_columns([
            [T::ONE - yy2 - zz2, xy2 - zw2, xz2 + yw2],
            [xy2 + zw2, T::ONE - xx2 - zz2, yz2 - xw2],
            [xz2 - yw2, yz2 + xw2, T::ONE - xx2 - yy2],
        ])
    }
}

fn rotation_2d<T: Number + Trig>(radians: T) -> Mat2<T> {
    let (s, c) = radians.sin_cos();
    Matrix::from_columns([[c, s], [-s, c]])
}

/// Rodrigues' rotation formula. `axis` is used as-is.
fn axis_angle<T: Number + Trig>(axis: Vec3<T>, radians: T) -> Mat3<T> {
    let [x, y, z] = axis.into_array();
    let (s, c) = radians.sin_cos();
    let omc = T::ONE - c;

    let xs = x * s;
    let ys = y * s;
    let zs = z * s;
    let xxomc = x * x * omc;
    let xyomc = x * y * omc;
    let xzomc = x * z * omc;
    let yyomc = y * y * omc;
    let yzomc = y * z * omc;
    let zzomc = z * z * omc;

    Matrix::from_columns([
        [xxomc + c, xyomc + zs, xzomc - ys],
        [xyomc - zs, yyomc + c, yzomc + xs],
        [xzomc + ys, yzomc - xs, zzomc + c],
    ])
}

/// Argument shapes accepted by [`scale_mat`].
pub trait ScaleArgs {
    type Output;

    fn scale_mat(self) -> Self::Output;
}

impl<T: Zero + Copy> ScaleArgs for Vec2<T> {
    type Output = Mat2<T>;

    fn scale_mat(self) -> Self::Output {
        Mat2::from_diagonal(self)
    }
}

impl<T: Zero + Copy> ScaleArgs for (T, T) {
    type Output = Mat2<T>;

    fn scale_mat(self) -> Self::Output {
        Mat2::from_diagonal(vec2(self.0, self.1))
    }
}

impl<T: Zero + Copy> ScaleArgs for Vec3<T> {
    type Output = Mat3<T>;

    fn scale_mat(self) -> Self::Output {
        Mat3::from_diagonal(self)
    }
}

impl<T: Zero + Copy> ScaleArgs for (T, T, T) {
    type Output = Mat3<T>;

    fn scale_mat(self) -> Self::Output {
        Mat3::from_diagonal(vec3(self.0, self.1, self.2))
    }
}

/// A translation type that can be combined with a rotation of type `R` into a camera matrix.
///
/// Implemented for [`Vec2`] with an angle in radians, and for [`Vec3`] with a [`Quat`].
pub trait CameraArgs<R>: Sized {
    /// The affine view matrix type produced.
    type Output;

    /// A scale of one along every axis.
    const UNIT_SCALE: Self;

    fn camera_mat(self, rotation: R, scale: Self) -> Self::Output;
}

impl<T: Number + Trig> CameraArgs<T> for Vec2<T> {
    type Output = Mat3x2<T>;

    const UNIT_SCALE: Self = Vector([T::ONE; 2]);

    fn camera_mat(self, rotation: T, scale: Self) -> Self::Output {
        scale_mat(scale.map(|s| T::ONE / s)) * rotation_2d(-rotation) * translation_mat(-self)
    }
}

impl<T: Number> CameraArgs<Quat<T>> for Vec3<T> {
    type Output = Mat4x3<T>;

    const UNIT_SCALE: Self = Vector([T::ONE; 3]);

    fn camera_mat(self, rotation: Quat<T>, scale: Self) -> Self::Output {
        scale_mat(scale.map(|s| T::ONE / s))
            * rotation_mat(rotation.conjugate())
            * translation_mat(-self)
    }
}

/// Creates an affine matrix that translates by the given offset.
///
/// # Examples
///
/// ```
/// # use kiln_linalg::*;
/// let mat = translation_mat((1.0f32, 2.0));
/// assert_eq!(mat * vec3(5.0, 5.0, 1.0), vec2(6.0, 7.0));
/// assert_eq!(mat, translation_mat(vec2(1.0, 2.0)));
/// ```
pub fn translation_mat<A: TranslationArgs>(args: A) -> A::Output {
    args.translation_mat()
}

/// Creates a rotation matrix.
///
/// - A bare angle in radians yields a counterclockwise 2D rotation.
/// - An axis and angle, either as `(x, y, z, radians)` or as `(Vec3, radians)`, yields a 3D
///   rotation around that axis. The axis must have unit length.
/// - A [`Quat`] yields a 3D rotation. The quaternion must have unit length. For a quaternion
///   created with [`Quat::from_axis_angle`], the rotation runs clockwise, matching the transpose
///   of the axis-angle matrix.
///
/// # Examples
///
/// ```
/// # use kiln_linalg::*;
/// use approx::assert_relative_eq;
///
/// let quarter = std::f32::consts::FRAC_PI_2;
/// assert_relative_eq!(rotation_mat(quarter) * Vec2f::X, Vec2f::Y, epsilon = 1e-6);
/// assert_relative_eq!(rotation_mat((Vec3f::Z, quarter)) * Vec3f::X, Vec3f::Y, epsilon = 1e-6);
/// ```
pub fn rotation_mat<A: RotationArgs>(args: A) -> A::Output {
    args.rotation_mat()
}

/// Creates a matrix that scales each axis by the given factor.
pub fn scale_mat<A: ScaleArgs>(args: A) -> A::Output {
    args.scale_mat()
}

/// Creates a view matrix for a camera placed at `translation` with orientation `rotation`.
///
/// This is the inverse of the camera's own transform, mapping world space into camera space.
pub fn camera_mat<V: CameraArgs<R>, R>(translation: V, rotation: R) -> V::Output {
    translation.camera_mat(rotation, V::UNIT_SCALE)
}

/// Like [`camera_mat`], but for a camera that is additionally scaled by `scale`.
///
/// The result is `scale_mat(1 / scale) * rotation_mat(inverse(rotation)) *
/// translation_mat(-translation)`, where the inverse of an angle is its negation and the inverse
/// of a quaternion its [conjugate][Quat::conjugate].
pub fn camera_mat_scaled<V: CameraArgs<R>, R>(translation: V, rotation: R, scale: V) -> V::Output {
    translation.camera_mat(rotation, scale)
}

/// Creates a right-handed perspective projection matrix.
///
/// `fovy` is the vertical field of view in radians, `aspect` the width divided by the height of
/// the viewport. `near` and `far` are the distances to the clipping planes.
///
/// A `fovy` of zero results in infinite elements.
pub fn perspective_mat<T: Number + Trig>(fovy: T, aspect: T, near: T, far: T) -> Mat4<T> {
    let two = T::ONE + T::ONE;
    let (s, c) = (fovy / two).sin_cos();
    let f = c / s;
    let nmf = near - far;
    let zero = T::ZERO;

    Matrix::from_columns([
        [f / aspect, zero, zero, zero],
        [zero, f, zero, zero],
        [zero, zero, (near + far) / nmf, -T::ONE],
        [zero, zero, (two * near * far) / nmf, zero],
    ])
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn translation_moves_points() {
        let mat = translation_mat((1, 2, 3));
        assert_eq!(mat * vec4_point(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(mat.resize::<4, 4>().row(3), Vector::from([0, 0, 0, 1]));
    }

    fn vec4_point(x: i32, y: i32, z: i32) -> Vector<i32, 4> {
        vec3(x, y, z).extend(1)
    }

    #[test]
    fn rotation_directions() {
        let mat = rotation_mat(FRAC_PI_2);
        assert_relative_eq!(mat * vec2(1.0, 0.0), vec2(0.0, 1.0), epsilon = 1e-15);

        let around_x = rotation_mat((1.0, 0.0, 0.0, FRAC_PI_2));
        assert_relative_eq!(around_x * vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0), epsilon = 1e-15);

        let around_y = rotation_mat((Vec3::Y, FRAC_PI_2));
        assert_relative_eq!(around_y * vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn quaternion_is_transposed_axis_angle() {
        let axis = vec3(1.0, -2.0, 0.5).normalize();
        for angle in [0.0, 0.3, -1.2, FRAC_PI_2, PI, 4.0] {
            let q = Quat::from_axis_angle(axis, angle);
            let from_axis = rotation_mat((axis, angle));
            assert_relative_eq!(rotation_mat(q), from_axis.transpose(), epsilon = 1e-12);
            assert_relative_eq!(rotation_mat(q), rotation_mat((axis, -angle)), epsilon = 1e-12);
            assert_relative_eq!(rotation_mat(q.conjugate()), from_axis, epsilon = 1e-12);
        }

        let quarter = rotation_mat(Quat::from_axis_angle(Vec3::Z, FRAC_PI_2));
        assert_relative_eq!(
            quarter * vec3(1.0, 0.0, 0.0),
            vec3(0.0, -1.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn quaternion_composition() {
        let a = Quat::from_axis_angle(Vec3::Z, 0.4);
        let b = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), -1.1);
        assert_relative_eq!(
            rotation_mat(a * b),
            rotation_mat(b) * rotation_mat(a),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            rotation_mat((a * b).conjugate()),
            rotation_mat(a.conjugate()) * rotation_mat(b.conjugate()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn camera_inverts_object_transform() {
        let position = vec3(1.0, -4.0, 2.5);
        let orientation = Quat::from_axis_angle(vec3(0.0, 1.0, 0.0), 0.7);
        let view = camera_mat(position, orientation);

        // The camera's own position ends up at the origin.
        assert_relative_eq!(view * position.extend(1.0), Vec3::ZERO, epsilon = 1e-12);

        // A point in front of the camera (along its rotated -Z axis) ends up on -Z.
        let forward = rotation_mat(orientation) * vec3(0.0, 0.0, -3.0);
        assert_relative_eq!(
            view * (position + forward).extend(1.0),
            vec3(0.0, 0.0, -3.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn perspective_maps_clip_planes() {
        let (near, far) = (0.5, 100.0);
        let proj = perspective_mat(FRAC_PI_2, 1.0, near, far);
        let on_near = proj * vec3(0.0, 0.0, -near).extend(1.0);
        let on_far = proj * vec3(0.0, 0.0, -far).extend(1.0);
        assert_relative_eq!(on_near.z / on_near.w, -1.0, epsilon = 1e-12);
        assert_relative_eq!(on_far.z / on_far.w, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_fovy() {
        let proj = perspective_mat(0.0f32, 1.0, 1.0, 10.0);
        assert!(proj[1][1].is_infinite());
    }
}
