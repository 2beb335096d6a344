use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Quat;

/// The Hamilton product.
///
/// When both operands are unit quaternions representing rotations, the product represents the
/// rotation `rhs` followed by `self`.
impl<T> Mul for Quat<T>
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.0.into_array();
        let [bx, by, bz, bw] = rhs.0.into_array();
        Quat::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl<T> MulAssign for Quat<T>
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Negates all four components. The result represents the same rotation.
impl<T: Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
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
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use crate::Quat;

    #[test]
    fn hamilton_product() {
        let i = Quat::new(1, 0, 0, 0);
        let j = Quat::new(0, 1, 0, 0);
        let k = Quat::new(0, 0, 1, 0);
        let minus_one = Quat::new(0, 0, 0, -1);

        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);

        let a = Quat::new(1, 2, 3, 4);
        let b = Quat::new(5, 6, 7, 8);
        assert_eq!(a * b, Quat::new(24, 48, 48, -6));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }
}
