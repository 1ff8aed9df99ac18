//! 3-D Vectors

use crate::math::{abs, max, Float};
use num_traits::{Num, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-D vector containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

/// The fixed reference axis used by the specular reflectance formulas and the
/// energy-conservation estimator.
pub const REFERENCE_NORMAL: Vector3f = Vector3f {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

impl<T: Num> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if any coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Mul<Output = T> + Add<Output = T> + Copy,
    {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        *self / self.length()
    }

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self
    where
        T: Copy,
    {
        Self::new(
            (self.y * other.z) - (self.z * other.y),
            (self.z * other.x) - (self.x * other.z),
            (self.x * other.y) - (self.y * other.x),
        )
    }
}

impl Vector3f {
    /// Reflects the vector as an incident ray about a surface normal.
    ///
    /// The result is `v + 2 * max(-v ⋅ n, 0) * n`; a ray already leaving the
    /// surface (`v ⋅ n >= 0`) is returned unchanged.
    ///
    /// * `normal` - The surface normal (unit vector).
    pub fn reflect(&self, normal: &Vector3f) -> Vector3f {
        let dn = 2.0 * max(-self.dot(normal), 0.0);
        Vector3f::new(
            dn * normal.x + self.x,
            dn * normal.y + self.y,
            dn * normal.z + self.z,
        )
    }

    /// Mirrors the vector about the plane perpendicular to a normal:
    /// `v - 2 * (v ⋅ n) * n`, the unclamped perfect mirror.
    ///
    /// * `normal` - The mirror plane's normal (unit vector).
    pub fn mirror(&self, normal: &Vector3f) -> Vector3f {
        *self - *normal * (2.0 * self.dot(normal))
    }
}

impl<T: Num> Add for Vector3<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` -  The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num + Copy> AddAssign for Vector3<T> {
    /// Performs the `+=` operation.
    ///
    /// * `other` -  The vector to add.
    fn add_assign(&mut self, other: Self) {
        *self = Self::new(self.x + other.x, self.y + other.y, self.z + other.z);
    }
}

impl<T: Num> Sub for Vector3<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` -  The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> SubAssign for Vector3<T> {
    /// Performs the `-=` operation.
    ///
    /// * `other` -  The vector to subtract.
    fn sub_assign(&mut self, other: Self) {
        *self = Self::new(self.x - other.x, self.y - other.y, self.z - other.z);
    }
}

impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    /// Scale the vector.
    ///
    /// * `f` -  The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(f * self.x, f * self.y, f * self.z)
    }
}

impl<T: Num + Copy> MulAssign<T> for Vector3<T> {
    /// Scale and assign the result to the vector.
    ///
    /// * `f` -  The scaling factor.
    fn mul_assign(&mut self, f: T) {
        *self = Self::new(f * self.x, f * self.y, f * self.z);
    }
}

impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector by 1/f.
    ///
    /// * `f` -  The scaling factor.
    fn div(self, f: T) -> Self::Output {
        debug_assert!(!f.is_zero());

        let inv = T::one() / f;
        Self::Output::new(inv * self.x, inv * self.y, inv * self.z)
    }
}

impl<T: Num + Copy> DivAssign<T> for Vector3<T> {
    /// Scale the vector by 1/f and assign the result to the vector.
    ///
    /// * `f` -  The scaling factor.
    fn div_assign(&mut self, f: T) {
        debug_assert!(!f.is_zero());

        let inv = T::one() / f;
        *self = Self::new(inv * self.x, inv * self.y, inv * self.z);
    }
}

impl<T: Num + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Vector3<T>;

    /// Flip the vector's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Num + Neg<Output = T> + PartialOrd + Copy> Vector3<T> {
    /// Returns a new vector containing absolute values of the components.
    pub fn abs(&self) -> Self {
        Self::new(abs(self.x), abs(self.y), abs(self.z))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn zero_vector() {
        assert!(Vector3::new(0, 0, 0) == Vector3::zero());
        assert!(Vector3::new(0.0, 0.0, 0.0) == Vector3::zero());
    }

    #[test]
    fn has_nans() {
        assert!(!Vector3::new(0.0, 0.0, 0.0).has_nans());
        assert!(Vector3::new(f32::NAN, f32::NAN, f32::NAN).has_nans());
    }

    #[test]
    fn cross_axis_f32() {
        let x_axis = Vector3::new(1.0, 0.0, 0.0);
        let y_axis = Vector3::new(0.0, 1.0, 0.0);
        let z_axis = Vector3::new(0.0, 0.0, 1.0);

        assert!(x_axis.cross(&y_axis) == z_axis);
        assert!(y_axis.cross(&x_axis) == -z_axis);
        assert!(y_axis.cross(&z_axis) == x_axis);
    }

    #[test]
    fn reflect_head_on() {
        // An incident direction straight into the reference axis bounces back
        // along the axis.
        let incident = Vector3f::new(-1.0, 0.0, 0.0);
        let reflected = incident.reflect(&REFERENCE_NORMAL);
        assert_eq!(reflected, Vector3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn reflect_preserves_length() {
        let incident = Vector3f::new(-1.0, 1.0, 0.5).normalize();
        let reflected = incident.reflect(&REFERENCE_NORMAL);
        assert!(approx_eq!(f32, reflected.length(), 1.0, epsilon = 0.0001));
    }

    #[test]
    fn reflect_grazing() {
        // A direction pointing away from the normal is left unchanged since
        // the cosine term clamps to zero.
        let incident = Vector3f::new(1.0, 0.0, 0.0);
        let reflected = incident.reflect(&REFERENCE_NORMAL);
        assert_eq!(reflected, incident);
    }

    #[test]
    fn mirror_flips_the_normal_component() {
        let v = Vector3f::new(0.6, 0.8, 0.0);
        assert_eq!(v.mirror(&REFERENCE_NORMAL), Vector3f::new(-0.6, 0.8, 0.0));

        // Mirroring twice restores the original vector.
        let twice = v.mirror(&REFERENCE_NORMAL).mirror(&REFERENCE_NORMAL);
        assert_eq!(twice, v);
    }

    #[test]
    fn mirror_agrees_with_reflect_for_incident_rays() {
        // For a ray pointing into the surface the two formulas coincide.
        let incident = Vector3f::new(-0.6, 0.8, 0.0);
        assert_eq!(
            incident.mirror(&REFERENCE_NORMAL),
            incident.reflect(&REFERENCE_NORMAL)
        );
    }

    prop_compose! {
        fn vector3_f32()(
            x in -100.0..100.0f32,
            y in -100.0..100.0f32,
            z in -100.0..100.0f32,
        ) -> Vector3f {
            Vector3f::new(x, y, z)
        }
    }

    proptest! {
        #[test]
        fn length_squared_f32(v in vector3_f32()) {
            prop_assert_eq!(v.length_squared(), v.x * v.x + v.y * v.y + v.z * v.z);
        }

        #[test]
        fn dot_f32(v1 in vector3_f32(), v2 in vector3_f32()) {
            prop_assert_eq!(v1.dot(&v2), v1.x * v2.x + v1.y * v2.y + v1.z * v2.z);
        }

        #[test]
        fn add_f32(v1 in vector3_f32(), v2 in vector3_f32()) {
            prop_assert_eq!(v1 + v2, Vector3::new(v1.x + v2.x, v1.y + v2.y, v1.z + v2.z));
        }

        #[test]
        fn sub_f32(v1 in vector3_f32(), v2 in vector3_f32()) {
            prop_assert_eq!(v1 - v2, Vector3::new(v1.x - v2.x, v1.y - v2.y, v1.z - v2.z));
        }

        #[test]
        fn mul_f32(v in vector3_f32(), f in -100.0..100.0f32) {
            prop_assert_eq!(v * f, Vector3::new(v.x * f, v.y * f, v.z * f));
        }

        #[test]
        fn div_f32(
            v in vector3_f32(),
            f in (-100.0..100.0f32).prop_filter("non-zero", |x| *x != 0.0)
        ) {
            let s = 1.0 / f;
            prop_assert_eq!(v / f, Vector3::new(v.x * s, v.y * s, v.z * s));
        }

        #[test]
        fn neg_f32(v in vector3_f32()) {
            prop_assert_eq!(-v, Vector3::new(-v.x, -v.y, -v.z));
        }

        #[test]
        fn cross_self_is_zero(v in vector3_f32()) {
            prop_assert_eq!(v.cross(&v), Vector3::zero());
        }
    }
}
