use serde::Deserialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    pub fn zero() -> Self {
        Vector3D::new(0.0, 0.0, 0.0)
    }

    /// Vector along the world "up" axis. All forces in the launch model act along it.
    pub fn up(magnitude: f64) -> Self {
        Vector3D::new(0.0, magnitude, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sum for Vector3D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector3D::zero(), |a, b| a + b)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        vector.scale(self)
    }
}

impl Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Vector3D::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples() -> Vec<Vector3D> {
        vec![
            Vector3D::new(1.0, 2.0, 3.0),
            Vector3D::new(-4.5, 0.25, 8.0),
            Vector3D::new(0.0, -7.0, 1e3),
            Vector3D::zero(),
        ]
    }

    #[test]
    fn test_add_is_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a + b, b + a);
            }
        }
    }

    #[test]
    fn test_add_is_associative() {
        let a = Vector3D::new(1.0, 2.0, 4.0);
        let b = Vector3D::new(0.5, -1.0, 8.0);
        let c = Vector3D::new(-3.0, 0.25, 2.0);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn test_scale_distributes_over_add() {
        for a in samples() {
            for b in samples() {
                for s in [0.0, -2.0, 0.5, 17.25] {
                    let lhs = (a + b).scale(s);
                    let rhs = a.scale(s) + b.scale(s);
                    assert_relative_eq!(lhs.x, rhs.x, epsilon = 1e-9);
                    assert_relative_eq!(lhs.y, rhs.y, epsilon = 1e-9);
                    assert_relative_eq!(lhs.z, rhs.z, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector3D::zero().magnitude(), 0.0);
        assert_eq!(Vector3D::new(2.0, 3.0, 6.0).magnitude(), 7.0);
        for v in samples() {
            assert!(v.magnitude() >= 0.0);
        }
        assert!(Vector3D::new(0.0, 1e-12, 0.0).magnitude() > 0.0);
    }

    #[test]
    fn test_operations_return_new_values() {
        let v = Vector3D::new(1.0, 1.0, 1.0);
        let scaled = v.scale(3.0);
        let sum = v + scaled;
        assert_eq!(v, Vector3D::new(1.0, 1.0, 1.0));
        assert_eq!(scaled, Vector3D::new(3.0, 3.0, 3.0));
        assert_eq!(sum, Vector3D::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_normalize() {
        let unit = Vector3D::new(0.0, -5.0, 0.0).normalize();
        assert_eq!(unit, Vector3D::new(0.0, -1.0, 0.0));
        assert_eq!(Vector3D::zero().normalize(), Vector3D::zero());
    }

    #[test]
    fn test_operators_agree_with_scale() {
        let v = Vector3D::new(1.0, -2.0, 3.0);
        assert_eq!(v * 2.0, v.scale(2.0));
        assert_eq!(2.0 * v, v.scale(2.0));
        assert_eq!(-v, v.scale(-1.0));
        assert_eq!(v - v, Vector3D::zero());
        assert_eq!(vec![v, v, v].into_iter().sum::<Vector3D>(), v * 3.0);
    }
}
