use crate::constants::{DEFAULT_AIR_DENSITY, DEFAULT_GRAVITY};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub gravity: f64,
    pub air_density: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(DEFAULT_GRAVITY, DEFAULT_AIR_DENSITY)
    }
}

impl Environment {
    pub fn new(gravity: f64, air_density: f64) -> Self {
        Environment {
            gravity,
            air_density,
        }
    }

    /// Weight of a body of the given mass, pointing down.
    pub fn gravity_force(&self, mass: f64) -> Vector3D {
        Vector3D::up(-mass * self.gravity)
    }
}
