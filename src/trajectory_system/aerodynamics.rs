use std::f64::consts::PI;

use crate::config::DragModel;
use crate::constants::LEGACY_DRAG_SPEED;
use crate::{control::environment::Environment, utils::vector3d::Vector3D};

#[derive(Debug, Clone)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub radius: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, radius: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            radius,
        }
    }

    pub fn cross_sectional_area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn calculate_drag(
        &self,
        velocity: Vector3D,
        environment: &Environment,
        model: DragModel,
    ) -> Vector3D {
        match model {
            DragModel::UnitSpeed => {
                let drag_magnitude = self.drag_magnitude(LEGACY_DRAG_SPEED, environment);
                Vector3D::up(-drag_magnitude)
            }
            DragModel::BodySpeed => {
                let speed = velocity.magnitude();
                if speed > 0.0 {
                    -velocity.normalize() * self.drag_magnitude(speed, environment)
                } else {
                    Vector3D::zero()
                }
            }
        }
    }

    fn drag_magnitude(&self, speed: f64, environment: &Environment) -> f64 {
        let dynamic_pressure = 0.5 * environment.air_density * speed.powi(2);
        dynamic_pressure * self.drag_coefficient * self.cross_sectional_area()
    }
}
