use crate::config::{ForceAccumulation, TimeScaling};
use crate::constants::FRAME_RATE;
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone)]
pub struct Kinematics {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub acceleration: Vector3D,
    pub force_accumulator: Vector3D,
    pub time: f64,
}

impl Kinematics {
    pub fn new(launch_site_position: Vector3D) -> Self {
        Kinematics {
            position: launch_site_position,
            velocity: Vector3D::zero(),
            acceleration: Vector3D::zero(),
            force_accumulator: Vector3D::zero(),
            time: 0.0,
        }
    }

    /// Prepares the accumulator for a new tick.
    pub fn begin_tick(&mut self, accumulation: ForceAccumulation) {
        if accumulation == ForceAccumulation::PerTick {
            self.force_accumulator = Vector3D::zero();
        }
    }

    pub fn apply_force(&mut self, force: Vector3D) {
        self.force_accumulator = self.force_accumulator + force;
    }

    /// Derives acceleration from the accumulated force and steps the body.
    ///
    /// `total_mass` must already be clamped positive.
    pub fn integrate(&mut self, delta_time: f64, total_mass: f64, scheme: TimeScaling) {
        self.acceleration = self.force_accumulator.scale(1.0 / total_mass);

        match scheme {
            TimeScaling::Legacy => {
                // Position sees the previous velocity over dt / 60, velocity the full dt.
                self.position += self.velocity.scale(delta_time / FRAME_RATE);
                self.velocity += self.acceleration.scale(delta_time);
            }
            TimeScaling::SemiImplicitEuler => {
                self.velocity += self.acceleration.scale(delta_time);
                self.position += self.velocity.scale(delta_time);
            }
        }

        self.time += delta_time;
    }

    pub fn get_altitude(&self, ground_height: f64) -> f64 {
        self.position.y - ground_height
    }

    pub fn get_velocity_magnitude(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn get_acceleration_magnitude(&self) -> f64 {
        self.acceleration.magnitude()
    }

    pub fn get_time(&self) -> f64 {
        self.time
    }
}
