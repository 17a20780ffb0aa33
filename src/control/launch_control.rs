//! Application state for one launch: the rocket, the launch flag and the
//! clock baseline, driven once per animation frame.
//!
//! A front end owns a single [`LaunchControl`], feeds it elapsed-time samples
//! from a monotonic clock through [`LaunchControl::tick`] and reads
//! [`LaunchControl::render_position`] to place the rocket model. Panel
//! widgets edit the rocket through [`LaunchControl::set_parameter`].

use crate::config::SimulationConfig;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

use super::parameters::TunableParameter;
use super::rocket::{Rocket, RocketState};

pub struct LaunchControl {
    config: SimulationConfig,
    rocket: Rocket,
    launched: bool,
    landed: bool,
    previous_elapsed_time: f64,
}

impl LaunchControl {
    pub fn new(config: SimulationConfig) -> Self {
        let rocket = Self::build_rocket(&config);
        LaunchControl {
            config,
            rocket,
            launched: false,
            landed: false,
            previous_elapsed_time: 0.0,
        }
    }

    fn build_rocket(config: &SimulationConfig) -> Rocket {
        Rocket::from_config(&config.rocket, config.launch_position, config.integration)
    }

    pub fn launch(&mut self) -> Result<(), SimulationError> {
        if self.landed {
            return Err(SimulationError::LaunchError(
                "rocket has landed, reset before launching again".to_string(),
            ));
        }
        if !self.launched {
            self.launched = true;
            log::info!("Rocket launched!");
        }
        Ok(())
    }

    /// Clears the launch flag without touching the rocket.
    pub fn hold(&mut self) {
        if self.launched {
            self.launched = false;
            log::info!("Launch held at altitude {:.3}", self.altitude());
        }
    }

    /// Throws the current rocket away and rebuilds it from the loaded scenario.
    pub fn reset(&mut self) {
        self.rocket = Self::build_rocket(&self.config);
        self.launched = false;
        self.landed = false;
        log::info!("Simulation reset");
    }

    /// Processes one animation frame given the clock's elapsed time in seconds.
    pub fn tick(&mut self, elapsed_time: f64) -> Result<RocketState, SimulationError> {
        if !elapsed_time.is_finite() {
            return Err(SimulationError::InvalidTimestep(elapsed_time));
        }

        let mut delta_time = elapsed_time - self.previous_elapsed_time;
        if delta_time < 0.0 {
            log::warn!(
                "Clock went backwards by {:.6}s, treating frame as zero length",
                -delta_time
            );
            delta_time = 0.0;
        }
        self.previous_elapsed_time = elapsed_time;

        if self.launched {
            self.rocket.advance(delta_time);
            self.check_ground_contact();
        }

        Ok(self.state())
    }

    fn check_ground_contact(&mut self) {
        let ground_height = self.config.ground_height;
        let kinematics = &mut self.rocket.kinematics;

        if kinematics.position.y < ground_height {
            kinematics.position.y = ground_height;
            kinematics.velocity.y = 0.0;
            kinematics.acceleration.y = 0.0;
            self.launched = false;
            self.landed = true;
            log::info!("Rocket has landed after {:.2}s of flight", kinematics.time);
        }
    }

    pub fn state(&self) -> RocketState {
        if self.landed {
            RocketState::Landed
        } else if !self.launched {
            RocketState::Idle
        } else if self.rocket.propulsion.is_out_of_fuel() {
            RocketState::Coasting
        } else {
            RocketState::Powered
        }
    }

    pub fn set_parameter(
        &mut self,
        parameter: TunableParameter,
        value: f64,
    ) -> Result<(), SimulationError> {
        let value = parameter.validate(value).map_err(|err| {
            log::warn!("Rejected edit of {}: {}", parameter, err);
            err
        })?;

        match parameter {
            TunableParameter::DryMass => self.rocket.propulsion.dry_mass = value,
            TunableParameter::Gravity => self.rocket.environment.gravity = value,
            TunableParameter::Thrust => self.rocket.propulsion.thrust = value,
            TunableParameter::FuelMass => self.rocket.propulsion.fuel_mass = value,
            TunableParameter::FuelBurnRate => self.rocket.propulsion.fuel_burn_rate = value,
            TunableParameter::Radius => self.rocket.aerodynamics.radius = value,
        }
        self.rocket.refresh_total_mass();
        log::debug!("{} set to {}", parameter, value);
        Ok(())
    }

    pub fn parameter(&self, parameter: TunableParameter) -> f64 {
        match parameter {
            TunableParameter::DryMass => self.rocket.propulsion.dry_mass,
            TunableParameter::Gravity => self.rocket.environment.gravity,
            TunableParameter::Thrust => self.rocket.propulsion.thrust,
            TunableParameter::FuelMass => self.rocket.propulsion.fuel_mass,
            TunableParameter::FuelBurnRate => self.rocket.propulsion.fuel_burn_rate,
            TunableParameter::Radius => self.rocket.aerodynamics.radius,
        }
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Where the renderer should place the rocket model this frame.
    pub fn render_position(&self) -> Vector3D {
        self.rocket.position()
    }

    pub fn altitude(&self) -> f64 {
        self.rocket.kinematics.get_altitude(self.config.ground_height)
    }
}
