use crate::{
    config::{IntegrationConfig, RocketConfig},
    trajectory_system::{aerodynamics::Aerodynamics, kinematics::Kinematics},
    utils::vector3d::Vector3D,
};

use super::{environment::Environment, propulsion::PropulsionSystem};

/// Flight labels assigned by the frame driver from the rocket's fields.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RocketState {
    Idle,
    Powered,
    Coasting,
    Landed,
}

#[derive(Debug, Clone)]
pub struct Rocket {
    pub propulsion: PropulsionSystem,
    pub environment: Environment,
    pub kinematics: Kinematics,
    pub aerodynamics: Aerodynamics,
    pub integration: IntegrationConfig,
    total_mass: f64,
}

impl Rocket {
    pub fn new(
        propulsion: PropulsionSystem,
        environment: Environment,
        aerodynamics: Aerodynamics,
        launch_site_position: Vector3D,
        integration: IntegrationConfig,
    ) -> Self {
        let total_mass = propulsion.get_total_mass();
        Rocket {
            propulsion,
            environment,
            kinematics: Kinematics::new(launch_site_position),
            aerodynamics,
            integration,
            total_mass,
        }
    }

    pub fn from_config(
        config: &RocketConfig,
        launch_site_position: Vector3D,
        integration: IntegrationConfig,
    ) -> Self {
        Rocket::new(
            PropulsionSystem::new(
                config.thrust,
                config.fuel_mass,
                config.fuel_burn_rate,
                config.dry_mass,
            ),
            Environment::new(config.gravity, config.air_density),
            Aerodynamics::new(config.drag_coefficient, config.radius),
            launch_site_position,
            integration,
        )
    }

    /// Advances the rocket by one animation tick.
    ///
    /// Thrust and gravity act along +y/-y. Fuel consumption is one fixed
    /// tick's worth per call; `delta_time` only feeds the integration step.
    pub fn advance(&mut self, delta_time: f64) {
        self.kinematics.begin_tick(self.integration.force_accumulation);

        if !self.propulsion.is_out_of_fuel() {
            let thrust = self.propulsion.burn();
            self.kinematics.apply_force(Vector3D::up(thrust));
        }

        self.total_mass = self.propulsion.get_total_mass();

        self.kinematics
            .apply_force(self.environment.gravity_force(self.total_mass));

        let drag = self.aerodynamics.calculate_drag(
            self.kinematics.velocity,
            &self.environment,
            self.integration.drag_model,
        );
        self.kinematics.apply_force(drag);

        self.kinematics.integrate(
            delta_time,
            self.total_mass,
            self.integration.time_scaling,
        );
    }

    /// Mass used by the most recent tick (recomputed after parameter edits).
    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    pub fn refresh_total_mass(&mut self) {
        self.total_mass = self.propulsion.get_total_mass();
    }

    pub fn position(&self) -> Vector3D {
        self.kinematics.position
    }

    pub fn velocity(&self) -> Vector3D {
        self.kinematics.velocity
    }

    pub fn acceleration(&self) -> Vector3D {
        self.kinematics.acceleration
    }

    pub fn fuel_mass(&self) -> f64 {
        self.propulsion.fuel_mass
    }
}
