//! Scenario configuration loaded from TOML.
//!
//! Every key is optional; anything left out falls back to the launch pad
//! defaults in [`crate::constants`]. A minimal scenario only overrides what it
//! needs:
//!
//! ```toml
//! max_simulation_time = 60.0
//!
//! [rocket]
//! thrust = 10.0
//!
//! [integration]
//! force_accumulation = "per_tick"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::control::parameters::TunableParameter;
use crate::errors::SimulationError;
use crate::utils::vector3d::Vector3D;

/// Whether the force accumulator keeps contributions from earlier ticks.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForceAccumulation {
    /// Forces compound across every tick of the flight (legacy behaviour).
    #[default]
    Persistent,
    /// Accumulator is cleared at the start of each tick.
    PerTick,
}

/// Speed fed into the drag equation.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DragModel {
    /// Constant downward drag evaluated at unit speed (legacy behaviour).
    #[default]
    UnitSpeed,
    /// Quadratic drag opposing the body's actual velocity.
    BodySpeed,
}

/// How position and velocity are stepped from the acceleration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeScaling {
    /// Position steps with `dt / 60` using the old velocity, velocity steps with `dt`.
    #[default]
    Legacy,
    /// Velocity first, then position, both with `dt`.
    SemiImplicitEuler,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct IntegrationConfig {
    pub force_accumulation: ForceAccumulation,
    pub drag_model: DragModel,
    pub time_scaling: TimeScaling,
}

impl IntegrationConfig {
    /// Compounding forces, constant drag and mixed time scaling of the launch animation.
    pub fn legacy() -> Self {
        IntegrationConfig::default()
    }

    /// Per-tick forces, velocity dependent drag and a consistent time step.
    pub fn physical() -> Self {
        IntegrationConfig {
            force_accumulation: ForceAccumulation::PerTick,
            drag_model: DragModel::BodySpeed,
            time_scaling: TimeScaling::SemiImplicitEuler,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RocketConfig {
    pub dry_mass: f64,
    pub fuel_mass: f64,
    pub fuel_burn_rate: f64,
    pub thrust: f64,
    pub gravity: f64,
    pub drag_coefficient: f64,
    pub air_density: f64,
    pub radius: f64,
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            dry_mass: DEFAULT_DRY_MASS,
            fuel_mass: DEFAULT_FUEL_MASS,
            fuel_burn_rate: DEFAULT_FUEL_BURN_RATE,
            thrust: DEFAULT_THRUST,
            gravity: DEFAULT_GRAVITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            air_density: DEFAULT_AIR_DENSITY,
            radius: DEFAULT_CROSS_SECTION_RADIUS,
        }
    }
}

impl RocketConfig {
    pub fn value(&self, parameter: TunableParameter) -> f64 {
        match parameter {
            TunableParameter::DryMass => self.dry_mass,
            TunableParameter::Gravity => self.gravity,
            TunableParameter::Thrust => self.thrust,
            TunableParameter::FuelMass => self.fuel_mass,
            TunableParameter::FuelBurnRate => self.fuel_burn_rate,
            TunableParameter::Radius => self.radius,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for parameter in TunableParameter::ALL {
            parameter.validate(self.value(parameter))?;
        }
        validate_non_negative("drag_coefficient", self.drag_coefficient)?;
        validate_non_negative("air_density", self.air_density)?;
        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub ground_height: f64,
    pub tick_rate: f64,
    pub max_simulation_time: f64,
    pub launch_position: Vector3D,
    pub rocket: RocketConfig,
    pub integration: IntegrationConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            ground_height: GROUND_HEIGHT,
            tick_rate: TICK_RATE,
            max_simulation_time: MAX_SIMULATION_TIME,
            launch_position: Vector3D::new(LAUNCH_PAD_X, LAUNCH_PAD_Y, LAUNCH_PAD_Z),
            rocket: RocketConfig::default(),
            integration: IntegrationConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let source = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded scenario from {}", path.as_ref().display());
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.rocket.validate()?;

        if !self.ground_height.is_finite() {
            return Err(invalid("ground_height", self.ground_height, f64::MIN, f64::MAX));
        }
        if !self.launch_position.is_finite() {
            return Err(SimulationError::ConfigError(
                "launch_position must have finite components".to_string(),
            ));
        }
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(invalid("tick_rate", self.tick_rate, f64::MIN_POSITIVE, f64::MAX));
        }
        validate_non_negative("max_simulation_time", self.max_simulation_time)?;
        Ok(())
    }

    /// Seconds between two driver ticks.
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate
    }
}

fn validate_non_negative(name: &str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, 0.0, f64::MAX))
    }
}

fn invalid(name: &str, value: f64, min: f64, max: f64) -> SimulationError {
    SimulationError::InvalidParameter {
        name: name.to_string(),
        value,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scenario_uses_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.integration, IntegrationConfig::legacy());
        assert_eq!(config.ground_height, 0.4);
        assert_eq!(config.launch_position, Vector3D::new(0.0, 0.4, 0.0));
    }

    #[test]
    fn test_partial_scenario() {
        let source = r#"
            max_simulation_time = 30.0
            launch_position = { x = 1.0, y = 2.0, z = 3.0 }

            [rocket]
            thrust = 10.0
            fuel_mass = 5.0

            [integration]
            force_accumulation = "per_tick"
            time_scaling = "semi_implicit_euler"
        "#;
        let config = SimulationConfig::from_toml_str(source).unwrap();

        assert_eq!(config.max_simulation_time, 30.0);
        assert_eq!(config.launch_position, Vector3D::new(1.0, 2.0, 3.0));
        assert_eq!(config.rocket.thrust, 10.0);
        assert_eq!(config.rocket.fuel_mass, 5.0);
        assert_eq!(config.rocket.dry_mass, DEFAULT_DRY_MASS);
        assert_eq!(
            config.integration.force_accumulation,
            ForceAccumulation::PerTick
        );
        assert_eq!(config.integration.drag_model, DragModel::UnitSpeed);
        assert_eq!(
            config.integration.time_scaling,
            TimeScaling::SemiImplicitEuler
        );
    }

    #[test]
    fn test_out_of_range_parameter_is_rejected() {
        let err = SimulationConfig::from_toml_str("[rocket]\ngravity = 11.0\n").unwrap_err();
        match err {
            SimulationError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "gravity");
                assert_eq!(value, 11.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_air_density_is_rejected() {
        let result = SimulationConfig::from_toml_str("[rocket]\nair_density = -1.0\n");
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_unknown_integration_mode_is_config_error() {
        let result = SimulationConfig::from_toml_str("[integration]\ndrag_model = \"cubic\"\n");
        assert!(matches!(result, Err(SimulationError::ConfigError(_))));
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let result = SimulationConfig::from_toml_str("tick_rate = 0.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimulationConfig::load("does/not/exist.toml");
        assert!(matches!(result, Err(SimulationError::Io(_))));
    }
}
