use std::fmt;

use crate::errors::SimulationError;

/// Rocket fields an operator may edit while the simulation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TunableParameter {
    DryMass,
    Gravity,
    Thrust,
    FuelMass,
    FuelBurnRate,
    Radius,
}

impl TunableParameter {
    pub const ALL: [TunableParameter; 6] = [
        TunableParameter::DryMass,
        TunableParameter::Gravity,
        TunableParameter::Thrust,
        TunableParameter::FuelMass,
        TunableParameter::FuelBurnRate,
        TunableParameter::Radius,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TunableParameter::DryMass => "dry_mass",
            TunableParameter::Gravity => "gravity",
            TunableParameter::Thrust => "thrust",
            TunableParameter::FuelMass => "fuel_mass",
            TunableParameter::FuelBurnRate => "fuel_burn_rate",
            TunableParameter::Radius => "radius",
        }
    }

    /// Inclusive `(min, max)` accepted by the control panel.
    pub fn range(&self) -> (f64, f64) {
        match self {
            TunableParameter::DryMass => (0.0, 1_000_000.0),
            TunableParameter::Gravity => (0.0, 10.0),
            TunableParameter::Thrust => (0.0, 10_000_000.0),
            TunableParameter::FuelMass => (0.0, 10_000_000.0),
            TunableParameter::FuelBurnRate => (0.0, 10_000_000.0),
            TunableParameter::Radius => (0.0, 1_000.0),
        }
    }

    /// Slider increment used by panel front ends.
    pub fn step(&self) -> f64 {
        0.01
    }

    pub fn validate(&self, value: f64) -> Result<f64, SimulationError> {
        let (min, max) = self.range();
        if value.is_finite() && value >= min && value <= max {
            Ok(value)
        } else {
            Err(SimulationError::InvalidParameter {
                name: self.name().to_string(),
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for TunableParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
