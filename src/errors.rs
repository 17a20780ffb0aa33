use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter '{name}': {value} is outside [{min}, {max}]")]
    InvalidParameter {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid timestep: elapsed time {0} is not finite")]
    InvalidTimestep(f64),

    #[error("Launch error: {0}")]
    LaunchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for SimulationError {
    fn from(err: toml::de::Error) -> Self {
        SimulationError::ConfigError(err.to_string())
    }
}
