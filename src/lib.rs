pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod scene;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::{
    DragModel, ForceAccumulation, IntegrationConfig, RocketConfig, SimulationConfig, TimeScaling,
};
pub use constants::*;
pub use control::environment::Environment;
pub use control::launch_control::LaunchControl;
pub use control::parameters::TunableParameter;
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{Rocket, RocketState};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{FlightSummary, Telemetry, TelemetrySample};

pub use scene::starfield::{Star, Starfield};

// Re-export commonly used utilities
pub use utils::clock::FrameClock;
pub use utils::vector3d::Vector3D;
