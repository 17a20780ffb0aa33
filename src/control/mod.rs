pub mod environment;
pub mod launch_control;
pub mod parameters;
pub mod propulsion;
pub mod rocket;
