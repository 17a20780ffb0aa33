use crate::control::launch_control::LaunchControl;
use crate::control::rocket::RocketState;
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub time: f64,
    pub state: RocketState,
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub acceleration: Vector3D,
    pub fuel_mass: f64,
    pub total_mass: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub max_velocity: f64,
    pub max_altitude: f64,
    pub min_fuel: f64,
    pub max_acceleration: f64,
    pub simulation_time: f64,
}

pub struct Telemetry {
    samples: Vec<TelemetrySample>,
    max_velocity: f64,
    max_altitude: f64,
    min_fuel: f64,
    max_acceleration: f64,
    state_times: Vec<(RocketState, f64)>,
    simulation_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            samples: Vec::new(),
            max_velocity: 0.0,
            max_altitude: 0.0,
            min_fuel: f64::MAX,
            max_acceleration: 0.0,
            state_times: Vec::new(),
            simulation_time: 0.0,
        }
    }

    fn format_vector3d(vec: &Vector3D, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}, z = {:.precision$}",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn collect_data(&mut self, control: &LaunchControl, delta_time: f64) {
        self.simulation_time += delta_time;

        let rocket = control.rocket();
        let state = control.state();
        let velocity_magnitude = rocket.kinematics.get_velocity_magnitude();
        let acceleration_magnitude = rocket.kinematics.get_acceleration_magnitude();
        let altitude = control.altitude();
        let fuel = rocket.fuel_mass();

        self.max_velocity = self.max_velocity.max(velocity_magnitude);
        self.max_altitude = self.max_altitude.max(altitude);
        self.min_fuel = self.min_fuel.min(fuel);
        self.max_acceleration = self.max_acceleration.max(acceleration_magnitude);

        self.samples.push(TelemetrySample {
            time: self.simulation_time,
            state,
            position: rocket.position(),
            velocity: rocket.velocity(),
            acceleration: rocket.acceleration(),
            fuel_mass: fuel,
            total_mass: rocket.total_mass(),
        });

        match self.state_times.last() {
            Some((last_state, _)) if *last_state == state => {}
            _ => {
                log::debug!(
                    "State {:?} at {}",
                    state,
                    Self::format_time(self.simulation_time)
                );
                self.state_times.push((state, self.simulation_time));
            }
        }
    }

    pub fn samples(&self) -> &[TelemetrySample] {
        &self.samples
    }

    pub fn state_transitions(&self) -> &[(RocketState, f64)] {
        &self.state_times
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            max_velocity: self.max_velocity,
            max_altitude: self.max_altitude,
            min_fuel: if self.samples.is_empty() {
                0.0
            } else {
                self.min_fuel
            },
            max_acceleration: self.max_acceleration,
            simulation_time: self.simulation_time,
        }
    }

    /// Writes the per-tick log at `trace` level and the summary at `info`.
    pub fn display_data(&self) {
        for sample in &self.samples {
            log::trace!(
                "Time: {} | State: {:?} | Position: {} | Velocity: {} | Acceleration: {} | Fuel: {:.4} | Mass: {:.4}",
                Self::format_time(sample.time),
                sample.state,
                Self::format_vector3d(&sample.position, 4),
                Self::format_vector3d(&sample.velocity, 4),
                Self::format_vector3d(&sample.acceleration, 4),
                sample.fuel_mass,
                sample.total_mass
            );
        }

        let summary = self.summary();
        log::info!("--- Simulation Summary ---");
        log::info!("Ticks recorded: {}", self.samples.len());
        log::info!("Flight time: {}", Self::format_time(summary.simulation_time));
        log::info!("Max Velocity: {:.4}", summary.max_velocity);
        log::info!("Max Altitude: {:.4}", summary.max_altitude);
        log::info!("Min Fuel: {:.4}", summary.min_fuel);
        log::info!("Max Acceleration: {:.4}", summary.max_acceleration);

        for (state, time) in &self.state_times {
            log::info!("State {:?} reached at: {}", state, Self::format_time(*time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RocketConfig, SimulationConfig};

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_format_time() {
        assert_eq!(Telemetry::format_time(12.346), "12.35s");
        assert_eq!(Telemetry::format_time(75.5), "1m 15.50s");
    }

    #[test]
    fn test_empty_summary() {
        let telemetry = Telemetry::new();
        let summary = telemetry.summary();
        assert_eq!(summary.min_fuel, 0.0);
        assert_eq!(summary.simulation_time, 0.0);
        assert!(telemetry.samples().is_empty());
    }

    #[test]
    fn test_records_flight_phases() {
        let mut control = LaunchControl::new(SimulationConfig {
            rocket: RocketConfig {
                thrust: 10.0,
                fuel_burn_rate: 6.0,
                ..RocketConfig::default()
            },
            ..SimulationConfig::default()
        });
        let mut telemetry = Telemetry::new();

        telemetry.collect_data(&control, 0.0);
        control.launch().unwrap();

        let mut elapsed = 0.0;
        for _ in 0..100_000 {
            elapsed += FRAME;
            let state = control.tick(elapsed).unwrap();
            telemetry.collect_data(&control, FRAME);
            if state == RocketState::Landed {
                break;
            }
        }

        let states: Vec<RocketState> = telemetry
            .state_transitions()
            .iter()
            .map(|(state, _)| *state)
            .collect();
        assert_eq!(
            states,
            vec![
                RocketState::Idle,
                RocketState::Powered,
                RocketState::Coasting,
                RocketState::Landed
            ]
        );

        let summary = telemetry.summary();
        assert!(summary.max_altitude > 0.0);
        assert!(summary.max_velocity > 0.0);
        assert_eq!(summary.min_fuel, 0.0);
        assert_eq!(telemetry.samples().last().unwrap().position.y, 0.4);
    }
}
