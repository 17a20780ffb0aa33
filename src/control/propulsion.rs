use crate::constants::{FRAME_RATE, FUEL_BURNOUT_THRESHOLD, MASS_EPSILON};

#[derive(Debug, Clone)]
pub struct PropulsionSystem {
    pub thrust: f64,
    pub fuel_mass: f64,
    pub fuel_burn_rate: f64,
    pub dry_mass: f64,
}

impl PropulsionSystem {
    pub fn new(thrust: f64, fuel_mass: f64, burn_rate: f64, dry_mass: f64) -> Self {
        PropulsionSystem {
            thrust,
            fuel_mass,
            fuel_burn_rate: burn_rate,
            dry_mass,
        }
    }

    /// Burns one tick worth of fuel and returns the thrust produced this tick.
    ///
    /// Consumption is `fuel_burn_rate / FRAME_RATE` per call regardless of how
    /// much wall time the tick covered.
    pub fn burn(&mut self) -> f64 {
        if self.is_out_of_fuel() {
            return 0.0;
        }

        self.fuel_mass -= self.fuel_burn_rate / FRAME_RATE;
        if self.fuel_mass <= FUEL_BURNOUT_THRESHOLD {
            self.fuel_mass = 0.0;
            log::info!("Engine burnout");
        }

        self.thrust
    }

    /// Dry mass plus any remaining fuel, never below `MASS_EPSILON`.
    pub fn get_total_mass(&self) -> f64 {
        let mass = if self.fuel_mass > 0.0 {
            self.dry_mass + self.fuel_mass
        } else {
            self.dry_mass
        };
        mass.max(MASS_EPSILON)
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel_mass <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_propulsion_system() {
        let ps = PropulsionSystem::new(10.0, 1000.0, 60.0, 500.0);
        assert_eq!(ps.thrust, 10.0);
        assert_eq!(ps.fuel_mass, 1000.0);
        assert_eq!(ps.fuel_burn_rate, 60.0);
        assert_eq!(ps.dry_mass, 500.0);
    }

    #[test]
    fn test_burn_is_fixed_per_tick() {
        let mut ps = PropulsionSystem::new(10.0, 1000.0, 60.0, 500.0);
        let thrust = ps.burn();
        assert_eq!(thrust, 10.0);
        assert_relative_eq!(ps.fuel_mass, 999.0, epsilon = 1e-12);
    }

    #[test]
    fn test_burn_floors_at_zero() {
        let mut ps = PropulsionSystem::new(10.0, 0.5, 600.0, 500.0);
        assert_eq!(ps.burn(), 10.0);
        assert_eq!(ps.fuel_mass, 0.0);
        assert_eq!(ps.burn(), 0.0);
        assert_eq!(ps.fuel_mass, 0.0);
    }

    #[test]
    fn test_even_burns_empty_the_tank() {
        let mut ps = PropulsionSystem::new(1.0, 1.0, 1.0, 1.0);
        for _ in 0..60 {
            ps.burn();
        }
        assert_eq!(ps.fuel_mass, 0.0);
        assert!(ps.is_out_of_fuel());
    }

    #[test]
    fn test_get_total_mass() {
        let mut ps = PropulsionSystem::new(1.0, 2.0, 60.0, 3.0);
        assert_eq!(ps.get_total_mass(), 5.0);
        ps.fuel_mass = 0.0;
        assert_eq!(ps.get_total_mass(), 3.0);
        ps.fuel_mass = -1.0;
        assert_eq!(ps.get_total_mass(), 3.0);
    }

    #[test]
    fn test_total_mass_is_clamped() {
        let ps = PropulsionSystem::new(1.0, 0.0, 1.0, 0.0);
        assert_eq!(ps.get_total_mass(), MASS_EPSILON);
    }
}
