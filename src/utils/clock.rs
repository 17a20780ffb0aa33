use std::time::{Duration, Instant};

/// Monotonic clock reporting seconds since it was started.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

impl FrameClock {
    pub fn start() -> Self {
        FrameClock {
            start: Instant::now(),
        }
    }

    pub fn elapsed_time(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Time left until `target` seconds since start, zero if already past.
    pub fn until(&self, target: f64) -> Duration {
        let remaining = target - self.elapsed_time();
        if remaining > 0.0 {
            Duration::from_secs_f64(remaining)
        } else {
            Duration::ZERO
        }
    }
}
