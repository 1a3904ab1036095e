use std::time::Duration;

use crate::config::VerificationConfig;

use super::randomness::RandomnessProvider;

/// Range of the simulated inference delay for one endpoint, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyProfile {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl LatencyProfile {
    pub const FULL_VERIFICATION: Self = Self {
        min_secs: 1.5,
        max_secs: 3.5,
    };
    pub const IMAGE: Self = Self {
        min_secs: 1.0,
        max_secs: 2.0,
    };
    pub const TEXT: Self = Self {
        min_secs: 0.5,
        max_secs: 1.5,
    };

    pub fn sample<R>(&self, randomness: &R) -> Duration
    where
        R: RandomnessProvider + ?Sized,
    {
        let secs = randomness.float_in(self.min_secs, self.max_secs);
        Duration::from_secs_f64(secs.max(0.0))
    }
}

/// Optionally sleeps to imitate model inference cost. Never affects scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySimulator {
    enabled: bool,
}

impl LatencySimulator {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        Self {
            enabled: config.simulate_latency,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Waits for a delay drawn from `profile` and returns how long it slept.
    pub async fn pause<R>(&self, profile: LatencyProfile, randomness: &R) -> Duration
    where
        R: RandomnessProvider + ?Sized,
    {
        if !self.enabled {
            return Duration::ZERO;
        }

        let delay = profile.sample(randomness);
        tokio::time::sleep(delay).await;
        delay
    }
}
