use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for jitter, simulated latency and statistics.
///
/// Injected into the service so tests can pin every draw.
pub trait RandomnessProvider: Send + Sync {
    /// Uniform integer in `low..=high`.
    fn int_in(&self, low: i32, high: i32) -> i32;
    /// Uniform float in `low..high`.
    fn float_in(&self, low: f64, high: f64) -> f64;
}

/// Thread-local RNG, reseeded from the OS. Used by the running server.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomness;

impl RandomnessProvider for ThreadRandomness {
    fn int_in(&self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }

    fn float_in(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}

/// Deterministic RNG for reproducible offline runs.
#[derive(Debug)]
pub struct SeededRandomness {
    rng: Mutex<StdRng>,
}

impl SeededRandomness {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomnessProvider for SeededRandomness {
    fn int_in(&self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(low..=high)
    }

    fn float_in(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(low..high)
    }
}

/// Always answers the same integer (clamped into the requested range) and
/// the midpoint of float ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandomness {
    value: i32,
}

impl FixedRandomness {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl RandomnessProvider for FixedRandomness {
    fn int_in(&self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.value.clamp(low, high)
    }

    fn float_in(&self, low: f64, high: f64) -> f64 {
        low + (high - low) / 2.0
    }
}
