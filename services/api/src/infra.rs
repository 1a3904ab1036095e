use impact_echo::verification::{
    FieldValue, LatencySimulator, RandomnessProvider, SeededRandomness, ThreadRandomness,
    VerificationService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Randomness for CLI runs: seeded when the operator asks for reproducible output.
pub(crate) enum CliRandomness {
    Thread(ThreadRandomness),
    Seeded(SeededRandomness),
}

impl CliRandomness {
    pub(crate) fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(SeededRandomness::new(seed)),
            None => Self::Thread(ThreadRandomness),
        }
    }
}

impl RandomnessProvider for CliRandomness {
    fn int_in(&self, low: i32, high: i32) -> i32 {
        match self {
            CliRandomness::Thread(inner) => inner.int_in(low, high),
            CliRandomness::Seeded(inner) => inner.int_in(low, high),
        }
    }

    fn float_in(&self, low: f64, high: f64) -> f64 {
        match self {
            CliRandomness::Thread(inner) => inner.float_in(low, high),
            CliRandomness::Seeded(inner) => inner.float_in(low, high),
        }
    }
}

pub(crate) fn cli_service(
    seed: Option<u64>,
    simulate_latency: bool,
) -> VerificationService<CliRandomness> {
    let latency = if simulate_latency {
        LatencySimulator::enabled()
    } else {
        LatencySimulator::disabled()
    };
    VerificationService::new(Arc::new(CliRandomness::from_seed(seed)), latency)
}

/// Command-line values arrive as text, exactly like form posts.
pub(crate) fn text_field(value: Option<String>) -> Option<FieldValue> {
    value.map(FieldValue::Text)
}
