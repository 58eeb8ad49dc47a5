use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::domain::model::{FareEstimate, TripDraft};
use crate::domain::ports::PricingSource;
use crate::domain::pricing::FareCalculator;
use crate::utils::error::{FareError, Result};

/// Stand-in for the real pricing backend. Sleeps a uniformly random
/// duration and fails a fixed share of requests with a network error;
/// everything else answers with the calculator's output.
#[derive(Debug, Clone)]
pub struct FakePricingApi {
    calculator: FareCalculator,
    latency_ms: RangeInclusive<u64>,
    failure_rate: f64,
}

impl FakePricingApi {
    pub const DEFAULT_LATENCY_MS: RangeInclusive<u64> = 500..=1200;
    pub const DEFAULT_FAILURE_RATE: f64 = 0.20;

    pub fn new() -> Self {
        Self {
            calculator: FareCalculator::new(),
            latency_ms: Self::DEFAULT_LATENCY_MS,
            failure_rate: Self::DEFAULT_FAILURE_RATE,
        }
    }

    /// Overrides the simulated latency window in milliseconds.
    pub fn with_latency(mut self, latency_ms: RangeInclusive<u64>) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Overrides the share of requests that fail. Clamped to 0.0..=1.0.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }
}

impl Default for FakePricingApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingSource for FakePricingApi {
    async fn estimate_fare(&self, draft: &TripDraft) -> Result<FareEstimate> {
        // Draw both outcomes up front; the rng handle must not live across
        // the await.
        let (delay_ms, fail) = {
            let mut rng = rand::thread_rng();
            (
                rng.gen_range(self.latency_ms.clone()),
                rng.gen_bool(self.failure_rate),
            )
        };

        tracing::debug!(delay_ms, "simulating pricing backend latency");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        if fail {
            tracing::debug!("simulating pricing backend failure");
            return Err(FareError::Network);
        }

        Ok(self.calculator.calculate(draft))
    }
}
