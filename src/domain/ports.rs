use crate::domain::model::{FareEstimate, TripDraft};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The pricing capability the coordinator depends on: an asynchronous
/// estimate that may fail and is safe to re-issue. Implementations must not
/// mutate the draft. `Send + Sync` because estimates are awaited from
/// spawned tasks.
#[async_trait]
pub trait PricingSource: Send + Sync {
    async fn estimate_fare(&self, draft: &TripDraft) -> Result<FareEstimate>;
}
