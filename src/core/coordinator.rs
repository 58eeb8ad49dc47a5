use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::core::state::FareUiState;
use crate::domain::model::{GeoPoint, TripDraft};
use crate::domain::ports::PricingSource;

/// Sequences trip edits into pricing requests and published UI state.
///
/// The coordinator owns the current draft and is the single writer of the
/// observable state; every edit replaces the draft wholesale and issues a
/// fresh estimate request. Each request carries a sequence number and a
/// result is only applied while its number is still the latest issued, so
/// overlapping requests resolve to the freshest draft, never a stale one.
///
/// Handles are cheap to clone and share one draft and one state channel.
/// Must be created inside a Tokio runtime: estimate requests run on spawned
/// tasks.
pub struct FareCoordinator<P: PricingSource + 'static> {
    inner: Arc<Inner<P>>,
}

struct Inner<P> {
    source: P,
    draft: Mutex<TripDraft>,
    /// Sequence number of the most recently issued estimate request.
    issued: AtomicU64,
    state: watch::Sender<FareUiState>,
}

impl<P: PricingSource + 'static> Clone for FareCoordinator<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: PricingSource + 'static> FareCoordinator<P> {
    /// Creates a coordinator over a placeholder draft and requests the
    /// first estimate immediately, so observers never start on a stale
    /// screen.
    pub fn new(source: P) -> Self {
        Self::with_draft(source, TripDraft::placeholder())
    }

    /// Same as [`Self::new`] but starting from a caller-provided draft.
    pub fn with_draft(source: P, draft: TripDraft) -> Self {
        let (state, _) = watch::channel(FareUiState::Loading);
        let coordinator = Self {
            inner: Arc::new(Inner {
                source,
                draft: Mutex::new(draft),
                issued: AtomicU64::new(0),
                state,
            }),
        };
        coordinator.recompute();
        coordinator
    }

    /// Returns a receiver that is notified on every published state change.
    pub fn subscribe(&self) -> watch::Receiver<FareUiState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the currently published state.
    pub fn state(&self) -> FareUiState {
        self.inner.state.borrow().clone()
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> TripDraft {
        self.inner.draft.lock().expect("draft lock poisoned").clone()
    }

    /// Publishes `Loading` and issues an estimate request for the current
    /// draft. The result is applied only if no newer request has been
    /// issued by the time it resolves.
    pub fn recompute(&self) {
        let request = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let draft = self.draft();

        self.inner.state.send_replace(FareUiState::Loading);
        tracing::debug!(request, stops = draft.stops.len(), "requesting fare estimate");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let result = inner.source.estimate_fare(&draft).await;

            if inner.issued.load(Ordering::SeqCst) != request {
                tracing::debug!(request, "discarding superseded estimate");
                return;
            }

            let next = match result {
                Ok(estimate) => FareUiState::Content(estimate),
                Err(err) => {
                    let mut message = err.to_string();
                    if message.is_empty() {
                        message = "Unknown error".to_string();
                    }
                    tracing::warn!(request, %message, "fare estimate failed");
                    FareUiState::Error(message)
                }
            };
            // send_replace also covers teardown: publishing to a channel
            // with no remaining receivers is a no-op.
            inner.state.send_replace(next);
        });
    }

    /// Appends an intermediate stop to the trip and reprices it.
    pub fn add_stop(&self, stop: GeoPoint) {
        {
            let mut draft = self.inner.draft.lock().expect("draft lock poisoned");
            *draft = draft.with_stop(stop);
        }
        self.recompute();
    }

    /// Removes the most recently added stop and reprices the trip. Without
    /// stops this is a no-op: no draft change, no new request.
    pub fn remove_stop(&self) {
        {
            let mut draft = self.inner.draft.lock().expect("draft lock poisoned");
            if draft.stops.is_empty() {
                tracing::debug!("ignoring remove_stop on a trip without stops");
                return;
            }
            *draft = draft.without_last_stop();
        }
        self.recompute();
    }

    /// Replaces the trip destination and reprices it.
    pub fn change_destination(&self, dropoff: GeoPoint) {
        {
            let mut draft = self.inner.draft.lock().expect("draft lock poisoned");
            *draft = draft.with_dropoff(dropoff);
        }
        self.recompute();
    }
}
