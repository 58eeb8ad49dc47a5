use serde::{Deserialize, Serialize};

use crate::domain::model::FareEstimate;

/// What the presentation layer renders. Exactly one variant is active at a
/// time and only the coordinator publishes transitions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum FareUiState {
    /// An estimate request is in flight.
    #[default]
    Loading,
    /// The latest request succeeded with this breakdown.
    Content(FareEstimate),
    /// The latest request failed; the message is ready for display.
    Error(String),
}

impl FareUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FareUiState::Loading)
    }
}
