pub mod coordinator;
pub mod state;

pub use crate::domain::model::{FareEstimate, GeoPoint, Money, TripDraft};
pub use crate::domain::ports::PricingSource;
pub use crate::utils::error::Result;
pub use coordinator::FareCoordinator;
pub use state::FareUiState;
