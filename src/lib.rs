pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::DemoConfig;

pub use adapters::fake_api::FakePricingApi;
pub use crate::core::{coordinator::FareCoordinator, state::FareUiState};
pub use domain::model::{FareEstimate, GeoPoint, Money, TripDraft};
pub use domain::ports::PricingSource;
pub use domain::pricing::FareCalculator;
pub use utils::error::{FareError, Result};
