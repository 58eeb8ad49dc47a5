use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::adapters::fake_api::FakePricingApi;
use crate::domain::model::{GeoPoint, TripDraft};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_latency_bounds, validate_latitude, validate_longitude, validate_non_negative,
    validate_probability, Validate,
};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fare-estimator")]
#[command(about = "Estimates a ride fare from a trip draft through a simulated pricing backend")]
pub struct DemoConfig {
    #[arg(long, default_value = "10.0", help = "Trip distance in kilometres")]
    pub distance_km: f64,

    #[arg(long, default_value = "15", help = "Trip duration in minutes")]
    pub duration_min: u32,

    #[arg(long, default_value = "2", help = "Number of stops the demo adds")]
    pub stops: usize,

    #[arg(long, default_value = "48.8566")]
    pub pickup_lat: f64,

    #[arg(long, default_value = "2.3522")]
    pub pickup_lon: f64,

    #[arg(long, default_value = "48.8606")]
    pub dropoff_lat: f64,

    #[arg(long, default_value = "2.3376")]
    pub dropoff_lon: f64,

    #[arg(long, default_value = "0.2", help = "Share of pricing requests that fail")]
    pub failure_rate: f64,

    #[arg(long, default_value = "500")]
    pub min_latency_ms: u64,

    #[arg(long, default_value = "1200")]
    pub max_latency_ms: u64,

    #[arg(long, default_value = "3", help = "Recompute attempts after a failed estimate")]
    pub retries: u32,

    #[arg(long, help = "Render the estimate and logs as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl DemoConfig {
    pub fn pickup(&self) -> GeoPoint {
        GeoPoint::new(self.pickup_lat, self.pickup_lon)
    }

    pub fn dropoff(&self) -> GeoPoint {
        GeoPoint::new(self.dropoff_lat, self.dropoff_lon)
    }

    /// The draft the demo starts from: configured endpoints, no stops yet.
    pub fn initial_draft(&self) -> TripDraft {
        TripDraft {
            pickup: self.pickup(),
            dropoff: self.dropoff(),
            stops: Vec::new(),
            distance_km: self.distance_km,
            duration_min: self.duration_min,
        }
    }

    pub fn pricing_api(&self) -> FakePricingApi {
        FakePricingApi::new()
            .with_failure_rate(self.failure_rate)
            .with_latency(self.min_latency_ms..=self.max_latency_ms)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("distance_km", self.distance_km)?;
        validate_probability("failure_rate", self.failure_rate)?;
        validate_latency_bounds("latency_ms", self.min_latency_ms, self.max_latency_ms)?;
        validate_latitude("pickup_lat", self.pickup_lat)?;
        validate_longitude("pickup_lon", self.pickup_lon)?;
        validate_latitude("dropoff_lat", self.dropoff_lat)?;
        validate_longitude("dropoff_lon", self.dropoff_lon)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config() -> DemoConfig {
        DemoConfig::parse_from(["fare-estimator"])
    }

    #[test]
    fn cli_definition_is_well_formed() {
        DemoConfig::command().debug_assert();
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn out_of_range_failure_rate_is_rejected() {
        let mut config = config();
        config.failure_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_latency_bounds_are_rejected() {
        let mut config = config();
        config.min_latency_ms = 2000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn initial_draft_carries_the_configured_trip() {
        let draft = config().initial_draft();
        assert_eq!(draft.stops.len(), 0);
        assert_eq!(draft.distance_km, 10.0);
        assert_eq!(draft.duration_min, 15);
    }
}
