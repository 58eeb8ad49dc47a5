use serde::{Deserialize, Serialize};

/// A geographic position. Latitude is -90.0..=90.0, longitude -180.0..=180.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A trip being priced. Immutable: every edit produces a new draft via the
/// `with_*` constructors, the original is never modified in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    pub pickup: GeoPoint,
    pub dropoff: GeoPoint,
    /// Intermediate stops, in visiting order. May be empty.
    pub stops: Vec<GeoPoint>,
    pub distance_km: f64,
    pub duration_min: u32,
}

impl TripDraft {
    /// Placeholder draft used before any real trip data is known: pickup and
    /// dropoff at the origin, no stops, zero distance and duration.
    pub fn placeholder() -> Self {
        Self {
            pickup: GeoPoint::new(0.0, 0.0),
            dropoff: GeoPoint::new(0.0, 0.0),
            stops: Vec::new(),
            distance_km: 0.0,
            duration_min: 0,
        }
    }

    /// Returns a new draft with `stop` appended to the end of the stop list.
    pub fn with_stop(&self, stop: GeoPoint) -> Self {
        let mut next = self.clone();
        next.stops.push(stop);
        next
    }

    /// Returns a new draft with the last stop removed (last-in-first-out).
    /// A draft without stops is returned unchanged.
    pub fn without_last_stop(&self) -> Self {
        let mut next = self.clone();
        next.stops.pop();
        next
    }

    /// Returns a new draft with the destination replaced.
    pub fn with_dropoff(&self, dropoff: GeoPoint) -> Self {
        Self {
            dropoff,
            ..self.clone()
        }
    }
}

/// A monetary value. Plain f64 is enough at demo precision; equality is by
/// value, so two amounts in different currencies never compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    /// ISO-4217-like currency code, e.g. "EUR".
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// The priced breakdown of a trip draft. All five amounts share one
/// currency. Built only by the calculator, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareEstimate {
    pub base_fare: Money,
    pub distance_fare: Money,
    pub time_fare: Money,
    pub stops_fee: Money,
    pub total: Money,
}
