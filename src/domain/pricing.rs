use crate::domain::model::{FareEstimate, Money, TripDraft};

/// Pure fare policy: maps a trip draft to a priced breakdown. Deterministic,
/// no side effects, total over every valid draft (callers guarantee
/// non-negative distance and duration).
#[derive(Debug, Clone, Copy, Default)]
pub struct FareCalculator;

impl FareCalculator {
    /// Flat amount charged on every ride.
    pub const BASE_FARE: f64 = 2.50;
    /// Charge per kilometre driven.
    pub const PER_KM: f64 = 0.80;
    /// Charge per minute of estimated ride time.
    pub const PER_MIN: f64 = 0.20;
    /// Surcharge per intermediate stop.
    pub const PER_STOP: f64 = 1.00;
    /// Floor applied to the total of every ride.
    pub const MIN_FARE: f64 = 5.00;
    /// Currency every component is priced in.
    pub const CURRENCY: &'static str = "EUR";

    pub fn new() -> Self {
        Self
    }

    /// Prices a draft. The total is the component sum, floored at
    /// [`Self::MIN_FARE`]; zero distance, duration and stops therefore
    /// price at exactly the minimum fare.
    pub fn calculate(&self, draft: &TripDraft) -> FareEstimate {
        let base_fare = Self::BASE_FARE;
        let distance_fare = draft.distance_km * Self::PER_KM;
        let time_fare = f64::from(draft.duration_min) * Self::PER_MIN;
        let stops_fee = draft.stops.len() as f64 * Self::PER_STOP;

        let raw_total = base_fare + distance_fare + time_fare + stops_fee;
        let total = raw_total.max(Self::MIN_FARE);

        FareEstimate {
            base_fare: Money::new(base_fare, Self::CURRENCY),
            distance_fare: Money::new(distance_fare, Self::CURRENCY),
            time_fare: Money::new(time_fare, Self::CURRENCY),
            stops_fee: Money::new(stops_fee, Self::CURRENCY),
            total: Money::new(total, Self::CURRENCY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GeoPoint;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn draft(distance_km: f64, duration_min: u32, stops: usize) -> TripDraft {
        TripDraft {
            pickup: GeoPoint::new(48.8566, 2.3522),
            dropoff: GeoPoint::new(48.8606, 2.3376),
            stops: vec![GeoPoint::new(48.8530, 2.3499); stops],
            distance_km,
            duration_min,
        }
    }

    #[test]
    fn zero_trip_prices_at_minimum_fare() {
        let estimate = FareCalculator::new().calculate(&draft(0.0, 0, 0));
        assert!((estimate.total.amount - 5.00).abs() < EPSILON);
    }

    #[test]
    fn short_trip_is_floored_to_minimum_fare() {
        // 2.50 + 0.80 + 0.20 = 3.50 raw, below the floor
        let estimate = FareCalculator::new().calculate(&draft(1.0, 1, 0));
        assert!((estimate.distance_fare.amount - 0.80).abs() < EPSILON);
        assert!((estimate.time_fare.amount - 0.20).abs() < EPSILON);
        assert!((estimate.total.amount - 5.00).abs() < EPSILON);
    }

    #[test]
    fn standard_trip_breaks_down_per_component() {
        let estimate = FareCalculator::new().calculate(&draft(10.0, 15, 0));
        assert!((estimate.base_fare.amount - 2.50).abs() < EPSILON);
        assert!((estimate.distance_fare.amount - 8.00).abs() < EPSILON);
        assert!((estimate.time_fare.amount - 3.00).abs() < EPSILON);
        assert!((estimate.stops_fee.amount - 0.00).abs() < EPSILON);
        assert!((estimate.total.amount - 13.50).abs() < EPSILON);
    }

    #[test]
    fn each_stop_adds_its_surcharge() {
        let estimate = FareCalculator::new().calculate(&draft(10.0, 15, 2));
        assert!((estimate.stops_fee.amount - 2.00).abs() < EPSILON);
        assert!((estimate.total.amount - 15.50).abs() < EPSILON);
    }

    #[test]
    fn calculation_is_idempotent() {
        let calculator = FareCalculator::new();
        let input = draft(7.3, 21, 1);
        assert_eq!(calculator.calculate(&input), calculator.calculate(&input));
    }

    #[test]
    fn all_components_share_the_currency() {
        let estimate = FareCalculator::new().calculate(&draft(3.0, 5, 1));
        for money in [
            &estimate.base_fare,
            &estimate.distance_fare,
            &estimate.time_fare,
            &estimate.stops_fee,
            &estimate.total,
        ] {
            assert_eq!(money.currency, FareCalculator::CURRENCY);
        }
    }

    proptest! {
        #[test]
        fn total_is_component_sum_floored(
            distance_km in 0.0f64..500.0,
            duration_min in 0u32..600,
            stops in 0usize..10,
        ) {
            let estimate = FareCalculator::new()
                .calculate(&draft(distance_km, duration_min, stops));
            let expected = (2.50
                + distance_km * 0.80
                + f64::from(duration_min) * 0.20
                + stops as f64 * 1.00)
                .max(5.00);
            prop_assert!((estimate.total.amount - expected).abs() < 1e-6);
        }
    }
}
