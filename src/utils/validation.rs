use crate::utils::error::{FareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_probability(field_name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Probability must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_latency_bounds(field_name: &str, min_ms: u64, max_ms: u64) -> Result<()> {
    if min_ms > max_ms {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", min_ms, max_ms),
            reason: "Minimum latency must not exceed maximum latency".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_latitude(field_name: &str, value: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Latitude must be between -90.0 and 90.0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_longitude(field_name: &str, value: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(FareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Longitude must be between -180.0 and 180.0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability("failure_rate", 0.0).is_ok());
        assert!(validate_probability("failure_rate", 0.2).is_ok());
        assert!(validate_probability("failure_rate", 1.0).is_ok());
        assert!(validate_probability("failure_rate", -0.1).is_err());
        assert!(validate_probability("failure_rate", 1.5).is_err());
    }

    #[test]
    fn test_validate_latency_bounds() {
        assert!(validate_latency_bounds("latency", 500, 1200).is_ok());
        assert!(validate_latency_bounds("latency", 0, 0).is_ok());
        assert!(validate_latency_bounds("latency", 1200, 500).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("distance_km", 0.0).is_ok());
        assert!(validate_non_negative("distance_km", 12.5).is_ok());
        assert!(validate_non_negative("distance_km", -1.0).is_err());
        assert!(validate_non_negative("distance_km", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_latitude("pickup.latitude", 48.85).is_ok());
        assert!(validate_latitude("pickup.latitude", 91.0).is_err());
        assert!(validate_longitude("pickup.longitude", 2.35).is_ok());
        assert!(validate_longitude("pickup.longitude", -180.5).is_err());
    }
}
