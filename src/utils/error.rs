use thiserror::Error;

#[derive(Error, Debug)]
pub enum FareError {
    /// Pricing source could not be reached. Rendered exactly as the
    /// message the presentation layer shows.
    #[error("Network error")]
    Network,

    /// Pricing backend rejected or failed the request with its own text.
    /// The message is surfaced verbatim; an empty one falls back to
    /// "Unknown error" at the coordinator.
    #[error("{message}")]
    Backend { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FareError>;
