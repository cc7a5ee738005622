use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalahError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid time of day: {0}")]
    InvalidTime(String),

    #[error("prayer table is empty")]
    EmptyTable,

    #[error("prayer table is not strictly ascending at {name} ({time})")]
    UnorderedTable { name: String, time: String },

    #[error("gregorian year {0} is outside the supported hijri range")]
    HijriOutOfRange(i32),

    #[error("hijri conversion failed: {0}")]
    HijriConversion(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Why the one-shot position query did not produce a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable")]
    Unavailable,

    #[error("location request timed out")]
    Timeout,
}
