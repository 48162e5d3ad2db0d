use thiserror::Error;

/// Errors raised when a series fails validation.
///
/// The compiled-in datasets never produce these; they guard series that are
/// assembled from anything other than the trusted constants in
/// [`crate::dataset`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The feed contained no points at all
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A point carries a negative amount or the wrong set of representatives
    #[error("Malformed point at index {index}: {reason}")]
    MalformedPoint { index: usize, reason: String },

    /// Periods are not strictly increasing, or an Actual follows a Forecast
    #[error("Point at index {index} is out of order: {reason}")]
    OutOfOrder { index: usize, reason: String },
}

/// Type alias for Result with DataError
pub type Result<T> = std::result::Result<T, DataError>;
