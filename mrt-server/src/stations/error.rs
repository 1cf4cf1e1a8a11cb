//! Station service error types.

use crate::domain::TimeListError;
use crate::upstream::FetchError;

/// Errors from listing stations or looking up a station's schedule.
///
/// The display text of each variant is what API clients see.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Upstream could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Upstream payload was not the expected JSON
    #[error("invalid upstream data: {message}")]
    Decode { message: String },

    /// No schedule record for the requested station
    #[error("Station not found")]
    NotFound,

    /// A schedule record held a malformed time
    #[error(transparent)]
    Format(#[from] TimeListError),
}

impl From<serde_json::Error> for StationError {
    fn from(err: serde_json::Error) -> Self {
        StationError::Decode {
            message: err.to_string(),
        }
    }
}
