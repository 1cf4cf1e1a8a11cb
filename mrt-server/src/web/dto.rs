//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::{Departure, Station};

/// Envelope wrapping every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Human-readable outcome, or the error text on failure
    pub message: String,

    /// Payload; `null` on failure
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// A failed response with no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
}

/// An upcoming departure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Direction display name
    pub station_name: String,

    /// Departure time in HH:MM format
    pub time: String,
}

// Conversion implementations

impl From<Station> for StationResult {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

impl From<Departure> for ScheduleResult {
    fn from(departure: Departure) -> Self {
        Self {
            station_name: departure.direction,
            time: departure.time.to_string(),
        }
    }
}
