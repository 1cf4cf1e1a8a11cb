//! Station and schedule records.

/// A station on the line, as listed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Upstream station identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The timetable record for one station.
///
/// Each direction holds the raw upstream time list: zero or more "HH:MM"
/// times separated by commas. Parsing is deferred until the record is
/// actually requested, so one malformed station never breaks the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub station_id: String,
    /// Departures towards direction A (Lebak Bulus)
    pub direction_a: String,
    /// Departures towards direction B (Bundaran HI)
    pub direction_b: String,
}

impl Schedule {
    pub fn new(
        station_id: impl Into<String>,
        direction_a: impl Into<String>,
        direction_b: impl Into<String>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            direction_a: direction_a.into(),
            direction_b: direction_b.into(),
        }
    }
}

/// Returns the first schedule whose station id equals `station_id`.
pub fn find_schedule<'a>(schedules: &'a [Schedule], station_id: &str) -> Option<&'a Schedule> {
    schedules.iter().find(|s| s.station_id == station_id)
}
