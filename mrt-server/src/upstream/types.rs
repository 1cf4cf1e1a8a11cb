//! Upstream JSON record types.
//!
//! The MRT endpoint returns one array whose objects carry both the station
//! identity and its timetable. Only the fields used here are declared;
//! everything else in the payload is ignored. The plain field names
//! (`id`, `name`, `stationId`, ...) are accepted as aliases so mock
//! payloads can use them.
//!
//! Missing or `null` text fields decode as empty strings, so one sparse
//! record never fails the whole list.

use serde::{Deserialize, Deserializer};

use crate::domain::{Schedule, Station};

/// Station identity as sent upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "nid", alias = "id", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "title", alias = "name", default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Station timetable as sent upstream.
///
/// A missing or `null` time list decodes as empty (no departures).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRecord {
    #[serde(
        rename = "nid",
        alias = "stationId",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub station_id: String,
    /// Weekday departures towards Lebak Bulus
    #[serde(
        rename = "jadwal_lb_biasa",
        alias = "scheduleDirectionA",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub schedule_lebak_bulus: String,
    /// Weekday departures towards Bundaran HI
    #[serde(
        rename = "jadwal_hi_biasa",
        alias = "scheduleDirectionB",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub schedule_bundaran_hi: String,
}

/// Deserialize a string field, treating `null` as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        Station::new(record.id, record.name)
    }
}

impl From<ScheduleRecord> for Schedule {
    fn from(record: ScheduleRecord) -> Self {
        Schedule::new(
            record.station_id,
            record.schedule_lebak_bulus,
            record.schedule_bundaran_hi,
        )
    }
}

/// Decode a station list payload, keeping upstream order.
pub fn decode_stations(payload: &[u8]) -> Result<Vec<Station>, serde_json::Error> {
    let records: Vec<StationRecord> = serde_json::from_slice(payload)?;
    Ok(records.into_iter().map(Station::from).collect())
}

/// Decode a schedule list payload, keeping upstream order.
pub fn decode_schedules(payload: &[u8]) -> Result<Vec<Schedule>, serde_json::Error> {
    let records: Vec<ScheduleRecord> = serde_json::from_slice(payload)?;
    Ok(records.into_iter().map(Schedule::from).collect())
}
