//! Upcoming departure filtering.
//!
//! Turns a station's raw timetable into the list of departures still to
//! come today, labelled by direction.

use super::station::Schedule;
use super::time::{TimeListError, TimeOfDay, parse_times};

/// Display names for the two directions of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionNames {
    /// Label for trains towards Lebak Bulus
    pub direction_a: String,
    /// Label for trains towards Bundaran HI
    pub direction_b: String,
}

impl DirectionNames {
    pub fn new(direction_a: impl Into<String>, direction_b: impl Into<String>) -> Self {
        Self {
            direction_a: direction_a.into(),
            direction_b: direction_b.into(),
        }
    }
}

impl Default for DirectionNames {
    fn default() -> Self {
        Self::new("Stasiun Lebak Bulus Grab", "Stasiun Bundaran HI Bank DKI")
    }
}

/// A single future departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Direction display name (not the station's own name)
    pub direction: String,
    pub time: TimeOfDay,
}

/// Departures from `schedule` strictly after `now`.
///
/// Direction A comes first, then direction B. Within each direction the
/// upstream order is kept; nothing is sorted. Both time lists must parse,
/// otherwise the whole lookup fails.
pub fn upcoming_departures(
    schedule: &Schedule,
    names: &DirectionNames,
    now: TimeOfDay,
) -> Result<Vec<Departure>, TimeListError> {
    let towards_a = parse_times(&schedule.direction_a)?;
    let towards_b = parse_times(&schedule.direction_b)?;

    Ok(after(now, &names.direction_a, towards_a)
        .chain(after(now, &names.direction_b, towards_b))
        .collect())
}

fn after<'a>(
    now: TimeOfDay,
    direction: &'a str,
    times: Vec<TimeOfDay>,
) -> impl Iterator<Item = Departure> + 'a {
    times
        .into_iter()
        .filter(move |t| *t > now)
        .map(move |time| Departure {
            direction: direction.to_string(),
            time,
        })
}
