//! Domain types for the MRT schedule server.
//!
//! Stations and timetables as decoded from upstream, plus the
//! time-of-day parsing and filtering that turns a timetable into the
//! departures still to come.

mod schedule;
mod station;
mod time;

pub use schedule::{Departure, DirectionNames, upcoming_departures};
pub use station::{Schedule, Station, find_schedule};
pub use time::{TimeError, TimeListError, TimeOfDay, parse_times};
