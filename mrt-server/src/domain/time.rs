//! Time-of-day handling for MRT schedules.
//!
//! The upstream feed packs departure times into comma-separated "HH:MM"
//! strings. Departures carry no date: they are only ever compared against
//! the current wall-clock time of day.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Error returned when a comma-separated time list contains a bad entry.
///
/// The message is the text shown to API clients, so it names the offending
/// segment verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid time format {segment}")]
pub struct TimeListError {
    segment: String,
    #[source]
    source: TimeError,
}

/// A time of day with minute precision and no date component.
///
/// Ordering is chronological within a single day, which is the same order
/// as comparing the zero-padded "HH:MM" renderings as strings.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("07:05").unwrap();
/// assert_eq!(t.to_string(), "07:05");
/// assert!(t < TimeOfDay::parse_hhmm("12:00").unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Create a time from hour and minute, or `None` if out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Truncate a `NaiveTime` to the minute.
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    /// The time of day of `dt` in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_time(dt.time())
    }

    /// Parse a strict, zero-padded, 24-hour "HH:MM" string.
    ///
    /// # Examples
    ///
    /// ```
    /// use mrt_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("9:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("24:00").is_err());
    /// assert!(TimeOfDay::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Parse a comma-separated list of "HH:MM" times.
///
/// Segments are trimmed and empty segments are skipped. Parsing is
/// all-or-nothing: the first bad segment fails the whole list.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::parse_times;
///
/// let times = parse_times(" 09:00 , 10:15,,11:00").unwrap();
/// let rendered: Vec<String> = times.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, ["09:00", "10:15", "11:00"]);
///
/// assert!(parse_times("").unwrap().is_empty());
/// assert!(parse_times("09:00,9:30").is_err());
/// ```
pub fn parse_times(raw: &str) -> Result<Vec<TimeOfDay>, TimeListError> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            TimeOfDay::parse_hhmm(segment).map_err(|source| TimeListError {
                segment: segment.to_string(),
                source,
            })
        })
        .collect()
}
