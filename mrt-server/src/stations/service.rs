//! Station service: fetch, decode, select, filter.

use chrono::{FixedOffset, Local, Utc};
use tracing::debug;

use crate::domain::{
    Departure, DirectionNames, Station, TimeOfDay, find_schedule, upcoming_departures,
};
use crate::upstream::{Fetcher, UpstreamConfig, decode_schedules, decode_stations};

use super::error::StationError;

/// Source of the current time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The server's local timezone
    #[default]
    Local,
    /// A fixed UTC offset, independent of the server's timezone
    Fixed(FixedOffset),
    /// Always the same time of day (for testing)
    Frozen(TimeOfDay),
}

impl Clock {
    /// The current time of day according to this clock.
    pub fn now(&self) -> TimeOfDay {
        match self {
            Clock::Local => TimeOfDay::from_datetime(&Local::now()),
            Clock::Fixed(offset) => TimeOfDay::from_datetime(&Utc::now().with_timezone(offset)),
            Clock::Frozen(time) => *time,
        }
    }
}

/// Lists stations and upcoming departures from the upstream feed.
#[derive(Debug, Clone)]
pub struct StationService<F> {
    fetcher: F,
    stations_url: String,
    schedules_url: String,
    directions: DirectionNames,
    clock: Clock,
}

impl<F: Fetcher> StationService<F> {
    /// Create a service reading from the URLs in `upstream`.
    pub fn new(fetcher: F, upstream: &UpstreamConfig, directions: DirectionNames) -> Self {
        Self {
            fetcher,
            stations_url: upstream.stations_url.clone(),
            schedules_url: upstream.schedules_url.clone(),
            directions,
            clock: Clock::default(),
        }
    }

    /// Use `clock` for the current time of day.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// All stations, in upstream order.
    pub async fn list_stations(&self) -> Result<Vec<Station>, StationError> {
        let payload = self.fetcher.fetch(&self.stations_url).await?;
        let stations = decode_stations(&payload)?;

        debug!(count = stations.len(), "decoded station list");
        Ok(stations)
    }

    /// Departures from `station_id` later than the current time of day.
    pub async fn schedules_for_station(
        &self,
        station_id: &str,
    ) -> Result<Vec<Departure>, StationError> {
        self.schedules_for_station_at(station_id, self.clock.now())
            .await
    }

    /// Departures from `station_id` strictly later than `now`.
    ///
    /// Direction A departures come first, then direction B, each in
    /// upstream order.
    pub async fn schedules_for_station_at(
        &self,
        station_id: &str,
        now: TimeOfDay,
    ) -> Result<Vec<Departure>, StationError> {
        let payload = self.fetcher.fetch(&self.schedules_url).await?;
        let schedules = decode_schedules(&payload)?;

        let schedule = find_schedule(&schedules, station_id).ok_or(StationError::NotFound)?;
        let departures = upcoming_departures(schedule, &self.directions, now)?;

        debug!(
            station_id,
            %now,
            departures = departures.len(),
            "filtered upcoming departures"
        );
        Ok(departures)
    }
}
