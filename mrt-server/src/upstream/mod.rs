//! Upstream transit-authority data source.
//!
//! The MRT website exposes a single JSON endpoint listing every station
//! together with its weekday timetable. This module fetches raw payloads
//! from it and decodes them into domain records.
//!
//! Fetching sits behind the [`Fetcher`] trait so the station service can
//! run against [`UpstreamClient`] in production and [`MockFetcher`] in
//! tests or offline development.

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

pub use client::{DEFAULT_UPSTREAM_URL, UpstreamClient, UpstreamConfig};
pub use error::FetchError;
pub use mock::MockFetcher;
pub use types::{ScheduleRecord, StationRecord, decode_schedules, decode_stations};

/// Retrieves the raw payload behind an upstream URL.
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the response body.
    ///
    /// Network failures, timeouts and non-success statuses are all errors.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}
