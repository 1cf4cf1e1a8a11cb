//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::FixedOffset;

use crate::domain::DirectionNames;
use crate::stations::Clock;
use crate::upstream::UpstreamConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Upstream URLs and timeout
    pub upstream: UpstreamConfig,

    /// Display names for the two directions
    pub directions: DirectionNames,

    /// Source of the current time of day
    pub clock: Clock,

    /// Serve this JSON file instead of calling upstream
    pub mock_data: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | variable                    | default                  |
    /// |-----------------------------|--------------------------|
    /// | `MRT_BIND_ADDR`             | `127.0.0.1:3000`         |
    /// | `MRT_STATIONS_URL`          | MRT website endpoint     |
    /// | `MRT_SCHEDULES_URL`         | the stations URL         |
    /// | `MRT_UPSTREAM_TIMEOUT_SECS` | `10`                     |
    /// | `MRT_DIRECTION_A_NAME`      | `Stasiun Lebak Bulus Grab` |
    /// | `MRT_DIRECTION_B_NAME`      | `Stasiun Bundaran HI Bank DKI` |
    /// | `MRT_UTC_OFFSET_MINUTES`    | server local time        |
    /// | `MRT_MOCK_DATA`             | none                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup` instead of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_var(
            "MRT_BIND_ADDR",
            &var("MRT_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let mut upstream = UpstreamConfig::new();
        if let Some(url) = var("MRT_STATIONS_URL") {
            upstream = upstream.with_url(url);
        }
        if let Some(url) = var("MRT_SCHEDULES_URL") {
            upstream = upstream.with_schedules_url(url);
        }
        if let Some(secs) = var("MRT_UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = parse_var("MRT_UPSTREAM_TIMEOUT_SECS", &secs)?;
            upstream = upstream.with_timeout(Duration::from_secs(secs));
        }

        let defaults = DirectionNames::default();
        let directions = DirectionNames::new(
            var("MRT_DIRECTION_A_NAME").unwrap_or(defaults.direction_a),
            var("MRT_DIRECTION_B_NAME").unwrap_or(defaults.direction_b),
        );

        let clock = match var("MRT_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = parse_var("MRT_UTC_OFFSET_MINUTES", &raw)?;
                let offset = minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| ConfigError {
                        var: "MRT_UTC_OFFSET_MINUTES",
                        message: format!("offset out of range: {minutes}"),
                    })?;
                Clock::Fixed(offset)
            }
            None => Clock::Local,
        };

        Ok(Self {
            bind_addr,
            upstream,
            directions,
            clock,
            mock_data: var("MRT_MOCK_DATA").map(PathBuf::from),
        })
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        message: format!("{raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::DEFAULT_UPSTREAM_URL;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.upstream.stations_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream.schedules_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream.timeout, Duration::from_secs(10));
        assert_eq!(config.directions, DirectionNames::default());
        assert_eq!(config.clock, Clock::Local);
        assert!(config.mock_data.is_none());
    }

    #[test]
    fn stations_url_also_sets_schedules_url() {
        let config = config(&[("MRT_STATIONS_URL", "http://localhost:9000/all")]).unwrap();
        assert_eq!(config.upstream.stations_url, "http://localhost:9000/all");
        assert_eq!(config.upstream.schedules_url, "http://localhost:9000/all");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("MRT_BIND_ADDR", "0.0.0.0:8080"),
            ("MRT_STATIONS_URL", "http://localhost:9000/stations"),
            ("MRT_SCHEDULES_URL", "http://localhost:9000/schedules"),
            ("MRT_UPSTREAM_TIMEOUT_SECS", "3"),
            ("MRT_DIRECTION_A_NAME", "Lebak Bulus"),
            ("MRT_DIRECTION_B_NAME", "Bundaran HI"),
            ("MRT_UTC_OFFSET_MINUTES", "420"),
            ("MRT_MOCK_DATA", "data/stasiuns.json"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.upstream.stations_url, "http://localhost:9000/stations");
        assert_eq!(config.upstream.schedules_url, "http://localhost:9000/schedules");
        assert_eq!(config.upstream.timeout, Duration::from_secs(3));
        assert_eq!(
            config.directions,
            DirectionNames::new("Lebak Bulus", "Bundaran HI")
        );
        assert_eq!(
            config.clock,
            Clock::Fixed(FixedOffset::east_opt(7 * 3600).unwrap())
        );
        assert_eq!(config.mock_data, Some(PathBuf::from("data/stasiuns.json")));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config(&[("MRT_BIND_ADDR", "  "), ("MRT_DIRECTION_A_NAME", "")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.directions.direction_a, "Stasiun Lebak Bulus Grab");
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config(&[("MRT_BIND_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid MRT_BIND_ADDR"));

        let err = config(&[("MRT_UPSTREAM_TIMEOUT_SECS", "ten")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid MRT_UPSTREAM_TIMEOUT_SECS"));

        let err = config(&[("MRT_UTC_OFFSET_MINUTES", "+7h")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid MRT_UTC_OFFSET_MINUTES"));
    }

    #[test]
    fn offset_out_of_range() {
        let err = config(&[("MRT_UTC_OFFSET_MINUTES", "1440")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid MRT_UTC_OFFSET_MINUTES: offset out of range: 1440"
        );
    }
}
