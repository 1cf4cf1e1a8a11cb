//! Mock upstream for testing without network access.
//!
//! Serves canned payloads as if they came from the MRT website. Also
//! used by the server binary when `MRT_MOCK_DATA` points at a JSON file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::Fetcher;
use super::error::FetchError;

#[derive(Debug, Clone)]
enum Reply {
    Payload(Arc<Vec<u8>>),
    Status(u16),
}

/// Mock fetcher that serves fixed payloads.
///
/// Every URL gets the default reply unless an override was registered
/// with [`MockFetcher::with_url`]. Requested URLs are recorded in order.
#[derive(Debug, Clone)]
pub struct MockFetcher {
    default: Reply,
    overrides: Arc<HashMap<String, Reply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    /// Serve `payload` for every URL.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self::with_default(Reply::Payload(Arc::new(payload.into())))
    }

    /// Fail every request as if upstream answered with `status`.
    pub fn failing(status: u16) -> Self {
        Self::with_default(Reply::Status(status))
    }

    /// Load the default payload from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let payload = std::fs::read(path)?;
        Ok(Self::new(payload))
    }

    fn with_default(default: Reply) -> Self {
        Self {
            default,
            overrides: Arc::new(HashMap::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve `payload` for `url` instead of the default.
    pub fn with_url(mut self, url: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Arc::make_mut(&mut self.overrides)
            .insert(url.into(), Reply::Payload(Arc::new(payload.into())));
        self
    }

    /// URLs fetched so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.overrides.get(url).unwrap_or(&self.default) {
            Reply::Payload(payload) => Ok(payload.as_ref().clone()),
            Reply::Status(status) => Err(FetchError::Status {
                status: *status,
                message: format!("mock upstream unavailable for {url}"),
            }),
        }
    }
}
