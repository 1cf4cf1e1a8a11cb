//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationService;

/// Shared application state.
///
/// Generic over the upstream fetcher so the router can run against the
/// real website or a mock.
pub struct AppState<F> {
    /// Station listing and schedule lookup
    pub stations: Arc<StationService<F>>,
}

impl<F> AppState<F> {
    /// Create a new app state.
    pub fn new(stations: StationService<F>) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}

// Derived Clone would require `F: Clone`.
impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            stations: Arc::clone(&self.stations),
        }
    }
}
