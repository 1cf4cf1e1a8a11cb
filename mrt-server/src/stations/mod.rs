//! Station listing and schedule lookup.
//!
//! Each call does one upstream fetch, decodes the payload and reshapes it;
//! nothing is kept between calls.

mod error;
mod service;

pub use error::StationError;
pub use service::{Clock, StationService};
