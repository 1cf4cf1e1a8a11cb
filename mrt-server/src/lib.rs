//! MRT schedule server.
//!
//! A small HTTP API over the Jakarta MRT website: lists the stations on
//! the line and, for any station, the departures still to come today in
//! each direction.

pub mod config;
pub mod domain;
pub mod stations;
pub mod upstream;
pub mod web;
