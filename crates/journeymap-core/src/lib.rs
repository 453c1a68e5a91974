//! Journeymap Core - Domain models, dataset loading, and configuration
//!
//! This crate contains the location/entry data model shared by every other
//! journeymap crate, plus the plumbing that turns a JSON file into a
//! validated, immutable [`MapData`](models::MapData).

pub mod config;
pub mod dates;
pub mod error;
pub mod loader;
pub mod models;

pub use error::{JourneyError, Result};
