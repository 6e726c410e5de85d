//! Shared utilities for the LifeLens core crates
//!
//! This crate provides:
//! - ID types (CheckInId, MissionId)
//! - Time utilities (epoch-millisecond timestamps, date keys, week math)
//! - Error types
//! - Default paths for the data directory and config file

mod error;
mod ids;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use paths::*;
pub use time::*;
