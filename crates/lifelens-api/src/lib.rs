//! Shared domain types for the LifeLens core
//!
//! This crate defines the records the persistence layer stores (daily
//! entries, mission state, user profile), the coach-insight output, and the
//! derived view types the presentation layer consumes.

mod types;
mod views;

pub use types::*;
pub use views::*;
