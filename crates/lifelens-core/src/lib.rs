//! Domain core for LifeLens
//!
//! This crate is the heart of LifeLens, containing:
//! - The wellness/CO2 calculator
//! - The weekly mission state machine
//! - The coach-insight rule chain
//! - Read-model aggregation for the presentation layer
//! - The `CoreEngine` composing them over an injectable store, with the
//!   versioned destructive-reseed policy

mod coach;
mod dashboard;
mod engine;
mod mission;
mod seed;
mod wellness;

pub use coach::*;
pub use dashboard::*;
pub use engine::*;
pub use mission::*;
pub use seed::*;
pub use wellness::*;
