//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Data directory override (default: XDG data dir)
    pub data_dir: Option<PathBuf>,

    /// Active weekly-mission definition
    #[serde(default)]
    pub mission: Option<RawMission>,
}

/// Raw mission definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMission {
    /// Unique stable ID
    pub id: String,

    /// Display title
    pub title: String,

    /// Qualifying days needed per week
    pub target_count: u32,
}
