//! Validated application settings

use lifelens_util::MissionId;
use std::path::PathBuf;

use crate::RawConfig;

/// The active weekly-mission definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionSpec {
    pub id: MissionId,
    pub title: String,
    pub target_count: u32,
}

impl MissionSpec {
    /// The built-in mission used when no config file overrides it
    pub fn built_in() -> Self {
        Self {
            id: MissionId::new("cycle-commute-1"),
            title: "Cycle to work 3x this week".to_string(),
            target_count: 3,
        }
    }
}

/// Validated application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Data directory override; None means the XDG default
    pub data_dir: Option<PathBuf>,
    pub mission: MissionSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            mission: MissionSpec::built_in(),
        }
    }
}

impl AppConfig {
    /// Convert a validated raw config, filling gaps with defaults
    pub fn from_raw(raw: RawConfig) -> Self {
        let mission = match raw.mission {
            Some(m) => MissionSpec {
                id: MissionId::new(m.id),
                title: m.title,
                target_count: m.target_count,
            },
            None => MissionSpec::built_in(),
        };

        Self {
            data_dir: raw.data_dir,
            mission,
        }
    }

    /// Resolved path of the SQLite database
    pub fn db_path(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => lifelens_util::db_path_in(dir),
            None => lifelens_util::default_db_path(),
        }
    }
}
