//! Default paths for LifeLens data and configuration
//!
//! Paths are user-writable by default (no root required):
//! - Data: `$XDG_DATA_HOME/lifelens` or `~/.local/share/lifelens`
//! - Config: `$XDG_CONFIG_HOME/lifelens/config.toml` or `~/.config/lifelens/config.toml`

use std::path::PathBuf;

/// Environment variable for overriding the data directory
pub const LIFELENS_DATA_DIR_ENV: &str = "LIFELENS_DATA_DIR";

/// Environment variable for overriding the config file path
pub const LIFELENS_CONFIG_ENV: &str = "LIFELENS_CONFIG";

/// Database filename within the data directory
const DB_FILENAME: &str = "lifelens.db";

/// Application subdirectory name
const APP_DIR: &str = "lifelens";

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$LIFELENS_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/lifelens` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/lifelens` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(LIFELENS_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    data_dir_without_env()
}

/// Get the data directory without checking LIFELENS_DATA_DIR.
/// Used for default values where the env var is checked separately.
pub fn data_dir_without_env() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}

/// Default path of the SQLite database inside the data directory
pub fn default_db_path() -> PathBuf {
    db_path_in(&default_data_dir())
}

/// Path of the SQLite database inside an explicit data directory
pub fn db_path_in(dir: &std::path::Path) -> PathBuf {
    dir.join(DB_FILENAME)
}

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$LIFELENS_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/lifelens/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/lifelens/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(LIFELENS_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join("config.toml");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join("config.toml");
    }

    PathBuf::from("/tmp").join(APP_DIR).join("config.toml")
}
