//! Runtime configuration
//!
//! Everything has a compiled-in default; a few knobs can be overridden from
//! the environment. The log filter itself follows `RUST_LOG` (see `logging`).

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LOG_DIR: &str = ".logs";
const DEFAULT_LOG_FILE_PREFIX: &str = "standard-music";
const DEFAULT_LOG_FILTER: &str = "standard_music=debug,rodio=info,reqwest=info,warn";
const DEFAULT_TICK_MS: u64 = 50;
const DEFAULT_ERROR_TIMEOUT_SECS: u64 = 5;
const DEFAULT_FETCH_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FETCH_READ_TIMEOUT_SECS: u64 = 20;

pub const ENV_LOG_DIR: &str = "STANDARD_MUSIC_LOG_DIR";
pub const ENV_TICK_MS: &str = "STANDARD_MUSIC_TICK_MS";
pub const ENV_ERROR_TIMEOUT_SECS: &str = "STANDARD_MUSIC_ERROR_TIMEOUT_SECS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "STANDARD_MUSIC_FETCH_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: String,
    pub default_log_filter: String,
    /// How long the event loop waits for input before redrawing
    pub tick_rate: Duration,
    /// How long an error banner stays up when not dismissed
    pub error_timeout: Duration,
    pub fetch_connect_timeout: Duration,
    /// Longest gap between two reads of a track download
    pub fetch_read_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
            default_log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            error_timeout: Duration::from_secs(DEFAULT_ERROR_TIMEOUT_SECS),
            fetch_connect_timeout: Duration::from_secs(DEFAULT_FETCH_CONNECT_TIMEOUT_SECS),
            fetch_read_timeout: Duration::from_secs(DEFAULT_FETCH_READ_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable values
    /// fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|d| !d.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(ms) = lookup(ENV_TICK_MS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.tick_rate = Duration::from_millis(ms.max(1));
        }
        if let Some(secs) = lookup(ENV_ERROR_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.error_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = lookup(ENV_FETCH_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            // Zero would fail every request
            config.fetch_read_timeout = Duration::from_secs(secs.max(1));
        }

        config
    }
}
