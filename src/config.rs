//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "parlor.toml";

/// Environment variable overriding [`ParlorConfig::scores_dir`].
pub const SCORES_DIR_ENV: &str = "PARLOR_SCORES_DIR";

/// Settings for a run of the suite.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ParlorConfig {
    /// Directory holding the flat score files.
    scores_dir: PathBuf,

    /// Log file written in terminal UI mode.
    log_file: PathBuf,

    /// Pause after a bot move is shown, in milliseconds.
    bot_delay_ms: u64,

    /// Time per row of the connect-four drop animation, in milliseconds.
    drop_frame_ms: u64,
}

impl Default for ParlorConfig {
    fn default() -> Self {
        Self {
            scores_dir: PathBuf::from("scores"),
            log_file: PathBuf::from("parlor_games.log"),
            bot_delay_ms: 400,
            drop_frame_ms: 200,
        }
    }
}

impl ParlorConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(scores_dir = %config.scores_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read when present and defaults are used otherwise. The
    /// [`SCORES_DIR_ENV`] variable is applied last.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        if let Ok(dir) = std::env::var(SCORES_DIR_ENV) {
            if dir.trim().is_empty() {
                warn!(var = SCORES_DIR_ENV, "Ignoring empty override");
            } else {
                info!(scores_dir = %dir, "Scores directory overridden from environment");
                config.scores_dir = PathBuf::from(dir);
            }
        }
        Ok(config)
    }

    /// Replaces the scores directory.
    pub fn with_scores_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scores_dir = dir.into();
        self
    }

    /// Replaces both pacing delays.
    pub fn with_delays(mut self, bot_delay_ms: u64, drop_frame_ms: u64) -> Self {
        self.bot_delay_ms = bot_delay_ms;
        self.drop_frame_ms = drop_frame_ms;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
