//! Settings file for the connect_k command-line driver.

use crate::cli::GameArgs;
use connect_k::{BotConfig, GameConfig};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board, bot and logging settings.
///
/// Every field has a default, so an empty file (or no file at all) gives
/// tic-tac-toe against a depth-4 bot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cells per row and column.
    #[serde(default = "default_size")]
    size: usize,

    /// Run length needed to win.
    #[serde(default = "default_win_condition")]
    win_condition: usize,

    /// Search depth in plies.
    #[serde(default = "default_max_depth")]
    max_depth: usize,

    /// Board size from which the bot only searches cells next to a mark.
    #[serde(default = "default_adjacent_only_from")]
    adjacent_only_from: usize,

    /// Seed for the bot's tie-breaking; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_size() -> usize {
    GameConfig::TIC_TAC_TOE.size()
}

fn default_win_condition() -> usize {
    GameConfig::TIC_TAC_TOE.win_condition()
}

fn default_max_depth() -> usize {
    BotConfig::DEFAULT_MAX_DEPTH
}

fn default_adjacent_only_from() -> usize {
    BotConfig::DEFAULT_ADJACENT_ONLY_FROM
}

fn default_log_filter() -> String {
    crate::logging::DEFAULT_LOG_FILTER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            win_condition: default_win_condition(),
            max_depth: default_max_depth(),
            adjacent_only_from: default_adjacent_only_from(),
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AppConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| AppConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            size = config.size,
            win_condition = config.win_condition,
            max_depth = config.max_depth,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces settings with any values given on the command line.
    #[instrument(skip(self))]
    pub fn apply_overrides(&mut self, args: &GameArgs) {
        if let Some(size) = args.size {
            self.size = size;
        }
        if let Some(win) = args.win {
            self.win_condition = win;
        }
        if let Some(depth) = args.depth {
            self.max_depth = depth;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
    }

    /// Validated board settings.
    pub fn game_config(&self) -> Result<GameConfig, AppConfigError> {
        GameConfig::new(self.size, self.win_condition)
            .map_err(|e| AppConfigError::new(format!("Invalid board settings: {}", e)))
    }

    /// Validated bot settings.
    pub fn bot_config(&self) -> Result<BotConfig, AppConfigError> {
        BotConfig::new(self.max_depth)
            .map(|config| config.with_adjacent_only_from(self.adjacent_only_from))
            .map_err(|e| AppConfigError::new(format!("Invalid bot settings: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct AppConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AppConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
