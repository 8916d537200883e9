//! Command-line driver for the connect_k engine.
//!
//! Loads settings from an optional TOML file, applies command-line
//! overrides and runs the search bot headlessly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app_config;
mod cli;
pub mod logging;
mod play;

pub use app_config::{AppConfig, AppConfigError};
pub use cli::{Cli, Command, GameArgs};
pub use play::{SelfPlay, self_play, suggest};
