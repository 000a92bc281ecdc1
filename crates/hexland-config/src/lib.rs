//! Configuration for the hexland terrain tools.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and stay forward/backward compatible through serde defaults.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, TerrainConfig, default_config_dir};
pub use error::ConfigError;
