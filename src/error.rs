//! Error types for the host side of the show.
//!
//! The simulation itself has no failure modes; everything here comes from
//! reading options, config files, the logger or the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with command-line options or the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option that is not recognised.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// An option that needs a value was given last.
    #[error("{0} requires a value")]
    MissingValue(String),

    /// A color that is not six hex digits.
    #[error("invalid hex color: {0} (expected RRGGBB, e.g. 1a1b26)")]
    InvalidColor(String),

    /// A numeric option that does not parse.
    #[error("invalid number for {option}: {value}")]
    InvalidNumber {
        /// The option being parsed.
        option: String,
        /// The offending value.
        value: String,
    },

    /// The config file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// Path given with `--config`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::ShowConfig`].
    #[error("malformed config file {path}: {source}")]
    Parse {
        /// Path given with `--config`.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Values that parse but make no sense together.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error of the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot start logger: {0}")]
    Logger(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
