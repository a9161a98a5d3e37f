//! CLI-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::FloorplanError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Floorplan(#[from] FloorplanError),

    #[error("cannot open input file {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Floorplan(e) => match e {
                FloorplanError::Io(_) => crate::exitcode::IOERR,
                _ => crate::exitcode::DATAERR,
            },
            CliError::Input { .. } => crate::exitcode::NOINPUT,
            CliError::Output { .. } => crate::exitcode::CANTCREAT,
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
