//! CLI error handling with user-friendly messages.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error
//! and exits with status 1.

use std::fmt;
use std::process;
use places::config::{ConfigFileError, ConfigKeyError};
use places::coord::CoordError;
use places::place::PlaceError;
use places::storage::StorageError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read or written
    ConfigFile(ConfigFileError),
    /// Place file could not be read or written
    Storage(StorageError),
    /// Slot or name rejected by the place book
    Place(PlaceError),
    /// Coordinate or code rejected by the codec
    Coordinate(CoordError),
    /// Malformed command-line value
    InvalidArgument(String),
    /// JSON output failed
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Storage(StorageError::ReadError(_))
            | CliError::Storage(StorageError::InvalidEntry { .. }) => {
                eprintln!();
                eprintln!("The place file can be reset by deleting it;");
                eprintln!("run 'places config get storage.places_file' to find it.");
            }
            CliError::Place(PlaceError::SlotOutOfRange(_)) => {
                eprintln!();
                eprintln!("Run 'places place list' to see the five slots.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Storage(e) => write!(f, "{}", e),
            CliError::Place(e) => write!(f, "{}", e),
            CliError::Coordinate(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Storage(e) => Some(e),
            CliError::Place(e) => Some(e),
            CliError::Coordinate(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<ConfigKeyError> for CliError {
    fn from(e: ConfigKeyError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        CliError::Storage(e)
    }
}

impl From<PlaceError> for CliError {
    fn from(e: PlaceError) -> Self {
        CliError::Place(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coordinate(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}
