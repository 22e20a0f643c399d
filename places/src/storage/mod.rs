//! Persistence for the place book and the location backup register.
//!
//! Two stores, matching the watch:
//!
//! - [`PlaceFile`]: the full-precision book in an INI file
//! - [`LocationRegister`]: one position at 0.01° in a packed 32-bit word

mod place_file;
mod register;

pub use place_file::PlaceFile;
pub use register::LocationRegister;

use thiserror::Error;

/// Place file errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read or parse the place file
    #[error("Failed to read place file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write the place file
    #[error("Failed to write place file: {0}")]
    WriteError(std::io::Error),

    /// Failed to create the directory holding the place file
    #[error("Failed to create place directory: {0}")]
    DirectoryError(std::io::Error),

    /// A value in the file is malformed or out of range
    #[error("Invalid place entry: {section}.{key} = '{value}' - {reason}")]
    InvalidEntry {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}
