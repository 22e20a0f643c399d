//! CLI runner for common setup and operations.
//!
//! Loads the config, initializes logging and opens the place file so each
//! command handler starts from the same state.

use crate::error::CliError;
use std::sync::Arc;
use tracing::info;
use places::config::ConfigFile;
use places::log::{LogLevel, Logger, TracingLogger};
use places::logging::{init_logging, LoggingGuard, LoggingOptions};
use places::place::PlaceBook;
use places::storage::PlaceFile;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Keeps the log writer alive while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
    logger: Arc<dyn Logger>,
}

impl CliRunner {
    /// Loads config and initializes logging.
    ///
    /// `debug_mode` raises the level to debug and mirrors log output to
    /// stderr. `RUST_LOG` still takes precedence.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let level = if debug_mode {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logging_guard = init_logging(&LoggingOptions {
            log_file: &config.logging.file,
            level,
            console: debug_mode,
        })
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            logger: Arc::new(TracingLogger),
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("places v{}", places::VERSION);
        info!("places CLI: {} command", command);
    }

    /// The place file named by `storage.places_file`.
    pub fn place_file(&self) -> PlaceFile {
        PlaceFile::new(
            self.config.storage.places_file.clone(),
            Arc::clone(&self.logger),
        )
    }

    pub fn load_book(&self) -> Result<PlaceBook, CliError> {
        Ok(self.place_file().load()?)
    }

    pub fn save_book(&self, book: &PlaceBook) -> Result<(), CliError> {
        Ok(self.place_file().save(book)?)
    }
}
