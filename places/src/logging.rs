//! Tracing subscriber setup for the `places` binary.
//!
//! - Writes to the configured log file, truncated at the start of each run
//! - Optionally mirrors to stderr so stdout stays clean for command output
//! - Level comes from the config, `--debug`, or `RUST_LOG` (highest priority)

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::log::LogLevel;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping it flushes and closes the file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Logging options resolved from config and command line.
#[derive(Debug, Clone)]
pub struct LoggingOptions<'a> {
    pub log_file: &'a Path,
    pub level: LogLevel,
    /// Also write to stderr
    pub console: bool,
}

/// Installs the global subscriber.
///
/// Creates the log directory if needed and clears the previous log.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be truncated.
pub fn init_logging(options: &LoggingOptions<'_>) -> Result<LoggingGuard, io::Error> {
    let (dir, file_name) = split_log_path(options.log_file)?;
    fs::create_dir_all(dir)?;
    fs::write(options.log_file, "")?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let console_layer = options.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(env_filter(options.level))
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// `RUST_LOG` if set, otherwise `level`.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Splits a log file path into its directory and file name.
fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), io::Error> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path '{}' has no file name", path.display()),
        )
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_log_path() {
        let path = PathBuf::from("/tmp/places/places.log");
        let (dir, name) = split_log_path(&path).unwrap();
        assert_eq!(dir, Path::new("/tmp/places"));
        assert_eq!(name, "places.log");
    }

    #[test]
    fn test_split_bare_file_name_uses_current_dir() {
        let path = PathBuf::from("places.log");
        let (dir, name) = split_log_path(&path).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "places.log");
    }

    #[test]
    fn test_split_rejects_directory_only_path() {
        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);
        let _logging_guard = LoggingGuard { _file_guard: guard };
    }

    // init_logging installs a process-wide subscriber, so it is exercised by
    // the CLI integration tests rather than here.
}
