//! Logging abstraction layer.
//!
//! Components with side effects (the place book, the place file) log
//! through a [`Logger`] trait object instead of calling `tracing` directly,
//! so tests can swap in a silent or recording logger.
//!
//! - `Logger`: the interface components depend on
//! - `TracingLogger`: forwards to the `tracing` crate
//! - `NoOpLogger`: discards everything
//! - `MemoryLogger`: keeps messages in memory for assertions
//!
//! The codec itself never logs.
//!
//! ```
//! use places::log::{Logger, NoOpLogger};
//! use places::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct Exporter {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Exporter {
//!     fn export(&self, slot: usize) {
//!         log_info!(self.logger, "Exporting place {}", slot);
//!         log_debug!(self.logger, "Export of place {} done", slot);
//!     }
//! }
//!
//! Exporter { logger: Arc::new(NoOpLogger) }.export(1);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
