//! Tracing subscriber setup
//!
//! The library itself only emits `tracing` events (dictionary resolution,
//! load failures, skipped word-list lines). Applications that want to see
//! them call [`init_logging`] once at startup:
//!
//! ```no_run
//! use wordmask::config::LoggingConfig;
//! use wordmask::logging::init_logging;
//!
//! # fn main() -> wordmask::domain::Result<()> {
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config.log_level, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
