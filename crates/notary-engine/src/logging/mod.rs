//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade so library code
//! only ever depends on `log` macros.

mod init;

pub use init::{init_logging, LoggingConfig};
