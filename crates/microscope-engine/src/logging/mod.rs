//! Logging utilities.
//!
//! Logger setup lives here so binaries only call [`init_logging`]. Library code
//! logs through the `log` facade and never picks a backend.

mod init;

pub use init::{init_logging, LoggingConfig};
