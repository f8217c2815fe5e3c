//! Utility functions module
//!
//! Logging setup and other helpers shared by the binary and the library.

pub mod logging;

pub use logging::{init_tracing, log_file_path, resolve_log_path};
