//! Structured logging for PixelVault.
//!
//! Handles console output, JSON file rotation, and environment-based level
//! control.

pub mod logger;

pub use logger::{init_console_logger, init_logger};
