//! Output utilities for CLI commands
//!
//! Centralized error formatting with hints for host errors.

pub mod errors;

pub use errors::show_error;
