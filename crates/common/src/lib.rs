//! Juzcast Common Utilities
//!
//! Shared infrastructure for all Juzcast crates:
//! - Error types and result aliases
//! - Cooperative cancellation token
//! - Tracing/logging initialization

pub mod cancel;
pub mod config;
pub mod error;
pub mod logging;

pub use cancel::*;
pub use config::*;
pub use error::*;
