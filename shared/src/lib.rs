//! Shared utilities and common types for the Certif server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Machine-readable error codes
//! - Tracing subscriber setup

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::error_codes;
pub use logging::init_tracing;
