//! TMS bridge - Rust backend library
//!
//! Moves freight loads between a load board and a TMS shipment API.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod transform;

pub use error::{ApiError, AppError, Result};

/// Initialize logging
///
/// `RUST_LOG` directives take precedence; otherwise INFO, or DEBUG when verbose.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
