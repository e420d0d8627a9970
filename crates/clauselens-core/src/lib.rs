//! ClauseLens Core — shared error types and configuration.

pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::{Error, Result};
