//! Shared types and configuration for trendscope.
//!
//! Defines the unified [`TrendItem`] record that every provider adapter
//! normalizes into, the [`Platform`] enum, and environment-based application
//! configuration.

mod app_config;
mod config;
pub mod text;
mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{Platform, TrendItem, UnknownPlatform};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
