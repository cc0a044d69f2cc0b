//! Error handling for the spider engine.

pub mod config;
pub mod domain;

pub use config::ConfigError;
pub use domain::MoveError;
