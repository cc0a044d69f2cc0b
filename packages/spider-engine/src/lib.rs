#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for two-deck Spider Solitaire.
//!
//! [`Game`] owns the authoritative [`GameState`] and is its only writer.
//! [`GameSession`] wraps a game for async hosts that want a ticking clock
//! and an animated deal.

pub mod config;
pub mod domain;
pub mod errors;
pub mod session;

// Re-exports for public API
pub use config::{EngineConfig, ScoringConfig};
pub use domain::{
    Card, CardId, Color, Difficulty, Game, GameState, Hint, MoveOutcome, MoveRecord, PileKind,
    Rank, Suit,
};
pub use errors::{ConfigError, MoveError};
pub use session::GameSession;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
