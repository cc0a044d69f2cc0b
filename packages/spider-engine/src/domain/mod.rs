//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_types;
pub mod dealing;
pub mod game;
pub mod hints;
pub mod history;
mod moves;
pub mod rules;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_auto_complete;
#[cfg(test)]
mod tests_hints;
#[cfg(test)]
mod tests_props_consistency;

// Re-exports for ergonomics
pub use cards_logic::{
    can_place_on_foundation, can_place_on_tableau, extract_movable_sequence, is_valid_sequence,
};
pub use cards_types::{Card, CardId, Color, Rank, Suit};
pub use dealing::{create_deck, shuffle_deck, CardIds};
pub use game::{Game, MoveOutcome};
pub use hints::Hint;
pub use history::{History, MoveRecord, PileKind, MAX_HISTORY};
pub use rules::Difficulty;
pub use state::GameState;
