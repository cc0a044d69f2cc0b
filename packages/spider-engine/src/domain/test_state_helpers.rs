//! Test-only board builders for domain unit tests.

use crate::config::EngineConfig;
use crate::domain::dealing::CardIds;
use crate::domain::history::MAX_HISTORY;
use crate::domain::state::GameState;
use crate::domain::{Card, CardId, Difficulty, Game, Rank, Suit};

/// Hands out cards with unique ids for one hand-built board.
pub struct CardFactory {
    ids: CardIds,
}

impl CardFactory {
    pub fn new() -> Self {
        Self {
            ids: CardIds::new(),
        }
    }

    pub fn up(&mut self, suit: Suit, rank: Rank) -> Card {
        Card {
            id: self.ids.next_id(),
            suit,
            rank,
            face_up: true,
        }
    }

    pub fn down(&mut self, suit: Suit, rank: Rank) -> Card {
        Card {
            face_up: false,
            ..self.up(suit, rank)
        }
    }

    /// Face-up descending run from `high` down to `low`, inclusive.
    pub fn run(&mut self, suit: Suit, high: Rank, low: Rank) -> Vec<Card> {
        (low.value()..=high.value())
            .rev()
            .map(|v| self.up(suit, Rank::from_value(v).expect("rank in 1..=13")))
            .collect()
    }

    /// Complete King→Ace run.
    pub fn full_run(&mut self, suit: Suit) -> Vec<Card> {
        self.run(suit, Rank::King, Rank::Ace)
    }
}

/// Empty board with the clock running.
pub fn board(difficulty: Difficulty) -> GameState {
    let mut state = GameState::empty(difficulty, MAX_HISTORY);
    state.clock_running = true;
    state
}

pub fn game_with(state: GameState) -> Game {
    let config = EngineConfig::default()
        .with_seed(1)
        .with_difficulty(state.difficulty);
    Game::from_state(state, config)
}

pub fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(|c| c.id).collect()
}

/// Everything a rejected command must leave untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub stock: Vec<(CardId, bool)>,
    pub tableau: Vec<Vec<(CardId, bool)>>,
    pub foundation: Vec<Vec<CardId>>,
    pub score: i32,
    pub moves: u32,
    pub time_elapsed: u32,
    pub history_len: usize,
    pub history_index: Option<usize>,
    pub is_won: bool,
}

pub fn fingerprint(state: &GameState) -> Fingerprint {
    let faces = |pile: &Vec<Card>| pile.iter().map(|c| (c.id, c.face_up)).collect();
    Fingerprint {
        stock: faces(&state.stock),
        tableau: state.tableau.iter().map(faces).collect(),
        foundation: state.foundation.iter().map(|p| ids(p)).collect(),
        score: state.score,
        moves: state.moves,
        time_elapsed: state.time_elapsed,
        history_len: state.history.len(),
        history_index: state.history_index(),
        is_won: state.is_won,
    }
}

/// Board with every foundation slot full except the last `open` ones.
pub fn nearly_won(open: usize) -> (GameState, CardFactory) {
    let mut cards = CardFactory::new();
    let mut state = board(Difficulty::FourSuit);
    let filled = state.foundation.len() - open;
    for (slot, pile) in state.foundation.iter_mut().take(filled).enumerate() {
        *pile = cards.full_run(Suit::ALL[slot % 4]);
    }
    (state, cards)
}
