use std::collections::HashSet;

use crate::domain::history::History;
use crate::domain::rules::{FOUNDATION_SLOTS, RUN_LENGTH, TABLEAU_COLUMNS};
use crate::domain::{Card, CardId, Difficulty};

pub const INITIAL_SCORE: i32 = 500;

/// Entire game container, sufficient for every pure domain operation.
///
/// Piles are ordered bottom to top; the top card is the last element.
/// There is no explicit phase: "in progress" is both flags clear and "won"
/// is both flags set.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Face-down reserve, consumed only by dealing.
    pub stock: Vec<Card>,
    /// The ten play columns.
    pub tableau: [Vec<Card>; TABLEAU_COLUMNS],
    /// Completed-run slots; each is empty or a full King→Ace run.
    pub foundation: [Vec<Card>; FOUNDATION_SLOTS],
    /// May drop below zero only through the win bonus.
    pub score: i32,
    /// Seconds on the game clock.
    pub time_elapsed: u32,
    pub moves: u32,
    pub is_game_over: bool,
    pub is_won: bool,
    pub difficulty: Difficulty,
    pub history: History,
    /// Whether clock ticks advance `time_elapsed`.
    pub clock_running: bool,
}

impl GameState {
    /// An empty board: no cards anywhere, counters at their starting values.
    pub fn empty(difficulty: Difficulty, max_history: usize) -> Self {
        Self {
            stock: Vec::new(),
            tableau: Default::default(),
            foundation: Default::default(),
            score: INITIAL_SCORE,
            time_elapsed: 0,
            moves: 0,
            is_game_over: false,
            is_won: false,
            difficulty,
            history: History::with_capacity(max_history),
            clock_running: false,
        }
    }

    /// Cursor into the history log; `None` when empty.
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.foundation.iter().map(Vec::len).sum::<usize>()
    }

    /// Every card on the board, stock first, then columns, then foundations.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.tableau.iter().flatten())
            .chain(self.foundation.iter().flatten())
    }

    /// Ids of all cards, or `None` if any id appears twice.
    pub fn all_card_ids(&self) -> Option<HashSet<CardId>> {
        let mut ids = HashSet::with_capacity(self.card_count());
        for card in self.all_cards() {
            if !ids.insert(card.id) {
                return None;
            }
        }
        Some(ids)
    }

    pub fn completed_foundations(&self) -> usize {
        self.foundation
            .iter()
            .filter(|pile| pile.len() == RUN_LENGTH)
            .count()
    }

    pub fn first_empty_foundation(&self) -> Option<usize> {
        self.foundation.iter().position(Vec::is_empty)
    }

    pub fn in_progress(&self) -> bool {
        !self.is_game_over && !self.is_won
    }
}
