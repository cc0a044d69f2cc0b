//! Deck construction, shuffling and the opening deal.

use rand::Rng;

use crate::domain::rules::{DECKS, TABLEAU_COLUMNS};
use crate::domain::{Card, CardId, Difficulty, Rank, Suit};

/// Monotonic card id generator, one per game.
#[derive(Debug, Clone, Default)]
pub struct CardIds {
    next: u32,
}

impl CardIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}

/// One 52-card set, all face-down, each card with a fresh id.
pub fn create_deck(ids: &mut CardIds) -> Vec<Card> {
    let mut deck = Vec::with_capacity(Suit::ALL.len() * Rank::ALL.len());
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card {
                id: ids.next_id(),
                suit,
                rank,
                face_up: false,
            });
        }
    }
    deck
}

/// Fisher-Yates shuffle into a new vector; the input is left untouched.
///
/// Walks from the last index down to 1, swapping with a partner drawn
/// uniformly from `[0, i]`.
pub fn shuffle_deck<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Shuffled pool for a game: two merged decks, shuffled, filtered to the
/// difficulty's suits, then shuffled again.
pub fn build_pool<R: Rng + ?Sized>(
    difficulty: Difficulty,
    ids: &mut CardIds,
    rng: &mut R,
) -> Vec<Card> {
    let mut merged = Vec::with_capacity(DECKS * 52);
    for _ in 0..DECKS {
        merged.extend(create_deck(ids));
    }

    let suits = difficulty.suits();
    let filtered: Vec<Card> = shuffle_deck(&merged, rng)
        .into_iter()
        .filter(|c| suits.contains(&c.suit))
        .collect();

    shuffle_deck(&filtered, rng)
}

/// Deal the opening tableau from the end of `pool`.
///
/// Only the last card dealt to each column is face-up. Whatever is left in
/// the pool becomes the stock.
pub fn deal_opening(
    mut pool: Vec<Card>,
    difficulty: Difficulty,
) -> ([Vec<Card>; TABLEAU_COLUMNS], Vec<Card>) {
    let mut tableau: [Vec<Card>; TABLEAU_COLUMNS] = Default::default();

    for (column, count) in tableau.iter_mut().zip(difficulty.opening_layout()) {
        for i in 0..count {
            let Some(mut card) = pool.pop() else {
                break;
            };
            card.face_up = i == count - 1;
            column.push(card);
        }
    }

    (tableau, pool)
}
