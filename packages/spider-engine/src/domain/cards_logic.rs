//! Move validation: pure predicates over runs and piles.
//!
//! A run is ordered top-of-run first, which is also the order the cards sit
//! in the pile from `start` upward.

use crate::domain::rules::RUN_LENGTH;
use crate::domain::{Card, Difficulty, Rank};

/// Same suit and strictly descending by one between neighbours.
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    cards.windows(2).all(|pair| continues(pair[0], pair[1]))
}

/// Maximal movable run starting at `start`.
///
/// Empty when `start` is out of range or the card there is face-down.
/// Otherwise the run is truncated at the first face-down card or the first
/// break in suit/rank continuity.
pub fn extract_movable_sequence(pile: &[Card], start: usize) -> Vec<Card> {
    let Some(first) = pile.get(start) else {
        return Vec::new();
    };
    if !first.face_up {
        return Vec::new();
    }

    let mut run = vec![*first];
    for &card in &pile[start + 1..] {
        let prev = run[run.len() - 1];
        if !card.face_up || !continues(prev, card) {
            break;
        }
        run.push(card);
    }
    run
}

/// Whether `cards` may be dropped onto `target`.
///
/// Only the first card of the run is checked against the target's top card.
pub fn can_place_on_tableau(cards: &[Card], target: &[Card], difficulty: Difficulty) -> bool {
    let Some(incoming) = cards.first() else {
        return false;
    };

    let Some(top) = target.last() else {
        return incoming.rank == Rank::King;
    };
    if !top.face_up {
        return false;
    }

    let suit_ok = match difficulty {
        Difficulty::OneSuit => incoming.suit == top.suit,
        Difficulty::TwoSuit => incoming.color() != top.color(),
        Difficulty::FourSuit => true,
    };

    suit_ok && incoming.rank.is_one_below(top.rank)
}

/// A complete King→Ace run of one suit.
pub fn can_place_on_foundation(cards: &[Card]) -> bool {
    if cards.len() != RUN_LENGTH || !is_valid_sequence(cards) {
        return false;
    }
    matches!(
        (cards.first(), cards.last()),
        (Some(first), Some(last)) if first.rank == Rank::King && last.rank == Rank::Ace
    )
}

fn continues(prev: Card, next: Card) -> bool {
    next.suit == prev.suit && next.rank.is_one_below(prev.rank)
}
