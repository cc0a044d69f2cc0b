use crate::domain::cards_logic::{can_place_on_tableau, extract_movable_sequence};
use crate::domain::state::GameState;

/// A legal tableau-to-tableau move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Hint {
    pub from: usize,
    pub card_index: usize,
    pub to: usize,
}

/// Every currently legal tableau move, in (from, card_index, to) order.
///
/// Read-only. Foundation moves are never suggested since auto-completion
/// sweeps them as soon as they appear.
pub fn hints(state: &GameState) -> Vec<Hint> {
    let mut found = Vec::new();

    for (from, pile) in state.tableau.iter().enumerate() {
        for (card_index, card) in pile.iter().enumerate() {
            if !card.face_up {
                continue;
            }
            let run = extract_movable_sequence(pile, card_index);
            if run.is_empty() {
                continue;
            }
            for (to, target) in state.tableau.iter().enumerate() {
                if to != from && can_place_on_tableau(&run, target, state.difficulty) {
                    found.push(Hint {
                        from,
                        card_index,
                        to,
                    });
                }
            }
        }
    }

    found
}
