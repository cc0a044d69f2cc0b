//! Tableau and foundation moves, auto-completion and undo.

use std::collections::HashSet;

use time::OffsetDateTime;
use tracing::debug;

use crate::domain::cards_logic::{
    can_place_on_foundation, can_place_on_tableau, extract_movable_sequence,
};
use crate::domain::game::{accepted, Game, MoveOutcome};
use crate::domain::history::{MoveRecord, PileKind};
use crate::domain::rules::{FOUNDATION_SLOTS, RUN_LENGTH, TABLEAU_COLUMNS};
use crate::domain::scoring::{award, deduct_floored};
use crate::domain::{Card, CardId};
use crate::errors::MoveError;

impl Game {
    /// Move the run starting at `card_index` of column `from` onto column `to`.
    pub fn try_move_cards(
        &mut self,
        from: usize,
        card_index: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        self.ensure_in_progress()?;
        if from == to {
            return Err(MoveError::SameColumn(from));
        }
        let source = self.column(from)?;
        let target = self.column(to)?;
        if card_index >= source.len() {
            return Err(MoveError::CardIndexOutOfRange {
                column: from,
                index: card_index,
            });
        }

        let run = extract_movable_sequence(source, card_index);
        if run.is_empty() {
            return Err(MoveError::NoMovableRun {
                column: from,
                index: card_index,
            });
        }
        if !can_place_on_tableau(&run, target, self.state.difficulty) {
            return Err(MoveError::IllegalPlacement(to));
        }

        self.record(PileKind::Tableau, from, to, &run);
        let exposed = self.detach_run(from, &run);
        self.state.tableau[to].extend_from_slice(&run);
        self.state.moves += 1;
        award(&mut self.state, self.config.scoring.tableau_move);

        debug!(from, to, card_index, cards = run.len(), "Moved run");

        let (runs_completed, won) = self.settle();
        Ok(MoveOutcome {
            moved: ids_of(&run),
            exposed,
            runs_completed,
            won,
        })
    }

    pub fn move_cards(&mut self, from: usize, card_index: usize, to: usize) -> bool {
        accepted(self.try_move_cards(from, card_index, to), "move_cards")
    }

    /// Send the complete King→Ace run at `card_index` to the first empty
    /// foundation slot.
    pub fn try_move_to_foundation(
        &mut self,
        column: usize,
        card_index: usize,
    ) -> Result<MoveOutcome, MoveError> {
        self.ensure_in_progress()?;
        let (run, slot) = self.foundation_candidate(column, card_index)?;
        let moved = ids_of(&run);
        let exposed = self.apply_foundation_move(column, run, slot);

        let (runs_completed, won) = self.settle();
        Ok(MoveOutcome {
            moved,
            exposed,
            runs_completed,
            won,
        })
    }

    pub fn move_to_foundation(&mut self, column: usize, card_index: usize) -> bool {
        accepted(
            self.try_move_to_foundation(column, card_index),
            "move_to_foundation",
        )
    }

    /// Sweep every complete run on the board to the foundation.
    ///
    /// Rescans from the first column after each move since the columns
    /// shift; stops once a full scan finds nothing. Returns the number of
    /// runs moved.
    pub fn check_auto_complete(&mut self) -> usize {
        let mut completed = 0;
        while let Some((column, run, slot)) = self.find_completable_run() {
            self.apply_foundation_move(column, run, slot);
            completed += 1;
        }
        if completed > 0 {
            debug!(completed, "Auto-completed runs");
        }
        completed
    }

    /// Reverse the most recent recorded move.
    ///
    /// Cards flipped face-up by that move stay face-up.
    pub fn try_undo(&mut self) -> Result<MoveOutcome, MoveError> {
        self.ensure_in_progress()?;
        let record = self
            .state
            .history
            .current()
            .cloned()
            .ok_or(MoveError::NothingToUndo)?;
        if !undo_targets_exist(&record) {
            return Err(MoveError::NothingToUndo);
        }
        self.state.history.step_back();

        let ids: HashSet<CardId> = record.cards.iter().map(|c| c.id).collect();
        match record.to {
            PileKind::Tableau => {
                self.state.tableau[record.to_index].retain(|c| !ids.contains(&c.id));
            }
            PileKind::Foundation => self.state.foundation[record.to_index].clear(),
            PileKind::Stock => {}
        }
        self.state.tableau[record.from_index].extend_from_slice(&record.cards);

        self.state.moves = self.state.moves.saturating_sub(1);
        deduct_floored(&mut self.state, self.config.scoring.undo_penalty);

        debug!(
            from = record.from_index,
            to = record.to_index,
            cards = record.cards.len(),
            "Undid move"
        );

        Ok(MoveOutcome {
            moved: ids_of(&record.cards),
            ..MoveOutcome::default()
        })
    }

    pub fn undo(&mut self) -> bool {
        accepted(self.try_undo(), "undo")
    }

    fn column(&self, index: usize) -> Result<&Vec<Card>, MoveError> {
        self.state
            .tableau
            .get(index)
            .ok_or(MoveError::ColumnOutOfRange(index))
    }

    /// The run and foundation slot a foundation move from here would use.
    fn foundation_candidate(
        &self,
        column: usize,
        card_index: usize,
    ) -> Result<(Vec<Card>, usize), MoveError> {
        let pile = self.column(column)?;
        if card_index >= pile.len() {
            return Err(MoveError::CardIndexOutOfRange {
                column,
                index: card_index,
            });
        }

        let run = extract_movable_sequence(pile, card_index);
        if run.len() != RUN_LENGTH || !can_place_on_foundation(&run) {
            return Err(MoveError::IncompleteRun);
        }
        let slot = self
            .state
            .first_empty_foundation()
            .ok_or(MoveError::FoundationFull)?;
        Ok((run, slot))
    }

    fn find_completable_run(&self) -> Option<(usize, Vec<Card>, usize)> {
        for (column, pile) in self.state.tableau.iter().enumerate() {
            if pile.len() < RUN_LENGTH {
                continue;
            }
            for start in 0..=pile.len() - RUN_LENGTH {
                if let Ok((run, slot)) = self.foundation_candidate(column, start) {
                    return Some((column, run, slot));
                }
            }
        }
        None
    }

    fn apply_foundation_move(
        &mut self,
        column: usize,
        run: Vec<Card>,
        slot: usize,
    ) -> Option<CardId> {
        self.record(PileKind::Foundation, column, slot, &run);
        let exposed = self.detach_run(column, &run);
        self.state.foundation[slot] = run;
        self.state.moves += 1;
        award(&mut self.state, self.config.scoring.foundation_move);

        debug!(column, slot, "Completed run to foundation");
        exposed
    }

    fn record(&mut self, to: PileKind, from_index: usize, to_index: usize, run: &[Card]) {
        self.state.history.push(MoveRecord {
            from: PileKind::Tableau,
            to,
            from_index,
            to_index,
            cards: run.to_vec(),
            timestamp: OffsetDateTime::now_utc(),
        });
    }

    /// Remove exactly `run` (by id) from a column and flip the new top card.
    fn detach_run(&mut self, column: usize, run: &[Card]) -> Option<CardId> {
        let ids: HashSet<CardId> = run.iter().map(|c| c.id).collect();
        let pile = &mut self.state.tableau[column];
        pile.retain(|c| !ids.contains(&c.id));

        let top = pile.last_mut()?;
        if top.face_up {
            return None;
        }
        top.face_up = true;
        Some(top.id)
    }
}

fn ids_of(run: &[Card]) -> Vec<CardId> {
    run.iter().map(|c| c.id).collect()
}

fn undo_targets_exist(record: &MoveRecord) -> bool {
    let source_ok = record.from == PileKind::Tableau && record.from_index < TABLEAU_COLUMNS;
    let target_ok = match record.to {
        PileKind::Tableau => record.to_index < TABLEAU_COLUMNS,
        PileKind::Foundation => record.to_index < FOUNDATION_SLOTS,
        PileKind::Stock => false,
    };
    source_ok && target_ok
}
