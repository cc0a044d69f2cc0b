//! Bounded move log backing single-step undo.

use std::collections::VecDeque;

use time::OffsetDateTime;

use crate::domain::Card;

pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PileKind {
    Stock,
    Tableau,
    Foundation,
}

/// One applied move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub from: PileKind,
    pub to: PileKind,
    pub from_index: usize,
    pub to_index: usize,
    /// The moved run, in its original top-to-bottom order.
    pub cards: Vec<Card>,
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<MoveRecord>,
    /// Number of entries at or before the cursor. Zero means the cursor is
    /// before the first entry.
    applied: usize,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(MAX_HISTORY)),
            applied: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append a move after the cursor.
    ///
    /// Anything past the cursor is discarded first. When the log is over
    /// capacity the oldest entry is dropped.
    pub fn push(&mut self, record: MoveRecord) {
        self.entries.truncate(self.applied);
        self.entries.push_back(record);
        self.applied += 1;

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.applied -= 1;
        }
    }

    /// Step the cursor back and return the entry it passed over.
    pub fn step_back(&mut self) -> Option<MoveRecord> {
        let idx = self.applied.checked_sub(1)?;
        let record = self.entries.get(idx)?.clone();
        self.applied = idx;
        Some(record)
    }

    /// Most recent applied entry, if any.
    pub fn current(&self) -> Option<&MoveRecord> {
        self.entries.get(self.applied.checked_sub(1)?)
    }

    /// Cursor position; `None` when nothing can be undone.
    pub fn index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }
}
