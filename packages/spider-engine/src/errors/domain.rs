//! Rule-level rejections.
//!
//! Every variant means the command was refused before any state was
//! touched. The boolean command API collapses these to `false`; the
//! `try_*` API hands them to callers that want to tell the player why.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("column {0} does not exist")]
    ColumnOutOfRange(usize),
    #[error("source and destination are both column {0}")]
    SameColumn(usize),
    #[error("card index {index} is out of range for column {column}")]
    CardIndexOutOfRange { column: usize, index: usize },
    #[error("no movable run starts at column {column}, index {index}")]
    NoMovableRun { column: usize, index: usize },
    #[error("run cannot be placed on column {0}")]
    IllegalPlacement(usize),
    #[error("run is not a complete King to Ace sequence of one suit")]
    IncompleteRun,
    #[error("no empty foundation slot")]
    FoundationFull,
    #[error("stock is empty")]
    StockEmpty,
    #[error("nothing to undo")]
    NothingToUndo,
}

impl MoveError {
    /// Stable SCREAMING_SNAKE_CASE code, one per variant.
    pub const fn code(&self) -> &'static str {
        match self {
            MoveError::GameOver => "GAME_OVER",
            MoveError::ColumnOutOfRange(_) => "COLUMN_OUT_OF_RANGE",
            MoveError::SameColumn(_) => "SAME_COLUMN",
            MoveError::CardIndexOutOfRange { .. } => "CARD_INDEX_OUT_OF_RANGE",
            MoveError::NoMovableRun { .. } => "NO_MOVABLE_RUN",
            MoveError::IllegalPlacement(_) => "ILLEGAL_PLACEMENT",
            MoveError::IncompleteRun => "INCOMPLETE_RUN",
            MoveError::FoundationFull => "FOUNDATION_FULL",
            MoveError::StockEmpty => "STOCK_EMPTY",
            MoveError::NothingToUndo => "NOTHING_TO_UNDO",
        }
    }

    /// Whether the rejection came from the move itself rather than the
    /// game's lifecycle (stock exhausted, nothing to undo, game over).
    pub const fn is_invalid_move(&self) -> bool {
        !matches!(
            self,
            MoveError::GameOver | MoveError::StockEmpty | MoveError::NothingToUndo
        )
    }
}
