//! The game state machine: the single writer of `GameState`.
//!
//! Every command validates fully before it mutates, so a rejected command
//! leaves the state untouched. Commands come in pairs: `try_*` returns the
//! reason for a rejection, the plain form collapses it to `bool`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::dealing::{build_pool, deal_opening, CardIds};
use crate::domain::hints::{hints, Hint};
use crate::domain::rules::{FOUNDATION_SLOTS, TABLEAU_COLUMNS};
use crate::domain::scoring::{apply_clock_tick, award, win_bonus};
use crate::domain::state::GameState;
use crate::domain::{CardId, Difficulty};
use crate::errors::MoveError;

/// What an accepted command did, for callers that react to events
/// (sounds, animations) without diffing state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cards moved, dealt or restored by the command itself.
    pub moved: Vec<CardId>,
    /// Card flipped face-up on the source column, if any.
    pub exposed: Option<CardId>,
    /// Runs swept to the foundation by auto-completion afterwards.
    pub runs_completed: usize,
    /// The command finished the game.
    pub won: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) state: GameState,
    pub(crate) config: EngineConfig,
    rng: ChaCha8Rng,
    ids: CardIds,
}

impl Game {
    /// A game with an empty board. Call [`Game::init_game`] to deal.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        Self {
            state: GameState::empty(config.difficulty, config.max_history),
            config,
            rng,
            ids: CardIds::new(),
        }
    }

    /// A freshly dealt game at the configured difficulty.
    pub fn start(config: EngineConfig) -> Self {
        let difficulty = config.difficulty;
        let mut game = Self::new(config);
        game.init_game(difficulty);
        game
    }

    /// Resume from an explicit board.
    pub fn from_state(state: GameState, config: EngineConfig) -> Self {
        let mut game = Self::new(config);
        game.state = state;
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Reset everything and deal a new game.
    pub fn init_game(&mut self, difficulty: Difficulty) {
        self.ids = CardIds::new();
        let pool = build_pool(difficulty, &mut self.ids, &mut self.rng);
        let (tableau, stock) = deal_opening(pool, difficulty);

        let mut state = GameState::empty(difficulty, self.config.max_history);
        state.score = self.config.scoring.initial;
        state.tableau = tableau;
        state.stock = stock;
        self.state = state;
        self.start_timer();

        info!(
            difficulty = difficulty.as_str(),
            stock = self.state.stock.len(),
            "Dealt new game"
        );
    }

    pub fn start_timer(&mut self) {
        self.state.clock_running = true;
    }

    pub fn stop_timer(&mut self) {
        self.state.clock_running = false;
    }

    /// Advance the game clock by one second.
    pub fn tick(&mut self) -> bool {
        apply_clock_tick(&mut self.state, &self.config.scoring)
    }

    pub fn hints(&self) -> Vec<Hint> {
        hints(&self.state)
    }

    /// Deal one face-up card onto each column from the stock.
    pub fn try_deal_cards_sync(&mut self) -> Result<MoveOutcome, MoveError> {
        let width = self.deal_width()?;
        let mut dealt = Vec::with_capacity(width);
        for column in 0..width {
            match self.deal_one(column) {
                Some(id) => dealt.push(id),
                None => break,
            }
        }
        Ok(self.finish_deal(dealt))
    }

    pub fn deal_cards_sync(&mut self) -> bool {
        accepted(self.try_deal_cards_sync(), "deal")
    }

    /// Columns the next deal will reach: `min(10, stock)`.
    pub(crate) fn deal_width(&self) -> Result<usize, MoveError> {
        self.ensure_in_progress()?;
        match self.state.stock.len().min(TABLEAU_COLUMNS) {
            0 => Err(MoveError::StockEmpty),
            width => Ok(width),
        }
    }

    /// Move the top stock card face-up onto `column`.
    pub(crate) fn deal_one(&mut self, column: usize) -> Option<CardId> {
        let state = &mut self.state;
        let pile = state.tableau.get_mut(column)?;
        let mut card = state.stock.pop()?;
        card.face_up = true;
        pile.push(card);
        Some(card.id)
    }

    /// Book-keeping after the last card of a deal has landed.
    pub(crate) fn finish_deal(&mut self, dealt: Vec<CardId>) -> MoveOutcome {
        self.state.moves += 1;
        debug!(
            cards = dealt.len(),
            stock_left = self.state.stock.len(),
            "Dealt from stock"
        );
        let (runs_completed, won) = self.settle();
        MoveOutcome {
            moved: dealt,
            exposed: None,
            runs_completed,
            won,
        }
    }

    /// Win check. Transitions to won at most once: sets both flags, stops
    /// the clock and adds the time bonus, which may be negative.
    pub fn check_win(&mut self) -> bool {
        if self.state.is_won {
            return true;
        }
        if self.state.completed_foundations() != FOUNDATION_SLOTS {
            return false;
        }

        self.state.is_won = true;
        self.state.is_game_over = true;
        self.stop_timer();
        let bonus = win_bonus(self.state.time_elapsed, &self.config.scoring);
        award(&mut self.state, bonus);

        info!(
            score = self.state.score,
            bonus,
            moves = self.state.moves,
            time_elapsed = self.state.time_elapsed,
            "Game won"
        );
        true
    }

    /// Auto-completion followed by the win check.
    pub(crate) fn settle(&mut self) -> (usize, bool) {
        let runs = self.check_auto_complete();
        let won = self.check_win();
        (runs, won)
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.state.is_game_over {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }
}

pub(crate) fn accepted(result: Result<MoveOutcome, MoveError>, command: &'static str) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            debug!(command, code = err.code(), reason = %err, "Rejected command");
            false
        }
    }
}
