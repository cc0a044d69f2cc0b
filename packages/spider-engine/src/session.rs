//! Async session around a [`Game`]: the ticking clock and the staggered deal.
//!
//! The game itself is synchronous. A session shares it behind a mutex with
//! two background activities that span scheduling turns. The mutex is
//! never held across an `.await`.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::domain::game::{Game, MoveOutcome};
use crate::domain::hints::Hint;
use crate::domain::state::GameState;
use crate::domain::Difficulty;
use crate::errors::MoveError;

pub struct GameSession {
    game: Arc<Mutex<Game>>,
    timer: Mutex<Option<CancellationToken>>,
    tick_interval: Duration,
    deal_stagger: Duration,
}

impl GameSession {
    /// A session with an empty board; nothing ticks until
    /// [`GameSession::init_game`] or [`GameSession::start_timer`].
    pub fn new(config: EngineConfig) -> Self {
        let tick_interval = config.tick_interval();
        let deal_stagger = config.deal_stagger();
        Self {
            game: Arc::new(Mutex::new(Game::new(config))),
            timer: Mutex::new(None),
            tick_interval,
            deal_stagger,
        }
    }

    pub fn from_game(game: Game) -> Self {
        let tick_interval = game.config().tick_interval();
        let deal_stagger = game.config().deal_stagger();
        Self {
            game: Arc::new(Mutex::new(game)),
            timer: Mutex::new(None),
            tick_interval,
            deal_stagger,
        }
    }

    /// Deal a new game and start its clock.
    pub fn init_game(&self, difficulty: Difficulty) {
        self.game.lock().init_game(difficulty);
        self.start_timer();
    }

    /// Start (or restart) the background clock.
    ///
    /// Outside a tokio runtime the clock flag is still set but nothing
    /// ticks; the game stays fully playable.
    pub fn start_timer(&self) {
        let mut slot = self.timer.lock();
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        self.game.lock().start_timer();

        let Ok(handle) = Handle::try_current() else {
            warn!("No tokio runtime; game clock will not tick");
            return;
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let game = Arc::clone(&self.game);
        let period = self.tick_interval;

        handle.spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticks.tick() => {
                        let mut locked = game.lock();
                        locked.tick();
                        if !locked.state().in_progress() {
                            debug!("Game finished; clock task exiting");
                            break;
                        }
                    }
                }
            }
        });
        *slot = Some(token);
    }

    pub fn stop_timer(&self) {
        self.cancel_timer();
        self.game.lock().stop_timer();
    }

    /// Deal from the stock one card at a time, calling `on_deal(column)`
    /// after each card lands and pausing between cards.
    ///
    /// The deal runs on its own task: dropping the returned future does not
    /// abandon it half-way.
    pub async fn deal_cards<F>(&self, on_deal: F) -> bool
    where
        F: FnMut(usize) + Send + 'static,
    {
        let game = Arc::clone(&self.game);
        let stagger = self.deal_stagger;
        let task = tokio::spawn(async move { deal_staggered(game, stagger, on_deal).await });

        let result = task.await;
        if !self.with_state(GameState::in_progress) {
            self.cancel_timer();
        }
        match result {
            Ok(Ok(_)) => true,
            Ok(Err(err)) => {
                debug!(code = err.code(), reason = %err, "Rejected deal");
                false
            }
            Err(err) => {
                warn!(error = %err, "Deal task failed");
                false
            }
        }
    }

    pub fn deal_cards_sync(&self) -> bool {
        self.command(Game::deal_cards_sync)
    }

    pub fn move_cards(&self, from: usize, card_index: usize, to: usize) -> bool {
        self.command(|game| game.move_cards(from, card_index, to))
    }

    pub fn try_move_cards(
        &self,
        from: usize,
        card_index: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        self.command(|game| game.try_move_cards(from, card_index, to))
    }

    pub fn move_to_foundation(&self, column: usize, card_index: usize) -> bool {
        self.command(|game| game.move_to_foundation(column, card_index))
    }

    pub fn undo(&self) -> bool {
        self.command(Game::undo)
    }

    pub fn hints(&self) -> Vec<Hint> {
        self.game.lock().hints()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.game.lock().state().clone()
    }

    /// Read the state in place without cloning it.
    pub fn with_state<R>(&self, read: impl FnOnce(&GameState) -> R) -> R {
        read(self.game.lock().state())
    }

    /// Run a command under the lock; a command that ends the game also
    /// ends the clock task.
    fn command<R>(&self, run: impl FnOnce(&mut Game) -> R) -> R {
        let (result, finished) = {
            let mut game = self.game.lock();
            let result = run(&mut game);
            (result, !game.state().in_progress())
        };
        if finished {
            self.cancel_timer();
        }
        result
    }

    fn cancel_timer(&self) {
        if let Some(token) = self.timer.lock().take() {
            token.cancel();
        }
    }

    /// Whether a clock task is live and the game clock is running.
    pub fn timer_running(&self) -> bool {
        let task_live = self
            .timer
            .lock()
            .as_ref()
            .is_some_and(|token| !token.is_cancelled());
        task_live && self.game.lock().state().clock_running
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(token) = self.timer.get_mut().take() {
            token.cancel();
        }
    }
}

async fn deal_staggered<F>(
    game: Arc<Mutex<Game>>,
    stagger: Duration,
    mut on_deal: F,
) -> Result<MoveOutcome, MoveError>
where
    F: FnMut(usize),
{
    let width = game.lock().deal_width()?;
    let mut dealt = Vec::with_capacity(width);

    for column in 0..width {
        if column > 0 {
            sleep(stagger).await;
        }
        let landed = game.lock().deal_one(column);
        let Some(id) = landed else {
            break;
        };
        dealt.push(id);
        on_deal(column);
    }

    Ok(game.lock().finish_deal(dealt))
}
