use crate::config::ScoringConfig;
use crate::domain::state::GameState;

/// Subtract `points`, never going below zero.
pub fn deduct_floored(state: &mut GameState, points: i32) {
    state.score = state.score.saturating_sub(points).max(0);
}

/// One clock second. Returns whether the clock advanced.
///
/// Does nothing while the clock is stopped or the game is over. Every
/// `decay_interval_secs`-th second costs `decay_points`, floored at zero.
pub fn apply_clock_tick(state: &mut GameState, scoring: &ScoringConfig) -> bool {
    if !state.clock_running || !state.in_progress() {
        return false;
    }
    state.time_elapsed = state.time_elapsed.saturating_add(1);
    if state.time_elapsed % scoring.decay_interval_secs == 0 {
        deduct_floored(state, scoring.decay_points);
    }
    true
}

/// `(par - time_elapsed) * multiplier`; negative once the clock passes
/// par. Saturates at the `i32` range for extreme scoring configs.
pub fn win_bonus(time_elapsed: u32, scoring: &ScoringConfig) -> i32 {
    let bonus = scoring
        .win_par_secs
        .saturating_sub(i64::from(time_elapsed))
        .saturating_mul(scoring.win_multiplier);
    bonus.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Add `points` to the score, saturating instead of wrapping.
pub fn award(state: &mut GameState, points: i32) {
    state.score = state.score.saturating_add(points);
}
