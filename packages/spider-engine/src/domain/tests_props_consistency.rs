// Property tests: board-wide invariants under arbitrary command sequences.

use proptest::prelude::*;

use crate::config::EngineConfig;
use crate::domain::test_gens::{self, Command};
use crate::domain::test_state_helpers::{fingerprint, ids};
use crate::domain::{
    can_place_on_foundation, extract_movable_sequence, test_prelude, CardId, Game, MoveOutcome,
};
use crate::errors::MoveError;

/// `None` when the command had nothing to act on.
fn apply(game: &mut Game, command: Command) -> Option<Result<MoveOutcome, MoveError>> {
    let result = match command {
        Command::Deal => game.try_deal_cards_sync(),
        Command::Move {
            from,
            card_index,
            to,
        } => game.try_move_cards(from, card_index, to),
        Command::Foundation { column, card_index } => {
            game.try_move_to_foundation(column, card_index)
        }
        Command::Undo => game.try_undo(),
        Command::FollowHint(n) => {
            let hints = game.hints();
            if hints.is_empty() {
                return None;
            }
            let hint = hints[n % hints.len()];
            let outcome = game.try_move_cards(hint.from, hint.card_index, hint.to);
            assert!(outcome.is_ok(), "hint {hint:?} was refused: {outcome:?}");
            outcome
        }
    };
    Some(result)
}

fn assert_board_consistent(game: &Game) {
    let state = game.state();
    let total = state.difficulty.total_cards();

    assert_eq!(state.card_count(), total);
    let unique = state.all_card_ids().expect("no card appears twice");
    assert_eq!(unique.len(), total);

    for pile in &state.foundation {
        assert!(pile.is_empty() || can_place_on_foundation(pile));
    }
    for column in &state.tableau {
        // Top card is face-up and nothing face-down sits above a face-up card.
        assert!(column.last().map_or(true, |c| c.face_up));
        let first_up = column.iter().position(|c| c.face_up).unwrap_or(column.len());
        assert!(column[first_up..].iter().all(|c| c.face_up));
    }
    assert!(state.stock.iter().all(|c| !c.face_up));

    assert!(state.history.len() <= state.history.capacity());
    assert!(state.history_index().map_or(true, |i| i < state.history.len()));
    assert!(state.is_won || state.score >= 0);
    assert_eq!(state.is_won, state.completed_foundations() == 8);
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_cards_are_conserved_across_commands(
        seed in any::<u64>(),
        difficulty in test_gens::difficulty(),
        commands in test_gens::commands(80),
    ) {
        let config = EngineConfig::default().with_seed(seed).with_difficulty(difficulty);
        let mut game = Game::start(config);
        assert_board_consistent(&game);

        for command in commands {
            let before = fingerprint(game.state());
            if let Some(Err(_)) = apply(&mut game, command) {
                prop_assert_eq!(fingerprint(game.state()), before, "{:?}", command);
            }
            assert_board_consistent(&game);
        }
    }

    #[test]
    fn prop_move_then_undo_restores_the_layout(
        seed in any::<u64>(),
        difficulty in test_gens::difficulty(),
        deals in 0usize..3,
    ) {
        let config = EngineConfig::default().with_seed(seed).with_difficulty(difficulty);
        let mut game = Game::start(config);
        for _ in 0..deals {
            game.deal_cards_sync();
        }
        let layout: Vec<Vec<CardId>> = game.state().tableau.iter().map(|p| ids(p)).collect();
        let (moves, score) = (game.state().moves, game.state().score);

        for hint in game.hints() {
            // A run buried under a break comes back on top of the column, so
            // only runs that reach the top restore the exact order.
            let pile = &game.state().tableau[hint.from];
            let run = extract_movable_sequence(pile, hint.card_index);
            if hint.card_index + run.len() != pile.len() {
                continue;
            }
            let mut attempt = game.clone();
            let outcome = attempt
                .try_move_cards(hint.from, hint.card_index, hint.to)
                .expect("hinted move is legal");
            if outcome.runs_completed > 0 {
                continue;
            }
            prop_assert!(attempt.undo());

            let restored: Vec<Vec<CardId>> =
                attempt.state().tableau.iter().map(|p| ids(p)).collect();
            prop_assert_eq!(&restored, &layout);
            prop_assert_eq!(attempt.state().moves, moves);
            prop_assert_eq!(attempt.state().score, score);
        }
    }
}
