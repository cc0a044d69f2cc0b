use crate::domain::test_state_helpers::{board, game_with, ids, nearly_won, CardFactory};
use crate::domain::{Difficulty, PileKind, Rank, Suit};

#[test]
fn move_that_completes_a_run_sweeps_it() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::OneSuit);
    state.tableau[0] = f.run(Suit::Spades, Rank::King, Rank::Two);
    state.tableau[1] = vec![f.up(Suit::Spades, Rank::Ace)];
    let mut game = game_with(state);

    let outcome = game.try_move_cards(1, 0, 0).expect("ace onto two");
    assert_eq!(outcome.runs_completed, 1);
    assert!(!outcome.won);

    let state = game.state();
    assert!(state.tableau[0].is_empty());
    assert!(state.tableau[1].is_empty());
    assert_eq!(state.foundation[0].len(), 13);
    assert_eq!(state.completed_foundations(), 1);
    assert_eq!(state.moves, 2);
    assert_eq!(state.score, 500 + 5 + 100);

    let kinds: Vec<_> = state.history.entries().map(|r| r.to).collect();
    assert_eq!(kinds, vec![PileKind::Tableau, PileKind::Foundation]);
}

#[test]
fn every_complete_run_is_swept_in_one_pass() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::FourSuit);
    state.tableau[2] = vec![f.down(Suit::Hearts, Rank::Nine)];
    state.tableau[2].extend(f.full_run(Suit::Clubs));
    state.tableau[5] = f.full_run(Suit::Hearts);
    let clubs = ids(&state.tableau[2][1..]);
    let hearts = ids(&state.tableau[5]);
    let mut game = game_with(state);

    assert_eq!(game.check_auto_complete(), 2);

    let state = game.state();
    assert_eq!(ids(&state.foundation[0]), clubs);
    assert_eq!(ids(&state.foundation[1]), hearts);
    assert_eq!(state.tableau[2].len(), 1);
    assert!(state.tableau[2][0].face_up);
    assert!(state.tableau[5].is_empty());
    assert_eq!(state.moves, 2);
    assert_eq!(state.score, 700);

    assert_eq!(game.check_auto_complete(), 0);
}

#[test]
fn run_sitting_on_other_cards_is_found() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::FourSuit);
    state.tableau[0] = vec![f.up(Suit::Hearts, Rank::Queen)];
    state.tableau[0].extend(f.full_run(Suit::Spades));
    let mut game = game_with(state);

    assert_eq!(game.check_auto_complete(), 1);
    let column = &game.state().tableau[0];
    assert_eq!(column.len(), 1);
    assert_eq!(column[0].rank, Rank::Queen);
}

#[test]
fn run_broken_by_face_down_card_is_left_alone() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::FourSuit);
    let mut run = f.full_run(Suit::Spades);
    run[6].face_up = false;
    state.tableau[0] = run;
    let mut game = game_with(state);

    assert_eq!(game.check_auto_complete(), 0);
    assert_eq!(game.state().tableau[0].len(), 13);
    assert_eq!(game.state().completed_foundations(), 0);
}

#[test]
fn sweeping_the_last_run_wins() {
    let (mut state, mut f) = nearly_won(1);
    state.tableau[0] = f.run(Suit::Spades, Rank::King, Rank::Two);
    state.tableau[1] = vec![f.up(Suit::Spades, Rank::Ace)];
    let mut game = game_with(state);

    let outcome = game.try_move_cards(1, 0, 0).expect("final move");
    assert_eq!(outcome.runs_completed, 1);
    assert!(outcome.won);

    let state = game.state();
    assert!(state.is_won);
    assert!(state.is_game_over);
    assert!(!state.clock_running);
    assert_eq!(state.score, 500 + 5 + 100 + 5000);
}
