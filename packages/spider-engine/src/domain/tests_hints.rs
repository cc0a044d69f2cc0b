use crate::config::EngineConfig;
use crate::domain::test_state_helpers::{board, fingerprint, game_with, CardFactory};
use crate::domain::{Difficulty, Game, Hint, Rank, Suit};

#[test]
fn empty_board_has_no_hints() {
    let game = game_with(board(Difficulty::FourSuit));
    assert!(game.hints().is_empty());
}

#[test]
fn hints_list_every_legal_tableau_move_in_order() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::FourSuit);
    state.tableau[0] = vec![
        f.down(Suit::Clubs, Rank::Four),
        f.up(Suit::Hearts, Rank::Queen),
    ];
    state.tableau[1] = vec![f.up(Suit::Spades, Rank::King)];
    for column in state.tableau[2..].iter_mut() {
        column.push(f.up(Suit::Diamonds, Rank::Two));
    }
    state.tableau[9].clear();
    let game = game_with(state);

    assert_eq!(
        game.hints(),
        vec![
            Hint {
                from: 0,
                card_index: 1,
                to: 1
            },
            Hint {
                from: 1,
                card_index: 0,
                to: 9
            },
        ]
    );
}

#[test]
fn hints_cover_partial_runs() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::FourSuit);
    state.tableau[0] = f.run(Suit::Clubs, Rank::Eight, Rank::Six);
    state.tableau[1] = vec![f.up(Suit::Hearts, Rank::Seven)];
    let game = game_with(state);

    assert_eq!(
        game.hints(),
        vec![Hint {
            from: 0,
            card_index: 2,
            to: 1
        }]
    );
}

#[test]
fn two_suit_hints_respect_colour() {
    let mut f = CardFactory::new();
    let mut state = board(Difficulty::TwoSuit);
    state.tableau[0] = vec![f.up(Suit::Hearts, Rank::Six)];
    state.tableau[1] = vec![f.up(Suit::Hearts, Rank::Seven)];
    state.tableau[2] = vec![f.up(Suit::Spades, Rank::Seven)];
    let game = game_with(state);

    let targets: Vec<usize> = game.hints().iter().map(|h| h.to).collect();
    assert_eq!(targets, vec![2]);
}

#[test]
fn every_hint_is_accepted_and_hints_do_not_mutate() {
    let game = Game::start(EngineConfig::default().with_seed(2024));
    let before = fingerprint(game.state());
    let hints = game.hints();
    assert_eq!(fingerprint(game.state()), before);

    for hint in hints {
        let mut attempt = game.clone();
        assert!(
            attempt.move_cards(hint.from, hint.card_index, hint.to),
            "{hint:?}"
        );
    }
}
