use serde::{Deserialize, Serialize};

use crate::domain::Suit;

pub const TABLEAU_COLUMNS: usize = 10;
pub const FOUNDATION_SLOTS: usize = 8;
pub const RUN_LENGTH: usize = 13;
pub const DECKS: usize = 2;

/// Suit-count variant. Controls both the deck composition and the
/// tableau placement rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    OneSuit,
    TwoSuit,
    #[default]
    FourSuit,
}

impl Difficulty {
    /// Suits kept from the two merged decks.
    pub fn suits(self) -> &'static [Suit] {
        match self {
            Difficulty::OneSuit => &[Suit::Spades],
            Difficulty::TwoSuit => &[Suit::Hearts, Suit::Spades],
            Difficulty::FourSuit => &Suit::ALL,
        }
    }

    /// Cards dealt to each column at the start of a game. The first four
    /// columns get one more than the remaining six.
    pub fn opening_layout(self) -> [usize; TABLEAU_COLUMNS] {
        match self {
            Difficulty::OneSuit => [3, 3, 3, 3, 2, 2, 2, 2, 2, 2],
            Difficulty::TwoSuit => [5, 5, 5, 5, 4, 4, 4, 4, 4, 4],
            Difficulty::FourSuit => [6, 6, 6, 6, 5, 5, 5, 5, 5, 5],
        }
    }

    /// Size of the dealt pool: 26, 52 or 104.
    pub fn total_cards(self) -> usize {
        self.suits().len() * RUN_LENGTH * DECKS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::OneSuit => "one-suit",
            Difficulty::TwoSuit => "two-suit",
            Difficulty::FourSuit => "four-suit",
        }
    }

    pub fn parse(s: &str) -> Option<Difficulty> {
        match s {
            "one-suit" => Some(Difficulty::OneSuit),
            "two-suit" => Some(Difficulty::TwoSuit),
            "four-suit" => Some(Difficulty::FourSuit),
            _ => None,
        }
    }
}
