use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Spades = 2,
    Clubs = 3,
    Trumps = 4,
}

impl Suit {
    pub const ALL: [Suit; 5] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Spades,
        Suit::Clubs,
        Suit::Trumps,
    ];

    pub const COLOURS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Clubs),
            4 => Some(Suit::Trumps),
            _ => None,
        }
    }

    pub const fn is_trump(self) -> bool {
        matches!(self, Suit::Trumps)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Spades => "S",
            Suit::Clubs => "C",
            Suit::Trumps => "T",
        };
        f.write_str(symbol)
    }
}
