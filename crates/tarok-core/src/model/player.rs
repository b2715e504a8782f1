use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seat index. Seat 0 is forehand, the last seat deals.
pub type Seat = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerCount {
    Three,
    Four,
}

impl PlayerCount {
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(PlayerCount::Three),
            4 => Some(PlayerCount::Four),
            _ => None,
        }
    }

    pub const fn count(self) -> usize {
        match self {
            PlayerCount::Three => 3,
            PlayerCount::Four => 4,
        }
    }

    pub const fn cards_per_player(self) -> usize {
        48 / self.count()
    }

    pub const fn next(self, seat: Seat) -> Seat {
        (seat + 1) % self.count()
    }

    pub const fn forehand(self) -> Seat {
        0
    }

    /// Upper bound on player decisions in one round, excluding the deal.
    pub const fn max_game_length(self) -> usize {
        match self {
            PlayerCount::Three => 65,
            PlayerCount::Four => 72,
        }
    }

    pub fn seats(self) -> impl Iterator<Item = Seat> {
        0..self.count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerCountError {
    #[error("tarok is played by 3 or 4 players, not {0}")]
    Unsupported(u8),
}

impl TryFrom<u8> for PlayerCount {
    type Error = PlayerCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PlayerCount::from_count(usize::from(value)).ok_or(PlayerCountError::Unsupported(value))
    }
}

impl From<PlayerCount> for u8 {
    fn from(value: PlayerCount) -> Self {
        value.count() as u8
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Who acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Chance,
    Player(Seat),
    Terminal,
}

impl Turn {
    pub const fn seat(self) -> Option<Seat> {
        match self {
            Turn::Player(seat) => Some(seat),
            Turn::Chance | Turn::Terminal => None,
        }
    }
}
