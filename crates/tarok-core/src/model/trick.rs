use crate::model::card::CardId;
use crate::model::player::{PlayerCount, Seat};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Seat,
    players: PlayerCount,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub seat: Seat,
    pub card: CardId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    TrickComplete,
    OutOfTurn { expected: Seat, actual: Seat },
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::TrickComplete => write!(f, "trick already complete"),
            TrickError::OutOfTurn { expected, actual } => {
                write!(f, "expected seat {expected} to play next but got seat {actual}")
            }
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new(leader: Seat, players: PlayerCount) -> Self {
        Self {
            leader,
            players,
            plays: Vec::with_capacity(players.count()),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.plays.iter().map(|play| play.card)
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards().any(|c| c == card)
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.players.count()
    }

    pub fn next_seat(&self) -> Seat {
        self.plays
            .last()
            .map(|play| self.players.next(play.seat))
            .unwrap_or(self.leader)
    }

    pub fn play(&mut self, seat: Seat, card: CardId) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }
        let expected = self.next_seat();
        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// Index into [`Trick::plays`] of the card taking the trick.
    ///
    /// With `suppress_trumps` set, trumps only beat cards of their own suit.
    /// Pagat, mond and skis together hand the trick to pagat, unless trumps
    /// are suppressed and a colour was led.
    pub fn winning_index(&self, suppress_trumps: bool) -> Option<usize> {
        let lead = self.plays.first()?;
        if CardId::TRULA.iter().all(|&card| self.contains(card))
            && (!suppress_trumps || lead.card.suit().is_trump())
        {
            return self.plays.iter().position(|p| p.card == CardId::PAGAT);
        }

        let mut winner = 0;
        for (index, play) in self.plays.iter().enumerate().skip(1) {
            let best = self.plays[winner].card;
            let contends = (play.card.suit().is_trump() && !suppress_trumps)
                || play.card.suit() == best.suit();
            if contends && play.card.rank() > best.rank() {
                winner = index;
            }
        }
        Some(winner)
    }

    pub fn winner(&self, suppress_trumps: bool) -> Option<Play> {
        if !self.is_complete() {
            return None;
        }
        self.winning_index(suppress_trumps)
            .map(|index| self.plays[index])
    }
}
