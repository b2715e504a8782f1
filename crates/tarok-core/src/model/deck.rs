use crate::model::card::{CardId, DECK_SIZE};
use crate::model::player::PlayerCount;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TALON_SIZE: usize = 6;

/// Result of one shuffle: the talon in shuffled order and one ascending hand per seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub talon: Vec<CardId>,
    pub hands: Vec<Vec<CardId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("expected {expected} hands but got {actual}")]
    HandCount { expected: usize, actual: usize },
    #[error("talon must hold 6 cards but holds {0}")]
    TalonSize(usize),
    #[error("seat {seat} holds {actual} cards, expected {expected}")]
    HandSize {
        seat: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{0} is dealt more than once")]
    Duplicate(CardId),
}

impl Deal {
    /// Splits a shuffled deck order: the first six cards form the talon, the
    /// rest go out in contiguous slices.
    pub fn from_order(players: PlayerCount, order: &[CardId]) -> Self {
        let (talon, rest) = order.split_at(TALON_SIZE.min(order.len()));
        let hands = rest
            .chunks(players.cards_per_player())
            .map(|slice| {
                let mut hand = slice.to_vec();
                hand.sort_unstable();
                hand
            })
            .collect();
        Self {
            talon: talon.to_vec(),
            hands,
        }
    }

    pub fn validate(&self, players: PlayerCount) -> Result<(), DealError> {
        if self.hands.len() != players.count() {
            return Err(DealError::HandCount {
                expected: players.count(),
                actual: self.hands.len(),
            });
        }
        if self.talon.len() != TALON_SIZE {
            return Err(DealError::TalonSize(self.talon.len()));
        }
        for (seat, hand) in self.hands.iter().enumerate() {
            if hand.len() != players.cards_per_player() {
                return Err(DealError::HandSize {
                    seat,
                    expected: players.cards_per_player(),
                    actual: hand.len(),
                });
            }
        }
        let mut seen = [false; DECK_SIZE];
        for card in self.talon.iter().chain(self.hands.iter().flatten()) {
            if std::mem::replace(&mut seen[card.index()], true) {
                return Err(DealError::Duplicate(*card));
            }
        }
        Ok(())
    }

    pub fn every_hand_has_trumps(&self) -> bool {
        self.hands
            .iter()
            .all(|hand| hand.iter().any(|card| card.card().is_trump()))
    }
}

/// Shuffles from a ChaCha8 stream so a seed yields the same deal on every platform.
#[derive(Debug, Clone)]
pub struct Dealer {
    players: PlayerCount,
    rng: ChaCha8Rng,
}

impl Dealer {
    pub fn new(players: PlayerCount, seed: u64) -> Self {
        Self {
            players,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffled_order(&mut self) -> Vec<CardId> {
        let mut order: Vec<CardId> = CardId::all().collect();
        for i in (1..order.len()).rev() {
            let j = uniform_below(&mut self.rng, i as u32 + 1) as usize;
            order.swap(i, j);
        }
        order
    }

    /// Deals again from the same stream until every seat holds a trump.
    pub fn deal(&mut self) -> Deal {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let order = self.shuffled_order();
            let deal = Deal::from_order(self.players, &order);
            if deal.every_hand_has_trumps() {
                if attempts > 1 {
                    tracing::debug!(
                        target: "tarok_core::round",
                        attempts,
                        "redealt until every hand held a trump"
                    );
                }
                return deal;
            }
        }
    }
}

fn uniform_below<R: RngCore>(rng: &mut R, bound: u32) -> u32 {
    let span = 1u64 << 32;
    let zone = span - span % u64::from(bound);
    loop {
        let draw = u64::from(rng.next_u32());
        if draw < zone {
            return (draw % u64::from(bound)) as u32;
        }
    }
}
