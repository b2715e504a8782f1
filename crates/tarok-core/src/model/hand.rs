use crate::model::card::CardId;
use crate::model::suit::Suit;
use std::vec::Vec;

/// Cards held by one seat, kept in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<CardId>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<CardId>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: CardId) {
        self.cards.push(card);
        self.sort();
    }

    pub fn extend<I: IntoIterator<Item = CardId>>(&mut self, cards: I) {
        self.cards.extend(cards);
        self.sort();
    }

    pub fn remove(&mut self, card: CardId) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn of_suit(&self, suit: Suit) -> impl Iterator<Item = CardId> + '_ {
        self.iter().filter(move |card| card.suit() == suit)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.of_suit(suit).next().is_some()
    }

    fn sort(&mut self) {
        self.cards.sort_unstable();
    }
}
