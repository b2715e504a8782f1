use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Action id shared by every phase of a round (deal, bid, king call, talon set, card).
pub type Action = u8;

pub const DECK_SIZE: usize = 54;

/// A catalog entry. The 54 entries live in [`DECK`] and are never copied per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub points: u8,
    pub short_name: &'static str,
    pub name: &'static str,
}

impl Card {
    const fn new(
        suit: Suit,
        rank: u8,
        points: u8,
        short_name: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            suit,
            rank,
            points,
            short_name,
            name,
        }
    }

    pub const fn is_trump(&self) -> bool {
        self.suit.is_trump()
    }

    /// Pagat, mond and skis.
    pub const fn is_trula(&self) -> bool {
        self.suit.is_trump() && self.points == 5
    }

    pub const fn is_king(&self) -> bool {
        !self.suit.is_trump() && self.points == 5
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub static DECK: [Card; DECK_SIZE] = [
    Card::new(Suit::Trumps, 8, 5, "T1", "Pagat"),
    Card::new(Suit::Trumps, 9, 1, "T2", "II"),
    Card::new(Suit::Trumps, 10, 1, "T3", "III"),
    Card::new(Suit::Trumps, 11, 1, "T4", "IIII"),
    Card::new(Suit::Trumps, 12, 1, "T5", "V"),
    Card::new(Suit::Trumps, 13, 1, "T6", "VI"),
    Card::new(Suit::Trumps, 14, 1, "T7", "VII"),
    Card::new(Suit::Trumps, 15, 1, "T8", "VIII"),
    Card::new(Suit::Trumps, 16, 1, "T9", "IX"),
    Card::new(Suit::Trumps, 17, 1, "T10", "X"),
    Card::new(Suit::Trumps, 18, 1, "T11", "XI"),
    Card::new(Suit::Trumps, 19, 1, "T12", "XII"),
    Card::new(Suit::Trumps, 20, 1, "T13", "XIII"),
    Card::new(Suit::Trumps, 21, 1, "T14", "XIV"),
    Card::new(Suit::Trumps, 22, 1, "T15", "XV"),
    Card::new(Suit::Trumps, 23, 1, "T16", "XVI"),
    Card::new(Suit::Trumps, 24, 1, "T17", "XVII"),
    Card::new(Suit::Trumps, 25, 1, "T18", "XVIII"),
    Card::new(Suit::Trumps, 26, 1, "T19", "XIX"),
    Card::new(Suit::Trumps, 27, 1, "T20", "XX"),
    Card::new(Suit::Trumps, 28, 5, "T21", "Mond"),
    Card::new(Suit::Trumps, 29, 5, "T22", "Skis"),
    Card::new(Suit::Hearts, 0, 1, "H4", "4 of Hearts"),
    Card::new(Suit::Hearts, 1, 1, "H3", "3 of Hearts"),
    Card::new(Suit::Hearts, 2, 1, "H2", "2 of Hearts"),
    Card::new(Suit::Hearts, 3, 1, "H1", "1 of Hearts"),
    Card::new(Suit::Hearts, 4, 2, "HJ", "Jack of Hearts"),
    Card::new(Suit::Hearts, 5, 3, "HKN", "Knight of Hearts"),
    Card::new(Suit::Hearts, 6, 4, "HQ", "Queen of Hearts"),
    Card::new(Suit::Hearts, 7, 5, "HKI", "King of Hearts"),
    Card::new(Suit::Diamonds, 0, 1, "D4", "4 of Diamonds"),
    Card::new(Suit::Diamonds, 1, 1, "D3", "3 of Diamonds"),
    Card::new(Suit::Diamonds, 2, 1, "D2", "2 of Diamonds"),
    Card::new(Suit::Diamonds, 3, 1, "D1", "1 of Diamonds"),
    Card::new(Suit::Diamonds, 4, 2, "DJ", "Jack of Diamonds"),
    Card::new(Suit::Diamonds, 5, 3, "DKN", "Knight of Diamonds"),
    Card::new(Suit::Diamonds, 6, 4, "DQ", "Queen of Diamonds"),
    Card::new(Suit::Diamonds, 7, 5, "DKI", "King of Diamonds"),
    Card::new(Suit::Spades, 0, 1, "S7", "7 of Spades"),
    Card::new(Suit::Spades, 1, 1, "S8", "8 of Spades"),
    Card::new(Suit::Spades, 2, 1, "S9", "9 of Spades"),
    Card::new(Suit::Spades, 3, 1, "S10", "10 of Spades"),
    Card::new(Suit::Spades, 4, 2, "SJ", "Jack of Spades"),
    Card::new(Suit::Spades, 5, 3, "SKN", "Knight of Spades"),
    Card::new(Suit::Spades, 6, 4, "SQ", "Queen of Spades"),
    Card::new(Suit::Spades, 7, 5, "SKI", "King of Spades"),
    Card::new(Suit::Clubs, 0, 1, "C7", "7 of Clubs"),
    Card::new(Suit::Clubs, 1, 1, "C8", "8 of Clubs"),
    Card::new(Suit::Clubs, 2, 1, "C9", "9 of Clubs"),
    Card::new(Suit::Clubs, 3, 1, "C10", "10 of Clubs"),
    Card::new(Suit::Clubs, 4, 2, "CJ", "Jack of Clubs"),
    Card::new(Suit::Clubs, 5, 3, "CKN", "Knight of Clubs"),
    Card::new(Suit::Clubs, 6, 4, "CQ", "Queen of Clubs"),
    Card::new(Suit::Clubs, 7, 5, "CKI", "King of Clubs"),
];

/// Index into [`DECK`]; doubles as the card's action id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u8);

impl CardId {
    pub const PAGAT: CardId = CardId(0);
    pub const MOND: CardId = CardId(20);
    pub const SKIS: CardId = CardId(21);
    pub const KING_OF_HEARTS: CardId = CardId(29);
    pub const KING_OF_DIAMONDS: CardId = CardId(37);
    pub const KING_OF_SPADES: CardId = CardId(45);
    pub const KING_OF_CLUBS: CardId = CardId(53);

    pub const KINGS: [CardId; 4] = [
        CardId::KING_OF_HEARTS,
        CardId::KING_OF_DIAMONDS,
        CardId::KING_OF_SPADES,
        CardId::KING_OF_CLUBS,
    ];

    pub const TRULA: [CardId; 3] = [CardId::PAGAT, CardId::MOND, CardId::SKIS];

    pub const fn from_action(action: Action) -> Option<Self> {
        if (action as usize) < DECK_SIZE {
            Some(CardId(action))
        } else {
            None
        }
    }

    pub fn all() -> impl DoubleEndedIterator<Item = CardId> + ExactSizeIterator {
        (0..DECK_SIZE as u8).map(CardId)
    }

    pub const fn action(self) -> Action {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn card(self) -> &'static Card {
        &DECK[self.index()]
    }

    pub fn suit(self) -> Suit {
        self.card().suit
    }

    pub fn rank(self) -> u8 {
        self.card().rank
    }

    pub fn points(self) -> u8 {
        self.card().points
    }

    /// Looks a card up by its long name, e.g. `"King of Spades"`.
    pub fn from_name(name: &str) -> Option<Self> {
        DECK.iter()
            .position(|card| card.name == name)
            .map(|index| CardId(index as u8))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.card(), f)
    }
}
