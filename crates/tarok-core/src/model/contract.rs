use crate::model::card::Action;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractName {
    Klop,
    Three,
    Two,
    One,
    SoloThree,
    SoloTwo,
    SoloOne,
    Beggar,
    SoloWithout,
    OpenBeggar,
    ColourValatWithout,
    ValatWithout,
    NotSelected,
}

impl ContractName {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContractName::Klop => "Klop",
            ContractName::Three => "Three",
            ContractName::Two => "Two",
            ContractName::One => "One",
            ContractName::SoloThree => "Solo three",
            ContractName::SoloTwo => "Solo two",
            ContractName::SoloOne => "Solo one",
            ContractName::Beggar => "Beggar",
            ContractName::SoloWithout => "Solo without",
            ContractName::OpenBeggar => "Open beggar",
            ContractName::ColourValatWithout => "Colour valat without",
            ContractName::ValatWithout => "Valat without",
            ContractName::NotSelected => "Not selected",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the three payout schemes settles a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringFamily {
    Klop,
    TalonExchange,
    Higher,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Contract {
    pub name: ContractName,
    pub score: i32,
    pub talon_cards: u8,
    pub needs_king_calling: bool,
    pub declarer_starts: bool,
    pub is_negative: bool,
}

impl Contract {
    const fn new(
        name: ContractName,
        score: i32,
        talon_cards: u8,
        needs_king_calling: bool,
        declarer_starts: bool,
        is_negative: bool,
    ) -> Self {
        Self {
            name,
            score,
            talon_cards,
            needs_king_calling,
            declarer_starts,
            is_negative,
        }
    }

    /// Resolves a bid action (`1..=12`) to its catalog entry.
    pub fn from_bid(action: Action) -> Option<&'static Contract> {
        let index = usize::from(action).checked_sub(1)?;
        CONTRACTS.get(index)
    }

    pub fn bid_action(&self) -> Action {
        CONTRACTS
            .iter()
            .position(|c| c.name == self.name)
            .map(|index| index as Action + 1)
            .unwrap_or(BID_PASS)
    }

    pub const fn needs_talon_exchange(&self) -> bool {
        self.talon_cards > 0
    }

    /// Trumps never beat a non-trump lead under this contract.
    pub const fn suppresses_trumps(&self) -> bool {
        matches!(self.name, ContractName::ColourValatWithout)
    }

    pub const fn is_beggar(&self) -> bool {
        matches!(self.name, ContractName::Beggar | ContractName::OpenBeggar)
    }

    pub const fn is_valat(&self) -> bool {
        matches!(
            self.name,
            ContractName::ColourValatWithout | ContractName::ValatWithout
        )
    }

    /// Captured mond is only penalised where a declarer plays for points.
    pub const fn penalises_captured_mond(&self) -> bool {
        self.needs_talon_exchange() || matches!(self.name, ContractName::SoloWithout)
    }

    pub const fn family(&self) -> ScoringFamily {
        if matches!(self.name, ContractName::Klop) {
            ScoringFamily::Klop
        } else if self.needs_talon_exchange() {
            ScoringFamily::TalonExchange
        } else {
            ScoringFamily::Higher
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

pub const BID_PASS: Action = 0;
pub const BID_KLOP: Action = 1;
pub const BID_THREE: Action = 2;
pub const BID_TWO: Action = 3;
pub const BID_ONE: Action = 4;
pub const BID_SOLO_THREE: Action = 5;
pub const BID_SOLO_TWO: Action = 6;
pub const BID_SOLO_ONE: Action = 7;
pub const BID_BEGGAR: Action = 8;
pub const BID_SOLO_WITHOUT: Action = 9;
pub const BID_OPEN_BEGGAR: Action = 10;
pub const BID_COLOUR_VALAT_WITHOUT: Action = 11;
pub const BID_VALAT_WITHOUT: Action = 12;

pub static CONTRACTS: [Contract; 12] = [
    Contract::new(ContractName::Klop, 70, 0, false, false, true),
    Contract::new(ContractName::Three, 10, 3, true, false, false),
    Contract::new(ContractName::Two, 20, 2, true, false, false),
    Contract::new(ContractName::One, 30, 1, true, false, false),
    Contract::new(ContractName::SoloThree, 40, 3, false, false, false),
    Contract::new(ContractName::SoloTwo, 50, 2, false, false, false),
    Contract::new(ContractName::SoloOne, 60, 1, false, false, false),
    Contract::new(ContractName::Beggar, 70, 0, false, true, true),
    Contract::new(ContractName::SoloWithout, 80, 0, false, false, false),
    Contract::new(ContractName::OpenBeggar, 90, 0, false, true, true),
    Contract::new(ContractName::ColourValatWithout, 125, 0, false, true, false),
    Contract::new(ContractName::ValatWithout, 500, 0, false, true, false),
];
