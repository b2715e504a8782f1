//! Which cards a seat may play into the current trick.

use crate::model::card::{Action, CardId};
use crate::model::contract::Contract;
use crate::model::hand::Hand;
use crate::model::suit::Suit;

pub fn legal_cards(hand: &Hand, trick: &[CardId], contract: &Contract) -> Vec<Action> {
    let Some(&lead) = trick.first() else {
        let cards: Vec<CardId> = hand.iter().collect();
        return to_actions(if contract.is_negative {
            without_pagat(cards)
        } else {
            cards
        });
    };

    let take_suit = if hand.has_suit(lead.suit()) {
        lead.suit()
    } else if hand.has_suit(Suit::Trumps) {
        Suit::Trumps
    } else {
        return to_actions(hand.iter().collect());
    };

    if contract.is_negative {
        to_actions(follow_negative(hand, trick, take_suit))
    } else {
        to_actions(hand.of_suit(take_suit).collect())
    }
}

fn follow_negative(hand: &Hand, trick: &[CardId], suit: Suit) -> Vec<CardId> {
    let has_pagat = hand.contains(CardId::PAGAT);
    if has_pagat && trick.contains(&CardId::MOND) && trick.contains(&CardId::SKIS) {
        return vec![CardId::PAGAT];
    }

    let candidates: Vec<CardId> = match card_to_beat(trick, suit) {
        Some(target) => {
            let higher: Vec<CardId> = hand
                .of_suit(suit)
                .filter(|card| card.rank() > target.rank())
                .collect();
            if higher.is_empty() {
                hand.of_suit(suit).collect()
            } else {
                higher
            }
        }
        None => hand.of_suit(suit).collect(),
    };

    if has_pagat {
        without_pagat(candidates)
    } else {
        candidates
    }
}

/// Highest card of `suit` already in the trick, or `None` when the seat is
/// free of the obligation to overtake.
fn card_to_beat(trick: &[CardId], suit: Suit) -> Option<CardId> {
    let trump_played = trick.iter().any(|card| card.suit().is_trump());
    if (!suit.is_trump() && trump_played) || (suit.is_trump() && !trump_played) {
        return None;
    }
    trick
        .iter()
        .copied()
        .filter(|card| card.suit() == suit)
        .max_by_key(|card| card.rank())
}

/// Pagat may only be played when nothing else is available.
fn without_pagat(cards: Vec<CardId>) -> Vec<CardId> {
    if cards.len() > 1 {
        cards.into_iter().filter(|&c| c != CardId::PAGAT).collect()
    } else {
        cards
    }
}

fn to_actions(cards: Vec<CardId>) -> Vec<Action> {
    cards.into_iter().map(CardId::action).collect()
}

#[cfg(test)]
mod tests {
    use super::legal_cards;
    use crate::model::card::{Action, CardId};
    use crate::model::contract::{CONTRACTS, Contract, ContractName};
    use crate::model::hand::Hand;

    fn contract(name: ContractName) -> &'static Contract {
        CONTRACTS.iter().find(|c| c.name == name).unwrap()
    }

    fn cards(names: &[&str]) -> Vec<CardId> {
        names.iter().map(|n| CardId::from_name(n).unwrap()).collect()
    }

    fn hand(names: &[&str]) -> Hand {
        Hand::with_cards(cards(names))
    }

    fn actions(names: &[&str]) -> Vec<Action> {
        let mut ids: Vec<Action> = cards(names).into_iter().map(CardId::action).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn opening_allows_whole_hand_in_positive_contracts() {
        let hand = hand(&["Pagat", "Mond", "King of Hearts"]);
        let legal = legal_cards(&hand, &[], contract(ContractName::Three));
        assert_eq!(legal, actions(&["Pagat", "Mond", "King of Hearts"]));
    }

    #[test]
    fn opening_hides_pagat_in_negative_contracts() {
        let hand = hand(&["Pagat", "Mond", "King of Hearts"]);
        let legal = legal_cards(&hand, &[], contract(ContractName::Klop));
        assert_eq!(legal, actions(&["Mond", "King of Hearts"]));

        let lonely = self::hand(&["Pagat"]);
        assert_eq!(
            legal_cards(&lonely, &[], contract(ContractName::Beggar)),
            actions(&["Pagat"])
        );
    }

    #[test]
    fn must_follow_suit_then_trump_then_anything() {
        let positive = contract(ContractName::SoloOne);
        let trick = cards(&["Jack of Spades"]);

        let follows = hand(&["7 of Spades", "King of Spades", "II", "4 of Hearts"]);
        assert_eq!(
            legal_cards(&follows, &trick, positive),
            actions(&["7 of Spades", "King of Spades"])
        );

        let trumps = hand(&["II", "Skis", "4 of Hearts"]);
        assert_eq!(
            legal_cards(&trumps, &trick, positive),
            actions(&["II", "Skis"])
        );

        let void = hand(&["4 of Hearts", "Queen of Clubs"]);
        assert_eq!(
            legal_cards(&void, &trick, positive),
            actions(&["4 of Hearts", "Queen of Clubs"])
        );
    }

    #[test]
    fn negative_contract_forces_overtaking() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["Jack of Hearts"]);
        let hand = hand(&["4 of Hearts", "Queen of Hearts", "King of Hearts", "II"]);
        assert_eq!(
            legal_cards(&hand, &trick, klop),
            actions(&["Queen of Hearts", "King of Hearts"])
        );
    }

    #[test]
    fn negative_contract_allows_any_of_suit_without_higher_card() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["Queen of Hearts"]);
        let hand = hand(&["4 of Hearts", "3 of Hearts", "II"]);
        assert_eq!(
            legal_cards(&hand, &trick, klop),
            actions(&["4 of Hearts", "3 of Hearts"])
        );
    }

    #[test]
    fn no_overtaking_once_a_trump_fell_on_a_colour_lead() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["Jack of Hearts", "XX"]);
        let hand = hand(&["4 of Hearts", "King of Hearts"]);
        assert_eq!(
            legal_cards(&hand, &trick, klop),
            actions(&["4 of Hearts", "King of Hearts"])
        );
    }

    #[test]
    fn forced_trump_need_not_overtake_when_none_played() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["Jack of Hearts"]);
        let hand = hand(&["II", "Skis", "King of Clubs"]);
        assert_eq!(legal_cards(&hand, &trick, klop), actions(&["II", "Skis"]));
    }

    #[test]
    fn forced_trump_must_overtake_played_trump() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["Jack of Hearts", "X", "V"]);
        let hand = hand(&["II", "XX", "King of Clubs"]);
        assert_eq!(legal_cards(&hand, &trick, klop), actions(&["XX"]));
    }

    #[test]
    fn emperor_lock_forces_pagat() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["Mond", "Skis"]);
        let hand = hand(&["Pagat", "II", "XX"]);
        assert_eq!(legal_cards(&hand, &trick, klop), actions(&["Pagat"]));
    }

    #[test]
    fn pagat_is_held_back_when_following() {
        let klop = contract(ContractName::Klop);
        let trick = cards(&["XX"]);
        let hand = hand(&["Pagat", "II", "King of Clubs"]);
        assert_eq!(legal_cards(&hand, &trick, klop), actions(&["II"]));

        let only_pagat = self::hand(&["Pagat", "King of Clubs"]);
        assert_eq!(legal_cards(&only_pagat, &trick, klop), actions(&["Pagat"]));
    }
}
