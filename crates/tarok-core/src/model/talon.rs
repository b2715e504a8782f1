use crate::model::card::{Action, CardId};
use crate::model::deck::TALON_SIZE;
use crate::model::hand::Hand;

/// Left-to-right groups of `cards_per_set` cards; set `i` is action `i`.
pub fn talon_sets(talon: &[CardId], cards_per_set: usize) -> Vec<Vec<CardId>> {
    if cards_per_set == 0 {
        return Vec::new();
    }
    talon
        .chunks_exact(cards_per_set)
        .map(<[CardId]>::to_vec)
        .collect()
}

pub fn set_actions(cards_per_set: usize) -> Vec<Action> {
    if cards_per_set == 0 {
        return Vec::new();
    }
    (0..(TALON_SIZE / cards_per_set) as Action).collect()
}

/// Removes set `index` from the talon and returns its cards.
pub fn take_set(talon: &mut Vec<CardId>, cards_per_set: usize, index: usize) -> Vec<CardId> {
    let start = index * cards_per_set;
    let end = (start + cards_per_set).min(talon.len());
    talon.drain(start.min(end)..end).collect()
}

/// Cards the declarer may lay away: anything but kings and trula.
pub fn discard_candidates(hand: &Hand) -> Vec<Action> {
    hand.iter()
        .filter(|card| card.points() != 5)
        .map(CardId::action)
        .collect()
}
