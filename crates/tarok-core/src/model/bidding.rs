use crate::model::card::Action;
use crate::model::contract::{
    BID_KLOP, BID_PASS, BID_SOLO_ONE, BID_SOLO_THREE, BID_THREE, BID_TWO, BID_VALAT_WITHOUT,
    Contract,
};
use crate::model::player::{PlayerCount, Seat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bid {
    Undecided,
    Pass,
    Contract(Action),
}

impl Bid {
    pub fn from_action(action: Action) -> Self {
        if action == BID_PASS {
            Bid::Pass
        } else {
            Bid::Contract(action)
        }
    }

    /// Undecided sorts below pass, pass below every contract.
    pub fn strength(self) -> i16 {
        match self {
            Bid::Undecided => -1,
            Bid::Pass => 0,
            Bid::Contract(action) => i16::from(action),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiddingOutcome {
    NextBidder(Seat),
    Won {
        declarer: Seat,
        contract: &'static Contract,
    },
}

/// Auction state. Seat 1 opens, forehand (seat 0) holds priority on ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bidding {
    players: PlayerCount,
    bids: Vec<Bid>,
}

impl Bidding {
    pub fn new(players: PlayerCount) -> Self {
        Self {
            players,
            bids: vec![Bid::Undecided; players.count()],
        }
    }

    pub const fn opening_seat() -> Seat {
        1
    }

    pub fn bid_of(&self, seat: Seat) -> Bid {
        self.bids[seat]
    }

    fn others_passed(&self, seat: Seat) -> bool {
        self.bids
            .iter()
            .enumerate()
            .all(|(other, bid)| other == seat || *bid == Bid::Pass)
    }

    /// Highest bid so far and the first seat holding it.
    fn highest(&self) -> (i16, Seat) {
        let mut best = (Bid::Undecided.strength(), 0);
        for (seat, bid) in self.bids.iter().enumerate() {
            if bid.strength() > best.0 {
                best = (bid.strength(), seat);
            }
        }
        best
    }

    pub fn legal_actions(&self, seat: Seat) -> Vec<Action> {
        let mut actions = Vec::with_capacity(13);
        let others_passed = self.others_passed(seat);

        if seat == self.players.forehand() && self.bids[seat] == Bid::Undecided && others_passed {
            actions.push(BID_KLOP);
            actions.push(BID_THREE);
        } else if !others_passed {
            actions.push(BID_PASS);
        }

        let (max_bid, max_seat) = self.highest();
        for bid in BID_TWO..=BID_VALAT_WITHOUT {
            if self.players == PlayerCount::Three && (BID_SOLO_THREE..=BID_SOLO_ONE).contains(&bid)
            {
                continue;
            }
            let strength = i16::from(bid);
            if strength > max_bid || (strength == max_bid && seat <= max_seat) {
                actions.push(bid);
            }
        }
        actions
    }

    /// Records `action` for `seat`; the caller has already checked legality.
    pub fn apply(&mut self, seat: Seat, action: Action) -> BiddingOutcome {
        self.bids[seat] = Bid::from_action(action);

        if self.others_passed(seat) {
            if let Some(contract) = Contract::from_bid(action) {
                return BiddingOutcome::Won {
                    declarer: seat,
                    contract,
                };
            }
        }

        let mut next = self.players.next(seat);
        for _ in 0..self.players.count() {
            if self.bids[next] != Bid::Pass {
                break;
            }
            next = self.players.next(next);
        }
        BiddingOutcome::NextBidder(next)
    }
}

#[cfg(test)]
mod tests {
    use super::{Bid, Bidding, BiddingOutcome};
    use crate::model::contract::ContractName;
    use crate::model::player::PlayerCount;

    fn won(outcome: BiddingOutcome) -> Option<(usize, ContractName)> {
        match outcome {
            BiddingOutcome::Won { declarer, contract } => Some((declarer, contract.name)),
            BiddingOutcome::NextBidder(_) => None,
        }
    }

    #[test]
    fn three_players_all_pass_forces_forehand() {
        let mut bidding = Bidding::new(PlayerCount::Three);
        assert_eq!(bidding.legal_actions(1), vec![0, 3, 4, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(1, 0), BiddingOutcome::NextBidder(2));
        assert_eq!(bidding.apply(2, 0), BiddingOutcome::NextBidder(0));
        assert_eq!(bidding.legal_actions(0), vec![1, 2, 3, 4, 8, 9, 10, 11, 12]);
        assert_eq!(won(bidding.apply(0, 1)), Some((0, ContractName::Klop)));
    }

    #[test]
    fn four_players_open_with_every_contract() {
        let bidding = Bidding::new(PlayerCount::Four);
        assert_eq!(bidding.legal_actions(1), vec![0, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn forehand_matches_while_others_must_raise() {
        let mut bidding = Bidding::new(PlayerCount::Three);
        assert_eq!(bidding.apply(1, 3), BiddingOutcome::NextBidder(2));
        assert_eq!(bidding.legal_actions(2), vec![0, 4, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(2, 8), BiddingOutcome::NextBidder(0));
        assert_eq!(bidding.legal_actions(0), vec![0, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(0, 0), BiddingOutcome::NextBidder(1));
        assert_eq!(bidding.legal_actions(1), vec![0, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(1, 0), BiddingOutcome::NextBidder(2));
        assert_eq!(bidding.legal_actions(2), vec![8, 9, 10, 11, 12]);
        assert_eq!(won(bidding.apply(2, 8)), Some((2, ContractName::Beggar)));
    }

    #[test]
    fn forehand_valat_leaves_only_passing() {
        let mut bidding = Bidding::new(PlayerCount::Three);
        bidding.apply(1, 3);
        bidding.apply(2, 0);
        assert_eq!(bidding.apply(0, 12), BiddingOutcome::NextBidder(1));
        assert_eq!(bidding.legal_actions(1), vec![0]);
        assert_eq!(bidding.apply(1, 0), BiddingOutcome::NextBidder(0));
        assert_eq!(bidding.legal_actions(0), vec![12]);
        assert_eq!(won(bidding.apply(0, 12)), Some((0, ContractName::ValatWithout)));
        assert_eq!(bidding.bid_of(0), Bid::Contract(12));
    }

    #[test]
    fn highest_bidder_reaffirms_after_everyone_passes() {
        let mut bidding = Bidding::new(PlayerCount::Four);
        assert_eq!(bidding.apply(1, 0), BiddingOutcome::NextBidder(2));
        assert_eq!(bidding.apply(2, 4), BiddingOutcome::NextBidder(3));
        assert_eq!(bidding.legal_actions(3), vec![0, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(3, 0), BiddingOutcome::NextBidder(0));
        assert_eq!(bidding.legal_actions(0), vec![0, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(0, 4), BiddingOutcome::NextBidder(2));
        assert_eq!(bidding.legal_actions(2), vec![0, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(bidding.apply(2, 0), BiddingOutcome::NextBidder(0));
        assert_eq!(bidding.legal_actions(0), vec![4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(won(bidding.apply(0, 4)), Some((0, ContractName::One)));
    }

    #[test]
    fn strength_orders_undecided_pass_and_contracts() {
        assert!(Bid::Undecided.strength() < Bid::Pass.strength());
        assert!(Bid::Pass.strength() < Bid::Contract(1).strength());
        assert_eq!(Bid::from_action(0), Bid::Pass);
    }
}
