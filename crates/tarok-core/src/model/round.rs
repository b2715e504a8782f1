use crate::model::bidding::{Bidding, BiddingOutcome};
use crate::model::card::{Action, CardId, DECK_SIZE};
use crate::model::contract::{Contract, ContractName};
use crate::model::deck::{Deal, DealError, Dealer, TALON_SIZE};
use crate::model::hand::Hand;
use crate::model::legal::legal_cards;
use crate::model::player::{PlayerCount, Seat, Turn};
use crate::model::score::{self, RoundOutcome};
use crate::model::talon;
use crate::model::trick::Trick;
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TARGET: &str = "tarok_core::round";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    Dealing,
    Bidding,
    KingCalling,
    TalonExchange,
    TrickPlay,
    Finished,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoundPhase::Dealing => "dealing",
            RoundPhase::Bidding => "bidding",
            RoundPhase::KingCalling => "king calling",
            RoundPhase::TalonExchange => "talon exchange",
            RoundPhase::TrickPlay => "trick play",
            RoundPhase::Finished => "finished",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action {action} is not legal during {phase}")]
    Illegal { action: Action, phase: RoundPhase },
    #[error("round is already finished")]
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DealSource {
    Seeded(u64),
    Fixed(Deal),
}

/// One round of tarok, from the deal to the final scores.
#[derive(Debug, Clone)]
pub struct RoundState {
    players: PlayerCount,
    source: DealSource,
    phase: RoundPhase,
    current: Seat,
    dealt: Vec<Vec<CardId>>,
    hands: Vec<Hand>,
    talon: Vec<CardId>,
    dealt_talon: Vec<CardId>,
    bidding: Bidding,
    bid_log: Vec<Action>,
    contract: Option<&'static Contract>,
    declarer: Option<Seat>,
    partner: Option<Seat>,
    called_king: Option<CardId>,
    called_king_in_talon: bool,
    talon_choice: Option<Action>,
    discards: Vec<CardId>,
    collected: Vec<Vec<CardId>>,
    current_trick: Trick,
    trick_history: Vec<Trick>,
    trick_log: Vec<Vec<CardId>>,
    mond_penalized: Option<Seat>,
    history: Vec<Action>,
}

impl RoundState {
    pub fn new(players: PlayerCount, seed: u64) -> Self {
        Self::with_source(players, DealSource::Seeded(seed))
    }

    /// Starts a round whose chance action hands out `deal` instead of shuffling.
    pub fn from_deal(players: PlayerCount, deal: Deal) -> Result<Self, DealError> {
        deal.validate(players)?;
        Ok(Self::with_source(players, DealSource::Fixed(deal)))
    }

    fn with_source(players: PlayerCount, source: DealSource) -> Self {
        Self {
            players,
            source,
            phase: RoundPhase::Dealing,
            current: players.forehand(),
            dealt: vec![Vec::new(); players.count()],
            hands: vec![Hand::new(); players.count()],
            talon: Vec::new(),
            dealt_talon: Vec::new(),
            bidding: Bidding::new(players),
            bid_log: Vec::new(),
            contract: None,
            declarer: None,
            partner: None,
            called_king: None,
            called_king_in_talon: false,
            talon_choice: None,
            discards: Vec::new(),
            collected: vec![Vec::new(); players.count()],
            current_trick: Trick::new(players.forehand(), players),
            trick_history: Vec::new(),
            trick_log: Vec::new(),
            mond_penalized: None,
            history: Vec::new(),
        }
    }

    pub fn players(&self) -> PlayerCount {
        self.players
    }

    pub fn seed(&self) -> Option<u64> {
        match self.source {
            DealSource::Seeded(seed) => Some(seed),
            DealSource::Fixed(_) => None,
        }
    }

    pub fn fixed_deal(&self) -> Option<&Deal> {
        match &self.source {
            DealSource::Seeded(_) => None,
            DealSource::Fixed(deal) => Some(deal),
        }
    }

    pub fn current_phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn current_player(&self) -> Turn {
        match self.phase {
            RoundPhase::Dealing => Turn::Chance,
            RoundPhase::Finished => Turn::Terminal,
            RoundPhase::Bidding
            | RoundPhase::KingCalling
            | RoundPhase::TalonExchange
            | RoundPhase::TrickPlay => Turn::Player(self.current),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    pub fn max_game_length(&self) -> usize {
        self.players.max_game_length()
    }

    pub fn chance_outcomes(&self) -> Vec<(Action, f64)> {
        if self.phase == RoundPhase::Dealing {
            vec![(0, 1.0)]
        } else {
            Vec::new()
        }
    }

    pub fn player_cards(&self, seat: Seat) -> &[CardId] {
        self.hands[seat].cards()
    }

    pub fn collected_cards(&self, seat: Seat) -> &[CardId] {
        &self.collected[seat]
    }

    pub fn talon(&self) -> &[CardId] {
        &self.talon
    }

    pub fn talon_sets(&self) -> Vec<Vec<CardId>> {
        match (self.phase, self.contract) {
            (RoundPhase::TalonExchange, Some(contract)) => {
                talon::talon_sets(&self.talon, usize::from(contract.talon_cards))
            }
            _ => Vec::new(),
        }
    }

    pub fn trick_cards(&self) -> Vec<CardId> {
        self.current_trick.cards().collect()
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[Trick] {
        &self.trick_history
    }

    pub fn selected_contract(&self) -> ContractName {
        self.contract
            .map(|contract| contract.name)
            .unwrap_or(ContractName::NotSelected)
    }

    pub fn contract(&self) -> Option<&'static Contract> {
        self.contract
    }

    pub fn declarer(&self) -> Option<Seat> {
        self.declarer
    }

    pub fn declarer_partner(&self) -> Option<Seat> {
        self.partner
    }

    pub fn called_king(&self) -> Option<CardId> {
        self.called_king
    }

    pub fn called_king_was_in_talon(&self) -> bool {
        self.called_king_in_talon
    }

    pub fn mond_penalized_player(&self) -> Option<Seat> {
        self.mond_penalized
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            RoundPhase::Dealing => vec![0],
            RoundPhase::Bidding => self.bidding.legal_actions(self.current),
            RoundPhase::KingCalling => CardId::KINGS.iter().map(|k| k.action()).collect(),
            RoundPhase::TalonExchange => {
                let Some(contract) = self.contract else {
                    return Vec::new();
                };
                if self.talon.len() == TALON_SIZE {
                    talon::set_actions(usize::from(contract.talon_cards))
                } else {
                    talon::discard_candidates(&self.hands[self.current])
                }
            }
            RoundPhase::TrickPlay => match self.contract {
                Some(contract) => {
                    let trick: Vec<CardId> = self.current_trick.cards().collect();
                    legal_cards(&self.hands[self.current], &trick, contract)
                }
                None => Vec::new(),
            },
            RoundPhase::Finished => Vec::new(),
        }
    }

    /// Applies a legal action. Illegal actions leave the round untouched.
    pub fn apply_action(&mut self, action: Action) -> Result<(), ActionError> {
        if self.is_terminal() {
            return Err(ActionError::Terminal);
        }
        if !self.legal_actions().contains(&action) {
            return Err(self.illegal(action));
        }

        match self.phase {
            RoundPhase::Dealing => self.deal(),
            RoundPhase::Bidding => self.bid(action),
            RoundPhase::KingCalling => self.call_king(action)?,
            RoundPhase::TalonExchange => self.exchange(action)?,
            RoundPhase::TrickPlay => self.play(action)?,
            RoundPhase::Finished => return Err(ActionError::Terminal),
        }
        self.history.push(action);
        Ok(())
    }

    pub fn apply_actions(&mut self, actions: &[Action]) -> Result<(), ActionError> {
        actions
            .iter()
            .try_for_each(|&action| self.apply_action(action))
    }

    fn illegal(&self, action: Action) -> ActionError {
        ActionError::Illegal {
            action,
            phase: self.phase,
        }
    }

    fn card(&self, action: Action) -> Result<CardId, ActionError> {
        CardId::from_action(action).ok_or_else(|| self.illegal(action))
    }

    fn enter(&mut self, phase: RoundPhase) {
        tracing::debug!(target: TARGET, from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    fn deal(&mut self) {
        let deal = match &self.source {
            DealSource::Seeded(seed) => Dealer::new(self.players, *seed).deal(),
            DealSource::Fixed(deal) => deal.clone(),
        };
        self.hands = deal.hands.iter().cloned().map(Hand::with_cards).collect();
        self.dealt = self.hands.iter().map(|hand| hand.cards().to_vec()).collect();
        self.talon = deal.talon.clone();
        self.dealt_talon = deal.talon;
        self.current = Bidding::opening_seat();
        self.enter(RoundPhase::Bidding);
    }

    fn bid(&mut self, action: Action) {
        self.bid_log.push(action);
        match self.bidding.apply(self.current, action) {
            BiddingOutcome::NextBidder(seat) => self.current = seat,
            BiddingOutcome::Won { declarer, contract } => self.finish_bidding(declarer, contract),
        }
    }

    fn finish_bidding(&mut self, declarer: Seat, contract: &'static Contract) {
        tracing::debug!(target: TARGET, declarer, contract = %contract, "bidding won");
        self.declarer = Some(declarer);
        self.contract = Some(contract);
        self.current = declarer;
        if self.players == PlayerCount::Four && contract.needs_king_calling {
            self.enter(RoundPhase::KingCalling);
        } else if contract.needs_talon_exchange() {
            self.enter(RoundPhase::TalonExchange);
        } else {
            self.start_trick_play();
        }
    }

    fn call_king(&mut self, action: Action) -> Result<(), ActionError> {
        let king = self.card(action)?;
        self.called_king = Some(king);
        if self.talon.contains(&king) {
            self.called_king_in_talon = true;
        } else {
            self.partner = self
                .players
                .seats()
                .find(|&seat| seat != self.current && self.hands[seat].contains(king));
        }
        tracing::debug!(
            target: TARGET,
            king = %king,
            in_talon = self.called_king_in_talon,
            partner = ?self.partner,
            "king called"
        );
        self.enter(RoundPhase::TalonExchange);
        Ok(())
    }

    fn exchange(&mut self, action: Action) -> Result<(), ActionError> {
        let Some(contract) = self.contract else {
            return Err(self.illegal(action));
        };
        let declarer = self.current;

        if self.talon.len() == TALON_SIZE {
            let mond_in_talon = self.talon.contains(&CardId::MOND);
            let chosen = talon::take_set(
                &mut self.talon,
                usize::from(contract.talon_cards),
                usize::from(action),
            );
            if mond_in_talon && !chosen.contains(&CardId::MOND) {
                tracing::debug!(target: TARGET, seat = declarer, "mond left in talon");
                self.mond_penalized = Some(declarer);
            }
            self.hands[declarer].extend(chosen);
            self.talon_choice = Some(action);
            return Ok(());
        }

        let card = self.card(action)?;
        if !self.hands[declarer].remove(card) {
            return Err(self.illegal(action));
        }
        self.collected[declarer].push(card);
        self.discards.push(card);
        if self.hands[declarer].len() == self.players.cards_per_player() {
            self.start_trick_play();
        }
        Ok(())
    }

    fn start_trick_play(&mut self) {
        let leader = match (self.contract, self.declarer) {
            (Some(contract), Some(declarer)) if contract.declarer_starts => declarer,
            _ => self.players.forehand(),
        };
        self.current = leader;
        self.current_trick = Trick::new(leader, self.players);
        self.enter(RoundPhase::TrickPlay);
    }

    fn play(&mut self, action: Action) -> Result<(), ActionError> {
        let card = self.card(action)?;
        let seat = self.current;
        if self.current_trick.play(seat, card).is_err() || !self.hands[seat].remove(card) {
            return Err(self.illegal(action));
        }
        if self.current_trick.is_complete() {
            self.resolve_trick();
        } else {
            self.current = self.players.next(seat);
        }
        Ok(())
    }

    fn resolve_trick(&mut self) {
        let Some(contract) = self.contract else {
            return;
        };
        let Some(winning) = self.current_trick.winner(contract.suppresses_trumps()) else {
            return;
        };
        let winner = winning.seat;
        let mut log: Vec<CardId> = self.current_trick.cards().collect();
        self.collected[winner].extend_from_slice(&log);

        if contract.name == ContractName::Klop && !self.talon.is_empty() {
            let gift = self.talon.remove(0);
            self.collected[winner].push(gift);
            log.push(gift);
        } else if contract.needs_talon_exchange()
            && self.called_king_in_talon
            && Some(winning.card) == self.called_king
        {
            let swept: Vec<CardId> = self.talon.drain(..).collect();
            if swept.contains(&CardId::MOND) && self.mond_penalized == Some(winner) {
                tracing::debug!(target: TARGET, seat = winner, "mond penalty cleared");
                self.mond_penalized = None;
            }
            self.collected[winner].extend(swept);
        } else if contract.penalises_captured_mond()
            && (winning.card == CardId::SKIS || winning.card == CardId::PAGAT)
        {
            if let Some(mond) = self
                .current_trick
                .plays()
                .iter()
                .find(|play| play.card == CardId::MOND)
            {
                tracing::debug!(target: TARGET, seat = mond.seat, "mond captured");
                self.mond_penalized = Some(mond.seat);
            }
        }

        tracing::trace!(
            target: TARGET,
            trick = self.trick_history.len(),
            winner,
            card = %winning.card,
            "trick resolved"
        );

        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner, self.players));
        self.trick_history.push(finished);
        self.trick_log.push(log);
        self.current = winner;

        let declarer = self.declarer;
        if self.hands[winner].is_empty()
            || (contract.is_beggar() && Some(winner) == declarer)
            || (contract.is_valat() && Some(winner) != declarer)
        {
            self.enter(RoundPhase::Finished);
        }
    }

    fn outcome(&self) -> Option<RoundOutcome<'_>> {
        if !self.is_terminal() {
            return None;
        }
        Some(RoundOutcome {
            players: self.players,
            contract: self.contract?,
            declarer: self.declarer?,
            partner: self.partner,
            called_king: self.called_king,
            collected: &self.collected,
            tricks: &self.trick_history,
        })
    }

    pub fn scores_without_captured_mond_penalties(&self) -> Vec<i32> {
        match self.outcome() {
            Some(outcome) => score::score_round(&outcome).into_vec(),
            None => vec![0; self.players.count()],
        }
    }

    pub fn captured_mond_penalties(&self) -> Vec<i32> {
        score::captured_mond_penalties(self.players, self.mond_penalized).into_vec()
    }

    /// Final per-seat result; all zeros until the round is finished.
    pub fn returns(&self) -> Vec<i32> {
        if !self.is_terminal() {
            return vec![0; self.players.count()];
        }
        self.scores_without_captured_mond_penalties()
            .into_iter()
            .zip(self.captured_mond_penalties())
            .map(|(score, penalty)| score + penalty)
            .collect()
    }

    /// What `seat` has observed so far, one `;`-separated section per stage.
    pub fn information_state_string(&self, seat: Seat) -> String {
        if self.phase == RoundPhase::Dealing {
            return String::new();
        }
        let mut sections = vec![join(self.dealt[seat].iter().map(|c| c.action()))];
        if !self.bid_log.is_empty() {
            sections.push(join(self.bid_log.iter().copied()));
        }
        if let Some(king) = self.called_king {
            sections.push(king.action().to_string());
        }
        if self.contract.is_some_and(Contract::needs_talon_exchange)
            && self.phase >= RoundPhase::TalonExchange
        {
            sections.push(join(self.dealt_talon.iter().map(|c| c.action())));
            if let Some(choice) = self.talon_choice {
                sections.push(choice.to_string());
                if Some(seat) == self.declarer && !self.discards.is_empty() {
                    sections.push(join(self.discards.iter().map(|c| c.action())));
                }
            }
        }
        for trick in &self.trick_log {
            sections.push(join(trick.iter().map(|c| c.action())));
        }
        if !self.current_trick.is_empty() {
            sections.push(join(self.current_trick.cards().map(CardId::action)));
        }
        sections.join(";")
    }

    /// Total of cards across hands, talon, trick and piles; always the full deck once dealt.
    pub fn cards_in_play(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>()
            + self.talon.len()
            + self.current_trick.plays().len()
            + self.collected.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_dealt(&self) -> bool {
        self.cards_in_play() == DECK_SIZE
    }
}

fn join(actions: impl Iterator<Item = Action>) -> String {
    actions
        .map(|action| action.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::{ActionError, RoundPhase, RoundState};
    use crate::model::card::{CardId, DECK_SIZE};
    use crate::model::contract::{BID_KLOP, BID_ONE, BID_PASS, ContractName};
    use crate::model::deck::Deal;
    use crate::model::player::{PlayerCount, Turn};

    fn ids(actions: impl IntoIterator<Item = u8>) -> Vec<CardId> {
        actions.into_iter().filter_map(CardId::from_action).collect()
    }

    /// Forehand holds the top trumps, seat 1 the low trumps and hearts, seat 2 the rest.
    fn stacked_three() -> Deal {
        Deal {
            talon: ids([20, 48, 49, 50, 51, 52]),
            hands: vec![
                ids((0..1).chain(6..20).chain(21..22)),
                ids((1..6).chain(22..33)),
                ids((33..48).chain(53..54)),
            ],
        }
    }

    #[test]
    fn new_round_waits_for_the_deal() {
        let round = RoundState::new(PlayerCount::Three, 5);
        assert_eq!(round.current_player(), Turn::Chance);
        assert_eq!(round.chance_outcomes(), vec![(0, 1.0)]);
        assert_eq!(round.legal_actions(), vec![0]);
        assert_eq!(round.selected_contract(), ContractName::NotSelected);
        assert_eq!(round.information_state_string(0), "");
    }

    #[test]
    fn dealing_hands_out_every_card() {
        let mut round = RoundState::new(PlayerCount::Four, 11);
        round.apply_action(0).unwrap();
        assert_eq!(round.current_phase(), RoundPhase::Bidding);
        assert_eq!(round.current_player(), Turn::Player(1));
        assert_eq!(round.cards_in_play(), DECK_SIZE);
        for seat in 0..4 {
            assert_eq!(round.player_cards(seat).len(), 12);
        }
        assert!(round.chance_outcomes().is_empty());
    }

    #[test]
    fn deal_pass_pass_klop_starts_trick_play() {
        let mut round = RoundState::new(PlayerCount::Three, 0);
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_KLOP])
            .unwrap();
        assert_eq!(round.current_phase(), RoundPhase::TrickPlay);
        assert_eq!(round.current_player(), Turn::Player(0));
        assert_eq!(round.selected_contract(), ContractName::Klop);
        assert_eq!(round.declarer(), Some(0));
    }

    #[test]
    fn illegal_action_leaves_state_untouched() {
        let mut round = RoundState::new(PlayerCount::Three, 3);
        round.apply_action(0).unwrap();
        let before = round.history().to_vec();
        let err = round.apply_action(BID_KLOP).unwrap_err();
        assert_eq!(
            err,
            ActionError::Illegal {
                action: BID_KLOP,
                phase: RoundPhase::Bidding
            }
        );
        assert_eq!(round.history(), before.as_slice());
        assert_eq!(round.current_player(), Turn::Player(1));
    }

    #[test]
    fn mond_left_in_talon_flags_declarer() {
        let mut round = RoundState::from_deal(PlayerCount::Three, stacked_three()).unwrap();
        round.apply_actions(&[0, BID_PASS, BID_PASS, BID_ONE]).unwrap();
        assert_eq!(round.current_phase(), RoundPhase::TalonExchange);
        assert_eq!(round.legal_actions(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(round.talon_sets().len(), 6);

        round.apply_action(1).unwrap();
        assert_eq!(round.captured_mond_penalties(), vec![-20, 0, 0]);
        assert_eq!(round.talon().len(), 5);

        // trula and kings stay in hand
        let expected: Vec<u8> = (6..20).chain([48]).collect();
        assert_eq!(round.legal_actions(), expected);
        round.apply_action(48).unwrap();
        assert_eq!(round.current_phase(), RoundPhase::TrickPlay);
        assert_eq!(round.collected_cards(0), &ids([48])[..]);
    }

    #[test]
    fn taking_mond_from_talon_avoids_penalty() {
        let mut round = RoundState::from_deal(PlayerCount::Three, stacked_three()).unwrap();
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_ONE, 0])
            .unwrap();
        assert_eq!(round.captured_mond_penalties(), vec![0, 0, 0]);
        assert!(round.player_cards(0).contains(&CardId::MOND));
    }

    /// Mond with forehand, skis with seat 1, pagat as seat 2's only trump.
    fn trula_split() -> Deal {
        Deal {
            talon: ids(48..54),
            hands: vec![
                ids((6..20).chain([20, 22])),
                ids((1..6).chain([21]).chain(23..33)),
                ids((0..1).chain(33..48)),
            ],
        }
    }

    #[test]
    fn emperor_trick_captures_mond() {
        let mut round = RoundState::from_deal(PlayerCount::Three, trula_split()).unwrap();
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_ONE, 0, 48])
            .unwrap();
        assert_eq!(round.current_phase(), RoundPhase::TrickPlay);
        assert_eq!(round.captured_mond_penalties(), vec![0, 0, 0]);

        round.apply_action(CardId::MOND.action()).unwrap();
        round.apply_action(CardId::SKIS.action()).unwrap();
        assert_eq!(round.legal_actions(), vec![CardId::PAGAT.action()]);
        round.apply_action(CardId::PAGAT.action()).unwrap();

        assert_eq!(round.current_player(), Turn::Player(2));
        assert_eq!(round.captured_mond_penalties(), vec![-20, 0, 0]);
        assert_eq!(round.mond_penalized_player(), Some(0));
    }

    #[test]
    fn klop_never_penalises_mond() {
        let mut round = RoundState::from_deal(PlayerCount::Three, trula_split()).unwrap();
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_KLOP])
            .unwrap();
        round.apply_action(CardId::MOND.action()).unwrap();
        assert_eq!(round.legal_actions(), vec![CardId::SKIS.action()]);
        round.apply_action(CardId::SKIS.action()).unwrap();
        assert_eq!(round.legal_actions(), vec![CardId::PAGAT.action()]);
        round.apply_action(CardId::PAGAT.action()).unwrap();

        assert_eq!(round.current_player(), Turn::Player(2));
        assert_eq!(round.captured_mond_penalties(), vec![0, 0, 0]);
        assert_eq!(round.collected_cards(2).len(), 4);
    }

    #[test]
    fn klop_gifts_talon_cards_to_trick_winners() {
        let mut round = RoundState::from_deal(PlayerCount::Three, stacked_three()).unwrap();
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_KLOP])
            .unwrap();
        let leader = round.legal_actions()[0];
        round.apply_action(leader).unwrap();
        let second = round.legal_actions()[0];
        round.apply_action(second).unwrap();
        let third = round.legal_actions()[0];
        round.apply_action(third).unwrap();

        assert_eq!(round.trick_history().len(), 1);
        assert_eq!(round.talon().len(), 5);
        let winner = match round.current_player() {
            Turn::Player(seat) => seat,
            other => panic!("unexpected turn {other:?}"),
        };
        assert_eq!(round.collected_cards(winner).len(), 4);
        assert_eq!(round.cards_in_play(), DECK_SIZE);

        let info = round.information_state_string(1);
        let sections: Vec<&str> = info.split(';').collect();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1], "0,0,1");
        assert_eq!(sections[2].split(',').count(), 4);
        assert!(sections[2].ends_with(",20"));
    }

    #[test]
    fn finished_round_rejects_actions() {
        let mut round = RoundState::new(PlayerCount::Three, 8);
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_KLOP])
            .unwrap();
        while !round.is_terminal() {
            let action = round.legal_actions()[0];
            round.apply_action(action).unwrap();
        }
        assert_eq!(round.apply_action(0), Err(ActionError::Terminal));
        assert_eq!(round.current_player(), Turn::Terminal);
        assert!(round.legal_actions().is_empty());
        assert_eq!(round.trick_history().len(), 16);
        assert!(round.talon().is_empty());
        assert_eq!(round.returns(), round.returns());
    }

    /// King of spades and mond start in the talon; seats 1 to 3 each hold a low spade.
    fn king_in_talon_four() -> Deal {
        Deal {
            talon: ids([45, 20, 48, 49, 50, 51]),
            hands: vec![
                ids(0..12),
                ids((12..20).chain([21, 38, 22, 23])),
                ids([39, 41].into_iter().chain(24..34)),
                ids([40, 42, 43, 44].into_iter().chain(34..38).chain([46, 47, 52, 53])),
            ],
        }
    }

    #[test]
    fn called_king_from_talon_sweeps_and_clears_mond() {
        let mut round = RoundState::from_deal(PlayerCount::Four, king_in_talon_four()).unwrap();
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_PASS, BID_ONE])
            .unwrap();
        assert_eq!(round.current_phase(), RoundPhase::KingCalling);
        assert_eq!(round.legal_actions(), vec![29, 37, 45, 53]);

        round.apply_action(CardId::KING_OF_SPADES.action()).unwrap();
        assert!(round.called_king_was_in_talon());
        assert_eq!(round.declarer_partner(), None);

        round.apply_actions(&[0, 1]).unwrap();
        assert_eq!(round.current_phase(), RoundPhase::TrickPlay);
        assert_eq!(round.mond_penalized_player(), Some(0));
        assert_eq!(round.talon().len(), 5);

        round.apply_actions(&[45, 38, 39, 40]).unwrap();
        assert_eq!(round.current_player(), Turn::Player(0));
        assert_eq!(round.mond_penalized_player(), None);
        assert_eq!(round.captured_mond_penalties(), vec![0, 0, 0, 0]);
        assert!(round.talon().is_empty());
        assert_eq!(round.collected_cards(0).len(), 10);
        assert!(round.collected_cards(0).contains(&CardId::MOND));
        assert_eq!(round.cards_in_play(), DECK_SIZE);
    }

    #[test]
    fn called_king_in_another_hand_names_the_partner() {
        let mut round = RoundState::from_deal(PlayerCount::Four, king_in_talon_four()).unwrap();
        round
            .apply_actions(&[0, BID_PASS, BID_PASS, BID_PASS, BID_ONE])
            .unwrap();
        round.apply_action(CardId::KING_OF_HEARTS.action()).unwrap();

        assert_eq!(round.called_king(), Some(CardId::KING_OF_HEARTS));
        assert!(!round.called_king_was_in_talon());
        assert_eq!(round.declarer_partner(), Some(2));
        assert_eq!(round.current_phase(), RoundPhase::TalonExchange);
        assert_eq!(round.current_player(), Turn::Player(0));

        let info = round.information_state_string(3);
        let sections: Vec<&str> = info.split(';').collect();
        assert_eq!(sections[1], "0,0,0,4");
        assert_eq!(sections[2], "29");
        assert_eq!(sections[3], "45,20,48,49,50,51");
    }

    #[test]
    fn round_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<RoundState>();
    }
}
