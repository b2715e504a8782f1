use crate::model::card::CardId;
use crate::model::contract::{Contract, ContractName, ScoringFamily};
use crate::model::player::{PlayerCount, Seat};
use crate::model::trick::Trick;

pub const SPLIT_LINE: i32 = 35;
pub const VALAT_SCORE: i32 = 250;
pub const KLOP_EXTREME: i32 = 70;
pub const KING_ULTIMO: i32 = 10;
pub const PAGAT_ULTIMO: i32 = 25;
pub const FOUR_KINGS: i32 = 10;
pub const TRULA: i32 = 10;
pub const CAPTURED_MOND_PENALTY: i32 = -20;

/// Card points of a pile, counted in groups of three.
pub fn card_points(cards: &[CardId]) -> i32 {
    let raw: i32 = cards.iter().map(|card| i32::from(card.points())).sum();
    let count = cards.len() as i32;
    raw - 2 * (count / 3) - i32::from(count % 3 != 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: Vec<i32>,
}

impl ScoreBoard {
    pub fn new(players: PlayerCount) -> Self {
        Self {
            totals: vec![0; players.count()],
        }
    }

    pub fn add(&mut self, seat: Seat, points: i32) {
        self.totals[seat] += points;
    }

    pub fn set_score(&mut self, seat: Seat, points: i32) {
        self.totals[seat] = points;
    }

    pub fn score(&self, seat: Seat) -> i32 {
        self.totals[seat]
    }

    pub fn standings(&self) -> &[i32] {
        &self.totals
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.totals
    }
}

/// Everything the scoring rules read from a finished round.
#[derive(Debug, Clone, Copy)]
pub struct RoundOutcome<'a> {
    pub players: PlayerCount,
    pub contract: &'static Contract,
    pub declarer: Seat,
    pub partner: Option<Seat>,
    pub called_king: Option<CardId>,
    pub collected: &'a [Vec<CardId>],
    pub tricks: &'a [Trick],
}

impl RoundOutcome<'_> {
    fn on_team(&self, seat: Seat) -> bool {
        seat == self.declarer || Some(seat) == self.partner
    }

    fn trick_winner(&self, trick: &Trick) -> Option<Seat> {
        trick
            .winner(self.contract.suppresses_trumps())
            .map(|play| play.seat)
    }

    fn team_piles(&self) -> (Vec<CardId>, Vec<CardId>) {
        let mut team = Vec::new();
        let mut opponents = Vec::new();
        for (seat, pile) in self.collected.iter().enumerate() {
            if self.on_team(seat) {
                team.extend_from_slice(pile);
            } else {
                opponents.extend_from_slice(pile);
            }
        }
        (team, opponents)
    }
}

/// Per-seat scores, not counting the captured mond penalty.
pub fn score_round(outcome: &RoundOutcome<'_>) -> ScoreBoard {
    let board = match outcome.contract.family() {
        ScoringFamily::Klop => klop_scores(outcome.players, outcome.collected),
        ScoringFamily::TalonExchange => talon_exchange_scores(outcome),
        ScoringFamily::Higher => higher_scores(outcome),
    };
    tracing::debug!(
        target: "tarok_core::round",
        contract = %outcome.contract,
        scores = ?board.standings(),
        "scored round"
    );
    board
}

pub fn klop_scores(players: PlayerCount, collected: &[Vec<CardId>]) -> ScoreBoard {
    let mut board = ScoreBoard::new(players);
    let points: Vec<i32> = collected.iter().map(|pile| card_points(pile)).collect();

    let mut extreme = false;
    for (seat, &value) in points.iter().enumerate() {
        if value > SPLIT_LINE {
            board.set_score(seat, -KLOP_EXTREME);
            extreme = true;
        } else if value == 0 {
            board.set_score(seat, KLOP_EXTREME);
            extreme = true;
        }
    }
    if extreme {
        return board;
    }
    for (seat, &value) in points.iter().enumerate() {
        board.set_score(seat, -value);
    }
    board
}

pub fn talon_exchange_scores(outcome: &RoundOutcome<'_>) -> ScoreBoard {
    let mut board = ScoreBoard::new(outcome.players);
    let team_tricks = outcome
        .tricks
        .iter()
        .filter(|trick| {
            outcome
                .trick_winner(trick)
                .is_some_and(|seat| outcome.on_team(seat))
        })
        .count();

    let score = if !outcome.tricks.is_empty() && team_tricks == outcome.tricks.len() {
        VALAT_SCORE
    } else if !outcome.tricks.is_empty() && team_tricks == 0 {
        -VALAT_SCORE
    } else {
        let (team, opponents) = outcome.team_piles();
        let points = card_points(&team);
        let mut score = points - SPLIT_LINE;
        if points > SPLIT_LINE {
            score += outcome.contract.score;
        } else {
            score -= outcome.contract.score;
        }
        score + ultimo_bonus(outcome) + set_bonus(&team, &opponents, &CardId::KINGS, FOUR_KINGS)
            + set_bonus(&team, &opponents, &CardId::TRULA, TRULA)
    };

    board.set_score(outcome.declarer, score);
    if let Some(partner) = outcome.partner {
        board.set_score(partner, score);
    }
    board
}

fn ultimo_bonus(outcome: &RoundOutcome<'_>) -> i32 {
    let Some(last) = outcome.tricks.last() else {
        return 0;
    };
    let bonus = match outcome.called_king {
        Some(king) if last.contains(king) => KING_ULTIMO,
        _ if last.contains(CardId::PAGAT) => PAGAT_ULTIMO,
        _ => 0,
    };
    match outcome.trick_winner(last) {
        Some(seat) if outcome.on_team(seat) => bonus,
        _ => -bonus,
    }
}

fn set_bonus(team: &[CardId], opponents: &[CardId], set: &[CardId], bonus: i32) -> i32 {
    if set.iter().all(|card| team.contains(card)) {
        bonus
    } else if set.iter().all(|card| opponents.contains(card)) {
        -bonus
    } else {
        0
    }
}

pub fn higher_scores(outcome: &RoundOutcome<'_>) -> ScoreBoard {
    let mut board = ScoreBoard::new(outcome.players);
    let pile = &outcome.collected[outcome.declarer];
    let won = match outcome.contract.name {
        ContractName::Beggar | ContractName::OpenBeggar => pile.is_empty(),
        ContractName::ColourValatWithout | ContractName::ValatWithout => pile.len() == 48,
        _ => card_points(pile) > SPLIT_LINE,
    };
    let score = if won {
        outcome.contract.score
    } else {
        -outcome.contract.score
    };
    board.set_score(outcome.declarer, score);
    board
}

pub fn captured_mond_penalties(players: PlayerCount, penalized: Option<Seat>) -> ScoreBoard {
    let mut board = ScoreBoard::new(players);
    if let Some(seat) = penalized {
        board.add(seat, CAPTURED_MOND_PENALTY);
    }
    board
}
