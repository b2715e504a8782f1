use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tarok_core::{Action, RoundState};

/// Something that picks the next decision for whichever seat is to act.
pub trait Agent: Send {
    /// Returns `None` only when the round offers no legal action.
    fn choose(&mut self, round: &RoundState) -> Option<Action>;
}

/// Uniformly random over the legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, round: &RoundState) -> Option<Action> {
        round.legal_actions().choose(&mut self.rng).copied()
    }
}
