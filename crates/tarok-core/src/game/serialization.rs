use crate::model::card::Action;
use crate::model::deck::{Deal, DealError};
use crate::model::player::PlayerCount;
use crate::model::round::{ActionError, RoundState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A round reduced to how it started plus every action applied since.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundSnapshot {
    pub seed: u64,
    pub players: PlayerCount,
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<Deal>,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot deal is invalid: {0}")]
    Deal(#[from] DealError),
    #[error("replaying action {index} failed: {source}")]
    Replay {
        index: usize,
        #[source]
        source: ActionError,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RoundSnapshot {
    pub fn capture(state: &RoundState) -> Self {
        RoundSnapshot {
            seed: state.seed().unwrap_or_default(),
            players: state.players(),
            actions: state.history().to_vec(),
            deal: state.fixed_deal().cloned(),
        }
    }

    pub fn restore(&self) -> Result<RoundState, SnapshotError> {
        let mut state = match &self.deal {
            Some(deal) => RoundState::from_deal(self.players, deal.clone())?,
            None => RoundState::new(self.players, self.seed),
        };
        for (index, &action) in self.actions.iter().enumerate() {
            state
                .apply_action(action)
                .map_err(|source| SnapshotError::Replay { index, source })?;
        }
        Ok(state)
    }

    pub fn to_json(state: &RoundState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
