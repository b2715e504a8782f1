use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tarok_core::{ActionError, ContractName, PlayerCount, RoundPhase, RoundState, Seat};
use thiserror::Error;
use tracing::{Level, event};

use crate::agent::{Agent, RandomAgent};
use crate::config::{ResolvedOutputs, SimulationConfig};
use crate::summary::SummaryCollector;

/// Mixed into the round seed so the agent stream differs from the deal stream.
const AGENT_SEED_SALT: u64 = 0x7a72_6f6b_5f61_6774;

/// Plays a batch of independent random rounds and records each one.
pub struct SimulationRunner {
    config: SimulationConfig,
    outputs: ResolvedOutputs,
    players: PlayerCount,
}

/// Summary details returned after a run.
#[derive(Debug)]
pub struct RunSummary {
    pub rounds_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

/// One JSONL line per finished round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRow {
    pub run_id: String,
    pub round_index: usize,
    pub seed: u64,
    pub players: PlayerCount,
    pub contract: ContractName,
    pub declarer: Option<Seat>,
    pub partner: Option<Seat>,
    pub returns: Vec<i32>,
    pub mond_penalties: Vec<i32>,
    pub actions: usize,
}

impl SimulationRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: SimulationConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let players = PlayerCount::from_count(config.rounds.players).ok_or(
            RunnerError::PlayerCount {
                found: config.rounds.players,
            },
        )?;
        Ok(Self {
            config,
            outputs,
            players,
        })
    }

    /// Execute every round, streaming JSONL rows to disk, then write the summary.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.rounds.seed.unwrap_or(0));
        let mut summary = SummaryCollector::new(&self.config.run_id, self.players);
        let mut rows_written = 0usize;

        for round_index in 0..self.config.rounds.count {
            let seed = rng.next_u64();
            let row = self.play_round(round_index, seed)?;
            summary.record(&row);
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }

        writer.flush()?;
        summary.write_markdown(&self.outputs.summary_md)?;

        Ok(RunSummary {
            rounds_played: self.config.rounds.count,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }

    fn play_round(&self, round_index: usize, seed: u64) -> Result<RoundRow, RunnerError> {
        let mut round = RoundState::new(self.players, seed);
        let mut agent = RandomAgent::new(seed ^ AGENT_SEED_SALT);
        // Every player decision plus the single chance action.
        let limit = round.max_game_length() + 1;

        while !round.is_terminal() {
            if round.history().len() >= limit {
                return Err(RunnerError::RoundTooLong { round_index, limit });
            }
            let phase = round.current_phase();
            let action = agent
                .choose(&round)
                .ok_or(RunnerError::NoLegalAction { round_index, phase })?;
            round
                .apply_action(action)
                .map_err(|source| RunnerError::Action {
                    round_index,
                    source,
                })?;
        }

        let row = RoundRow {
            run_id: self.config.run_id.clone(),
            round_index,
            seed,
            players: self.players,
            contract: round.selected_contract(),
            declarer: round.declarer(),
            partner: round.declarer_partner(),
            returns: round.returns(),
            mond_penalties: round.captured_mond_penalties(),
            actions: round.history().len(),
        };

        event!(
            target: "tarok_bench::round",
            Level::INFO,
            run_id = %row.run_id,
            round_index = round_index as u64,
            seed,
            contract = %row.contract,
            declarer = ?row.declarer,
            actions = row.actions as u64,
        );

        Ok(row)
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize round row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("tarok is played by 3 or 4 players, not {found}")]
    PlayerCount { found: usize },
    #[error("round {round_index} rejected an action: {source}")]
    Action {
        round_index: usize,
        #[source]
        source: ActionError,
    },
    #[error("round {round_index} offered no legal action during {phase}")]
    NoLegalAction {
        round_index: usize,
        phase: RoundPhase,
    },
    #[error("round {round_index} ran past {limit} actions without finishing")]
    RoundTooLong { round_index: usize, limit: usize },
}
