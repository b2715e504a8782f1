use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tarok_core::PlayerCount;

use crate::simulation::RoundRow;

#[derive(Debug, Default, Clone, PartialEq)]
struct ContractStats {
    rounds: usize,
    declarer_total: i64,
}

/// Aggregates finished rounds into the Markdown run summary.
#[derive(Debug, Clone)]
pub struct SummaryCollector {
    run_id: String,
    players: PlayerCount,
    rounds: usize,
    contracts: BTreeMap<String, ContractStats>,
    seat_totals: Vec<i64>,
    mond_penalties: usize,
    longest: Option<(usize, usize)>,
}

impl SummaryCollector {
    pub fn new(run_id: &str, players: PlayerCount) -> Self {
        Self {
            run_id: run_id.to_string(),
            players,
            rounds: 0,
            contracts: BTreeMap::new(),
            seat_totals: vec![0; players.count()],
            mond_penalties: 0,
            longest: None,
        }
    }

    pub fn record(&mut self, row: &RoundRow) {
        self.rounds += 1;

        let stats = self.contracts.entry(row.contract.to_string()).or_default();
        stats.rounds += 1;
        if let Some(declarer) = row.declarer {
            stats.declarer_total += i64::from(row.returns.get(declarer).copied().unwrap_or(0));
        }

        for (total, &value) in self.seat_totals.iter_mut().zip(&row.returns) {
            *total += i64::from(value);
        }
        self.mond_penalties += row.mond_penalties.iter().filter(|&&p| p != 0).count();

        if self.longest.is_none_or(|(_, actions)| row.actions > actions) {
            self.longest = Some((row.round_index, row.actions));
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Simulation Summary\n");
        let _ = writeln!(
            out,
            "Run `{}`: {} rounds at a {}-player table\n",
            self.run_id, self.rounds, self.players
        );

        out.push_str("| Contract | Rounds | Share | Avg declarer return |\n");
        out.push_str("|----------|--------|-------|---------------------|\n");
        for (name, stats) in &self.contracts {
            let _ = writeln!(
                out,
                "| {name} | {rounds} | {share:.1}% | {avg:+.2} |",
                rounds = stats.rounds,
                share = percent(stats.rounds, self.rounds),
                avg = mean(stats.declarer_total, stats.rounds),
            );
        }

        out.push_str("\n| Seat | Avg return |\n");
        out.push_str("|------|------------|\n");
        for (seat, &total) in self.seat_totals.iter().enumerate() {
            let _ = writeln!(out, "| {seat} | {:+.2} |", mean(total, self.rounds));
        }

        out.push('\n');
        let _ = writeln!(out, "Captured mond penalties: {}", self.mond_penalties);
        if let Some((index, actions)) = self.longest {
            let _ = writeln!(out, "Longest round: #{index} with {actions} actions");
        }
        out
    }

    pub fn write_markdown(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.render_markdown())
    }
}

fn mean(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::SummaryCollector;
    use crate::simulation::RoundRow;
    use tarok_core::{ContractName, PlayerCount};

    fn row(
        index: usize,
        contract: ContractName,
        declarer: Option<usize>,
        returns: [i32; 3],
    ) -> RoundRow {
        RoundRow {
            run_id: "t".to_string(),
            round_index: index,
            seed: index as u64,
            players: PlayerCount::Three,
            contract,
            declarer,
            partner: None,
            returns: returns.to_vec(),
            mond_penalties: vec![0, 0, 0],
            actions: 40 + index,
        }
    }

    #[test]
    fn aggregates_contracts_and_seats() {
        let mut summary = SummaryCollector::new("t", PlayerCount::Three);
        summary.record(&row(0, ContractName::SoloOne, Some(1), [0, 40, 0]));
        summary.record(&row(1, ContractName::SoloOne, Some(2), [0, 0, -20]));
        summary.record(&row(2, ContractName::Klop, Some(0), [-10, 70, 0]));
        assert_eq!(summary.rounds(), 3);

        let md = summary.render_markdown();
        assert!(md.contains("| Solo one | 2 | 66.7% | +10.00 |"), "{md}");
        assert!(md.contains("| Klop | 1 | 33.3% | -10.00 |"), "{md}");
        assert!(md.contains("| 1 | +36.67 |"), "{md}");
        assert!(md.contains("Longest round: #2 with 42 actions"), "{md}");
    }

    #[test]
    fn empty_summary_renders_without_rows() {
        let summary = SummaryCollector::new("empty", PlayerCount::Four);
        let md = summary.render_markdown();
        assert!(md.contains("0 rounds at a 4-player table"));
        assert!(!md.contains("Longest round"));
    }
}
