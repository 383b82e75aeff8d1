//! Run Statistics
//!
//! Accumulates event counts over a run and writes a summary JSON file.

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use econ_events::{EconomyEvent, TurnTotals};

/// End-of-run summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub turns: u64,
    pub total_events: usize,
    pub events_by_type: HashMap<String, usize>,
    pub initial_totals: TurnTotals,
    pub final_totals: TurnTotals,
    /// Money held across all agents at the end; equals the start total in
    /// a conserving run.
    pub total_money: f64,
}

/// Accumulates event statistics while a run progresses.
#[derive(Debug, Default)]
pub struct StatsCollector {
    total_events: usize,
    events_by_type: HashMap<String, usize>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event.
    pub fn record(&mut self, event: &EconomyEvent) {
        self.total_events += 1;
        *self
            .events_by_type
            .entry(event.kind.label().to_string())
            .or_insert(0) += 1;
    }

    /// Record a batch of events.
    pub fn record_batch(&mut self, events: &[EconomyEvent]) {
        for event in events {
            self.record(event);
        }
    }

    pub fn total_events(&self) -> usize {
        self.total_events
    }

    /// Produce the final statistics.
    pub fn finish(self, turns: u64, initial_totals: TurnTotals, final_totals: TurnTotals) -> RunStats {
        let total_money = final_totals.total_money();
        RunStats {
            turns,
            total_events: self.total_events,
            events_by_type: self.events_by_type,
            initial_totals,
            final_totals,
            total_money,
        }
    }
}

/// Write statistics to `<dir>/stats.json`.
pub fn write_stats(stats: &RunStats, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(dir.join("stats.json"), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_events::EventKind;

    #[test]
    fn test_collector_counts_by_type() {
        let mut collector = StatsCollector::new();
        collector.record_batch(&[
            EconomyEvent::new(
                0,
                EventKind::Hired {
                    company: 0,
                    citizen: 0,
                    wage: 50.0,
                },
            ),
            EconomyEvent::new(
                0,
                EventKind::Hired {
                    company: 0,
                    citizen: 1,
                    wage: 50.0,
                },
            ),
            EconomyEvent::new(
                1,
                EventKind::GoodsSold {
                    company: 0,
                    citizen: 0,
                    amount: 12.0,
                },
            ),
        ]);

        assert_eq!(collector.total_events(), 3);

        let stats = collector.finish(2, TurnTotals::default(), TurnTotals::default());
        assert_eq!(stats.events_by_type["hired"], 2);
        assert_eq!(stats.events_by_type["goods_sold"], 1);
    }

    #[test]
    fn test_write_stats_file() {
        let stats = StatsCollector::new().finish(0, TurnTotals::default(), TurnTotals::default());
        let dir = tempfile::tempdir().unwrap();
        write_stats(&stats, dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join("stats.json")).unwrap();
        assert!(content.contains("\"turns\": 0"));
    }
}
