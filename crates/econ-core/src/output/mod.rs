//! State Output
//!
//! Snapshot construction from the engine world, snapshot file writers, and
//! end-of-run statistics.

pub mod snapshot;
pub mod stats;

pub use snapshot::{build_snapshot, turn_totals, write_current_state, write_snapshot_to_dir};
pub use stats::{write_stats, RunStats, StatsCollector};
