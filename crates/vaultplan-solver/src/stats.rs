//! Search statistics.
//!
//! Counters for one chain search run.

use std::time::{Duration, Instant};

/// Search-level statistics.
///
/// # Example
///
/// ```
/// use vaultplan_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_expansion(3);
/// stats.record_node();
///
/// assert_eq!(stats.expansions, 1);
/// assert_eq!(stats.moves_generated, 3);
/// assert_eq!(stats.nodes_generated, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    /// Search nodes produced, including unchanged ones.
    pub nodes_generated: u64,
    /// Moves produced by the selector across all expansions.
    pub moves_generated: u64,
    /// Number of times the selector was asked for moves.
    pub expansions: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    /// Marks the end of the search.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Returns the elapsed search time.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::default(),
        }
    }

    /// Records one node emitted into the result set.
    pub fn record_node(&mut self) {
        self.nodes_generated += 1;
    }

    /// Records one expansion producing `move_count` moves.
    pub fn record_expansion(&mut self, move_count: usize) {
        self.expansions += 1;
        self.moves_generated += move_count as u64;
    }

    /// Returns the nodes per second rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_generated as f64 / secs
        } else {
            0.0
        }
    }
}
