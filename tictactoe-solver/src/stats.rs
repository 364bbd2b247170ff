//! Search statistics tracking.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::solver::{DRAW, LOSS, WIN};

/// Statistics collected during one search.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Positions whose value was computed by examining children
    pub positions_evaluated: u64,

    /// Cache hits (position already in transposition table)
    pub cache_hits: u64,

    /// Terminal positions (win, loss or draw)
    pub terminal_positions: u64,

    /// Breakdown of terminal outcomes, from the searching side's view
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,

    /// Deepest ply reached below the root
    pub max_depth: u64,

    /// Distinct entries in the transposition table when the search finished
    pub unique_positions: u64,

    start_time: Option<Instant>,
    finish_time: Option<Instant>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record a terminal position outcome
    pub fn record_terminal(&mut self, score: i8) {
        self.terminal_positions += 1;
        match score {
            WIN => self.wins += 1,
            LOSS => self.losses += 1,
            DRAW => self.draws += 1,
            _ => {}
        }
    }

    /// Record reaching a node `depth` plies below the root
    #[inline]
    pub fn record_depth(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Stop the clock and note the table size
    pub fn finish(&mut self, table_size: usize) {
        self.unique_positions = table_size as u64;
        self.finish_time = Some(Instant::now());
    }

    /// Time from creation until `finish` (or until now if still running)
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.finish_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Positions evaluated per second
    pub fn positions_per_sec(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.positions_evaluated as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Emit the statistics as a debug event
    pub fn log_summary(&self) {
        debug!(
            positions = self.positions_evaluated,
            unique = self.unique_positions,
            cache_hits = self.cache_hits,
            terminals = self.terminal_positions,
            wins = self.wins,
            losses = self.losses,
            draws = self.draws,
            depth = self.max_depth,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "search finished"
        );
    }

    /// Print final summary
    pub fn print_summary(&self) {
        println!("Positions evaluated: {}", self.positions_evaluated);
        println!("Unique positions: {}", self.unique_positions);
        println!("Cache hits: {}", self.cache_hits);
        println!("Terminal positions: {}", self.terminal_positions);
        println!("  - Wins: {}", self.wins);
        println!("  - Losses: {}", self.losses);
        println!("  - Draws: {}", self.draws);
        println!("Max depth: {}", self.max_depth);
        println!("Time: {:.3}s", self.elapsed().as_secs_f64());
        println!("Average rate: {:.0} positions/sec", self.positions_per_sec());
    }
}
