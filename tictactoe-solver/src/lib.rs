//! Tic-tac-toe Solver
//!
//! Exhaustive minimax over [`GameState`](tictactoe_core::GameState) successors.
//! A tic-tac-toe tree is small enough to search completely on every call, so
//! each search starts with a fresh transposition table and returns exact
//! values.

pub mod solver;
pub mod stats;

pub use solver::{PerfectPlayer, SearchReport, DRAW, LOSS, WIN};
pub use stats::SearchStats;
