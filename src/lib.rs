//! # gridlock
//!
//! A solver kernel for sliding-vehicle board puzzles of the Rush Hour family:
//! parse a textual board, then search for a sequence of legal slides that
//! brings the goal vehicle onto the exit cell, with incremental telemetry and
//! cooperative cancellation.
//!
//! ## Architecture
//!
//! The codebase is structured as layered components:
//!
//! - [`core`]: allocation-free primitives (`Cell`, `Direction`, packed
//!   [`core::state::Anchor`] and the fixed-width [`core::state::State`]).
//! - [`board`]: the immutable puzzle model (vehicles, exit, starting state).
//! - [`parse`]: textual puzzle parser (`parse_puzzle`).
//! - [`search`]: the shared state kernel plus four interchangeable solvers
//!   (BFS, DFS, backtracking, A*), all reporting through one progress and
//!   cancellation monitor and returning one uniform report type.
//! - [`puzzles`]: built-in demo puzzles (small boards used by the CLI, tests
//!   and benches).
//!
//! ## Quick start
//!
//! ```
//! use gridlock::{parse_puzzle, solve_bfs, SolveOptions};
//!
//! let board = parse_puzzle(gridlock::puzzles::LEFT_EXIT).unwrap();
//! let report = solve_bfs(&board, SolveOptions::new()).unwrap();
//! assert_eq!(report.status, gridlock::Status::Solved);
//! assert_eq!(report.moves.len(), 1);
//! ```

pub mod board;
pub mod core;
pub mod parse;
pub mod puzzles;
pub mod search;

pub use board::{Board, Orientation, Vehicle};
pub use core::{Cell, Direction, State};
pub use parse::{parse_puzzle, ParseError};
pub use search::{
    solve_astar, solve_backtracking, solve_bfs, solve_dfs, CancelToken, Metrics, Move,
    ProgressSnapshot, SolveError, SolveOptions, SolveReport, Solver, Status,
};
