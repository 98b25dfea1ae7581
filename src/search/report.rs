//! The uniform result object every solver returns, and the solver-side error
//! surface.
//!
//! Transient conditions (cancellation, frontier exhaustion) are not errors;
//! they are the `Aborted` / `Unsolved` statuses. [`SolveError`] is reserved for
//! structural board defects, which indicate a programming bug upstream of the
//! search; the parser never produces such a board.

use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::core::State;
use crate::search::describe::describe_move;
use crate::search::kernel::Move;

/// How a search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// A move sequence reaching the goal was found.
    Solved,
    /// The frontier was exhausted without reaching the goal.
    Unsolved,
    /// The cancellation token was observed asserted.
    Aborted,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Solved => f.write_str("solved"),
            Status::Unsolved => f.write_str("unsolved"),
            Status::Aborted => f.write_str("aborted"),
        }
    }
}

/// Final search telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Total expanded nodes.
    pub explored: u64,
    /// Residual frontier size at termination.
    pub frontier: usize,
    /// Solution depth in moves on success, 0 otherwise.
    pub depth: u32,
    /// Elapsed wall-clock milliseconds, rounded.
    pub time_ms: u64,
}

/// The uniform solver result.
///
/// On `Solved`, `state_history` has `moves.len() + 1` entries (initial state
/// first, goal state last) and replaying `moves` from the initial state
/// reproduces it position by position. On any other status `moves` is empty
/// and `state_history` holds only the initial state.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub status: Status,
    pub moves: Vec<Move>,
    pub state_history: Vec<State>,
    /// One human-readable action string per move.
    pub actions: Vec<String>,
    pub metrics: Metrics,
    /// Labels for every vehicle, indexed as in the board.
    pub vehicle_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The board is structurally unusable (no vehicles, or no goal vehicle).
    InvalidBoardData { reason: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidBoardData { reason } => {
                write!(f, "invalid board data: {reason}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Assemble the report for a successful search.
pub(crate) fn solved(
    board: &Board,
    moves: Vec<Move>,
    state_history: Vec<State>,
    metrics: Metrics,
) -> SolveReport {
    debug_assert_eq!(state_history.len(), moves.len() + 1);
    let actions = moves.iter().map(|&mv| describe_move(board, mv)).collect();
    SolveReport {
        status: Status::Solved,
        moves,
        state_history,
        actions,
        metrics,
        vehicle_labels: board.labels(),
    }
}

/// Assemble the report for an `Unsolved` or `Aborted` termination: no moves,
/// a single-entry history holding the initial state.
pub(crate) fn terminal(board: &Board, status: Status, metrics: Metrics) -> SolveReport {
    debug_assert_ne!(status, Status::Solved);
    debug_assert_eq!(metrics.depth, 0);
    SolveReport {
        status,
        moves: Vec::new(),
        state_history: vec![board.start.clone()],
        actions: Vec::new(),
        metrics,
        vehicle_labels: board.labels(),
    }
}
