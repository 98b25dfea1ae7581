//! The search engine: shared state kernel, progress/cancellation monitor and
//! the four interchangeable solvers.
//!
//! Every solver follows the same contract: it consumes a parsed [`Board`]
//! plus [`SolveOptions`], expands states through the shared [`kernel`], reports
//! through the [`monitor`] every [`monitor::PROGRESS_INTERVAL`] expansions, and
//! terminates with a uniform [`report::SolveReport`].

pub mod astar;
pub mod backtrack;
pub mod bfs;
pub mod describe;
pub mod dfs;
pub mod kernel;
pub mod monitor;
mod path;
pub mod report;

pub use astar::solve_astar;
pub use backtrack::solve_backtracking;
pub use bfs::solve_bfs;
pub use dfs::solve_dfs;
pub use kernel::Move;
pub use monitor::{CancelToken, ProgressSnapshot, PROGRESS_INTERVAL};
pub use report::{Metrics, SolveError, SolveReport, Status};

use crate::board::Board;

/// Optional knobs shared by all four solvers.
///
/// `max_depth` is honored only by the depth-first solver; the others ignore it.
#[derive(Default)]
pub struct SolveOptions<'a> {
    pub cancel: Option<&'a CancelToken>,
    pub on_progress: Option<&'a mut dyn FnMut(ProgressSnapshot)>,
    pub max_depth: Option<u32>,
}

impl<'a> SolveOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Signature every solver entry point shares.
pub type Solver = fn(&Board, SolveOptions<'_>) -> Result<SolveReport, SolveError>;
