//! Recursive backtracking solver.
//!
//! Search-wise this is the depth-first solver without a depth bound: it shares
//! the global visited-set memoization and the canonical successor order, and
//! it marks all fresh successors of a node before descending into the first
//! one (exactly when the stack variant marks them), so the two visit states
//! in the same order and return identical reports. It exists as a separately
//! named entry point for API symmetry.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::State;
use crate::search::kernel::{self, MoveBuf, Occupancy};
use crate::search::monitor::SearchMonitor;
use crate::search::path::PathArena;
use crate::search::report::{self, SolveError, SolveReport, Status};
use crate::search::SolveOptions;

enum Walk {
    Found(u32),
    Aborted,
    Exhausted,
}

struct Search<'a, 'b> {
    board: &'a Board,
    monitor: SearchMonitor<'b>,
    arena: PathArena,
    visited: FxHashSet<State>,
    /// Nodes generated but not yet expanded; the implicit frontier.
    pending: usize,
}

impl Search<'_, '_> {
    fn descend(&mut self, idx: u32) -> Walk {
        self.pending -= 1;
        if self.monitor.cancelled() {
            return Walk::Aborted;
        }

        let depth = self.arena.node(idx).depth;
        let state = self.arena.node(idx).state.clone();
        self.monitor.expanded(self.pending, depth);

        if kernel::is_goal(self.board, &state) {
            return Walk::Found(idx);
        }

        let occ = Occupancy::project(self.board, &state);
        let mut moves = MoveBuf::new();
        kernel::generate_moves(self.board, &state, &occ, &mut moves);
        moves.sort_by_key(|m| (m.vehicle, m.direction));

        let mut children: SmallVec<[u32; 16]> = SmallVec::new();
        for &mv in moves.iter() {
            let next = kernel::apply_move(&state, mv);
            if self.visited.insert(next.clone()) {
                children.push(self.arena.push(next, idx, mv, depth + 1));
            }
        }
        self.pending += children.len();

        for &child in children.iter() {
            match self.descend(child) {
                Walk::Exhausted => continue,
                other => return other,
            }
        }
        Walk::Exhausted
    }
}

/// Solve `board` by recursive backtracking.
pub fn solve_backtracking(board: &Board, opts: SolveOptions<'_>) -> Result<SolveReport, SolveError> {
    board.validate()?;

    let mut search = Search {
        board,
        monitor: SearchMonitor::new(opts.cancel, opts.on_progress),
        arena: PathArena::rooted(board.start.clone()),
        visited: FxHashSet::default(),
        pending: 1,
    };
    search.visited.insert(board.start.clone());

    match search.descend(0) {
        Walk::Found(leaf) => {
            let (moves, history) = search.arena.reconstruct(leaf);
            let metrics = search.monitor.finish(search.pending, moves.len() as u32);
            Ok(report::solved(board, moves, history, metrics))
        }
        Walk::Aborted => {
            let metrics = search.monitor.finish(search.pending, 0);
            Ok(report::terminal(board, Status::Aborted, metrics))
        }
        Walk::Exhausted => {
            let metrics = search.monitor.finish(search.pending, 0);
            Ok(report::terminal(board, Status::Unsolved, metrics))
        }
    }
}
