//! Breadth-first solver: shortest solution in number of moves.
//!
//! Each slide is one unit-cost edge regardless of its cell count, so BFS
//! minimizes slide count, not cell distance.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::State;
use crate::search::kernel::{self, MoveBuf, Occupancy};
use crate::search::monitor::SearchMonitor;
use crate::search::path::PathArena;
use crate::search::report::{self, SolveError, SolveReport, Status};
use crate::search::SolveOptions;

/// Solve `board` by breadth-first search.
pub fn solve_bfs(board: &Board, opts: SolveOptions<'_>) -> Result<SolveReport, SolveError> {
    board.validate()?;

    let mut monitor = SearchMonitor::new(opts.cancel, opts.on_progress);
    let mut arena = PathArena::rooted(board.start.clone());
    let mut visited: FxHashSet<State> = FxHashSet::default();
    visited.insert(board.start.clone());

    let mut queue: VecDeque<u32> = VecDeque::new();
    queue.push_back(0);
    let mut moves = MoveBuf::new();

    while let Some(idx) = queue.pop_front() {
        if monitor.cancelled() {
            let metrics = monitor.finish(queue.len(), 0);
            return Ok(report::terminal(board, Status::Aborted, metrics));
        }

        let depth = arena.node(idx).depth;
        let state = arena.node(idx).state.clone();
        monitor.expanded(queue.len(), depth);

        if kernel::is_goal(board, &state) {
            let (moves, history) = arena.reconstruct(idx);
            let metrics = monitor.finish(queue.len(), moves.len() as u32);
            return Ok(report::solved(board, moves, history, metrics));
        }

        let occ = Occupancy::project(board, &state);
        kernel::generate_moves(board, &state, &occ, &mut moves);
        for &mv in moves.iter() {
            let next = kernel::apply_move(&state, mv);
            if visited.insert(next.clone()) {
                let child = arena.push(next, idx, mv, depth + 1);
                queue.push_back(child);
            }
        }
    }

    let metrics = monitor.finish(0, 0);
    Ok(report::terminal(board, Status::Unsolved, metrics))
}
