//! Depth-first solver with a global visited set and an optional depth bound.
//!
//! The visited set is never cleared during the search, so this is a tree
//! search over a global DAG: a state first reached through a long path blocks
//! later, shorter paths to it. That makes DFS complete for *finding* a
//! solution on a finite graph but not for finding a shortest one; BFS and A*
//! exist for that.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::State;
use crate::search::kernel::{self, MoveBuf, Occupancy};
use crate::search::monitor::SearchMonitor;
use crate::search::path::PathArena;
use crate::search::report::{self, SolveError, SolveReport, Status};
use crate::search::SolveOptions;

/// Solve `board` by depth-first search.
///
/// `opts.max_depth` prunes expansion (not goal-testing) of nodes at that
/// depth. Exploration order is deterministic: at every expansion the successor
/// moves are ordered by ascending vehicle index, then direction
/// (`down < left < right < up`), then step count.
pub fn solve_dfs(board: &Board, opts: SolveOptions<'_>) -> Result<SolveReport, SolveError> {
    board.validate()?;

    let max_depth = opts.max_depth;
    let mut monitor = SearchMonitor::new(opts.cancel, opts.on_progress);
    let mut arena = PathArena::rooted(board.start.clone());
    let mut visited: FxHashSet<State> = FxHashSet::default();
    visited.insert(board.start.clone());

    let mut stack: Vec<u32> = vec![0];
    let mut moves = MoveBuf::new();

    while let Some(idx) = stack.pop() {
        if monitor.cancelled() {
            let metrics = monitor.finish(stack.len(), 0);
            return Ok(report::terminal(board, Status::Aborted, metrics));
        }

        let depth = arena.node(idx).depth;
        let state = arena.node(idx).state.clone();
        monitor.expanded(stack.len(), depth);

        if kernel::is_goal(board, &state) {
            let (moves, history) = arena.reconstruct(idx);
            let metrics = monitor.finish(stack.len(), moves.len() as u32);
            return Ok(report::solved(board, moves, history, metrics));
        }

        if max_depth.is_some_and(|bound| depth >= bound) {
            continue;
        }

        let occ = Occupancy::project(board, &state);
        kernel::generate_moves(board, &state, &occ, &mut moves);
        // Generation order is already canonical; the sort states the contract.
        moves.sort_by_key(|m| (m.vehicle, m.direction));

        // Push in reverse so the stack pops successors in sorted order.
        for &mv in moves.iter().rev() {
            let next = kernel::apply_move(&state, mv);
            if visited.insert(next.clone()) {
                let child = arena.push(next, idx, mv, depth + 1);
                stack.push(child);
            }
        }
    }

    let metrics = monitor.finish(0, 0);
    Ok(report::terminal(board, Status::Unsolved, metrics))
}
