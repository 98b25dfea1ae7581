//! Best-first solver over `f = g + h` with a heap-ordered open set.
//!
//! `g` counts moves from the start (unit cost per slide). The heuristic
//! penalizes occupied cells in the corridor between the goal vehicle and the
//! exit at twice their count, which is deliberately *not* admissible for the
//! unit-cost move model: it trades optimality for a strong pull away from
//! blocked corridors. Callers that need a shortest solution use BFS.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::board::{Board, Orientation};
use crate::core::{Cell, State};
use crate::search::kernel::{self, MoveBuf, Occupancy};
use crate::search::monitor::SearchMonitor;
use crate::search::path::PathArena;
use crate::search::report::{self, SolveError, SolveReport, Status};
use crate::search::SolveOptions;

/// Open-set entry. Ordered as a *min*-heap on `(f, h, seq)` inside the std
/// max-heap: lower `f` wins, ties prefer the node closer to the goal, and
/// remaining ties go to the older entry so runs are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    h: u32,
    seq: u64,
    idx: u32,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Estimate of remaining moves for `state`.
///
/// Aligned goal vehicles pay exit distance plus 2 per occupied corridor cell;
/// misaligned and single goals pay the anchor-to-exit Manhattan distance.
pub fn heuristic(board: &Board, state: &State) -> u32 {
    let vehicle = &board.vehicles[board.goal];
    let anchor = state.anchor(board.goal);
    let exit = board.exit;

    match vehicle.orientation {
        Orientation::Single => anchor.cell().manhattan(exit),
        Orientation::Horizontal => {
            if anchor.row() != exit.row {
                return anchor.cell().manhattan(exit);
            }
            let head = anchor.col();
            let tail = head + vehicle.length as i32 - 1;
            if (head..=tail).contains(&exit.col) {
                0
            } else if exit.col > tail {
                let occ = Occupancy::project(board, state);
                let blockers = (tail + 1..=exit.col)
                    .filter(|&c| occ.is_occupied(Cell::new(exit.row, c)))
                    .count() as u32;
                (exit.col - tail) as u32 + 2 * blockers
            } else {
                let occ = Occupancy::project(board, state);
                let blockers = (exit.col..=head - 1)
                    .filter(|&c| occ.is_occupied(Cell::new(exit.row, c)))
                    .count() as u32;
                (head - exit.col) as u32 + 2 * blockers
            }
        }
        Orientation::Vertical => {
            if anchor.col() != exit.col {
                return anchor.cell().manhattan(exit);
            }
            let head = anchor.row();
            let tail = head + vehicle.length as i32 - 1;
            if (head..=tail).contains(&exit.row) {
                0
            } else if exit.row > tail {
                let occ = Occupancy::project(board, state);
                let blockers = (tail + 1..=exit.row)
                    .filter(|&r| occ.is_occupied(Cell::new(r, exit.col)))
                    .count() as u32;
                (exit.row - tail) as u32 + 2 * blockers
            } else {
                let occ = Occupancy::project(board, state);
                let blockers = (exit.row..=head - 1)
                    .filter(|&r| occ.is_occupied(Cell::new(r, exit.col)))
                    .count() as u32;
                (head - exit.row) as u32 + 2 * blockers
            }
        }
    }
}

/// Solve `board` by A* search.
pub fn solve_astar(board: &Board, opts: SolveOptions<'_>) -> Result<SolveReport, SolveError> {
    board.validate()?;

    let mut monitor = SearchMonitor::new(opts.cancel, opts.on_progress);
    let mut arena = PathArena::rooted(board.start.clone());
    let mut best: FxHashMap<State, u32> = FxHashMap::default();
    best.insert(board.start.clone(), 0);

    let mut open: BinaryHeap<OpenNode> = BinaryHeap::new();
    let h0 = heuristic(board, &board.start);
    open.push(OpenNode {
        f: h0,
        h: h0,
        seq: 0,
        idx: 0,
    });
    let mut seq = 1u64;
    let mut moves = MoveBuf::new();

    while let Some(entry) = open.pop() {
        if monitor.cancelled() {
            let metrics = monitor.finish(open.len(), 0);
            return Ok(report::terminal(board, Status::Aborted, metrics));
        }

        let g = arena.node(entry.idx).depth;
        let state = arena.node(entry.idx).state.clone();

        // A better route to this state was found after this entry was pushed.
        if best.get(&state).is_some_and(|&b| g > b) {
            continue;
        }

        monitor.expanded(open.len(), g);

        if kernel::is_goal(board, &state) {
            let (moves, history) = arena.reconstruct(entry.idx);
            let metrics = monitor.finish(open.len(), moves.len() as u32);
            return Ok(report::solved(board, moves, history, metrics));
        }

        let occ = Occupancy::project(board, &state);
        kernel::generate_moves(board, &state, &occ, &mut moves);
        for &mv in moves.iter() {
            let next = kernel::apply_move(&state, mv);
            let tentative = g + 1;
            if best.get(&next).map_or(true, |&b| tentative < b) {
                best.insert(next.clone(), tentative);
                let h = heuristic(board, &next);
                let child = arena.push(next, entry.idx, mv, tentative);
                open.push(OpenNode {
                    f: tentative + h,
                    h,
                    seq,
                    idx: child,
                });
                seq += 1;
            }
        }
    }

    let metrics = monitor.finish(0, 0);
    Ok(report::terminal(board, Status::Unsolved, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_puzzle;

    #[test]
    fn covered_exit_scores_zero() {
        let board = parse_puzzle("B B\nSalida: 0,1").unwrap();
        assert_eq!(heuristic(&board, &board.start), 0);
    }

    #[test]
    fn corridor_blockers_cost_double() {
        // Tail at col 1, exit at col 4, one occupied corridor cell (col 3).
        let board = parse_puzzle("B B . | .\n. . . v .\nSalida: 0,4").unwrap();
        assert_eq!(heuristic(&board, &board.start), 3 + 2);
    }

    #[test]
    fn left_exit_counts_blockers_from_the_head() {
        let board = parse_puzzle(". | B B\n. v . .\nSalida: 0,0").unwrap();
        assert_eq!(heuristic(&board, &board.start), 2 + 2);
    }

    #[test]
    fn misaligned_goal_uses_manhattan_distance() {
        let board = parse_puzzle("B B .\n. . .\nSalida: 1,2").unwrap();
        assert_eq!(heuristic(&board, &board.start), 3);
    }
}
