//! The shared state kernel: occupancy projection, move generation, move
//! application and the goal test.
//!
//! All four solvers expand states exclusively through this module, so the move
//! semantics (and therefore the state graph) cannot drift between them.

use serde::Serialize;
use smallvec::SmallVec;

use crate::board::{Board, Orientation};
use crate::core::cell::DIRECTIONS;
use crate::core::{Cell, Direction, State};

/// A single edge in the state graph: slide vehicle `vehicle` by `steps` cells
/// in `direction`. Unit cost regardless of `steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub vehicle: usize,
    pub direction: Direction,
    pub steps: u32,
}

/// Move buffer sized for typical boards; spills to the heap on dense ones.
pub type MoveBuf = SmallVec<[Move; 16]>;

/// An `R×C` projection of a state: each cell holds the occupying vehicle index
/// or −1.
pub struct Occupancy {
    rows: i32,
    cols: i32,
    cells: Vec<i8>,
}

impl Occupancy {
    /// Project `state` onto the grid. Cost O(R·C + Σ lengths).
    pub fn project(board: &Board, state: &State) -> Occupancy {
        let rows = board.rows as i32;
        let cols = board.cols as i32;
        let mut cells = vec![-1i8; (rows * cols) as usize];
        for (i, vehicle) in board.vehicles.iter().enumerate() {
            for cell in vehicle.cells(state.anchor(i)) {
                debug_assert!((0..rows).contains(&cell.row) && (0..cols).contains(&cell.col));
                debug_assert_eq!(cells[(cell.row * cols + cell.col) as usize], -1);
                cells[(cell.row * cols + cell.col) as usize] = i as i8;
            }
        }
        Occupancy { rows, cols, cells }
    }

    /// The vehicle occupying `cell`, if any. `None` for empty or out-of-grid cells.
    #[inline]
    pub fn vehicle_at(&self, cell: Cell) -> Option<usize> {
        if !self.in_grid(cell) {
            return None;
        }
        let v = self.cells[(cell.row * self.cols + cell.col) as usize];
        (v >= 0).then_some(v as usize)
    }

    /// Whether `cell` is inside the grid and empty.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_grid(cell) && self.cells[(cell.row * self.cols + cell.col) as usize] < 0
    }

    /// Whether `cell` is inside the grid and occupied.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.in_grid(cell) && self.cells[(cell.row * self.cols + cell.col) as usize] >= 0
    }

    #[inline]
    fn in_grid(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }
}

/// Enumerate every legal move of `state` into `out`, in canonical order:
/// vehicles by ascending index, directions in `down < left < right < up` order,
/// steps ascending.
///
/// Walking outward stops at the first occupied or out-of-grid cell; a slide
/// never jumps a blocker. Each emitted `(vehicle, direction, steps)` tuple is
/// one unit-cost edge.
pub fn generate_moves(board: &Board, state: &State, occ: &Occupancy, out: &mut MoveBuf) {
    out.clear();
    for (i, vehicle) in board.vehicles.iter().enumerate() {
        let anchor = state.anchor(i);
        for dir in DIRECTIONS {
            if !vehicle.orientation.allows(dir) {
                continue;
            }
            // The first cell newly covered by a 1-step slide: ahead of the
            // anchor for up/left, ahead of the tail for down/right.
            let leading = match dir {
                Direction::Up | Direction::Left => anchor.cell(),
                Direction::Down | Direction::Right => vehicle.tail(anchor),
            };
            let delta = dir.delta();
            let mut steps = 1u32;
            loop {
                let covered = Cell::new(
                    leading.row + delta.row * steps as i32,
                    leading.col + delta.col * steps as i32,
                );
                if !occ.is_free(covered) {
                    break;
                }
                out.push(Move {
                    vehicle: i,
                    direction: dir,
                    steps,
                });
                steps += 1;
            }
        }
    }
}

/// Apply `mv` to `state`, returning a fresh state. The input is not mutated.
#[inline]
pub fn apply_move(state: &State, mv: Move) -> State {
    state.with_anchor(mv.vehicle, state.anchor(mv.vehicle).shifted(mv.direction, mv.steps))
}

/// Whether the goal vehicle's occupied cells include the exit cell.
pub fn is_goal(board: &Board, state: &State) -> bool {
    let vehicle = &board.vehicles[board.goal];
    let anchor = state.anchor(board.goal);
    let exit = board.exit;
    let len = vehicle.length as i32;
    match vehicle.orientation {
        Orientation::Horizontal => {
            anchor.row() == exit.row && (anchor.col()..anchor.col() + len).contains(&exit.col)
        }
        Orientation::Vertical => {
            anchor.col() == exit.col && (anchor.row()..anchor.row() + len).contains(&exit.row)
        }
        Orientation::Single => anchor.cell() == exit,
    }
}
