//! The puzzle model produced by the parser.
//!
//! A [`Board`] is immutable after parsing and shared read-only by every search:
//! grid dimensions, the exit cell, the ordered vehicle list and the starting
//! state. The vehicle order is fixed by the parser and load-bearing: every
//! state is positionally indexed by it.

use crate::core::{Anchor, Cell, Direction, State};
use crate::search::report::SolveError;

/// Axis of a vehicle, fixed at parse time.
///
/// `Single` (a lone goal cell with no same-axis neighbors) may slide along both
/// axes; the other two are locked to theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Single,
}

impl Orientation {
    /// Whether a vehicle of this orientation may slide in `dir`.
    #[inline]
    pub fn allows(self, dir: Direction) -> bool {
        match self {
            Orientation::Horizontal => dir.is_horizontal(),
            Orientation::Vertical => !dir.is_horizontal(),
            Orientation::Single => true,
        }
    }

    /// Unit step from one occupied cell to the next along the vehicle's own axis.
    #[inline]
    pub(crate) fn body_step(self) -> Cell {
        match self {
            Orientation::Vertical => Cell::new(1, 0),
            // A single occupies one cell, so the step direction is irrelevant.
            Orientation::Horizontal | Orientation::Single => Cell::new(0, 1),
        }
    }
}

/// A vehicle's immutable shape. Its position lives in the [`State`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub orientation: Orientation,
    pub length: u32,
    pub is_goal: bool,
    pub label: String,
}

impl Vehicle {
    /// The cells occupied by this vehicle when anchored at `anchor`.
    pub fn cells(&self, anchor: Anchor) -> impl Iterator<Item = Cell> + '_ {
        let step = self.orientation.body_step();
        let origin = anchor.cell();
        (0..self.length as i32)
            .map(move |i| Cell::new(origin.row + step.row * i, origin.col + step.col * i))
    }

    /// The last occupied cell along the vehicle's axis (equals the anchor for length 1).
    #[inline]
    pub fn tail(&self, anchor: Anchor) -> Cell {
        let step = self.orientation.body_step();
        let origin = anchor.cell();
        let last = self.length as i32 - 1;
        Cell::new(origin.row + step.row * last, origin.col + step.col * last)
    }
}

/// An immutable puzzle definition: grid dimensions, exit cell, ordered vehicles
/// and the starting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub rows: u32,
    pub cols: u32,
    pub exit: Cell,
    pub vehicles: Vec<Vehicle>,
    /// Index of the goal vehicle in `vehicles`.
    pub goal: usize,
    pub start: State,
}

impl Board {
    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.rows as i32).contains(&cell.row) && (0..self.cols as i32).contains(&cell.col)
    }

    /// Labels of all vehicles in board order.
    pub fn labels(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.label.clone()).collect()
    }

    /// Structural validation required before a search may run.
    ///
    /// The parser only produces boards that pass this; a failure here indicates a
    /// hand-assembled board and is a programming error, not a puzzle property.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.vehicles.is_empty() {
            return Err(SolveError::InvalidBoardData {
                reason: "board has no vehicles".to_string(),
            });
        }
        match self.vehicles.get(self.goal) {
            Some(v) if v.is_goal => {}
            _ => {
                return Err(SolveError::InvalidBoardData {
                    reason: format!("goal index {} does not name a goal vehicle", self.goal),
                });
            }
        }
        if self.vehicles.len() != self.start.count() {
            return Err(SolveError::InvalidBoardData {
                reason: format!(
                    "start state has {} anchors for {} vehicles",
                    self.start.count(),
                    self.vehicles.len()
                ),
            });
        }
        Ok(())
    }
}
