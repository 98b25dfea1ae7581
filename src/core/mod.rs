//! Low-level, allocation-free primitives.
//!
//! These types are intentionally compact and hash-friendly because all solvers operate on
//! large sets/maps of states:
//!
//! - [`cell`]: integer grid coordinates and the four slide directions.
//! - [`state`]: anchors packed into a single `u16` plus a fixed-capacity anchor vector
//!   (`MAX_VEHICLES`) that doubles as the visited-set key.

pub mod cell;
pub mod state;

pub use cell::{Cell, Direction};
pub use state::{Anchor, State, MAX_VEHICLES};
