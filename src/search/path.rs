//! Parent-indexed node arena shared by all solvers for path reconstruction.

use crate::core::State;
use crate::search::kernel::Move;

/// Sentinel parent index of the root node.
const ROOT: u32 = u32::MAX;

pub(crate) struct PathNode {
    pub state: State,
    parent: u32,
    mv: Option<Move>,
    pub depth: u32,
}

/// Append-only arena of search nodes. Indices are stable, so frontiers store
/// plain `u32` handles instead of owned paths.
pub(crate) struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    /// A fresh arena whose node 0 is the initial state.
    pub fn rooted(initial: State) -> Self {
        Self {
            nodes: vec![PathNode {
                state: initial,
                parent: ROOT,
                mv: None,
                depth: 0,
            }],
        }
    }

    pub fn push(&mut self, state: State, parent: u32, mv: Move, depth: u32) -> u32 {
        let idx = self.nodes.len() as u32;
        self.nodes.push(PathNode {
            state,
            parent,
            mv: Some(mv),
            depth,
        });
        idx
    }

    #[inline]
    pub fn node(&self, idx: u32) -> &PathNode {
        &self.nodes[idx as usize]
    }

    /// Walk parent pointers from `leaf` to the root and return the forward
    /// move list plus the full state history (initial state first).
    pub fn reconstruct(&self, leaf: u32) -> (Vec<Move>, Vec<State>) {
        let mut moves = Vec::new();
        let mut states = Vec::new();
        let mut at = leaf;
        loop {
            let node = self.node(at);
            states.push(node.state.clone());
            match node.mv {
                Some(mv) => moves.push(mv),
                None => break,
            }
            at = node.parent;
        }
        moves.reverse();
        states.reverse();
        (moves, states)
    }
}
