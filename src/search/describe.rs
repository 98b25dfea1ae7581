//! Human-readable action strings for moves.
//!
//! Purely decorative: nothing in the search consults these.

use crate::board::Board;
use crate::core::Direction;
use crate::search::kernel::Move;

/// The localized phrase for a slide direction.
pub fn direction_phrase(dir: Direction) -> &'static str {
    match dir {
        Direction::Down => "hacia abajo",
        Direction::Left => "hacia la izquierda",
        Direction::Right => "hacia la derecha",
        Direction::Up => "hacia arriba",
    }
}

/// Render a move as `mover <label> <phrase>`, with ` <n> espacios` appended
/// for multi-cell slides.
pub fn describe_move(board: &Board, mv: Move) -> String {
    let label = &board.vehicles[mv.vehicle].label;
    let phrase = direction_phrase(mv.direction);
    if mv.steps >= 2 {
        format!("mover {label} {phrase} {} espacios", mv.steps)
    } else {
        format!("mover {label} {phrase}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_puzzle;

    #[test]
    fn single_step_omits_the_count() {
        let board = parse_puzzle("B B . | .\n. . . v .\nSalida: 0,4").unwrap();
        let mv = Move {
            vehicle: 0,
            direction: Direction::Right,
            steps: 1,
        };
        assert_eq!(
            describe_move(&board, mv),
            "mover carro objetivo hacia la derecha"
        );
    }

    #[test]
    fn multi_step_names_the_cell_count() {
        let board = parse_puzzle("B B . | .\n. . . v .\nSalida: 0,4").unwrap();
        let mv = Move {
            vehicle: 1,
            direction: Direction::Up,
            steps: 3,
        };
        assert_eq!(describe_move(&board, mv), "mover carro 1 hacia arriba 3 espacios");
    }
}
