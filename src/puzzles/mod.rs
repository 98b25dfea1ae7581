//! Built-in demo puzzles.
//!
//! Small boards with known properties, used by the CLI, the integration tests
//! and the benches. Each is valid input for [`crate::parse::parse_puzzle`].

/// The goal vehicle reaches the exit with a single slide to the left.
pub const LEFT_EXIT: &str = "\
. . B B
Salida: 0,0
";

/// Seven columns wide; two trucks sit on the exit row and each must yield
/// before the goal vehicle can slide out. Shortest solution: 3 moves.
pub const CORRIDOR_TWO_TRUCKS: &str = "\
. . . . . . .
B B | . | . .
. . v . v . .
. . . . . . .
Salida: 1,6
";

/// The initial state already satisfies the goal test.
pub const ALREADY_SOLVED: &str = "\
B B .
Salida: 0,1
";

/// The exit hides under a truck that cannot move in a two-row grid; only two
/// states are reachable and neither is terminal.
pub const BOXED_IN: &str = "\
B B . |
. . . v
Salida: 0,3
";

/// A 6×6 board in the classic layout: two trucks on or crossing the exit row,
/// one bystander car. Shortest solution: 3 moves.
pub const CLASSIC_6X6: &str = "\
. . . . . .
. . | . . .
B B v . | .
. . . . v .
. . . . . .
> < . . . .
Salida: 2,5
";

/// A vertical goal vehicle over an exit at the bottom of its column, with one
/// horizontal car crossing the column. Shortest solution: 2 moves.
pub const VERTICAL_DROP: &str = "\
. . B . .
. . B . .
. . . . .
. - - . .
. . . . .
Salida: 4,2
";

/// A lone goal cell that must route around a truck to a diagonal exit.
/// Shortest solution: 2 moves.
pub const SINGLE_DETOUR: &str = "\
B . .
. | .
. v .
Salida: 2,2
";

/// The truck on the exit row can only yield downward, and the car underneath
/// must yield first. Shortest solution: 3 moves.
pub const CHAINED_BLOCKERS: &str = "\
. | . | . .
. v . v . .
B B . | . .
. . . v . .
. > - < . .
. . . . . .
Salida: 2,5
";

/// Look up a built-in puzzle by name.
pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "left_exit" => Some(LEFT_EXIT),
        "corridor_two_trucks" => Some(CORRIDOR_TWO_TRUCKS),
        "already_solved" => Some(ALREADY_SOLVED),
        "boxed_in" => Some(BOXED_IN),
        "classic_6x6" => Some(CLASSIC_6X6),
        "vertical_drop" => Some(VERTICAL_DROP),
        "single_detour" => Some(SINGLE_DETOUR),
        "chained_blockers" => Some(CHAINED_BLOCKERS),
        _ => None,
    }
}

/// Names of all built-in puzzles.
pub fn names() -> &'static [&'static str] {
    &[
        "left_exit",
        "corridor_two_trucks",
        "already_solved",
        "boxed_in",
        "classic_6x6",
        "vertical_drop",
        "single_detour",
        "chained_blockers",
    ]
}
