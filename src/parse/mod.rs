//! Textual puzzle parser.
//!
//! A puzzle file is zero or more board rows of whitespace-separated tokens
//! followed by one exit line `Salida: <row>, <col>` (case-insensitive, 0-based
//! coordinates). Token alphabet:
//!
//! | token | meaning |
//! |-------|---------|
//! | `.`   | empty cell |
//! | `-`   | horizontal segment |
//! | `>`   | horizontal head |
//! | `<`   | horizontal tail |
//! | `\|`  | vertical segment |
//! | `v`   | vertical tail |
//! | `B`   | goal-vehicle cell (orientation inferred from neighbors) |
//!
//! Vehicles are extracted in row-major discovery order; that order is the
//! positional index every search state uses.

use std::fmt;

use crate::board::{Board, Orientation, Vehicle};
use crate::core::{Anchor, Cell, State, MAX_VEHICLES};

/// Label of the goal vehicle. Other vehicles are `carro 1`, `carro 2`, … in
/// discovery order, the goal not consuming a number.
pub const GOAL_LABEL: &str = "carro objetivo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is blank after normalization.
    EmptyPuzzle,
    /// No `Salida` line.
    MissingExit,
    /// `Salida` payload is not two integers.
    MalformedExit { line: String },
    /// `Salida` line present but no board rows precede it.
    EmptyBoard,
    /// A board row tokenizes to a different column count than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A token outside the seven-token alphabet.
    UnknownToken { row: usize, token: String },
    /// No vehicle contains a `B` cell.
    MissingGoal,
    /// More vehicles than the packed state encoding supports.
    TooManyVehicles { count: usize },
    /// More rows or columns than the packed anchor encoding supports.
    GridTooLarge { rows: usize, cols: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyPuzzle => write!(f, "empty puzzle text"),
            ParseError::MissingExit => write!(f, "no Salida line found"),
            ParseError::MalformedExit { line } => {
                write!(f, "malformed Salida coordinates in {line:?}")
            }
            ParseError::EmptyBoard => write!(f, "no board rows before the Salida line"),
            ParseError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "board row {row} has {found} columns, expected {expected}"
            ),
            ParseError::UnknownToken { row, token } => {
                write!(f, "unknown token {token:?} in board row {row}")
            }
            ParseError::MissingGoal => write!(f, "board has no goal vehicle (no B cell)"),
            ParseError::TooManyVehicles { count } => {
                write!(f, "board has {count} vehicles, limit is {MAX_VEHICLES}")
            }
            ParseError::GridTooLarge { rows, cols } => {
                write!(f, "grid {rows}x{cols} exceeds the 256x256 limit")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Empty,
    HorizBody,
    HorizHead,
    HorizTail,
    VertBody,
    VertTail,
    Goal,
}

impl Token {
    fn from_str(s: &str) -> Option<Token> {
        match s {
            "." => Some(Token::Empty),
            "-" => Some(Token::HorizBody),
            ">" => Some(Token::HorizHead),
            "<" => Some(Token::HorizTail),
            "|" => Some(Token::VertBody),
            "v" => Some(Token::VertTail),
            "B" => Some(Token::Goal),
            _ => None,
        }
    }

    /// Membership in the horizontal token set. `Goal` belongs to both sets.
    #[inline]
    fn horizontal(self) -> bool {
        matches!(
            self,
            Token::HorizBody | Token::HorizHead | Token::HorizTail | Token::Goal
        )
    }

    /// Membership in the vertical token set.
    #[inline]
    fn vertical(self) -> bool {
        matches!(self, Token::VertBody | Token::VertTail | Token::Goal)
    }
}

/// If `line` is an exit line, return the payload after the colon.
///
/// Detection only requires the leading token to match `Salida` (any case)
/// followed by `:`; a detected line with a bad payload is `MalformedExit`,
/// not `MissingExit`.
fn exit_payload(line: &str) -> Option<&str> {
    let t = line.trim_start();
    if t.len() < 6 || !t.is_char_boundary(6) || !t[..6].eq_ignore_ascii_case("salida") {
        return None;
    }
    t[6..].trim_start().strip_prefix(':')
}

fn parse_exit(line: &str, payload: &str) -> Result<Cell, ParseError> {
    let malformed = || ParseError::MalformedExit {
        line: line.trim().to_string(),
    };
    let mut parts = payload.split(',');
    let row = parts.next().ok_or_else(malformed)?;
    let col = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    let row: i32 = row.trim().parse().map_err(|_| malformed())?;
    let col: i32 = col.trim().parse().map_err(|_| malformed())?;
    Ok(Cell::new(row, col))
}

/// Parse puzzle text into a [`Board`].
pub fn parse_puzzle(text: &str) -> Result<Board, ParseError> {
    // `lines` splits on LF; `trim_end` drops the CR of CRLF along with trailing
    // whitespace. Blank lines are ignored.
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::EmptyPuzzle);
    }

    let (exit_idx, payload) = lines
        .iter()
        .enumerate()
        .find_map(|(i, l)| exit_payload(l).map(|p| (i, p)))
        .ok_or(ParseError::MissingExit)?;
    let exit = parse_exit(lines[exit_idx], payload)?;

    let board_lines = &lines[..exit_idx];
    if board_lines.is_empty() {
        return Err(ParseError::EmptyBoard);
    }

    let grid = tokenize(board_lines)?;
    let (vehicles, start) = extract_vehicles(&grid)?;

    let goal = vehicles
        .iter()
        .position(|v| v.is_goal)
        .ok_or(ParseError::MissingGoal)?;

    Ok(Board {
        rows: grid.len() as u32,
        cols: grid[0].len() as u32,
        exit,
        vehicles,
        goal,
        start,
    })
}

fn tokenize(board_lines: &[&str]) -> Result<Vec<Vec<Token>>, ParseError> {
    let mut grid: Vec<Vec<Token>> = Vec::with_capacity(board_lines.len());
    for (row, line) in board_lines.iter().enumerate() {
        let mut toks = Vec::new();
        for raw in line.split_whitespace() {
            let tok = Token::from_str(raw).ok_or_else(|| ParseError::UnknownToken {
                row,
                token: raw.to_string(),
            })?;
            toks.push(tok);
        }
        if let Some(first) = grid.first() {
            if toks.len() != first.len() {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: first.len(),
                    found: toks.len(),
                });
            }
        }
        grid.push(toks);
    }

    let rows = grid.len();
    let cols = grid[0].len();
    if rows > 256 || cols > 256 {
        return Err(ParseError::GridTooLarge { rows, cols });
    }
    Ok(grid)
}

/// Scan the grid in row-major order, growing a vehicle from every unvisited
/// non-empty cell.
fn extract_vehicles(grid: &[Vec<Token>]) -> Result<(Vec<Vehicle>, State), ParseError> {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut visited = vec![vec![false; cols]; rows];

    let mut vehicles: Vec<Vehicle> = Vec::new();
    let mut anchors = [Anchor::new(0, 0); MAX_VEHICLES];
    let mut goal_seen = false;
    let mut next_number = 1usize;

    for r in 0..rows {
        for c in 0..cols {
            if visited[r][c] || grid[r][c] == Token::Empty {
                continue;
            }

            let seed = grid[r][c];
            let orientation = orient(grid, r, c, seed);

            // Grow greedily along the axis, absorbing contiguous same-axis
            // tokens (including further goal cells). The row-major scan
            // guarantees the seed is the leftmost/topmost cell of its run.
            let mut length = 1u32;
            let mut has_goal = seed == Token::Goal;
            visited[r][c] = true;
            match orientation {
                Orientation::Horizontal => {
                    while c + (length as usize) < cols {
                        let tok = grid[r][c + length as usize];
                        if tok == Token::Empty || !tok.horizontal() {
                            break;
                        }
                        visited[r][c + length as usize] = true;
                        has_goal |= tok == Token::Goal;
                        length += 1;
                    }
                }
                Orientation::Vertical => {
                    while r + (length as usize) < rows {
                        let tok = grid[r + length as usize][c];
                        if tok == Token::Empty || !tok.vertical() {
                            break;
                        }
                        visited[r + length as usize][c] = true;
                        has_goal |= tok == Token::Goal;
                        length += 1;
                    }
                }
                Orientation::Single => {}
            }

            if vehicles.len() == MAX_VEHICLES {
                return Err(ParseError::TooManyVehicles {
                    count: vehicles.len() + 1,
                });
            }

            // Only the first vehicle containing a goal cell is the goal.
            let is_goal = has_goal && !goal_seen;
            goal_seen |= is_goal;
            let label = if is_goal {
                GOAL_LABEL.to_string()
            } else {
                let label = format!("carro {next_number}");
                next_number += 1;
                label
            };

            anchors[vehicles.len()] = Anchor::new(r as u8, c as u8);
            vehicles.push(Vehicle {
                orientation,
                length,
                is_goal,
                label,
            });
        }
    }

    if vehicles.is_empty() {
        return Err(ParseError::MissingGoal);
    }
    let count = vehicles.len();
    Ok((vehicles, State::new(count, anchors)))
}

/// Decide a seed cell's orientation.
///
/// Non-goal tokens belong to exactly one axis. A goal cell belongs to both, so
/// its orientation comes from its neighbors: any horizontal neighbor at
/// column ±1 wins, then any vertical neighbor at row ±1, else it stands alone.
fn orient(grid: &[Vec<Token>], r: usize, c: usize, seed: Token) -> Orientation {
    if seed != Token::Goal {
        return if seed.horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
    }

    let horiz_neighbor = (c > 0 && grid[r][c - 1] != Token::Empty && grid[r][c - 1].horizontal())
        || (c + 1 < grid[r].len() && grid[r][c + 1] != Token::Empty && grid[r][c + 1].horizontal());
    if horiz_neighbor {
        return Orientation::Horizontal;
    }

    let vert_neighbor = (r > 0 && grid[r - 1][c] != Token::Empty && grid[r - 1][c].vertical())
        || (r + 1 < grid.len() && grid[r + 1][c] != Token::Empty && grid[r + 1][c].vertical());
    if vert_neighbor {
        return Orientation::Vertical;
    }

    Orientation::Single
}
