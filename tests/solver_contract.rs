//! The shared solver contract: universal properties over every solver, plus
//! the end-to-end scenarios for the four search strategies.

use gridlock::search::kernel::{self, MoveBuf, Occupancy};
use gridlock::search::SolveOptions;
use gridlock::{
    parse_puzzle, puzzles, solve_astar, solve_backtracking, solve_bfs, solve_dfs, Board,
    CancelToken, Direction, SolveReport, Solver, Status,
};

const SOLVERS: [(&str, Solver); 4] = [
    ("bfs", solve_bfs),
    ("dfs", solve_dfs),
    ("backtrack", solve_backtracking),
    ("astar", solve_astar),
];

fn run(solver: Solver, board: &Board) -> SolveReport {
    solver(board, SolveOptions::new()).unwrap()
}

fn board(name: &str) -> Board {
    parse_puzzle(puzzles::by_name(name).unwrap()).unwrap()
}

/// Universal properties 1–6 of the solver contract (property 1 relaxed for
/// already-solved boards, which legitimately report zero moves).
fn check_universal(name: &str, board: &Board, report: &SolveReport) {
    match report.status {
        Status::Solved => {
            assert_eq!(report.metrics.depth as usize, report.moves.len(), "{name}");
            assert_eq!(report.state_history.len(), report.moves.len() + 1, "{name}");

            // Replaying the moves reproduces the history position by position,
            // each move is legal in its source state, and the final state
            // satisfies the goal test.
            assert_eq!(report.state_history[0], board.start, "{name}");
            let mut state = board.start.clone();
            let mut legal = MoveBuf::new();
            for (i, &mv) in report.moves.iter().enumerate() {
                let occ = Occupancy::project(board, &state);
                kernel::generate_moves(board, &state, &occ, &mut legal);
                assert!(legal.contains(&mv), "{name}: illegal move {mv:?} at step {i}");
                state = kernel::apply_move(&state, mv);
                assert_eq!(state, report.state_history[i + 1], "{name}: step {i}");
            }
            assert!(kernel::is_goal(board, &state), "{name}");
        }
        Status::Unsolved | Status::Aborted => {
            assert!(report.moves.is_empty(), "{name}");
            assert_eq!(report.state_history.len(), 1, "{name}");
            assert_eq!(report.state_history[0], board.start, "{name}");
            assert_eq!(report.metrics.depth, 0, "{name}");
        }
    }

    assert_eq!(report.vehicle_labels.len(), board.vehicles.len(), "{name}");
    assert_eq!(report.actions.len(), report.moves.len(), "{name}");
    assert!(report.actions.iter().all(|a| !a.is_empty()), "{name}");

    // No reachable state in the history puts two vehicles on one cell or any
    // vehicle outside the grid.
    for state in &report.state_history {
        let mut seen = vec![false; (board.rows * board.cols) as usize];
        for (i, vehicle) in board.vehicles.iter().enumerate() {
            for cell in vehicle.cells(state.anchor(i)) {
                assert!(board.contains(cell), "{name}: {cell} outside grid");
                let at = (cell.row as u32 * board.cols + cell.col as u32) as usize;
                assert!(!seen[at], "{name}: overlap at {cell}");
                seen[at] = true;
            }
        }
    }
}

#[test]
fn universal_properties_hold_on_every_built_in() {
    for name in puzzles::names() {
        let board = board(name);
        for (solver_name, solver) in SOLVERS {
            let report = run(solver, &board);
            check_universal(&format!("{name}/{solver_name}"), &board, &report);
        }
    }
}

#[test]
fn scenario_a_bfs_is_three_moves_on_the_corridor_puzzle() {
    let board = board("corridor_two_trucks");
    let report = run(solve_bfs, &board);
    assert_eq!(report.status, Status::Solved);
    assert_eq!(report.moves.len(), 3);

    let goal_vehicle = &board.vehicles[board.goal];
    let final_anchor = report.state_history[3].anchor(board.goal);
    assert!(goal_vehicle.cells(final_anchor).any(|c| c == board.exit));
}

#[test]
fn scenario_b_left_exit_is_one_move_left() {
    let board = board("left_exit");
    for (name, solver) in [
        ("bfs", solve_bfs as Solver),
        ("astar", solve_astar),
        ("backtrack", solve_backtracking),
    ] {
        let report = run(solver, &board);
        assert_eq!(report.status, Status::Solved, "{name}");
        assert_eq!(report.moves.len(), 1, "{name}");
        assert_eq!(report.moves[0].vehicle, board.goal, "{name}");
        assert_eq!(report.moves[0].direction, Direction::Left, "{name}");
    }
}

#[test]
fn scenario_c_pre_asserted_cancellation_aborts_every_solver() {
    let board = board("classic_6x6");
    for (name, solver) in SOLVERS {
        let token = CancelToken::new();
        token.cancel();
        let opts = SolveOptions {
            cancel: Some(&token),
            on_progress: None,
            max_depth: None,
        };
        let report = solver(&board, opts).unwrap();
        assert_eq!(report.status, Status::Aborted, "{name}");
        assert!(report.moves.is_empty(), "{name}");
        assert_eq!(report.state_history.len(), 1, "{name}");
        assert_eq!(report.metrics.depth, 0, "{name}");
        assert_eq!(report.metrics.explored, 0, "{name}");
        check_universal(name, &board, &report);
    }
}

#[test]
fn scenario_d_already_solved_board_returns_no_moves() {
    let board = board("already_solved");
    for (name, solver) in SOLVERS {
        let report = run(solver, &board);
        assert_eq!(report.status, Status::Solved, "{name}");
        assert!(report.moves.is_empty(), "{name}");
        assert_eq!(report.state_history, vec![board.start.clone()], "{name}");
        assert_eq!(report.metrics.depth, 0, "{name}");
    }
}

#[test]
fn scenario_e_boxed_in_exhausts_the_reachable_states() {
    let board = board("boxed_in");
    // Two reachable states: the goal vehicle wiggles one cell; the truck over
    // the exit cannot move in a two-row grid.
    for (name, solver) in SOLVERS {
        let report = run(solver, &board);
        assert_eq!(report.status, Status::Unsolved, "{name}");
        assert_eq!(report.metrics.explored, 2, "{name}");
        assert_eq!(report.metrics.frontier, 0, "{name}");
    }
}

#[test]
fn scenario_f_reruns_are_identical() {
    for name in puzzles::names() {
        let board = board(name);
        for (solver_name, solver) in SOLVERS {
            let first = run(solver, &board);
            let second = run(solver, &board);
            let tag = format!("{name}/{solver_name}");
            assert_eq!(first.moves, second.moves, "{tag}");
            assert_eq!(first.state_history, second.state_history, "{tag}");
            assert_eq!(first.actions, second.actions, "{tag}");
            assert_eq!(first.vehicle_labels, second.vehicle_labels, "{tag}");
        }
    }
}

#[test]
fn bfs_is_minimal_among_all_solvers() {
    for name in puzzles::names() {
        let board = board(name);
        let shortest = run(solve_bfs, &board);
        for (solver_name, solver) in SOLVERS {
            let report = run(solver, &board);
            if report.status == Status::Solved {
                assert_eq!(shortest.status, Status::Solved, "{name}");
                assert!(
                    shortest.moves.len() <= report.moves.len(),
                    "{name}: bfs found {} moves, {solver_name} {}",
                    shortest.moves.len(),
                    report.moves.len()
                );
            }
        }
    }
}

#[test]
fn dfs_depth_bound_prunes_expansion() {
    let board = board("corridor_two_trucks");

    // Bound 0: only the root is goal-tested.
    let report = solve_dfs(
        &board,
        SolveOptions {
            max_depth: Some(0),
            ..SolveOptions::new()
        },
    )
    .unwrap();
    assert_eq!(report.status, Status::Unsolved);
    assert_eq!(report.metrics.explored, 1);

    // The shortest solution needs 3 moves; a bound of 2 cannot reach it.
    let report = solve_dfs(
        &board,
        SolveOptions {
            max_depth: Some(2),
            ..SolveOptions::new()
        },
    )
    .unwrap();
    assert_eq!(report.status, Status::Unsolved);

    // A generous bound leaves the solution reachable.
    let report = solve_dfs(
        &board,
        SolveOptions {
            max_depth: Some(64),
            ..SolveOptions::new()
        },
    )
    .unwrap();
    assert_eq!(report.status, Status::Solved);
}

#[test]
fn dfs_and_backtracking_agree_without_a_bound() {
    for name in puzzles::names() {
        let board = board(name);
        let dfs = run(solve_dfs, &board);
        let backtrack = run(solve_backtracking, &board);
        assert_eq!(dfs.status, backtrack.status, "{name}");
        assert_eq!(dfs.moves, backtrack.moves, "{name}");
        assert_eq!(dfs.state_history, backtrack.state_history, "{name}");
        assert_eq!(dfs.metrics.explored, backtrack.metrics.explored, "{name}");
        assert_eq!(dfs.metrics.frontier, backtrack.metrics.frontier, "{name}");
    }
}

#[test]
fn structural_defects_are_errors_not_unsolved() {
    // A hand-assembled board without vehicles must fail validation in every
    // solver instead of reporting `unsolved`.
    let mut broken = board("left_exit");
    broken.vehicles.clear();
    for (name, solver) in SOLVERS {
        let err = solver(&broken, SolveOptions::new()).unwrap_err();
        assert!(
            matches!(err, gridlock::SolveError::InvalidBoardData { .. }),
            "{name}: {err:?}"
        );
    }

    // A goal index that names a non-goal vehicle is equally structural.
    let mut broken = board("classic_6x6");
    broken.goal = 0;
    for (name, solver) in SOLVERS {
        let err = solver(&broken, SolveOptions::new()).unwrap_err();
        assert!(
            matches!(err, gridlock::SolveError::InvalidBoardData { .. }),
            "{name}: {err:?}"
        );
    }
}

#[test]
fn solved_reports_carry_localized_actions() {
    let board = board("left_exit");
    let report = run(solve_bfs, &board);
    assert_eq!(
        report.actions,
        vec!["mover carro objetivo hacia la izquierda 2 espacios"]
    );
    assert_eq!(report.vehicle_labels, vec!["carro objetivo"]);
}
