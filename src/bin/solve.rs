use std::process::exit;

use gridlock::{
    parse_puzzle, puzzles, solve_astar, solve_backtracking, solve_bfs, solve_dfs, SolveOptions,
    SolveReport, Solver, Status,
};

fn usage() -> ! {
    eprintln!(
        "Usage: solve <bfs|dfs|backtrack|astar> <puzzle-file|built-in> [--json] [--progress] [--max-depth N]\n\n\
         Built-in puzzles:\n  - {}",
        puzzles::names().join("\n  - ")
    );
    exit(2);
}

fn solver_by_name(name: &str) -> Option<Solver> {
    match name {
        "bfs" => Some(solve_bfs),
        "dfs" => Some(solve_dfs),
        "backtrack" => Some(solve_backtracking),
        "astar" => Some(solve_astar),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        usage();
    }

    let solver = solver_by_name(&args[1]).unwrap_or_else(|| {
        eprintln!("Unknown algorithm: {}", args[1]);
        usage();
    });

    let mut json = false;
    let mut progress = false;
    let mut max_depth: Option<u32> = None;
    let mut rest = args[3..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--json" => json = true,
            "--progress" => progress = true,
            "--max-depth" => {
                let value = rest.next().unwrap_or_else(|| usage());
                max_depth = Some(value.parse().unwrap_or_else(|_| usage()));
            }
            _ => usage(),
        }
    }

    let text: String = match puzzles::by_name(&args[2]) {
        Some(builtin) => builtin.to_string(),
        None => std::fs::read_to_string(&args[2]).unwrap_or_else(|e| {
            eprintln!("Cannot read {}: {e}", args[2]);
            exit(2);
        }),
    };

    let board = match parse_puzzle(&text) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Parse error: {e}");
            exit(2);
        }
    };

    let mut emit = |s: gridlock::ProgressSnapshot| {
        eprintln!(
            "explored={} frontier={} depth={} time_ms={}",
            s.explored, s.frontier, s.depth, s.time_ms
        );
    };
    let on_progress: Option<&mut dyn FnMut(gridlock::ProgressSnapshot)> =
        if progress { Some(&mut emit) } else { None };
    let opts = SolveOptions {
        cancel: None,
        on_progress,
        max_depth,
    };

    let report = match solver(&board, opts) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Solver error: {e}");
            exit(2);
        }
    };

    if json {
        print_json(&report);
    } else {
        print_human(&report);
    }

    exit(match report.status {
        Status::Solved => 0,
        Status::Unsolved | Status::Aborted => 1,
    });
}

fn print_json(report: &SolveReport) {
    let history: Vec<Vec<[i32; 2]>> = report
        .state_history
        .iter()
        .map(|s| s.anchors().iter().map(|a| [a.row(), a.col()]).collect())
        .collect();

    let out = serde_json::json!({
        "status": report.status,
        "moves": report.moves,
        "actions": report.actions,
        "state_history": history,
        "metrics": report.metrics,
        "vehicle_labels": report.vehicle_labels,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}

fn print_human(report: &SolveReport) {
    let m = &report.metrics;
    println!(
        "status: {} (explored={}, frontier={}, depth={}, time={}ms)",
        report.status, m.explored, m.frontier, m.depth, m.time_ms
    );
    for (i, action) in report.actions.iter().enumerate() {
        println!("  {}. {action}", i + 1);
    }
}
