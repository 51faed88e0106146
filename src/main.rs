//! N-Queens Solver
//!
//! Counts or enumerates placements of N non-attacking queens on an N×N
//! board using constraint-pruned backtracking, with a choice of occupancy
//! representation (boolean arrays or bitmasks) and a timing mode that
//! sweeps board sizes and exports the elapsed times as CSV.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use queens::{board, persistence, timing, ArraySolver, BitmaskSolver, Solver};

/// Counts or enumerates N-queens placements and times the search.
#[derive(Parser)]
#[command(name = "queens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size; in timing mode, the largest size of the sweep.
    #[arg(long, default_value_t = 8, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    board_size: usize,

    /// Enumerate every solution instead of stopping at the first.
    #[arg(long)]
    all_solutions: bool,

    /// Print a board diagram for each solution found.
    #[arg(long)]
    print_solutions: bool,

    /// Time repeated solves across board sizes and write a results CSV.
    #[arg(long, value_enum, default_value_t = TimingMode::Off)]
    run_tests: TimingMode,

    /// Occupancy representation to search with.
    #[arg(long, value_enum, default_value_t = Strategy::Bitmask)]
    solver: Strategy,

    /// Timing CSV destination (defaults to results_<solver>_<mode>.csv).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Timed runs per board size in timing mode.
    #[arg(long, default_value_t = 5)]
    repeats: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TimingMode {
    /// No timing sweep; solve --board-size once.
    Off,
    /// Time full enumeration at each board size.
    AllSolutions,
    /// Time the search for a single solution at each board size.
    OneSolution,
}

impl TimingMode {
    fn name(self) -> &'static str {
        match self {
            TimingMode::Off => "off",
            TimingMode::AllSolutions => "all-solutions",
            TimingMode::OneSolution => "one-solution",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Boolean occupancy arrays with explicit set/clear backtracking.
    Array,
    /// u32 occupancy masks passed by value.
    Bitmask,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Array => "array",
            Strategy::Bitmask => "bitmask",
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.run_tests {
        TimingMode::Off => run_single(&cli),
        mode => run_timing(&cli, mode),
    }
}

/// Builds the requested solver, aborting on a board too wide for the
/// bitmask representation.
fn build_solver(
    strategy: Strategy,
    board_size: usize,
    enumerate_all: bool,
    record_solutions: bool,
) -> Box<dyn Solver> {
    match strategy {
        Strategy::Array => Box::new(ArraySolver::new(board_size, enumerate_all, record_solutions)),
        Strategy::Bitmask => {
            match BitmaskSolver::new(board_size, enumerate_all, record_solutions) {
                Ok(solver) => Box::new(solver),
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            }
        }
    }
}

/// Solves one board and prints the report.
fn run_single(cli: &Cli) {
    let mut solver = build_solver(
        cli.solver,
        cli.board_size,
        cli.all_solutions,
        cli.print_solutions,
    );
    let elapsed = solver.solve();
    log::debug!("search took {:.6}s", elapsed.as_secs_f64());

    print!("{}", report(solver.as_ref()));
}

/// Renders the report: the count line, then one headed board diagram per
/// recorded solution, each followed by a blank line.
fn report(solver: &dyn Solver) -> String {
    let mut output = format!(
        "Found {} solution(s) for a board size of {}\n",
        solver.solution_count(),
        solver.board_size()
    );

    for (i, placement) in solver.solutions().iter().enumerate() {
        output.push_str(&format!("Solution {}\n", i + 1));
        output.push_str(&board::format_board(placement, solver.board_size()));
        output.push('\n');
    }

    output
}

/// Sweeps board sizes, timing each solve, and writes the results CSV.
fn run_timing(cli: &Cli, mode: TimingMode) {
    let enumerate_all = mode == TimingMode::AllSolutions;

    // reject an over-capacity sweep up front instead of partway through
    if cli.solver == Strategy::Bitmask {
        if let Err(e) = BitmaskSolver::new(cli.board_size, enumerate_all, false) {
            eprintln!("{e}");
            process::exit(1);
        }
    }

    let results = timing::run_timing_tests(cli.board_size, cli.repeats, |board_size| {
        build_solver(cli.solver, board_size, enumerate_all, false).solve()
    });

    let path = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "results_{}_{}.csv",
            cli.solver.name(),
            mode.name()
        ))
    });

    if let Err(e) = persistence::save_results(&results, &path) {
        eprintln!("Failed to save timing results: {e}");
        process::exit(1);
    }
    println!("Wrote {}", path.display());
}
