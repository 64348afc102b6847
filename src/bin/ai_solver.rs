use clap::Parser;
use log::error;
use ringsort_solver::config::{PuzzleConfig, SolverConfig};
use ringsort_solver::engine::{reference_layout, PuzzleState};
use ringsort_solver::solver::solve_best_first;
use ringsort_solver::utils::puzzle_from_layout_text;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of states the solver may expand
    #[clap(short, long, default_value_t = SolverConfig::default().node_budget)]
    node_budget: usize,

    /// Optional wall-clock limit for the search, in milliseconds
    #[clap(short, long)]
    time_budget_ms: Option<u64>,

    /// Solve a random puzzle generated from this seed instead of the reference puzzle
    #[clap(short, long, conflicts_with = "layout_file")]
    seed: Option<u64>,

    /// Number of colors (one full pole each when solved)
    #[clap(long, default_value_t = PuzzleConfig::default().color_count)]
    colors: usize,

    /// Number of poles
    #[clap(long, default_value_t = PuzzleConfig::default().pole_count)]
    poles: usize,

    /// Rings per pole
    #[clap(long, default_value_t = PuzzleConfig::default().max_rings)]
    capacity: usize,

    /// Path to a layout file (one pole per line, bottom to top, '.' for an empty pole)
    layout_file: Option<PathBuf>,
}

fn read_layout_file(path: &PathBuf, config: &PuzzleConfig) -> Result<PuzzleState, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    puzzle_from_layout_text(&content, config).map_err(|e| format!("Invalid layout: {}", e))
}

fn load_puzzle(args: &Args) -> Result<PuzzleState, String> {
    let config = PuzzleConfig {
        pole_count: args.poles,
        max_rings: args.capacity,
        color_count: args.colors,
        ..PuzzleConfig::default()
    };
    match (&args.layout_file, args.seed) {
        (Some(path), _) => read_layout_file(path, &config),
        (None, Some(seed)) => {
            PuzzleState::new_random_with_seed(seed, &config).map_err(|e| e.to_string())
        }
        (None, None) => {
            PuzzleState::from_poles_for_play(reference_layout(), &config).map_err(|e| e.to_string())
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let game = load_puzzle(&args).unwrap_or_else(|e| {
        error!("{}", e);
        eprintln!("Failed to load puzzle: {}", e);
        process::exit(2);
    });

    let solver_config = SolverConfig {
        node_budget: args.node_budget,
        time_budget: args.time_budget_ms.map(Duration::from_millis),
    };
    if let Err(e) = solver_config.validate() {
        eprintln!("{}", e);
        process::exit(2);
    }

    println!("Initial puzzle:\n{}\n", game);
    println!(
        "Searching for a solution (node budget {})...\n",
        solver_config.node_budget
    );

    match solve_best_first(&game, &solver_config) {
        Ok(solution) => {
            println!("Solution found:\n");
            println!("Moves ({}):", solution.moves.len());
            if solution.moves.is_empty() {
                println!("  No moves needed.");
            } else {
                for (i, mv) in solution.moves.iter().enumerate() {
                    println!("  Move {}: {}", i + 1, mv);
                }
            }
            println!(
                "Expanded {} states, generated {}, in {:?}\n",
                solution.stats.expanded, solution.stats.generated, solution.stats.elapsed
            );
            println!("Final puzzle:\n{}\n", solution.final_state);

            let mut replay = game.clone();
            let replayed = solution
                .moves
                .iter()
                .all(|mv| replay.apply_move(mv.from, mv.to).is_ok());
            if replayed && replay.is_solved() {
                println!("Replay check: solved.");
            } else {
                eprintln!("Replay check failed.");
                process::exit(1);
            }
        }
        Err(e) => {
            println!("No solution found: {}\n", e);
            process::exit(1);
        }
    }
}
