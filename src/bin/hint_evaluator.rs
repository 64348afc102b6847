use clap::Parser;
use ringsort_solver::config::{PuzzleConfig, SolverConfig};
use ringsort_solver::engine::PuzzleState;
use ringsort_solver::heuristics::{count_solved_poles, suggest_move};
use ringsort_solver::solver::solve_best_first;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compares greedy hint play with the solver on random puzzles", long_about = None)]
struct Args {
    /// Number of random puzzles to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first puzzle; later puzzles use consecutive seeds
    #[clap(short, long, default_value_t = 0)]
    start_seed: u64,

    /// Moves the hint player may make per puzzle
    #[clap(short, long, default_value_t = PuzzleConfig::default().max_moves)]
    max_moves: usize,
}

/// Outcome of following hints until solved, stuck or out of moves.
struct HintRun {
    solved: bool,
    moves: usize,
    solved_poles: usize,
}

fn play_with_hints(mut game: PuzzleState) -> HintRun {
    while !game.is_solved() && !game.is_out_of_moves() {
        let Ok(hint) = suggest_move(&game) else {
            break;
        };
        if let Err(e) = game.apply_move(hint.mv.from, hint.mv.to) {
            eprintln!("Error: hint {} was rejected: {}", hint.mv, e);
            break;
        }
    }
    HintRun {
        solved: game.is_solved(),
        moves: game.move_count(),
        solved_poles: count_solved_poles(&game),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = PuzzleConfig {
        max_moves: args.max_moves,
        ..PuzzleConfig::default()
    };
    let solver_config = SolverConfig::default();

    let mut hint_wins = 0;
    let mut solver_wins = 0;
    let mut hint_moves_total = 0;
    let mut solver_moves_total = 0;

    println!("Starting hint evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let game = PuzzleState::new_random_with_seed(seed, &config).unwrap_or_else(|e| {
            eprintln!("Cannot create puzzle: {}", e);
            process::exit(2);
        });

        let hint_run = play_with_hints(game.clone());
        let solver_result = solve_best_first(&game, &solver_config);

        let hint_summary = if hint_run.solved {
            hint_wins += 1;
            hint_moves_total += hint_run.moves;
            format!("solved in {}", hint_run.moves)
        } else {
            format!("failed after {} ({} poles done)", hint_run.moves, hint_run.solved_poles)
        };
        let solver_summary = match &solver_result {
            Ok(solution) => {
                solver_wins += 1;
                solver_moves_total += solution.moves.len();
                format!("solved in {}", solution.moves.len())
            }
            Err(e) => e.to_string(),
        };

        println!(
            "Board {:<3} (Seed: {:<4}) hints: {:<28} solver: {}",
            board_idx, seed, hint_summary, solver_summary
        );
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("Hint player solved: {}/{}", hint_wins, args.boards);
    println!("Solver solved:      {}/{}", solver_wins, args.boards);
    if hint_wins > 0 {
        println!(
            "Average hint moves (solved boards):   {:.2}",
            hint_moves_total as f64 / hint_wins as f64
        );
    }
    if solver_wins > 0 {
        println!(
            "Average solver moves (solved boards): {:.2}",
            solver_moves_total as f64 / solver_wins as f64
        );
    }
}
