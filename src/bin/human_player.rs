use clap::Parser;
use ringsort_solver::config::{PuzzleConfig, SolverConfig};
use ringsort_solver::engine::{reference_layout, PuzzleState};
use ringsort_solver::heuristics::suggest_move;
use ringsort_solver::solver::solve_best_first;
use std::io::{self, Write};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Moves allowed before the game is lost
    #[clap(short, long, default_value_t = PuzzleConfig::default().max_moves)]
    max_moves: usize,

    /// Play random puzzles starting from this seed instead of the reference puzzle
    #[clap(short, long)]
    seed: Option<u64>,

    /// Number of colors
    #[clap(long, default_value_t = PuzzleConfig::default().color_count)]
    colors: usize,

    /// Number of poles
    #[clap(long, default_value_t = PuzzleConfig::default().pole_count)]
    poles: usize,

    /// Rings per pole
    #[clap(long, default_value_t = PuzzleConfig::default().max_rings)]
    capacity: usize,
}

fn new_puzzle(config: &PuzzleConfig, seed: Option<u64>) -> PuzzleState {
    let puzzle = match seed {
        Some(seed) => PuzzleState::new_random_with_seed(seed, config),
        None => PuzzleState::from_poles_for_play(reference_layout(), config),
    };
    puzzle.unwrap_or_else(|e| {
        eprintln!("Cannot create puzzle: {}", e);
        process::exit(2);
    })
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = PuzzleConfig {
        pole_count: args.poles,
        max_rings: args.capacity,
        color_count: args.colors,
        max_moves: args.max_moves,
    };
    let mut seed = args.seed;
    let mut game = new_puzzle(&config, seed);
    println!("Welcome to Ring Sort!");

    loop {
        println!("---------------------");
        println!("Moves: {}/{}", game.move_count(), game.max_moves());
        println!("{}", game);

        if game.is_solved() {
            println!("---------------------");
            println!("🎉 YOU WIN! 🎉 Solved in {} moves.", game.move_count());
            println!("Starting a new puzzle.");
            seed = seed.map(|s| s.wrapping_add(1));
            game = new_puzzle(&config, seed);
            continue;
        }

        if game.is_out_of_moves() {
            println!("---------------------");
            println!("You lose! Exceeded maximum moves ({}).", game.max_moves());
            println!("Game reset.");
            game.reset();
            continue;
        }

        print!("Enter your move (from to), 'h' hint, 's' solve, 'r' reset, 'n' new, 'q' quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "h" => match suggest_move(&game) {
                Ok(hint) => println!("Hint: move from pole {} to pole {}", hint.mv.from, hint.mv.to),
                Err(e) => println!("No hint: {}", e),
            },
            "s" => match solve_best_first(&game, &SolverConfig::default()) {
                Ok(solution) => {
                    let plan: Vec<String> = solution.moves.iter().map(|mv| mv.to_string()).collect();
                    println!("Solution ({} moves): {}", plan.len(), plan.join(", "));
                }
                Err(e) => println!("Solver: {}", e),
            },
            "r" => {
                game.reset();
                println!("Game reset.");
            }
            "n" => {
                seed = seed.map(|s| s.wrapping_add(1));
                game = new_puzzle(&config, seed);
                println!("New puzzle.");
            }
            other => {
                let parts: Vec<&str> = other.split_whitespace().collect();
                if parts.len() != 2 {
                    println!("Invalid input format. Use 'from to', 'h', 's', 'r', 'n' or 'q'.");
                    continue;
                }
                match (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
                    (Ok(from), Ok(to)) => match game.apply_move(from, to) {
                        Ok(()) => println!("Moved from pole {} to pole {}", from, to),
                        Err(e) => println!("Invalid move: {}", e),
                    },
                    _ => println!("Invalid input: pole numbers must be between 0 and {}.", game.pole_count() - 1),
                }
            }
        }
    }
}
