//! Mastermind Minimax - CLI
//!
//! Exhaustive minimax Mastermind solver with narrated games, batch
//! statistics, guess analysis and a TUI watch mode.

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{PlayConfig, analyze_guess, choose_answer, run_benchmark, run_play, sample_answers, seeded_rng},
    core::{DEFAULT_COLORS, DEFAULT_PEGS, GameConfig},
    logging,
    output::{print_analysis_result, print_benchmark_result, print_game_record},
    solver::{GuessPool, Solver},
    space::CodeSpace,
};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind solver using exhaustive worst-case minimax",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colours
    #[arg(short, long, global = true, default_value_t = DEFAULT_COLORS)]
    colors: usize,

    /// Number of pegs per code
    #[arg(short, long, global = true, default_value_t = DEFAULT_PEGS)]
    pegs: usize,

    /// Guess pool: 'full' (default, every code) or 'bag' (remaining candidates only)
    #[arg(long, global = true, default_value = "full")]
    pool: String,

    /// Seed for random answers
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a random answer (default)
    Play,

    /// Solve a specific code (e.g. 1132 or 1,1,3,2)
    Solve {
        /// The hidden code
        code: String,

        /// Show the worst case of every guess
        #[arg(long)]
        detail: bool,
    },

    /// Play many games and report turn statistics
    Benchmark {
        /// Number of random answers
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Play every code in the space instead of a random sample
        #[arg(long)]
        all: bool,
    },

    /// Show how a guess splits the full code space
    Analyze {
        /// The guess to analyze
        guess: String,
    },

    /// Step through a game in the terminal UI
    Watch {
        /// Answer to play against (random if omitted)
        #[arg(short, long)]
        answer: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let config = GameConfig::new(cli.colors, cli.pegs)?;
    let Some(pool) = GuessPool::from_name(&cli.pool) else {
        bail!("Unknown guess pool '{}': expected 'full' or 'bag'", cli.pool);
    };

    let space = CodeSpace::new(config);
    log::info!("{config}: {} codes, {pool} guess pool", space.len());
    let solver = Solver::new(&space, pool);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&PlayConfig::random(cli.seed), &solver, false),
        Commands::Solve { code, detail } => {
            run_play_command(&PlayConfig::fixed(code), &solver, detail)
        }
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&solver, count, all, cli.seed)
        }
        Commands::Analyze { guess } => run_analyze_command(&guess, &solver),
        Commands::Watch { answer } => run_watch_command(&solver, answer, cli.seed),
    }
}

fn run_play_command(config: &PlayConfig, solver: &Solver, detail: bool) -> Result<()> {
    let record = run_play(config, solver).map_err(|e| anyhow!(e))?;
    print_game_record(&record, detail);
    Ok(())
}

fn run_benchmark_command(solver: &Solver, count: usize, all: bool, seed: Option<u64>) -> Result<()> {
    let space = solver.space();
    let answers = if all {
        println!("Running benchmark on all {} codes...", space.len());
        space.all()
    } else {
        println!("Running benchmark on {count} random codes...");
        sample_answers(space, count, seed)
    };

    let result = run_benchmark(solver, &answers, std::io::stderr().is_terminal())?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_analyze_command(guess: &str, solver: &Solver) -> Result<()> {
    let result = analyze_guess(guess, solver).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_watch_command(solver: &Solver, answer: Option<String>, seed: Option<u64>) -> Result<()> {
    use mastermind_minimax::interactive::{App, run_tui};

    let config = PlayConfig { answer, seed };
    let answer = choose_answer(solver.space(), &config).map_err(|e| anyhow!(e))?;

    // Offset so the first new game doesn't repeat the seeded answer
    let rng = seeded_rng(seed.map(|s| s.wrapping_add(1)));
    let app = App::new(solver, answer, rng)?;
    run_tui(app)
}
