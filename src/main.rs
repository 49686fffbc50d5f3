//! Hi-Lo Solver - CLI
//!
//! The computer finds your secret number by dichotomy, in at most
//! ceil(log2(range size)) questions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hilo::{
    commands::{
        SolveConfig, analyze_range, print_test_all_statistics, run_benchmark, run_play,
        run_test_all, solve_target,
    },
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "hilo",
    about = "Hi-Lo game: the computer guesses your secret number by dichotomy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lower bound of the secret range
    #[arg(short, long, global = true, default_value_t = 1)]
    min: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default): think of a number, answer yes or no
    Play {
        /// Upper bound of the secret range
        #[arg(default_value_t = 100)]
        max: i32,
    },

    /// Watch the engine find a known target
    Solve {
        /// The target number to find
        target: i32,

        /// Upper bound of the secret range
        #[arg(short = 'x', long, default_value_t = 100)]
        max: i32,

        /// Show per-round candidate counts and progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a candidate range (size, question counts)
    Analyze {
        /// Upper bound of the secret range
        #[arg(default_value_t = 100)]
        max: i32,
    },

    /// Benchmark the engine against random targets
    Benchmark {
        /// Upper bound of the secret range
        #[arg(default_value_t = 1000)]
        max: i32,

        /// Number of random targets to play
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },

    /// Verify the engine against every target in the range
    TestAll {
        /// Upper bound of the secret range
        #[arg(default_value_t = 1000)]
        max: i32,

        /// Limit number of targets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let min = cli.min;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { max: 100 });

    match command {
        Commands::Play { max } => run_play(min, max)
            .map_err(|e| anyhow::anyhow!(e))
            .context("usage: hilo play [--min <MIN>] [MAX]"),
        Commands::Solve {
            target,
            max,
            verbose,
        } => run_solve_command(target, min, max, verbose),
        Commands::Analyze { max } => {
            let result = analyze_range(min, max)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { max, count } => {
            let result = run_benchmark(min, max, count).map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { max, limit } => {
            let stats = run_test_all(min, max, limit)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_solve_command(target: i32, min: i32, max: i32, verbose: bool) -> Result<()> {
    let config = SolveConfig { target, min, max };
    let result = solve_target(&config).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}
