//! Benchmark command
//!
//! Times the engine against a batch of random targets.

use super::solve::{SolveConfig, solve_target};
use crate::game::RangeGuesser;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games over `min..=max` against random targets
///
/// # Errors
///
/// Returns an error if the range is invalid or `count` is zero.
pub fn run_benchmark(min: i32, max: i32, count: usize) -> Result<BenchmarkResult, String> {
    if count == 0 {
        return Err("Benchmark needs at least one game".to_string());
    }

    // Validate the range before sampling targets from it.
    RangeGuesser::new(min, max).map_err(|e| format!("Invalid range: {e}"))?;

    let mut rng = rand::rng();
    let start = Instant::now();

    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for _ in 0..count {
        let target = rng.random_range(min..=max);
        let config = SolveConfig { target, min, max };
        let result = solve_target(&config)?;
        let rounds = result.steps.len();

        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: count,
        total_rounds,
        average_rounds: total_rounds as f64 / count as f64,
        min_rounds,
        max_rounds,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64(),
    })
}
