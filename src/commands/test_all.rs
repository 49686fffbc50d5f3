//! Test all targets - exhaustive engine verification
//!
//! Plays the engine against every target in a range and checks that each
//! game ends on the right secret, then reports round statistics.

use super::solve::{SolveConfig, solve_target};
use crate::game::{GameError, RangeGuesser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all targets in a range
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub mismatches: usize,
    pub round_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    pub worst_targets: Vec<(i32, usize)>,
}

/// Play a game for every target in `min..=max` (optionally limited)
///
/// Each game runs on its own engine instance, so the targets are verified
/// in parallel.
///
/// # Errors
///
/// Returns [`GameError::InvalidRange`] for an empty, negative, or
/// over-ceiling range.
pub fn run_test_all(
    min: i32,
    max: i32,
    limit: Option<usize>,
) -> Result<TestAllStatistics, GameError> {
    let size = RangeGuesser::new(min, max)?.size() as usize;
    let total_games = limit.map_or(size, |l| l.min(size));

    println!("🎯 Testing {total_games} targets...");

    let pb = ProgressBar::new(total_games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    // (target, rounds, found the right secret)
    let outcomes: Vec<(i32, usize, bool)> = (0..total_games)
        .into_par_iter()
        .map(|offset| {
            let target = min + offset as i32;
            let config = SolveConfig { target, min, max };
            let outcome = match solve_target(&config) {
                Ok(result) => (target, result.steps.len(), result.secret == target),
                Err(_) => (target, 0, false),
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved = outcomes.iter().filter(|(_, _, ok)| *ok).count();
    let mismatches = outcomes.len() - solved;

    let mut round_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for (_, rounds, _) in &outcomes {
        *round_distribution.entry(*rounds).or_insert(0) += 1;
    }

    let total_rounds: usize = outcomes.iter().map(|(_, rounds, _)| rounds).sum();
    let average_rounds = if outcomes.is_empty() {
        0.0
    } else {
        total_rounds as f64 / outcomes.len() as f64
    };

    let max_rounds = outcomes.iter().map(|(_, r, _)| *r).max().unwrap_or(0);
    let min_rounds = outcomes.iter().map(|(_, r, _)| *r).min().unwrap_or(0);

    let mut worst_targets: Vec<(i32, usize)> = outcomes
        .iter()
        .filter(|(_, rounds, _)| *rounds == max_rounds)
        .map(|(target, rounds, _)| (*target, *rounds))
        .collect();
    worst_targets.truncate(10);

    Ok(TestAllStatistics {
        total_games: outcomes.len(),
        solved,
        mismatches,
        round_distribution,
        total_time,
        average_rounds,
        max_rounds,
        min_rounds,
        worst_targets,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXHAUSTIVE TEST RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Targets tested:   {}", stats.total_games);
    println!(
        "   Verified:         {}",
        stats.solved.to_string().green().bold()
    );
    if stats.mismatches > 0 {
        println!(
            "   Mismatches:       {}",
            stats.mismatches.to_string().red().bold()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", stats.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Round distribution:".bright_cyan().bold());
    for rounds in stats.min_rounds..=stats.max_rounds {
        if let Some(&count) = stats.round_distribution.get(&rounds) {
            let pct = (count as f64 / stats.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {rounds:2}: {bar} {count:6} ({pct:5.1}%)");
        }
    }

    if !stats.worst_targets.is_empty() && stats.max_rounds > 0 {
        println!("\n🐢 {}", "Slowest targets:".bright_cyan().bold());
        for (target, rounds) in &stats.worst_targets {
            println!("   {target}: {rounds} rounds");
        }
    }
}
