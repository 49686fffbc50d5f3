//! Display functions for command results

use super::formatters::{create_progress_bar, format_percent, format_question};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a target
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving for: {}",
        result.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let round = i + 1;
        let answer = if step.answer {
            "yes".green()
        } else {
            "no".red()
        };
        println!("\nRound {}: {} {}", round, format_question(step.asked), answer);

        if verbose {
            println!("  Candidates: {} remain", step.remaining);
            println!(
                "  Progress:   [{}] {}",
                create_progress_bar(step.progress, 1.0, 20).green(),
                format_percent(step.progress)
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Found {} in {} questions",
            result.secret,
            result.steps.len()
        )
        .green()
        .bold()
    );
}

/// Print the result of range analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RANGE ANALYSIS:".bright_cyan().bold(),
        format!("{}..={}", result.min, result.max)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Candidate range of {} values:", result.size);
    println!(
        "   Worst case:  {} questions",
        result.worst_case_rounds.to_string().bright_yellow()
    );
    println!("   Expected:    {:.1} questions", result.expected_rounds);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rounds in result.min_rounds..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {rounds:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
