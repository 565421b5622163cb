//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_symbols};
use crate::commands::{BenchmarkResult, SolveResult, StarterReport};
use crate::game::MAX_TURNS;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            feedback_symbols(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let (Some(method), Some(score)) = (step.method, step.score) {
                println!("  Method:     {method}");
                println!("  Score:      {score:.4}");
            }
            if step.candidates_before > 0 {
                let eliminated = step.candidates_before - step.candidates_after;
                println!(
                    "  Eliminated: {eliminated} ({:.1}%)",
                    eliminated as f64 / step.candidates_before as f64 * 100.0
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.success_rate()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for turns in 1..=MAX_TURNS {
        let count = result.distribution.get(&turns).copied().unwrap_or(0);
        let pct = if result.total_words == 0 {
            0.0
        } else {
            count as f64 / result.total_words as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turns}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failed words:".red().bold());
        let failed: Vec<String> = result
            .failures
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("   {}", failed.join(", "));
    }
}

/// Print ranked starter words
pub fn print_starters(report: &StarterReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} ({} words with distinct letters)",
        "STARTER WORDS".bright_cyan().bold(),
        report.eligible
    );
    println!("{}", "─".repeat(60).cyan());

    for (word, score) in &report.top {
        println!("   {word} : {score}");
    }

    match report.best {
        Some((word, score)) => println!(
            "\nBest starter is {} with a score of {score}",
            word.text().to_uppercase().bright_yellow().bold()
        ),
        None => println!("\nNo word with five distinct letters was found."),
    }
}
