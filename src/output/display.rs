//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder};
use crate::commands::{BenchmarkResult, CheckReport, NeighborsResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.end.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.ladder {
        Some(ladder) => {
            println!();
            for (i, word) in ladder.words().iter().enumerate() {
                println!("  {}. {}", i.to_string().bright_black(), word.to_uppercase());
            }
            println!();
            println!("{}", format_ladder(ladder).bright_white());
            println!(
                "{}",
                format!("✅ Found in {} steps", ladder.num_transformations())
                    .green()
                    .bold()
            );
        }
        None => {
            println!("\n{}", "❌ No ladder exists (-1)".red().bold());
        }
    }

    if verbose {
        println!();
        println!("  Dictionary:  {} words", result.dictionary_size);
        println!("  Rounds:      {}", result.rounds);
        println!("  Time:        {:.3} ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the neighbours of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBOURS OF".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} of {} same-length words are one letter away",
        result.neighbors.len(),
        result.dictionary_size
    );
    if result.neighbors.is_empty() {
        println!("   {}", "(isolated word)".bright_black());
        return;
    }

    for chunk in result.neighbors.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
        println!("   {}", line.join("  "));
    }
}

/// Print the result of an index check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "INDEX CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for summary in &report.lengths {
        println!(
            "\n📐 {}-letter words: {}",
            summary.length,
            summary.words.to_string().bright_yellow()
        );
        println!("   Buckets:    {}", summary.buckets);
        println!("   Links:      {}", summary.links);
        println!("   Isolated:   {}", summary.isolated);
    }

    println!("\n   Time taken: {:.2}s", report.duration.as_secs_f64());

    if report.is_consistent() {
        println!(
            "\n{}",
            format!("✅ {} words checked, no violations", report.total_words())
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!("❌ {} violations", report.violations.len())
                .red()
                .bold()
        );
        for violation in report.violations.iter().take(20) {
            println!("   • {violation}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!("   Ladders found:    {}", format!("{}", result.found).green());
    println!(
        "   No ladder:        {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    if let Some((start, end, steps)) = &result.longest {
        println!(
            "   Longest:          {} → {} ({steps} steps)",
            start.to_uppercase(),
            end.to_uppercase()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&steps, &count) in &result.distribution {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {steps:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
