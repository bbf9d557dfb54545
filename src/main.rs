//! Word Ladder - CLI
//!
//! Finds shortest word ladders over the embedded dictionary or a custom word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        SolveConfig, check_index, list_neighbors, run_benchmark, run_simple, solve_ladder,
    },
    core::word_length,
    output::{
        formatters::format_length, print_benchmark_result, print_check_report,
        print_neighbors_result, print_solve_result,
    },
    shortest_transform_length,
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice, words_of_length},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders via a wildcard pattern index and breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 3 and 4 letter words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Find a shortest ladder between two words
    Solve {
        start: String,
        end: String,

        /// Fail instead of adding missing start/end words to the dictionary
        #[arg(long)]
        strict: bool,

        /// Show dictionary size, rounds and timing
        #[arg(short, long)]
        details: bool,
    },

    /// Print only the number of steps (-1 if no ladder exists)
    Length { start: String, end: String },

    /// List the words one letter away from a word
    Neighbors { word: String },

    /// Verify the pattern index for every word length in the dictionary
    Check,

    /// Run random queries in parallel and report statistics
    Benchmark {
        /// Number of random queries
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for choosing query words
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    tracing::info!(words = dictionary.len(), source = %cli.wordlist, "dictionary loaded");

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&dictionary).context("interactive session failed"),
        Commands::Solve {
            start,
            end,
            strict,
            details,
        } => {
            let mut config = SolveConfig::new(&start, &end);
            if strict {
                config = config.strict();
            }
            let result = solve_ladder(&config, &dictionary)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Length { start, end } => {
            let start = start.to_lowercase();
            let end = end.to_lowercase();
            let candidates = words_of_length(&dictionary, word_length(&start));
            let steps = shortest_transform_length(&start, &end, &candidates)?;
            println!("{}", format_length(steps));
            Ok(())
        }
        Commands::Neighbors { word } => {
            let result = list_neighbors(&word, &dictionary)?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Check => {
            let report = check_index(&dictionary)?;
            print_check_report(&report);
            if report.is_consistent() {
                Ok(())
            } else {
                anyhow::bail!("index check found {} violations", report.violations.len())
            }
        }
        Commands::Benchmark { count, seed } => {
            println!("Running {count} random queries (seed {seed})...");
            let result = run_benchmark(&dictionary, count, seed, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
