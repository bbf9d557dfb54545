//! Benchmark command
//!
//! Runs many random ladder queries in parallel. Queries of one word length
//! share a single read-only `LadderSearch`.

use crate::core::word_length;
use crate::error::LadderError;
use crate::search::LadderSearch;
use crate::wordlists::loader::words_of_length;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub found: usize,
    pub not_found: usize,
    pub average_length: f64,
    /// Longest ladder found as (start, end, steps)
    pub longest: Option<(String, String, usize)>,
    /// Ladder steps to number of queries
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Run `count` random queries drawn from `dictionary`
///
/// Each query picks a random start word and a random end word of the same
/// length. The same `seed` always produces the same queries.
///
/// # Errors
///
/// Returns an error if the dictionary contains an empty word.
pub fn run_benchmark<S: AsRef<str>>(
    dictionary: &[S],
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, LadderError> {
    let words: Vec<&str> = dictionary.iter().map(|word| word.as_ref()).collect();

    let mut searches: FxHashMap<usize, (Vec<String>, LadderSearch)> = FxHashMap::default();
    for &word in &words {
        let length = word_length(word);
        if length == 0 {
            return Err(LadderError::EmptyWord);
        }
        match searches.entry(length) {
            Entry::Occupied(_) => {}
            Entry::Vacant(entry) => {
                let same_length = words_of_length(&words, length);
                let search = LadderSearch::new(&same_length)?;
                entry.insert((same_length, search));
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let queries: Vec<(&str, &str)> = (0..count)
        .filter_map(|_| {
            let start = *words.choose(&mut rng)?;
            let (same_length, _) = searches.get(&word_length(start))?;
            let end = same_length.choose(&mut rng)?;
            Some((start, end.as_str()))
        })
        .collect();

    let pb = if show_progress {
        ProgressBar::new(queries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let started = Instant::now();

    let lengths: Vec<Option<usize>> = queries
        .par_iter()
        .map(|&(start, end)| {
            let (_, search) = &searches[&word_length(start)];
            let steps = search
                .shortest_ladder(start, end)?
                .map(|ladder| ladder.num_transformations());
            pb.inc(1);
            Ok::<_, LadderError>(steps)
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = started.elapsed();

    let mut distribution = BTreeMap::new();
    let mut longest: Option<(String, String, usize)> = None;
    for (&(start, end), steps) in queries.iter().zip(&lengths) {
        let Some(steps) = *steps else { continue };
        *distribution.entry(steps).or_insert(0) += 1;
        if longest.as_ref().is_none_or(|(_, _, best)| steps > *best) {
            longest = Some((start.to_string(), end.to_string(), steps));
        }
    }

    let found: usize = distribution.values().sum();
    let total_steps: usize = distribution.iter().map(|(steps, n)| steps * n).sum();
    let total_queries = queries.len();

    Ok(BenchmarkResult {
        total_queries,
        found,
        not_found: total_queries - found,
        average_length: if found > 0 {
            total_steps as f64 / found as f64
        } else {
            0.0
        },
        longest,
        distribution,
        duration,
        queries_per_second: if duration.as_secs_f64() > 0.0 {
            total_queries as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    })
}
