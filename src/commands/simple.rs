//! Simple interactive CLI mode
//!
//! Reads word pairs from the terminal and prints a shortest ladder for each.

use crate::core::{Ladder, word_length};
use crate::error::LadderError;
use crate::output::formatters::format_ladder;
use crate::search::LadderSearch;
use crate::wordlists::loader::words_of_length;
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::io::{self, BufRead, Write};

/// Run the interactive mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading user input or writing output fails.
pub fn run_simple<S: AsRef<str>>(dictionary: &[S]) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(dictionary, stdin.lock(), stdout.lock())
}

/// Run the interactive mode on any input and output
///
/// Each line holds a start and an end word separated by whitespace; `quit`
/// or end of input stops the loop. Searches are built once per word length
/// and reused for later queries.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, R, W>(dictionary: &[S], input: R, mut output: W) -> io::Result<()>
where
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\nWord Ladder - Interactive Mode")?;
    writeln!(output, "Enter two words of the same length, e.g. 'cold warm'.")?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    let mut searches: FxHashMap<usize, LadderSearch> = FxHashMap::default();
    let mut lines = input.lines();

    loop {
        write!(output, "Words: ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line.trim().to_lowercase();

        let (start, end) = match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => continue,
            ["quit" | "q" | "exit"] => {
                writeln!(output, "\nGoodbye!\n")?;
                return Ok(());
            }
            [start, end] => (start.to_string(), end.to_string()),
            _ => {
                writeln!(output, "❌ Expected exactly two words\n")?;
                continue;
            }
        };

        match query(&mut searches, dictionary, &start, &end) {
            Ok(Some(ladder)) => {
                writeln!(
                    output,
                    "{} ({} steps)\n",
                    format_ladder(&ladder).green().bold(),
                    ladder.num_transformations()
                )?;
            }
            Ok(None) => writeln!(output, "{}\n", "No ladder exists (-1)".red())?,
            Err(err) => writeln!(output, "❌ {err}\n")?,
        }
    }
}

fn query<S: AsRef<str>>(
    searches: &mut FxHashMap<usize, LadderSearch>,
    dictionary: &[S],
    start: &str,
    end: &str,
) -> Result<Option<Ladder>, LadderError> {
    let length = word_length(start);
    if length == 0 {
        return Err(LadderError::EmptyWord);
    }

    let search = match searches.entry(length) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            entry.insert(LadderSearch::new(words_of_length(dictionary, length))?)
        }
    };

    search.shortest_ladder(start, end)
}
