//! Per-query search state and the round transition

use crate::core::Ladder;
use crate::error::LadderError;
use crate::index::PatternIndex;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Where a query currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Unfinished ladders remain and the target has not been reached
    Active,
    /// A ladder reached the target
    Succeeded,
    /// Every ladder hit a dead end without reaching the target
    Exhausted,
}

/// State of one ladder query
///
/// Created fresh for every query, so independent queries never observe each
/// other's frontier or reached words. Every ladder in the frontier has taken
/// the same number of steps, which is what makes the first ladder to touch the
/// target a shortest one.
#[derive(Debug, Clone)]
pub struct SearchState {
    target: String,
    frontier: Vec<Ladder>,
    reached: FxHashSet<String>,
    status: SearchStatus,
    winner: Option<Ladder>,
    rounds: usize,
}

impl SearchState {
    /// Start a query from `start` towards `target`
    ///
    /// The frontier holds the single ladder `[start]` and only `start` counts
    /// as reached. When `start == target` the query is already won with a
    /// zero-step ladder.
    #[must_use]
    pub fn new(start: &str, target: &str) -> Self {
        let seed = Ladder::new(start);

        let (status, frontier, winner) = if start == target {
            (SearchStatus::Succeeded, Vec::new(), Some(seed))
        } else {
            (SearchStatus::Active, vec![seed], None)
        };

        let mut reached = FxHashSet::default();
        reached.insert(start.to_string());

        Self {
            target: target.to_string(),
            frontier,
            reached,
            status,
            winner,
            rounds: 0,
        }
    }

    /// Extend every frontier ladder by one word
    ///
    /// Ladders with no unclaimed neighbour are dropped. The first ladder whose
    /// neighbours include the target wins and ends the round. Otherwise a
    /// ladder keeps its first neighbour (in sorted order) and a copy is made
    /// for each other neighbour. Each word is claimed as soon as a ladder takes
    /// it, so later ladders in the same round cannot reuse it.
    ///
    /// Does nothing once the query has finished.
    ///
    /// # Errors
    /// Returns `LadderError::UnknownWord` if a frontier word is missing from
    /// `index`, which only happens when the query was started against a
    /// different dictionary. The state is left unchanged in that case.
    pub fn extend_paths(&mut self, index: &PatternIndex) -> Result<SearchStatus, LadderError> {
        if self.status != SearchStatus::Active {
            return Ok(self.status);
        }

        // Look up every ladder's neighbours before touching any state, so a
        // failed lookup leaves the query exactly as it was
        let neighbours: Vec<Vec<&str>> = self
            .frontier
            .iter()
            .map(|ladder| {
                ladder
                    .last_word()
                    .map_or_else(|| Ok(Vec::new()), |last| index.transformable_words(last))
            })
            .collect::<Result<_, _>>()?;

        self.rounds += 1;
        let frontier = std::mem::take(&mut self.frontier);
        let mut next_frontier = Vec::with_capacity(frontier.len());

        for (mut ladder, neighbours) in frontier.into_iter().zip(neighbours) {
            let candidates: Vec<&str> = neighbours
                .into_iter()
                .filter(|word| !self.reached.contains(*word))
                .collect();

            let Some((&first, rest)) = candidates.split_first() else {
                trace!(round = self.rounds, word = ?ladder.last_word(), "dead end");
                continue;
            };

            if candidates.binary_search(&self.target.as_str()).is_ok() {
                ladder.push(self.target.clone());
                self.reached.insert(self.target.clone());
                self.winner = Some(ladder);
                self.status = SearchStatus::Succeeded;
                debug!(round = self.rounds, "target reached");
                return Ok(self.status);
            }

            let branches: Vec<Ladder> = rest
                .iter()
                .map(|&word| {
                    let mut branch = ladder.clone();
                    branch.push(word);
                    branch
                })
                .collect();
            self.reached.extend(rest.iter().map(|&word| word.to_string()));

            ladder.push(first);
            self.reached.insert(first.to_string());

            next_frontier.push(ladder);
            next_frontier.extend(branches);
        }

        debug!(
            round = self.rounds,
            frontier = next_frontier.len(),
            reached = self.reached.len(),
            "extended paths"
        );

        if next_frontier.is_empty() {
            self.status = SearchStatus::Exhausted;
        }
        self.frontier = next_frontier;

        Ok(self.status)
    }

    /// Apply rounds until the query succeeds or runs out of ladders
    ///
    /// # Errors
    /// Propagates errors from [`SearchState::extend_paths`].
    pub fn run(mut self, index: &PatternIndex) -> Result<Self, LadderError> {
        while self.status == SearchStatus::Active {
            self.extend_paths(index)?;
        }
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Ladders still being extended
    #[inline]
    #[must_use]
    pub fn frontier(&self) -> &[Ladder] {
        &self.frontier
    }

    /// True if some ladder has already claimed `word`
    #[inline]
    #[must_use]
    pub fn is_reached(&self, word: &str) -> bool {
        self.reached.contains(word)
    }

    /// Number of words claimed so far, including the start word
    #[inline]
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.reached.len()
    }

    /// Number of rounds applied so far
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// The winning ladder, if the query succeeded
    #[inline]
    #[must_use]
    pub const fn winner(&self) -> Option<&Ladder> {
        self.winner.as_ref()
    }

    /// Consume the state and return the winning ladder, if any
    #[must_use]
    pub fn into_ladder(self) -> Option<Ladder> {
        self.winner
    }
}
