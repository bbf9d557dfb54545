//! Public API tests for the index and the ladder search

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use word_ladder::LadderError;
use word_ladder::core::is_legal_transform;
use word_ladder::index::PatternIndex;
use word_ladder::search::{LadderSearch, SearchState, SearchStatus};
use word_ladder::shortest_transform_length;

/// Pairwise BFS distance, used as the reference answer
fn reference_distance(dictionary: &[String], start: &str, end: &str) -> Option<usize> {
    let mut distance: HashMap<&str, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start);

    while let Some(word) = queue.pop_front() {
        if word == end {
            return distance.get(word).copied();
        }
        let next = distance[word] + 1;
        for other in dictionary {
            if is_legal_transform(word, other) && !distance.contains_key(other.as_str()) {
                distance.insert(other, next);
                queue.push_back(other);
            }
        }
    }
    None
}

fn small_dictionary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{3}", 1..24)
}

#[test]
fn hot_to_dog_takes_two_steps() {
    let dictionary = ["hot", "dot", "dog", "lot", "log", "cog"];
    assert_eq!(shortest_transform_length("hot", "dog", &dictionary), Ok(Some(2)));
}

#[test]
fn isolated_end_word_has_no_ladder() {
    let dictionary = ["hot", "dot", "dog"];
    assert_eq!(shortest_transform_length("hot", "xyz", &dictionary), Ok(None));
}

#[test]
fn same_start_and_end_is_zero_steps() {
    let dictionary = ["hot", "dot", "dog"];
    assert_eq!(shortest_transform_length("dog", "dog", &dictionary), Ok(Some(0)));
}

#[test]
fn mixed_length_dictionary_is_rejected() {
    assert!(matches!(
        LadderSearch::new(["hot", "dots"]),
        Err(LadderError::MixedLength { .. })
    ));
}

#[test]
fn rounds_can_be_stepped_by_hand() {
    let search = LadderSearch::new(["cold", "cord", "card", "ward", "warm"]).unwrap();
    let mut state: SearchState = search.begin("cold", "warm").unwrap();

    let mut statuses = Vec::new();
    while state.status() == SearchStatus::Active {
        statuses.push(state.extend_paths(search.index()).unwrap());
    }

    assert_eq!(
        statuses,
        vec![
            SearchStatus::Active,
            SearchStatus::Active,
            SearchStatus::Active,
            SearchStatus::Succeeded,
        ]
    );
    assert_eq!(
        state.into_ladder().unwrap().words(),
        &["cold", "cord", "card", "ward", "warm"]
    );
}

#[test]
fn one_search_serves_parallel_queries() {
    let search = LadderSearch::new(["hot", "dot", "dog", "lot", "log", "cog"]).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["dog", "cog", "log", "lot"]
            .into_iter()
            .map(|end| {
                let search = &search;
                scope.spawn(move || search.shortest_ladder("hot", end).unwrap().unwrap())
            })
            .collect();

        let steps: Vec<usize> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().num_transformations())
            .collect();
        assert_eq!(steps, vec![2, 3, 2, 1]);
    });
}

proptest! {
    #[test]
    fn predicate_is_symmetric(a in "[ab]{0,4}", b in "[ab]{0,4}") {
        prop_assert_eq!(is_legal_transform(&a, &b), is_legal_transform(&b, &a));
    }

    #[test]
    fn predicate_matches_difference_count(a in "[abc]{1,5}", b in "[abc]{1,5}") {
        let expected = a.len() == b.len()
            && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1;
        prop_assert_eq!(is_legal_transform(&a, &b), expected);
    }

    #[test]
    fn lookups_return_valid_reciprocal_neighbours(dictionary in small_dictionary()) {
        let index = PatternIndex::new(&dictionary).unwrap();

        for word in index.words() {
            for neighbour in index.transformable_words(word).unwrap() {
                prop_assert!(dictionary.iter().any(|w| w == neighbour));
                prop_assert_eq!(neighbour.len(), word.len());
                prop_assert_ne!(neighbour, word);
                prop_assert!(is_legal_transform(word, neighbour));
                prop_assert!(index.transformable_words(neighbour).unwrap().contains(&word));
            }
        }
    }

    #[test]
    fn found_ladders_are_shortest(
        dictionary in small_dictionary(),
        start_pick in any::<prop::sample::Index>(),
        end_pick in any::<prop::sample::Index>(),
    ) {
        let start = start_pick.get(&dictionary).clone();
        let end = end_pick.get(&dictionary).clone();
        let search = LadderSearch::new(&dictionary).unwrap();

        let found = search.shortest_ladder(&start, &end).unwrap();
        let expected = reference_distance(&dictionary, &start, &end);

        prop_assert_eq!(found.as_ref().map(|l| l.num_transformations()), expected);

        if let Some(ladder) = found {
            prop_assert_eq!(ladder.first_word(), Some(start.as_str()));
            prop_assert_eq!(ladder.last_word(), Some(end.as_str()));
            for pair in ladder.words().windows(2) {
                prop_assert!(is_legal_transform(&pair[0], &pair[1]));
            }
        }
    }

    #[test]
    fn unreachable_targets_exhaust_within_dictionary_size(dictionary in small_dictionary()) {
        // "ddd" shares no letters with [abc] words, so it is never reachable
        let mut words = dictionary.clone();
        words.push("ddd".to_string());
        let search = LadderSearch::new(&words).unwrap();

        let state = search.search(&dictionary[0], "ddd").unwrap();
        prop_assert_eq!(state.status(), SearchStatus::Exhausted);
        prop_assert!(state.rounds() <= search.index().len());
    }
}
