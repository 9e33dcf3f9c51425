use crate::{Automaton, StateSet};
use std::collections::{BTreeSet, VecDeque};

/// Bounds the search for example words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSearch {
    /// Longest word to consider.
    pub max_length: usize,
}

impl Default for WordSearch {
    fn default() -> Self {
        Self { max_length: 32 }
    }
}

impl WordSearch {
    /// Search for words of at most `max_length` symbols.
    pub fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Automaton {
    /// The shortest word this automaton accepts, see [`Automaton::generate_valid_word_with`].
    pub fn generate_valid_word(&self) -> Option<String> {
        self.generate_valid_word_with(&WordSearch::default())
    }

    /// The shortest word over the alphabet this automaton rejects,
    /// see [`Automaton::generate_invalid_word_with`].
    pub fn generate_invalid_word(&self) -> Option<String> {
        self.generate_invalid_word_with(&WordSearch::default())
    }

    /// The shortest accepted word with at most `search.max_length` symbols. Among words of
    /// equal length, the one that comes first in alphabet order is returned.
    ///
    /// Returns `None` if the language has no such word.
    pub fn generate_valid_word_with(&self, search: &WordSearch) -> Option<String> {
        let word = self.shortest_word(search, false, |current| self.is_accepting(current));
        log::debug!("shortest valid word: {word:?}");
        word
    }

    /// The shortest rejected word over the alphabet with at most `search.max_length`
    /// symbols. Among words of equal length, the one that comes first in alphabet order is
    /// returned.
    ///
    /// Returns `None` if every such word is accepted.
    pub fn generate_invalid_word_with(&self, search: &WordSearch) -> Option<String> {
        let word = self.shortest_word(search, true, |current| !self.is_accepting(current));
        log::debug!("shortest invalid word: {word:?}");
        word
    }

    /// Breadth-first search over the sets of active states. Each set is visited once, by
    /// the smallest word reaching it.
    fn shortest_word(
        &self,
        search: &WordSearch,
        visit_dead_set: bool,
        found: impl Fn(&StateSet) -> bool,
    ) -> Option<String> {
        let initial = self.initial_closure();
        let mut visited = BTreeSet::from([initial.clone()]);
        let mut work_list = VecDeque::from([(initial, String::new())]);

        while let Some((current, word)) = work_list.pop_front() {
            if found(&current) {
                return Some(word);
            }
            if word.chars().count() >= search.max_length {
                continue;
            }

            for &symbol in &self.alphabet {
                let next = self.step(&current, symbol);
                if next.is_empty() && !visit_dead_set {
                    continue;
                }
                if visited.insert(next.clone()) {
                    let mut next_word = word.clone();
                    next_word.push(symbol);
                    work_list.push_back((next, next_word));
                }
            }
        }

        None
    }
}
