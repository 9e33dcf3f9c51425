use crate::{Automaton, StateId, StateSet, TransitionFunction};
use std::collections::{BTreeMap, BTreeSet};

/// A complete DFA with its states renumbered densely from `0`.
struct DenseDfa {
    len: usize,
    initial: StateId,
    finals: Vec<bool>,
    /// `next[state][symbol index]`
    next: Vec<Vec<StateId>>,
}

impl DenseDfa {
    fn new(complete_dfa: &Automaton) -> Self {
        let index: BTreeMap<StateId, StateId> = complete_dfa
            .states
            .iter()
            .enumerate()
            .map(|(i, &state)| (state, i))
            .collect();

        let next = complete_dfa
            .states
            .iter()
            .map(|&state| {
                complete_dfa
                    .alphabet
                    .iter()
                    .map(|&symbol| {
                        // a complete DFA has exactly one target per state and symbol
                        let target = complete_dfa.targets(state, symbol).next().unwrap_or(state);
                        index[&target]
                    })
                    .collect()
            })
            .collect();

        let initial = complete_dfa
            .initial_states
            .first()
            .map_or(0, |state| index[state]);

        Self {
            len: index.len(),
            initial,
            finals: complete_dfa
                .states
                .iter()
                .map(|state| complete_dfa.final_states.contains(state))
                .collect(),
            next,
        }
    }
}

impl Automaton {
    /// Product construction over the union of both alphabets.
    ///
    /// Both operands are determinized and completed first, so every product state has
    /// exactly one successor per symbol. The pair `(a, b)` becomes state `nb * a + b`,
    /// where `nb` is the number of states of the completed `other`. A product state is
    /// final when `combine(a is final, b is final)` holds.
    pub fn product(&self, other: &Automaton, combine: impl Fn(bool, bool) -> bool) -> Automaton {
        let alphabet: BTreeSet<char> = self.alphabet.union(&other.alphabet).copied().collect();

        let a = DenseDfa::new(&self.with_alphabet(&alphabet).determinize().complete());
        let b = DenseDfa::new(&other.with_alphabet(&alphabet).determinize().complete());
        let pair = |state_a: StateId, state_b: StateId| b.len * state_a + state_b;

        let mut final_states = StateSet::new();
        let mut transition_function = TransitionFunction::new();

        for state_a in 0..a.len {
            for state_b in 0..b.len {
                let state = pair(state_a, state_b);
                if combine(a.finals[state_a], b.finals[state_b]) {
                    final_states.insert(state);
                }

                for (i, &symbol) in alphabet.iter().enumerate() {
                    let target = pair(a.next[state_a][i], b.next[state_b][i]);
                    transition_function.insert((state, symbol), StateSet::from([target]));
                }
            }
        }

        log::debug!(
            "product of {} and {} states has {} states",
            a.len,
            b.len,
            a.len * b.len
        );

        Automaton::new_unchecked(
            alphabet,
            (0..a.len * b.len).collect(),
            StateSet::from([pair(a.initial, b.initial)]),
            final_states,
            transition_function,
        )
    }

    /// Accepts the words accepted by `self` or `other`.
    pub fn union_with(&self, other: &Automaton) -> Automaton {
        self.product(other, |a, b| a || b)
    }

    /// Accepts the words accepted by both `self` and `other`.
    pub fn intersection_with(&self, other: &Automaton) -> Automaton {
        self.product(other, |a, b| a && b)
    }

    /// Accepts the words accepted by `self` but not by `other`.
    pub fn difference_with(&self, other: &Automaton) -> Automaton {
        self.product(other, |a, b| a && !b)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::words;
    use crate::{Automaton, StateSet};

    fn check(
        a: &str,
        b: &str,
        operation: impl Fn(&Automaton, &Automaton) -> Automaton,
        expected: impl Fn(bool, bool) -> bool,
    ) {
        let a = Automaton::from_regex(a).unwrap();
        let b = Automaton::from_regex(b).unwrap();
        let product = operation(&a, &b);

        assert!(product.is_deterministic());
        assert!(product.is_complete());
        for word in words("abc", 5) {
            assert_eq!(
                product.accepts(&word),
                expected(a.accepts(&word), b.accepts(&word)),
                "on {word:?}"
            );
        }
    }

    #[test]
    fn union() {
        check("(a|b)*aab", "c+a?", Automaton::union_with, |a, b| a || b);
    }

    #[test]
    fn intersection() {
        check("(a|b)*aab", "((a|b)(a|b))*", Automaton::intersection_with, |a, b| {
            a && b
        });
    }

    #[test]
    fn difference() {
        check("(a|b|c)*", "a*b", Automaton::difference_with, |a, b| a && !b);
    }

    #[test]
    fn state_numbering() {
        let a = Automaton::from_regex("a").unwrap();
        let b = Automaton::from_regex("b").unwrap();
        let product = a.union_with(&b);

        // each operand completes into {start, after symbol, sink}
        assert_eq!(product.states(), &(0..9).collect::<StateSet>());
        assert_eq!(product.initial_states(), &StateSet::from([0]));
        assert_eq!(product.alphabet(), &"ab".chars().collect());
        assert!(product.accepts("a"));
        assert!(product.accepts("b"));
        assert!(!product.accepts("ab"));
    }
}
