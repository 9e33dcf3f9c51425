use crate::{Automaton, StateSet, EPSILON};
use std::collections::VecDeque;

impl Automaton {
    /// All states reachable from `from` through zero or more epsilon transitions.
    pub fn epsilon_closure(&self, from: &StateSet) -> StateSet {
        let mut closure = from.clone();
        let mut work_list: VecDeque<_> = from.iter().copied().collect();

        while let Some(state) = work_list.pop_front() {
            for next in self.targets(state, EPSILON) {
                if closure.insert(next) {
                    work_list.push_back(next);
                }
            }
        }

        closure
    }

    /// The epsilon-closed set of states reached from `current` by reading `symbol`.
    pub fn step(&self, current: &StateSet, symbol: char) -> StateSet {
        let moved = current
            .iter()
            .flat_map(|&state| self.targets(state, symbol))
            .collect();
        self.epsilon_closure(&moved)
    }

    pub(crate) fn initial_closure(&self) -> StateSet {
        self.epsilon_closure(&self.initial_states)
    }

    pub(crate) fn is_accepting(&self, current: &StateSet) -> bool {
        !current.is_disjoint(&self.final_states)
    }

    /// Returns true if the automaton accepts `word`.
    pub fn accepts(&self, word: &str) -> bool {
        let mut current = self.initial_closure();

        for symbol in word.chars() {
            current = self.step(&current, symbol);
            if current.is_empty() {
                return false;
            }
        }

        self.is_accepting(&current)
    }

    /// The active states before reading `word` and after each of its symbols.
    ///
    /// The result has one more element than `word` has symbols. Once no state is
    /// active, all later steps are empty.
    pub fn generate_match_steps(&self, word: &str) -> Vec<StateSet> {
        let mut steps = Vec::with_capacity(word.len() + 1);
        steps.push(self.initial_closure());

        for symbol in word.chars() {
            let next = match steps.last() {
                Some(current) if !current.is_empty() => self.step(current, symbol),
                _ => StateSet::new(),
            };
            steps.push(next);
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use crate::{transitions, Automaton, StateSet, EPSILON};
    use pretty_assertions::assert_eq;

    fn ends_with_ab() -> Automaton {
        Automaton::construct(
            "ab".chars().collect(),
            StateSet::from([0, 1, 2]),
            StateSet::from([0]),
            StateSet::from([2]),
            transitions! {
                (0, 'a') => [0, 1],
                (0, 'b') => [0],
                (1, 'b') => [2],
            },
        )
        .unwrap()
    }

    fn even_number_of_a() -> Automaton {
        Automaton::construct(
            "ab".chars().collect(),
            StateSet::from([0, 1]),
            StateSet::from([0]),
            StateSet::from([0]),
            transitions! {
                (0, 'a') => [1],
                (0, 'b') => [0],
                (1, 'a') => [0],
                (1, 'b') => [1],
            },
        )
        .unwrap()
    }

    fn empty_word() -> Automaton {
        Automaton::construct(
            Default::default(),
            StateSet::from([0]),
            StateSet::from([0]),
            StateSet::from([0]),
            transitions! { (0, EPSILON) => [0] },
        )
        .unwrap()
    }

    #[test]
    fn accept() {
        let automaton = ends_with_ab();
        for word in ["ab", "abab", "bbbabbbaaabbabaab"] {
            assert!(automaton.accepts(word), "{word:?}");
        }
        for word in ["", "babababaqabab", "ba"] {
            assert!(!automaton.accepts(word), "{word:?}");
        }

        let automaton = even_number_of_a();
        for word in ["", "aaaa", "baaabaaab"] {
            assert!(automaton.accepts(word), "{word:?}");
        }
        for word in ["a", "aaabbb", "bababa"] {
            assert!(!automaton.accepts(word), "{word:?}");
        }

        assert!(empty_word().accepts(""));
        assert!(!empty_word().accepts("10101"));
    }

    #[test]
    fn epsilon_cycles_terminate() {
        let automaton = Automaton::construct(
            "a".chars().collect(),
            StateSet::from([0, 1, 2, 3]),
            StateSet::from([0]),
            StateSet::from([3]),
            transitions! {
                (0, EPSILON) => [1],
                (1, EPSILON) => [2],
                (2, EPSILON) => [0],
                (2, 'a') => [3],
            },
        )
        .unwrap();

        assert_eq!(
            automaton.epsilon_closure(&StateSet::from([1])),
            StateSet::from([0, 1, 2])
        );
        assert!(automaton.accepts("a"));
        assert!(!automaton.accepts("aa"));
    }

    #[test]
    fn match_steps() {
        let steps = ends_with_ab().generate_match_steps("aab");
        assert_eq!(
            steps,
            vec![
                StateSet::from([0]),
                StateSet::from([0, 1]),
                StateSet::from([0, 1]),
                StateSet::from([0, 2]),
            ]
        );
    }

    #[test]
    fn match_steps_on_incomplete_automaton() {
        let automaton = Automaton::from_regex("ab").unwrap();
        let steps = automaton.generate_match_steps("bab");

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], StateSet::from([0]));
        assert!(steps[1..].iter().all(StateSet::is_empty));
        assert!(!automaton.accepts("bab"));
    }
}
