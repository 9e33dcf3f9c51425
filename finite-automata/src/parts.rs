use crate::{Automaton, StateId, StateSet, TransitionFunction, ValidationError};
use std::collections::BTreeSet;

/// The plain data of an [`Automaton`], for storing it elsewhere.
///
/// Turning parts back into an automaton validates them again, so parts read from an
/// untrusted source can never produce an invalid automaton.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutomatonParts {
    #[allow(missing_docs)]
    pub alphabet: BTreeSet<char>,
    #[allow(missing_docs)]
    pub states: StateSet,
    #[allow(missing_docs)]
    pub initial_states: StateSet,
    #[allow(missing_docs)]
    pub final_states: StateSet,
    /// The transition relation as a list, ordered by `(state, symbol)`.
    pub transitions: Vec<((StateId, char), StateSet)>,
}

impl Automaton {
    /// Splits the automaton into its parts.
    pub fn to_parts(&self) -> AutomatonParts {
        AutomatonParts {
            alphabet: self.alphabet.clone(),
            states: self.states.clone(),
            initial_states: self.initial_states.clone(),
            final_states: self.final_states.clone(),
            transitions: self
                .transition_function
                .iter()
                .map(|(&key, targets)| (key, targets.clone()))
                .collect(),
        }
    }
}

impl From<&Automaton> for AutomatonParts {
    fn from(automaton: &Automaton) -> Self {
        automaton.to_parts()
    }
}

impl TryFrom<AutomatonParts> for Automaton {
    type Error = ValidationError;

    /// Rebuilds the automaton with [`Automaton::construct`]. Entries of `transitions` with
    /// the same key are merged.
    fn try_from(parts: AutomatonParts) -> Result<Self, Self::Error> {
        let mut transition_function = TransitionFunction::new();
        for (key, targets) in parts.transitions {
            transition_function.entry(key).or_default().extend(targets);
        }

        Automaton::construct(
            parts.alphabet,
            parts.states,
            parts.initial_states,
            parts.final_states,
            transition_function,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, AutomatonParts, StateSet, ValidationError, EPSILON};
    use pretty_assertions::assert_eq;

    #[test]
    fn parts_of_compiled_regex() {
        let automaton = Automaton::from_regex("a?").unwrap();
        let parts = automaton.to_parts();

        assert_eq!(parts.states, StateSet::from([0, 1, 2, 3]));
        assert_eq!(parts.initial_states, StateSet::from([0]));
        assert_eq!(parts.final_states, StateSet::from([3]));
        assert_eq!(
            parts.transitions,
            vec![
                ((0, EPSILON), StateSet::from([1, 3])),
                ((1, 'a'), StateSet::from([2])),
                ((2, EPSILON), StateSet::from([3])),
            ]
        );
        assert_eq!(Automaton::try_from(parts).unwrap(), automaton);
    }

    #[test]
    fn duplicate_keys_are_merged() {
        let parts = AutomatonParts {
            alphabet: "a".chars().collect(),
            states: StateSet::from([0, 1]),
            initial_states: StateSet::from([0]),
            final_states: StateSet::from([1]),
            transitions: vec![
                ((0, 'a'), StateSet::from([0])),
                ((0, 'a'), StateSet::from([1])),
            ],
        };
        let automaton = Automaton::try_from(parts).unwrap();
        assert_eq!(automaton.targets(0, 'a').collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn untrusted_parts_are_validated() {
        let mut parts = AutomatonParts::from(&Automaton::from_regex("ab").unwrap());
        parts.final_states.insert(42);
        assert_eq!(
            Automaton::try_from(parts.clone()),
            Err(ValidationError::FinalNotSubset)
        );

        parts.alphabet.insert(EPSILON);
        assert_eq!(
            Automaton::try_from(parts),
            Err(ValidationError::AlphabetContainsEpsilon)
        );
    }
}
