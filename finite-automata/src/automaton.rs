use crate::{StateId, StateSet, TransitionFunction, EPSILON};
use finite_automata_regex::{parse_regex, ParseError, Regex};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// A rule violated while constructing an [`Automaton`].
///
/// Rules are checked in the order of the variants; the first violation is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The alphabet contains [`EPSILON`].
    #[error("alphabet cannot contain the epsilon transition value `{epsilon}`", epsilon = EPSILON)]
    AlphabetContainsEpsilon,
    /// An initial state is not a state of the automaton.
    #[error("initial states must be a subset of states")]
    InitialNotSubset,
    /// A final state is not a state of the automaton.
    #[error("final states must be a subset of states")]
    FinalNotSubset,
    /// A transition starts or ends outside the states of the automaton.
    #[error("transition function states must form a subset of states")]
    TransitionSourceNotSubset,
    /// A transition reads a symbol that is neither in the alphabet nor [`EPSILON`].
    #[error("transition function symbols must form a subset of the alphabet")]
    TransitionSymbolNotSubset,
}

/// A finite automaton with epsilon transitions.
///
/// Automata are immutable: every algorithm returns a new automaton. The only way to
/// obtain one is through a validating constructor, so the following always holds:
/// * the alphabet does not contain [`EPSILON`],
/// * initial and final states are states of the automaton,
/// * every transition connects states of the automaton,
/// * every transition symbol is either [`EPSILON`] or in the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Automaton {
    pub(crate) alphabet: BTreeSet<char>,
    pub(crate) states: StateSet,
    pub(crate) initial_states: StateSet,
    pub(crate) final_states: StateSet,
    pub(crate) transition_function: TransitionFunction,
}

impl Automaton {
    /// Validates the parts of an automaton and assembles them.
    pub fn construct(
        alphabet: BTreeSet<char>,
        states: StateSet,
        initial_states: StateSet,
        final_states: StateSet,
        transition_function: TransitionFunction,
    ) -> Result<Self, ValidationError> {
        let automaton = Self {
            alphabet,
            states,
            initial_states,
            final_states,
            transition_function,
        };
        automaton.validate()?;
        Ok(automaton)
    }

    /// Assembles an automaton the caller already knows to be valid.
    pub(crate) fn new_unchecked(
        alphabet: BTreeSet<char>,
        states: StateSet,
        initial_states: StateSet,
        final_states: StateSet,
        transition_function: TransitionFunction,
    ) -> Self {
        let automaton = Self {
            alphabet,
            states,
            initial_states,
            final_states,
            transition_function,
        };
        debug_assert_eq!(automaton.validate(), Ok(()));
        automaton
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.alphabet.contains(&EPSILON) {
            return Err(ValidationError::AlphabetContainsEpsilon);
        }

        if !self.initial_states.is_subset(&self.states) {
            return Err(ValidationError::InitialNotSubset);
        }

        if !self.final_states.is_subset(&self.states) {
            return Err(ValidationError::FinalNotSubset);
        }

        let states_known = self
            .transition_function
            .iter()
            .all(|(&(from, _), to)| self.states.contains(&from) && to.is_subset(&self.states));
        if !states_known {
            return Err(ValidationError::TransitionSourceNotSubset);
        }

        let symbols_known = self
            .transition_function
            .keys()
            .all(|&(_, symbol)| symbol == EPSILON || self.alphabet.contains(&symbol));
        if !symbols_known {
            return Err(ValidationError::TransitionSymbolNotSubset);
        }

        Ok(())
    }

    /// Parses `regex` and compiles it into an automaton.
    pub fn from_regex(regex: &str) -> Result<Self, ParseError> {
        Ok(Self::compile(&parse_regex(regex)?))
    }

    /// Compiles a regular expression with the Thompson construction.
    ///
    /// The states of the result are `0..=end`, with `0` initial and `end` final.
    pub fn compile(regex: &Regex) -> Self {
        let compiled = regex.compile();
        let alphabet = compiled.alphabet();
        let transition_function = compiled
            .transitions
            .into_iter()
            .map(|((from, symbol), to)| ((from, symbol.unwrap_or(EPSILON)), to))
            .collect();

        Self::new_unchecked(
            alphabet,
            (0..=compiled.end_state).collect(),
            StateSet::from([0]),
            StateSet::from([compiled.end_state]),
            transition_function,
        )
    }

    /// The symbols words are made of. Never contains [`EPSILON`].
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    #[allow(missing_docs)]
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    #[allow(missing_docs)]
    pub fn initial_states(&self) -> &StateSet {
        &self.initial_states
    }

    /// The accepting states.
    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    #[allow(missing_docs)]
    pub fn transition_function(&self) -> &TransitionFunction {
        &self.transition_function
    }

    /// The targets of `state` on `symbol`, empty if there is no such transition.
    pub fn targets(&self, state: StateId, symbol: char) -> impl Iterator<Item = StateId> + '_ {
        self.transition_function
            .get(&(state, symbol))
            .into_iter()
            .flatten()
            .copied()
    }

    /// One initial state, no epsilon transitions and at most one target per state and symbol.
    pub fn is_deterministic(&self) -> bool {
        self.initial_states.len() == 1
            && self
                .transition_function
                .iter()
                .all(|(&(_, symbol), to)| symbol != EPSILON && to.len() <= 1)
    }

    /// Every state has a transition on every symbol of the alphabet.
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|&state| {
            self.alphabet
                .iter()
                .all(|&symbol| self.targets(state, symbol).next().is_some())
        })
    }

    /// Ids not used by any state, starting above the largest one and wrapping around.
    pub(crate) fn fresh_states(&self) -> impl Iterator<Item = StateId> + '_ {
        let above = self.states.last().map_or(0, |&last| last.saturating_add(1));
        (above..=StateId::MAX)
            .chain(0..above)
            .filter(|state| !self.states.contains(state))
    }

    /// The same automaton over a larger alphabet.
    pub(crate) fn with_alphabet(&self, alphabet: &BTreeSet<char>) -> Self {
        debug_assert!(self.alphabet.is_subset(alphabet));
        Self {
            alphabet: alphabet.clone(),
            ..self.clone()
        }
    }
}

impl FromStr for Automaton {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_regex(s)
    }
}
