use crate::{Automaton, StateId};
use finite_automata_regex::Regex;
use std::collections::BTreeMap;

/// The label of an edge in a generalized NFA.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Label {
    Epsilon,
    Expr(Regex),
}

impl Label {
    /// `self | other`
    fn or(self, other: Label) -> Label {
        match (self, other) {
            (Label::Epsilon, Label::Epsilon) => Label::Epsilon,
            (Label::Epsilon, Label::Expr(e)) | (Label::Expr(e), Label::Epsilon) => {
                if e.is_nullable() {
                    Label::Expr(e)
                } else {
                    Label::Expr(Regex::zero_or_one(e))
                }
            }
            (Label::Expr(l), Label::Expr(r)) if l == r => Label::Expr(l),
            (Label::Expr(l), Label::Expr(r)) => Label::Expr(Regex::alternation(l, r)),
        }
    }

    /// `self other`
    fn then(self, other: Label) -> Label {
        match (self, other) {
            (Label::Epsilon, other) => other,
            (this, Label::Epsilon) => this,
            (Label::Expr(l), Label::Expr(r)) => Label::Expr(Regex::concatenation(l, r)),
        }
    }

    /// `self*`, where `ε*` is just `ε`
    fn star(self) -> Label {
        match self {
            Label::Epsilon => Label::Epsilon,
            Label::Expr(Regex::ZeroOrMore(e) | Regex::ZeroOrOne(e) | Regex::OneOrMore(e)) => {
                Label::Expr(Regex::ZeroOrMore(e))
            }
            Label::Expr(e) => Label::Expr(Regex::zero_or_more(e)),
        }
    }
}

/// A generalized NFA with a single initial and a single final state.
struct Gnfa {
    edges: BTreeMap<(StateId, StateId), Label>,
}

impl Gnfa {
    fn add(&mut self, from: StateId, to: StateId, label: Label) {
        let label = match self.edges.remove(&(from, to)) {
            Some(existing) => existing.or(label),
            None => label,
        };
        self.edges.insert((from, to), label);
    }

    /// Removes `state`, rerouting every path `p -> state -> r` into a direct edge `p -> r`.
    fn eliminate(&mut self, state: StateId) {
        let self_loop = self
            .edges
            .remove(&(state, state))
            .map(Label::star)
            .unwrap_or(Label::Epsilon);

        let incoming: Vec<(StateId, Label)> = self
            .edges
            .iter()
            .filter(|&(&(_, to), _)| to == state)
            .map(|(&(from, _), label)| (from, label.clone()))
            .collect();
        let outgoing: Vec<(StateId, Label)> = self
            .edges
            .iter()
            .filter(|&(&(from, _), _)| from == state)
            .map(|(&(_, to), label)| (to, label.clone()))
            .collect();
        self.edges.retain(|&(from, to), _| from != state && to != state);

        log::trace!(
            "eliminating state {state}: {} incoming, {} outgoing",
            incoming.len(),
            outgoing.len()
        );

        for (from, into) in &incoming {
            for (to, out_of) in &outgoing {
                let rerouted = into
                    .clone()
                    .then(self_loop.clone())
                    .then(out_of.clone());
                self.add(*from, *to, rerouted);
            }
        }
    }
}

impl Automaton {
    /// Generates a regular expression accepting the language of this automaton, by
    /// eliminating the states of its minimal DFA one by one.
    ///
    /// Returns `None` if no expression exists in the pattern syntax. That happens for two
    /// languages: the empty language, and the language holding only the empty word, since
    /// patterns cannot be empty. Use [`Automaton::accepts`] on `""` to tell them apart:
    ///
    /// ```rust
    /// use finite_automata::{transitions, Automaton, StateSet};
    ///
    /// let nothing = Automaton::default();
    /// let only_empty_word = Automaton::construct(
    ///     "a".chars().collect(),
    ///     StateSet::from([0]),
    ///     StateSet::from([0]),
    ///     StateSet::from([0]),
    ///     transitions! {},
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(nothing.generate_regex(), None);
    /// assert!(!nothing.accepts(""));
    /// assert_eq!(only_empty_word.generate_regex(), None);
    /// assert!(only_empty_word.accepts(""));
    /// ```
    pub fn generate_regex(&self) -> Option<String> {
        let dfa = self.minimize().complete();

        let mut fresh = dfa.fresh_states();
        let (start, end) = (fresh.next()?, fresh.next()?);

        let mut gnfa = Gnfa {
            edges: BTreeMap::new(),
        };
        for &initial in &dfa.initial_states {
            gnfa.add(start, initial, Label::Epsilon);
        }
        for &accepting in &dfa.final_states {
            gnfa.add(accepting, end, Label::Epsilon);
        }
        for (&(from, symbol), targets) in &dfa.transition_function {
            for &to in targets {
                gnfa.add(from, to, Label::Expr(Regex::Symbol(symbol)));
            }
        }

        for &state in &dfa.states {
            gnfa.eliminate(state);
        }

        let regex = match gnfa.edges.remove(&(start, end)) {
            Some(Label::Expr(regex)) => Some(regex.to_string()),
            Some(Label::Epsilon) | None => None,
        };
        log::debug!("generated regex {regex:?}");
        regex
    }
}
