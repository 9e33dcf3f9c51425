use crate::Regex;
use std::collections::{BTreeMap, BTreeSet};

pub type StateID = usize;

/// Transition table produced by the Thompson construction.
///
/// A `None` symbol marks an epsilon transition.
pub type TransitionTable = BTreeMap<(StateID, Option<char>), BTreeSet<StateID>>;

/// An epsilon-NFA compiled from a [`Regex`].
///
/// Its states are exactly `0..=end_state`; `0` is the sole initial state and
/// `end_state` the sole final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRegex {
    pub transitions: TransitionTable,
    pub end_state: StateID,
}

impl CompiledRegex {
    /// The non-epsilon symbols used by the transitions.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions
            .keys()
            .filter_map(|&(_, symbol)| symbol)
            .collect()
    }
}

struct RegexCompiler {
    transitions: TransitionTable,
}

impl RegexCompiler {
    fn add(&mut self, from: StateID, symbol: Option<char>, to: StateID) {
        self.transitions
            .entry((from, symbol))
            .or_default()
            .insert(to);
    }

    fn epsilon(&mut self, from: StateID, to: StateID) {
        self.add(from, None, to);
    }

    /// Compiles `regex` starting in `start`, returning the end state. All states
    /// allocated for `regex` lie in `start..=end`, so siblings never collide.
    fn compile(&mut self, regex: &Regex, start: StateID) -> StateID {
        match regex {
            Regex::Symbol(s) => {
                self.add(start, Some(*s), start + 1);
                start + 1
            }
            Regex::Concatenation(l, r) => {
                let middle = self.compile(l, start);
                self.compile(r, middle)
            }
            Regex::Alternation(l, r) => {
                let left_start = start + 1;
                let left_end = self.compile(l, left_start);
                let right_start = left_end + 1;
                let right_end = self.compile(r, right_start);
                let end = right_end + 1;

                self.epsilon(start, left_start);
                self.epsilon(start, right_start);
                self.epsilon(left_end, end);
                self.epsilon(right_end, end);
                end
            }
            Regex::ZeroOrOne(i) => {
                let (_, _, end) = self.enclose(i, start);
                self.epsilon(start, end);
                end
            }
            Regex::ZeroOrMore(i) => {
                let (body_start, body_end, end) = self.enclose(i, start);
                self.epsilon(start, end);
                self.epsilon(body_end, body_start);
                end
            }
            Regex::OneOrMore(i) => {
                let (body_start, body_end, end) = self.enclose(i, start);
                self.epsilon(body_end, body_start);
                end
            }
        }
    }

    /// Shared part of the postfix operators: `start -ε-> body ... body_end -ε-> end`.
    fn enclose(&mut self, body: &Regex, start: StateID) -> (StateID, StateID, StateID) {
        let body_start = start + 1;
        let body_end = self.compile(body, body_start);
        let end = body_end + 1;

        self.epsilon(start, body_start);
        self.epsilon(body_end, end);
        (body_start, body_end, end)
    }
}

impl Regex {
    /// Lowers this expression into an epsilon-NFA using the Thompson construction.
    pub fn compile(&self) -> CompiledRegex {
        let mut compiler = RegexCompiler {
            transitions: TransitionTable::new(),
        };
        let end_state = compiler.compile(self, 0);

        CompiledRegex {
            transitions: compiler.transitions,
            end_state,
        }
    }
}
