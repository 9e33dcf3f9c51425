#![warn(missing_docs)]
//! Finite automata over single-character alphabets.
//!
//! An [`Automaton`] is built either from its parts with [`Automaton::construct`], which
//! validates them, or from a regular expression with [`Automaton::from_regex`]. All
//! algorithms are pure: they take `&self` and return a new automaton.
//!
//! ```rust
//! use finite_automata::Automaton;
//!
//! let ends_with_aab = Automaton::from_regex("(a|b)*aab").unwrap();
//! let even_length = Automaton::from_regex("((a|b)(a|b))*").unwrap();
//!
//! let both = ends_with_aab.intersection_with(&even_length).minimize();
//! assert!(both.accepts("baab"));
//! assert!(!both.accepts("aab"));
//!
//! let regex = ends_with_aab.generate_regex().unwrap();
//! let round_trip = Automaton::from_regex(&regex).unwrap();
//! assert!(round_trip.accepts("abaab"));
//! ```
//!
//! ## Features
//! * `dot` (default): render automata as graphviz `.dot` files.
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![allow(unknown_lints)]
#![allow(unexpected_cfgs)]

use std::collections::{BTreeMap, BTreeSet};

mod automaton;
pub use automaton::{Automaton, ValidationError};

mod eliminate;
mod parts;
pub use parts::AutomatonParts;

mod product;
pub mod render;
mod simulate;
mod transform;

mod words;
pub use words::WordSearch;

pub use finite_automata_regex::{is_symbol, parse_regex, CompiledRegex, ParseError, Regex};

/// Identifier of a state. States need not be contiguous.
pub type StateId = usize;

/// A set of states, iterated in ascending order.
pub type StateSet = BTreeSet<StateId>;

/// The transition relation: `(state, symbol)` to the set of target states.
///
/// Epsilon transitions use [`EPSILON`] as their symbol.
pub type TransitionFunction = BTreeMap<(StateId, char), StateSet>;

/// The symbol marking an epsilon transition. It can never be part of an alphabet.
pub const EPSILON: char = '~';

/// Build a [`TransitionFunction`].
///
/// ```rust
/// use finite_automata::{transitions, Automaton, StateSet};
///
/// let ends_with_ab = Automaton::construct(
///     "ab".chars().collect(),
///     StateSet::from([0, 1, 2]),
///     StateSet::from([0]),
///     StateSet::from([2]),
///     transitions! {
///         (0, 'a') => [0, 1],
///         (0, 'b') => [0],
///         (1, 'b') => [2],
///     },
/// )
/// .unwrap();
/// assert!(ends_with_ab.accepts("abab"));
/// ```
#[macro_export]
macro_rules! transitions {
    ($(($from:expr, $symbol:expr) => [$($to:expr),* $(,)?]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut transitions = $crate::TransitionFunction::new();
        $(
            let targets = transitions.entry(($from, $symbol)).or_default();
            $( targets.insert($to); )*
        )*
        transitions
    }};
}
