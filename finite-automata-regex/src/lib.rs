//! Regular expressions over single characters: the syntax tree, a parser for the
//! textual notation, a printer producing minimal parentheses, and the Thompson
//! construction lowering an expression into an epsilon-NFA transition table.
//!
//! ```rust
//! use finite_automata_regex::parse_regex;
//!
//! let regex = parse_regex("(ab|b*a+)*").unwrap();
//! assert_eq!(regex.to_string(), "(ab|b*a+)*");
//!
//! let compiled = regex.compile();
//! assert!(compiled.alphabet().contains(&'a'));
//! ```

use thiserror::Error;

mod compile;
mod parse;
mod regex;

pub use compile::{CompiledRegex, StateID, TransitionTable};
pub use regex::{is_symbol, Regex, METACHARS, RESERVED};

/// The pattern is not a valid regular expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid regular expression {input:?}: unexpected input at offset {offset}")]
pub struct ParseError {
    input: String,
    offset: usize,
}

impl ParseError {
    /// Byte offset into the pattern where parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// parse a string to a regular expression
pub fn parse_regex(input: impl AsRef<str>) -> Result<Regex, ParseError> {
    let input = input.as_ref();
    parse::parse(input).map_err(|offset| ParseError {
        input: input.to_string(),
        offset,
    })
}

impl std::str::FromStr for Regex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_regex(s)
    }
}
