use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A regular expression over single characters.
///
/// Every node exclusively owns its children, so a `Regex` is always a finite tree.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    Symbol(char),
    Concatenation(Box<Regex>, Box<Regex>),
    Alternation(Box<Regex>, Box<Regex>),
    ZeroOrOne(Box<Regex>),
    ZeroOrMore(Box<Regex>),
    OneOrMore(Box<Regex>),
}

/// Characters with a meaning in the regex grammar. They can still be used as symbols
/// when escaped with a backslash.
pub const METACHARS: [char; 7] = ['(', ')', '|', '*', '+', '?', '\\'];

pub(crate) fn is_metachar(c: char) -> bool {
    METACHARS.contains(&c)
}

/// Never a symbol, not even escaped: automata use it to mark epsilon transitions.
pub const RESERVED: char = '~';

/// Whether `c` can appear in a pattern as itself (metachars after a backslash).
///
/// These are the printable ASCII characters without space and without [`RESERVED`].
/// Every other character except [`RESERVED`] is a symbol too, but must always be
/// escaped with a backslash.
pub fn is_symbol(c: char) -> bool {
    ('!'..='}').contains(&c)
}

pub(crate) fn needs_escape(c: char) -> bool {
    !is_symbol(c) || is_metachar(c)
}

impl Regex {
    pub fn concatenation(left: Regex, right: Regex) -> Regex {
        Regex::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn alternation(left: Regex, right: Regex) -> Regex {
        Regex::Alternation(Box::new(left), Box::new(right))
    }

    pub fn zero_or_one(operand: Regex) -> Regex {
        Regex::ZeroOrOne(Box::new(operand))
    }

    pub fn zero_or_more(operand: Regex) -> Regex {
        Regex::ZeroOrMore(Box::new(operand))
    }

    pub fn one_or_more(operand: Regex) -> Regex {
        Regex::OneOrMore(Box::new(operand))
    }

    /// Whether the empty word is in the language of this expression.
    pub fn is_nullable(&self) -> bool {
        match self {
            Regex::Symbol(_) => false,
            Regex::Concatenation(l, r) => l.is_nullable() && r.is_nullable(),
            Regex::Alternation(l, r) => l.is_nullable() || r.is_nullable(),
            Regex::ZeroOrOne(_) | Regex::ZeroOrMore(_) => true,
            Regex::OneOrMore(i) => i.is_nullable(),
        }
    }

    /// All symbols occurring in this expression.
    pub fn alphabet(&self) -> BTreeSet<char> {
        let mut alphabet = BTreeSet::new();
        self.search_alphabet(&mut alphabet);
        alphabet
    }

    fn search_alphabet(&self, alphabet: &mut BTreeSet<char>) {
        match self {
            Regex::Symbol(s) => {
                alphabet.insert(*s);
            }
            Regex::ZeroOrOne(i) | Regex::ZeroOrMore(i) | Regex::OneOrMore(i) => {
                i.search_alphabet(alphabet)
            }
            Regex::Concatenation(l, r) | Regex::Alternation(l, r) => {
                l.search_alphabet(alphabet);
                r.search_alphabet(alphabet);
            }
        }
    }

    /// Binding strength used when printing: alternation binds weakest, symbols strongest.
    pub fn precedence(&self) -> u8 {
        match self {
            Regex::Alternation(_, _) => 0,
            Regex::Concatenation(_, _) => 1,
            Regex::ZeroOrOne(_) | Regex::ZeroOrMore(_) | Regex::OneOrMore(_) => 2,
            Regex::Symbol(_) => 3,
        }
    }

    fn fmt_operand(&self, f: &mut Formatter<'_>, required: u8) -> std::fmt::Result {
        if self.precedence() < required {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Regex::Symbol(s) if needs_escape(*s) => write!(f, "\\{s}"),
            Regex::Symbol(s) => write!(f, "{s}"),
            Regex::Alternation(l, r) => {
                l.fmt_operand(f, 0)?;
                write!(f, "|")?;
                r.fmt_operand(f, 0)
            }
            Regex::Concatenation(l, r) => {
                l.fmt_operand(f, 1)?;
                r.fmt_operand(f, 1)
            }
            // the grammar does not allow stacking postfix operators, so the
            // operand of one must be a symbol or parenthesized
            Regex::ZeroOrOne(i) => {
                i.fmt_operand(f, 3)?;
                write!(f, "?")
            }
            Regex::ZeroOrMore(i) => {
                i.fmt_operand(f, 3)?;
                write!(f, "*")
            }
            Regex::OneOrMore(i) => {
                i.fmt_operand(f, 3)?;
                write!(f, "+")
            }
        }
    }
}
