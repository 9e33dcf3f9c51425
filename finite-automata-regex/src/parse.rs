use crate::regex::{is_metachar, is_symbol, RESERVED};
use crate::Regex;
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, one_of};

fn is_plain_symbol(c: char) -> bool {
    is_symbol(c) && !is_metachar(c)
}

fn parse_symbol(input: &mut &'_ str) -> PResult<char> {
    alt((
        preceded("\\", none_of(RESERVED)),
        one_of(is_plain_symbol),
    ))
    .parse_next(input)
}

fn parse_atom(input: &mut &'_ str) -> PResult<Regex> {
    alt((
        parse_symbol.map(Regex::Symbol),
        delimited("(", parse_alternation, ")"),
    ))
    .parse_next(input)
}

fn parse_postfix(input: &mut &'_ str) -> PResult<Regex> {
    let operand = parse_atom.parse_next(input)?;
    let operator = opt(one_of(['*', '+', '?'])).parse_next(input)?;

    Ok(match operator {
        Some('*') => Regex::zero_or_more(operand),
        Some('+') => Regex::one_or_more(operand),
        Some(_) => Regex::zero_or_one(operand),
        None => operand,
    })
}

fn parse_concatenation(input: &mut &'_ str) -> PResult<Regex> {
    let first = parse_postfix.parse_next(input)?;
    let rest: Vec<Regex> = repeat(0.., parse_postfix).parse_next(input)?;

    Ok(rest.into_iter().fold(first, Regex::concatenation))
}

fn parse_alternation(input: &mut &'_ str) -> PResult<Regex> {
    let first = parse_concatenation.parse_next(input)?;
    let rest: Vec<Regex> = repeat(0.., preceded("|", parse_concatenation)).parse_next(input)?;

    Ok(rest.into_iter().fold(first, Regex::alternation))
}

/// Parses a complete pattern. On failure, returns the byte offset where parsing stopped.
pub(crate) fn parse(input: &str) -> Result<Regex, usize> {
    parse_alternation.parse(input).map_err(|e| e.offset())
}

#[cfg(test)]
mod tests {
    use crate::{parse_regex, Regex};
    use pretty_assertions::assert_eq;

    fn sym(c: char) -> Regex {
        Regex::Symbol(c)
    }

    #[test]
    fn operators() {
        assert_eq!(parse_regex("a").unwrap(), sym('a'));
        assert_eq!(
            parse_regex("ab").unwrap(),
            Regex::concatenation(sym('a'), sym('b'))
        );
        assert_eq!(
            parse_regex("a|b").unwrap(),
            Regex::alternation(sym('a'), sym('b'))
        );
        assert_eq!(parse_regex("a?").unwrap(), Regex::zero_or_one(sym('a')));
        assert_eq!(parse_regex("a*").unwrap(), Regex::zero_or_more(sym('a')));
        assert_eq!(parse_regex("a+").unwrap(), Regex::one_or_more(sym('a')));
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(
            parse_regex("ab|c*").unwrap(),
            Regex::alternation(
                Regex::concatenation(sym('a'), sym('b')),
                Regex::zero_or_more(sym('c'))
            )
        );
        assert_eq!(
            parse_regex("abc").unwrap(),
            Regex::concatenation(Regex::concatenation(sym('a'), sym('b')), sym('c'))
        );
        assert_eq!(
            parse_regex("(a|b)+").unwrap(),
            Regex::one_or_more(Regex::alternation(sym('a'), sym('b')))
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(
            parse_regex("\\(\\\\").unwrap(),
            Regex::concatenation(sym('('), sym('\\'))
        );
        assert_eq!(parse_regex("\\a").unwrap(), sym('a'));
        assert_eq!(
            parse_regex("a\\ b").unwrap(),
            Regex::concatenation(Regex::concatenation(sym('a'), sym(' ')), sym('b'))
        );
        assert!(parse_regex("\\~").is_err());
        assert!(parse_regex("a\\").is_err());
    }

    #[test]
    fn invalid() {
        for pattern in ["", "()", "a|", "|a", "a+?*", "a**", "(a", "a)", "*", "a b", "a~"] {
            assert!(parse_regex(pattern).is_err(), "{pattern:?} should not parse");
        }
    }

    #[test]
    fn error_offset() {
        let err = parse_regex("ab|").unwrap_err();
        assert_eq!(err.offset(), 2);
    }
}
