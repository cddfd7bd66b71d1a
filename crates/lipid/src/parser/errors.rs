use miette::SourceSpan;
use nom::{
    error::{ErrorKind, ParseError},
    Err, IResult, Parser,
};
use thiserror::Error;

use crate::LipidDiagnostic;

pub(crate) type ParseResult<'s, O> = IResult<&'s str, O, LabeledParseError<'s>>;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum LipidErrorKind {
    #[error("expected a class abbreviation made of ASCII letters or underscores")]
    ExpectedEntryToken,

    #[error("expected a chain: a carbon count and a double-bond count separated by ':' (like 18:1)")]
    ExpectedChain,

    #[error("expected a carbon count")]
    ExpectedCarbonCount,

    #[error("expected ':' between the carbon and double-bond counts")]
    ExpectedColon,

    #[error("expected a double-bond count")]
    ExpectedDoubleBondCount,

    #[error("internal `nom` error: {0:?}")]
    NomError(ErrorKind),
}

impl LipidErrorKind {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::ExpectedEntryToken => "expected a class abbreviation",
            Self::ExpectedChain => "expected a chain",
            Self::ExpectedCarbonCount => "expected digits",
            Self::ExpectedColon => "expected ':'",
            Self::ExpectedDoubleBondCount => "expected digits",
            Self::NomError(_) => "the region that triggered this bug!",
        }
    }
}

// NOTE: `input` is always a suffix of the full name being parsed, so its length is all that's needed to find the
// failing position again later
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LabeledParseError<'s> {
    input: &'s str,
    kind: LipidErrorKind,
}

impl<'s> LabeledParseError<'s> {
    pub(crate) const fn new(input: &'s str, kind: LipidErrorKind) -> Self {
        Self { input, kind }
    }

    pub(crate) const fn kind(&self) -> LipidErrorKind {
        self.kind
    }

    // NOTE: Keeps whichever error made it further into the input, so the most specific expectation is reported
    fn or_expected(self, input: &'s str, kind: LipidErrorKind) -> Self {
        if self.input.len() < input.len() {
            self
        } else {
            Self::new(input, kind)
        }
    }

    fn span(&self, full_input: &str) -> SourceSpan {
        let start = full_input.len().saturating_sub(self.input.len());
        let length = self.input.chars().next().map_or(0, char::len_utf8);
        SourceSpan::from(start..start + length)
    }

    pub(crate) fn into_diagnostic(self, full_input: &str) -> LipidDiagnostic {
        let span = self.span(full_input);
        LipidDiagnostic::parse_mismatch(full_input, span, self.kind())
    }
}

impl<'s> ParseError<&'s str> for LabeledParseError<'s> {
    fn from_error_kind(input: &'s str, kind: ErrorKind) -> Self {
        Self::new(input, LipidErrorKind::NomError(kind))
    }

    fn append(_input: &str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn or(self, other: Self) -> Self {
        if other.input.len() < self.input.len() {
            other
        } else {
            self
        }
    }
}

/// Labels any failure of `parser` with `kind`, unless the failure happened further along than `parser`'s own input
pub(crate) fn expect<'s, O, P>(
    mut parser: P,
    kind: LipidErrorKind,
) -> impl FnMut(&'s str) -> ParseResult<'s, O>
where
    P: Parser<&'s str, O, LabeledParseError<'s>>,
{
    move |i| {
        parser
            .parse(i)
            .map_err(|e| e.map(|inner| inner.or_expected(i, kind)))
    }
}

/// Runs a complete parser, returning its output or the error that stopped it
pub(crate) fn final_parser<'s, O, P>(
    mut parser: P,
) -> impl FnMut(&'s str) -> Result<O, LabeledParseError<'s>>
where
    P: Parser<&'s str, O, LabeledParseError<'s>>,
{
    move |input| match parser.parse(input) {
        Ok((_, output)) => Ok(output),
        Err(Err::Error(e) | Err::Failure(e)) => Err(e),
        // NOTE: Only `complete` parsers are used in this crate, so this branch is never taken
        Err(Err::Incomplete(_)) => Err(LabeledParseError::new(
            "",
            LipidErrorKind::NomError(ErrorKind::Complete),
        )),
    }
}

#[cfg(test)]
mod tests {
    use nom::character::complete::{char, digit1};

    use super::*;

    #[test]
    fn test_expect() {
        let mut digits = expect(digit1, LipidErrorKind::ExpectedCarbonCount);
        assert_eq!(digits("18:1"), Ok((":1", "18")));
        assert_eq!(
            digits("x18"),
            Err(Err::Error(LabeledParseError::new(
                "x18",
                LipidErrorKind::ExpectedCarbonCount
            )))
        );
    }

    #[test]
    fn inner_errors_further_along_are_kept() {
        let colon = expect(char(':'), LipidErrorKind::ExpectedColon);
        let mut chain = expect(
            nom::sequence::tuple((digit1, colon, digit1)),
            LipidErrorKind::ExpectedChain,
        );
        let error = chain("18-1").unwrap_err();
        assert_eq!(
            error,
            Err::Error(LabeledParseError::new("-1", LipidErrorKind::ExpectedColon))
        );
        // But failures at the very start are relabelled
        let error = chain("x").unwrap_err();
        assert_eq!(
            error,
            Err::Error(LabeledParseError::new("x", LipidErrorKind::ExpectedChain))
        );
    }

    #[test]
    fn or_keeps_the_furthest_error() {
        let near = LabeledParseError::new("abc", LipidErrorKind::ExpectedChain);
        let far = LabeledParseError::new("c", LipidErrorKind::ExpectedColon);
        assert_eq!(near.or(far), far);
        assert_eq!(far.or(near), far);
    }

    #[test]
    fn spans_point_at_the_failure() {
        let full = "PE 18-0";
        let error = LabeledParseError::new(&full[5..], LipidErrorKind::ExpectedColon);
        assert_eq!(error.span(full), SourceSpan::from(5..6));
        // Failures at the end of input get a zero-width span
        let error = LabeledParseError::new(&full[7..], LipidErrorKind::ExpectedChain);
        assert_eq!(error.span(full), SourceSpan::from(7..7));
    }
}
