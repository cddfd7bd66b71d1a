pub(crate) mod errors;

// External Crate Imports
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map, opt, rest, success},
    multi::many0,
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
    Parser,
};

// Local Crate Imports
use self::errors::{expect, final_parser, LabeledParseError, LipidErrorKind, ParseResult};
use crate::{Chain, Chains};

/// The named fields a lipid name can be broken into, before any normalization or classification
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct RawLipid<'s> {
    pub entry_token: &'s str,
    pub prefix: &'s str,
    pub chains: [Option<Chain>; Chains::CAPACITY],
    pub known_chain_marker: bool,
    pub extra_chains: Vec<Chain>,
    pub trailing_annotation: &'s str,
}

// Public API ==========================================================================================================

pub(crate) fn parse(raw_name: &str) -> Result<RawLipid<'_>, LabeledParseError<'_>> {
    final_parser(lipid_name)(raw_name)
}

// Private Sub-Parsers =================================================================================================

// NOTE: Only a second chain can be read as a known chain, and a third chain is only looked for once a second has been
// found, so a missing slot never shifts a later chain forward
/// Lipid Name = Entry Token , Entry Separator , Prefix , Chain ,
///   [ Second Chain , [ Next Chain , { Next Chain } ] ] ,
///   Closing , Trailing Annotation ;
fn lipid_name(i: &str) -> ParseResult<RawLipid<'_>> {
    let (i, entry_token) = entry_token(i)?;
    let (i, ()) = entry_separator(i)?;
    let (i, prefix) = prefix(i)?;
    let (i, first) = expect(chain, LipidErrorKind::ExpectedChain)(i)?;
    let (i, second) = opt(second_chain)(i)?;
    let (known_chain_marker, second) = second.map_or((false, None), |(marker, c)| (marker, Some(c)));
    let (i, third) = if second.is_some() {
        opt(next_chain)(i)?
    } else {
        (i, None)
    };
    let (i, extra_chains) = if third.is_some() {
        many0(next_chain)(i)?
    } else {
        (i, Vec::new())
    };
    let (i, ()) = closing(i)?;
    let (_, trailing_annotation) = rest(i)?;

    Ok((
        "",
        RawLipid {
            entry_token,
            prefix,
            chains: [Some(first), second, third],
            known_chain_marker,
            extra_chains,
            trailing_annotation,
        },
    ))
}

/// Entry Token = { letter | "_" }- ;
fn entry_token(i: &str) -> ParseResult<&str> {
    let parser = take_while1(|c: char| c.is_ascii_alphabetic() || c == '_');
    expect(parser, LipidErrorKind::ExpectedEntryToken)(i)
}

/// Entry Separator = { space } , [ "(" ] , { space } ;
fn entry_separator(i: &str) -> ParseResult<()> {
    let parser = tuple((multispace0, opt(char('(')), multispace0));
    map(parser, |_| ())(i)
}

// NOTE: The two prefix vocabularies can't be mixed, whichever matches the first character wins
/// Prefix = ( { "m" | "d" | "t" | "e" }- | { "-" | "P" | "O" }- | "" ) , { space } ;
fn prefix(i: &str) -> ParseResult<&str> {
    let hydroxyls = take_while1(|c: char| matches!(c, 'm' | 'd' | 't' | 'e'));
    let ether = take_while1(|c: char| matches!(c, '-' | 'P' | 'O'));
    let parser = alt((hydroxyls, ether, success("")));
    terminated(parser, multispace0)(i)
}

/// Chain = Carbon Count , ":" , Double Bond Count ;
fn chain(i: &str) -> ParseResult<Chain> {
    let carbons = expect(digit1, LipidErrorKind::ExpectedCarbonCount);
    let colon = expect(ws(char(':')), LipidErrorKind::ExpectedColon);
    let double_bonds = expect(digit1, LipidErrorKind::ExpectedDoubleBondCount);
    let parser = ws(separated_pair(carbons, colon, double_bonds));
    map(parser, |(carbons, double_bonds)| Chain::new(carbons, double_bonds))(i)
}

/// Second Chain = [ Chain Separator ] , ( Known Chain Marker , Chain | Chain ) ;
fn second_chain(i: &str) -> ParseResult<(bool, Chain)> {
    let known_chain = map(preceded(known_chain_marker, chain), |c| (true, c));
    let structural_chain = map(chain, |c| (false, c));
    preceded(opt(chain_separator), alt((known_chain, structural_chain)))(i)
}

/// Next Chain = [ Chain Separator ] , Chain ;
fn next_chain(i: &str) -> ParseResult<Chain> {
    preceded(opt(chain_separator), chain)(i)
}

/// Chain Separator = "/" | "_" ;
fn chain_separator(i: &str) -> ParseResult<char> {
    ws(one_of("/_"))(i)
}

/// Known Chain Marker = "FA" ;
fn known_chain_marker(i: &str) -> ParseResult<&str> {
    ws(tag("FA"))(i)
}

/// Closing = [ ")" ] , { space } ;
fn closing(i: &str) -> ParseResult<()> {
    map(pair(opt(char(')')), multispace0), |_| ())(i)
}

// ---------------------------------------------------------------------------------------------------------------------

fn ws<'s, O, P>(parser: P) -> impl FnMut(&'s str) -> ParseResult<'s, O>
where
    P: Parser<&'s str, O, LabeledParseError<'s>>,
{
    delimited(multispace0, parser, multispace0)
}

// Module Tests ========================================================================================================
