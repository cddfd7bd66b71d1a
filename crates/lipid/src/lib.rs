//! Parses shorthand lipid names (like `PE 18:0/20:4` or `TAG 50:5_FA14:2+H2O`) and re-renders them under the naming
//! conventions used by different institutions and databases

mod chains;
mod classes;
pub mod convention;
pub mod errors;
pub mod lookup;
mod parser;
mod record;

// External Crate Imports
use derive_more::Display;
use serde::Serialize;

pub use classes::CANONICAL_CLASS_RULES;
pub use convention::{Convention, Label, RenderRules};
pub use errors::LipidDiagnostic;
pub use parser::errors::LipidErrorKind;

// Public API ==========================================================================================================

/// Parses, normalizes, and classifies a single raw lipid name
///
/// Malformed names never produce an `Err`: the returned [`Lipid`] is simply left unparsed, and the reason is
/// recorded in [`Lipid::diagnostics()`]
#[must_use]
pub fn parse(raw_name: impl Into<String>) -> Lipid {
    Lipid::new(raw_name)
}

/// Renders a lipid under the given naming convention, or returns `None` if the name could not be parsed
#[must_use]
pub fn render(lipid: &Lipid, convention: Convention) -> Option<String> {
    convention.render(lipid)
}

// ---------------------------------------------------------------------------------------------------------------------

// NOTE: A `Lipid` is built once from its raw name and is read-only afterwards, so rendering under any number of
// conventions borrows it immutably
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Lipid {
    raw_name: String,
    structure: Option<Structure>,
    #[serde(skip)]
    diagnostics: Vec<LipidDiagnostic>,
}

/// Everything that could be read out of a successfully parsed lipid name
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Structure {
    entry_token: String,
    prefix: String,
    chains: Chains,
    known_chain: Option<Chain>,
    class: LipidClass,
    sub_class: Option<SubClass>,
    trailing_annotation: String,
}

/// Up to three ordered chain slots, any of which may be empty
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Chains {
    slots: [Option<Chain>; Chains::CAPACITY],
    #[serde(skip)]
    filled: usize,
}

// NOTE: Counts are kept as the original digit strings so that things like leading zeros survive a round-trip
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display, Serialize)]
#[display("{carbons}:{double_bonds}")]
pub struct Chain {
    carbons: String,
    double_bonds: String,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum LipidClass {
    #[display("CE")]
    CholesterylEster,
    #[display("PE")]
    PhosphatidylEthanolamine,
    #[display("HexCer")]
    HexosylCeramide,
    #[display("Cer")]
    Ceramide,
    #[display("MG")]
    Monoacylglycerol,
    #[display("DG")]
    Diacylglycerol,
    #[display("TG")]
    Triacylglycerol,
    #[display("SM")]
    Sphingomyelin,
    #[display("DhCer")]
    Dihydroceramide,
    #[display("PC")]
    PhosphatidylCholine,
    #[display("PI")]
    PhosphatidylInositol,
    #[display("PG")]
    PhosphatidylGlycerol,
    #[display("PS")]
    PhosphatidylSerine,
    #[display("FFA")]
    FreeFattyAcid,
    #[display("unknown")]
    Unknown,
}

/// The lyso-variant of a base class, displayed as `L` followed by the class code (like `LPE`)
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display("L{_0}")]
pub struct SubClass(LipidClass);

/// A single, ordered entry in a classification table
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ClassRule {
    pub matcher: Matcher,
    pub class: LipidClass,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Matcher {
    /// Matches when the whole abbreviation equals one of these (ignoring ASCII case)
    Exact(&'static [&'static str]),
    /// Matches when the abbreviation ends with this (ignoring ASCII case)
    Suffix(&'static str),
}

/// An ordered classification table, where the first matching rule wins
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ClassRules<'r>(&'r [ClassRule]);
