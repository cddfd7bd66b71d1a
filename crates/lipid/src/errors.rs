use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::{parser::errors::LipidErrorKind, Chain};

// NOTE: None of these are fatal! They're collected on each `Lipid` as it's built, and processing carries on
#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum LipidDiagnostic {
    #[diagnostic(
        severity(Warning),
        help(
            "lipid names start with a class abbreviation followed by one or more chains, like `PE 18:0/20:4`, \
            `Cer(d18:1/24:0)`, or `TAG 50:5_FA14:2+H2O`"
        )
    )]
    #[error("could not parse {name:?} as a lipid name: {kind}")]
    ParseMismatch {
        name: String,
        // NOTE: The additional space lets the label point just past the end of the name
        #[source_code]
        source_code: String,
        #[label("{label}")]
        span: SourceSpan,
        label: &'static str,
        kind: LipidErrorKind,
    },

    #[diagnostic(
        severity(Warning),
        help("this lipid will be rendered with the placeholder class label \"unknown\"")
    )]
    #[error("the class abbreviation {entry_token:?} didn't match any classification rule")]
    UnknownClass { entry_token: String },

    #[diagnostic(severity(Warning), help("at most three chains are kept for each lipid"))]
    #[error("{name:?} lists too many chains, so the extra chain {chain} was dropped")]
    CapacityExceeded { name: String, chain: Chain },
}

impl LipidDiagnostic {
    pub(crate) fn parse_mismatch(name: &str, span: SourceSpan, kind: LipidErrorKind) -> Self {
        let source_code = format!("{name} ");
        let name = name.to_owned();
        let label = kind.label();

        Self::ParseMismatch {
            name,
            source_code,
            span,
            label,
            kind,
        }
    }

    pub(crate) fn unknown_class(entry_token: &str) -> Self {
        let entry_token = entry_token.to_owned();

        Self::UnknownClass { entry_token }
    }

    pub(crate) fn capacity_exceeded(name: &str, chain: Chain) -> Self {
        let name = name.to_owned();

        Self::CapacityExceeded { name, chain }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
#[diagnostic(help("the supported conventions are: standard, sub-class, CHUV, and swiss"))]
#[error("{name:?} is not a known naming convention")]
pub struct UnknownConvention {
    pub name: String,
}
