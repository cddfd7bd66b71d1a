//! Naming conventions, each of which boils down to a handful of [`RenderRules`] resolved per record

// Standard Library Imports
use std::{
    fmt::{self, Formatter},
    str::FromStr,
};

// External Crate Imports
use derive_more::Display;
use itertools::Itertools;

// Local Crate Imports
use crate::{errors::UnknownConvention, Lipid, LipidClass, Structure, SubClass};

use crate::LipidClass::{
    Ceramide, Dihydroceramide, FreeFattyAcid, HexosylCeramide, PhosphatidylCholine,
    PhosphatidylEthanolamine, Sphingomyelin, Triacylglycerol,
};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum Convention {
    #[display("standard")]
    Standard,
    /// Like [`Convention::Standard`], but labels lyso-lipids with their sub-class
    #[display("sub-class")]
    SubClass,
    /// Institutional convention "A"
    #[display("CHUV")]
    Chuv,
    /// Institutional convention "B", which is also what SwissLipids searches expect
    #[display("swiss")]
    Swiss,
}

/// What a rendered name starts with
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Label<'s> {
    Class(LipidClass),
    SubClass(SubClass),
    /// Text that's written out exactly as given (like the original spelling of a fatty acid)
    Verbatim(&'s str),
}

/// Every knob a convention can turn, resolved for one particular record
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RenderRules<'s> {
    pub label: Label<'s>,
    pub prefix: &'s str,
    pub separator: &'static str,
    pub parenthesized: bool,
    pub append_known_chain: bool,
}

// Public API ==========================================================================================================

impl Convention {
    pub const ALL: [Self; 4] = [Self::Standard, Self::SubClass, Self::Chuv, Self::Swiss];

    /// Resolves this convention's rules for a particular record
    #[must_use]
    pub fn rules(self, structure: &Structure) -> RenderRules<'_> {
        let standard = RenderRules::standard(structure);
        let class = structure.class();
        let sub_class = structure.sub_class();
        match self {
            Self::Standard => standard,
            Self::SubClass => RenderRules {
                label: sub_class.map_or(standard.label, Label::SubClass),
                ..standard
            },
            Self::Chuv => {
                let label = match sub_class {
                    Some(sub_class)
                        if matches!(
                            sub_class.class(),
                            PhosphatidylCholine | PhosphatidylEthanolamine
                        ) =>
                    {
                        Label::SubClass(sub_class)
                    }
                    _ if class == FreeFattyAcid => Label::Verbatim(structure.entry_token()),
                    _ => standard.label,
                };
                let rules = RenderRules {
                    label,
                    parenthesized: false,
                    append_known_chain: class == Triacylglycerol,
                    ..standard
                };
                if matches!(class, Ceramide | HexosylCeramide | Dihydroceramide) {
                    rules.with_sphingoid_backbone()
                } else {
                    rules
                }
            }
            Self::Swiss => {
                // NOTE: Sub-classes take precedence over the FFA label, though FFA never gets a sub-class anyways
                let label = match (sub_class, class) {
                    (Some(sub_class), _) => Label::SubClass(sub_class),
                    (None, FreeFattyAcid) => Label::Verbatim("FA"),
                    (None, Dihydroceramide) => Label::Class(Ceramide),
                    (None, _) => standard.label,
                };
                let rules = RenderRules { label, ..standard };
                if matches!(
                    class,
                    Ceramide | HexosylCeramide | Sphingomyelin | Dihydroceramide
                ) {
                    rules.with_sphingoid_backbone()
                } else {
                    rules
                }
            }
        }
    }

    /// Renders `lipid` under this convention, or returns `None` if it couldn't be parsed
    #[must_use]
    pub fn render(self, lipid: &Lipid) -> Option<String> {
        lipid
            .structure()
            .map(|structure| self.rules(structure).apply(structure))
    }
}

impl FromStr for Convention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "standard" => Ok(Self::Standard),
            "sub-class" | "subclass" => Ok(Self::SubClass),
            "chuv" | "institutional-a" => Ok(Self::Chuv),
            "swiss" | "institutional-b" => Ok(Self::Swiss),
            _ => Err(UnknownConvention { name: s.to_owned() }),
        }
    }
}

impl<'s> RenderRules<'s> {
    /// Canonical class label, the parsed prefix, `_` between chains, parentheses, and no known chain
    #[must_use]
    pub fn standard(structure: &'s Structure) -> Self {
        Self {
            label: Label::Class(structure.class()),
            prefix: structure.prefix(),
            separator: "_",
            parenthesized: true,
            append_known_chain: false,
        }
    }

    /// Writes out `structure` following these rules
    #[must_use]
    pub fn apply(&self, structure: &Structure) -> String {
        let known_chain = structure
            .known_chain()
            .filter(|_| self.append_known_chain);
        let chains = structure
            .chains()
            .iter()
            .chain(known_chain)
            .join(self.separator);

        let Self { label, prefix, .. } = self;
        if self.parenthesized {
            format!("{label}({prefix}{chains})")
        } else {
            format!("{label} {prefix}{chains}")
        }
    }
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::SubClass(sub_class) => write!(f, "{sub_class}"),
            Self::Verbatim(text) => write!(f, "{text}"),
        }
    }
}

// Private Helper Functions ============================================================================================

impl RenderRules<'_> {
    const fn with_sphingoid_backbone(self) -> Self {
        Self {
            prefix: "d",
            separator: "/",
            ..self
        }
    }
}

// Module Tests ========================================================================================================
