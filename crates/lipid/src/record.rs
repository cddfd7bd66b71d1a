// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use log::{debug, warn};

// Local Crate Imports
use crate::{
    parser::{self, RawLipid},
    Chain, Chains, ClassRules, Convention, Lipid, LipidClass, LipidDiagnostic, Structure, SubClass,
    CANONICAL_CLASS_RULES,
};

// Public API ==========================================================================================================

impl Lipid {
    /// Parses, normalizes, and classifies `raw_name` using the canonical class table
    #[must_use]
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self::with_rules(raw_name, &CANONICAL_CLASS_RULES)
    }

    /// Like [`Lipid::new()`], but classifies the entry token with a caller-supplied table
    #[must_use]
    pub fn with_rules(raw_name: impl Into<String>, rules: &ClassRules) -> Self {
        let raw_name = raw_name.into();
        let mut diagnostics = Vec::new();

        let structure = match parser::parse(&raw_name) {
            Ok(raw) => Some(Structure::build(&raw_name, raw, rules, &mut diagnostics)),
            Err(error) => {
                report(&mut diagnostics, error.into_diagnostic(&raw_name));
                None
            }
        };

        Self {
            raw_name,
            structure,
            diagnostics,
        }
    }

    #[must_use]
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.structure.is_some()
    }

    #[must_use]
    pub const fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    #[must_use]
    pub fn entry_token(&self) -> Option<&str> {
        self.structure.as_ref().map(Structure::entry_token)
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.structure.as_ref().map(Structure::prefix)
    }

    #[must_use]
    pub fn chains(&self) -> Option<&Chains> {
        self.structure.as_ref().map(Structure::chains)
    }

    #[must_use]
    pub fn known_chain_marker(&self) -> bool {
        self.structure
            .as_ref()
            .is_some_and(Structure::known_chain_marker)
    }

    #[must_use]
    pub fn known_chain(&self) -> Option<&Chain> {
        self.structure.as_ref().and_then(Structure::known_chain)
    }

    #[must_use]
    pub fn class(&self) -> Option<LipidClass> {
        self.structure.as_ref().map(Structure::class)
    }

    #[must_use]
    pub fn sub_class(&self) -> Option<SubClass> {
        self.structure.as_ref().and_then(Structure::sub_class)
    }

    #[must_use]
    pub fn trailing_annotation(&self) -> Option<&str> {
        self.structure.as_ref().map(Structure::trailing_annotation)
    }

    /// Everything that went wrong (non-fatally) while this record was being built
    #[must_use]
    pub fn diagnostics(&self) -> &[LipidDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn render(&self, convention: Convention) -> Option<String> {
        convention.render(self)
    }
}

impl Display for Lipid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.render(Convention::Standard) {
            Some(rendered) => write!(f, "{rendered}"),
            None => write!(f, "{}", self.raw_name),
        }
    }
}

impl Structure {
    #[must_use]
    pub fn entry_token(&self) -> &str {
        &self.entry_token
    }

    /// The hydroxylation or ether marker, which is empty (not missing) when the name didn't have one
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn chains(&self) -> &Chains {
        &self.chains
    }

    #[must_use]
    pub const fn known_chain_marker(&self) -> bool {
        self.known_chain.is_some()
    }

    #[must_use]
    pub const fn known_chain(&self) -> Option<&Chain> {
        self.known_chain.as_ref()
    }

    #[must_use]
    pub const fn class(&self) -> LipidClass {
        self.class
    }

    #[must_use]
    pub const fn sub_class(&self) -> Option<SubClass> {
        self.sub_class
    }

    #[must_use]
    pub fn trailing_annotation(&self) -> &str {
        &self.trailing_annotation
    }
}

// Private Helper Functions ============================================================================================

impl Structure {
    fn build(
        raw_name: &str,
        raw: RawLipid,
        rules: &ClassRules,
        diagnostics: &mut Vec<LipidDiagnostic>,
    ) -> Self {
        let RawLipid {
            entry_token,
            prefix,
            chains: [first, mut second, third],
            known_chain_marker,
            extra_chains,
            trailing_annotation,
        } = raw;

        // NOTE: Only the second slot can hold a known chain, so taking it leaves a gap there and never moves the third
        let known_chain = if known_chain_marker {
            second.take()
        } else {
            None
        };

        let mut chains = Chains::default();
        let slots = [first, second, third]
            .into_iter()
            .chain(extra_chains.into_iter().map(Some));
        for slot in slots {
            if let Err(Some(rejected)) = chains.push(slot) {
                report(
                    diagnostics,
                    LipidDiagnostic::capacity_exceeded(raw_name, rejected),
                );
            }
        }

        let (class, sub_class) = rules.classify(entry_token);
        if class == LipidClass::Unknown {
            report(diagnostics, LipidDiagnostic::unknown_class(entry_token));
        } else {
            debug!("classified {raw_name:?} as {class} (sub-class: {sub_class:?})");
        }

        Self {
            entry_token: entry_token.to_owned(),
            prefix: prefix.to_owned(),
            chains,
            known_chain,
            class,
            sub_class,
            trailing_annotation: trailing_annotation.to_owned(),
        }
    }
}

fn report(diagnostics: &mut Vec<LipidDiagnostic>, diagnostic: LipidDiagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

// Module Tests ========================================================================================================
