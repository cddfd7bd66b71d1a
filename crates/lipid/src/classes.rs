// External Crate Imports
use serde::{Serialize, Serializer};

// Local Crate Imports
use crate::{ClassRule, ClassRules, LipidClass, Matcher, SubClass};

use crate::LipidClass::{
    Ceramide, CholesterylEster, Diacylglycerol, Dihydroceramide, FreeFattyAcid, HexosylCeramide,
    Monoacylglycerol, PhosphatidylCholine, PhosphatidylEthanolamine, PhosphatidylGlycerol,
    PhosphatidylInositol, PhosphatidylSerine, Sphingomyelin, Triacylglycerol, Unknown,
};

// NOTE: Order matters here! The generic `-ic` fatty-acid rule has to stay last so that it can never shadow a more
// specific abbreviation
pub static CANONICAL_CLASS_RULES: ClassRules<'static> = ClassRules(&[
    ClassRule::new(Matcher::Exact(&["ce", "lce"]), CholesterylEster),
    ClassRule::new(Matcher::Exact(&["pe", "lpe"]), PhosphatidylEthanolamine),
    ClassRule::new(Matcher::Exact(&["hcer", "hexcer"]), HexosylCeramide),
    ClassRule::new(Matcher::Exact(&["cer", "lcer"]), Ceramide),
    ClassRule::new(Matcher::Exact(&["mag", "mg"]), Monoacylglycerol),
    ClassRule::new(Matcher::Exact(&["dag", "dg"]), Diacylglycerol),
    ClassRule::new(Matcher::Exact(&["tag", "tg"]), Triacylglycerol),
    ClassRule::new(Matcher::Exact(&["sm"]), Sphingomyelin),
    ClassRule::new(Matcher::Exact(&["dcer"]), Dihydroceramide),
    ClassRule::new(Matcher::Exact(&["pc", "lpc"]), PhosphatidylCholine),
    ClassRule::new(Matcher::Exact(&["pi", "lpi"]), PhosphatidylInositol),
    ClassRule::new(Matcher::Exact(&["pg"]), PhosphatidylGlycerol),
    ClassRule::new(Matcher::Exact(&["ps"]), PhosphatidylSerine),
    ClassRule::new(Matcher::Suffix("ic"), FreeFattyAcid),
]);

impl ClassRule {
    #[must_use]
    pub const fn new(matcher: Matcher, class: LipidClass) -> Self {
        Self { matcher, class }
    }
}

impl Matcher {
    #[must_use]
    pub fn matches(&self, entry_token: &str) -> bool {
        match *self {
            Self::Exact(abbrs) => abbrs.iter().any(|abbr| abbr.eq_ignore_ascii_case(entry_token)),
            Self::Suffix(suffix) => entry_token
                .len()
                .checked_sub(suffix.len())
                .and_then(|start| entry_token.get(start..))
                .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix)),
        }
    }
}

impl<'r> ClassRules<'r> {
    #[must_use]
    pub const fn new(rules: &'r [ClassRule]) -> Self {
        Self(rules)
    }

    #[must_use]
    pub const fn rules(&self) -> &'r [ClassRule] {
        self.0
    }

    /// Returns the class of the first rule (in table order) that matches, or `None` if no rule does
    #[must_use]
    pub fn resolve(&self, entry_token: &str) -> Option<LipidClass> {
        self.0
            .iter()
            .find(|rule| rule.matcher.matches(entry_token))
            .map(|rule| rule.class)
    }

    /// Resolves the class (falling back to [`LipidClass::Unknown`]) and, where applicable, the lyso sub-class
    #[must_use]
    pub fn classify(&self, entry_token: &str) -> (LipidClass, Option<SubClass>) {
        let class = self.resolve(entry_token).unwrap_or(Unknown);
        (class, SubClass::of(class, entry_token))
    }
}

impl Default for ClassRules<'static> {
    fn default() -> Self {
        CANONICAL_CLASS_RULES
    }
}

impl SubClass {
    // NOTE: This is a purely textual check: `LPE` is already matched by the `pe|lpe` rule, but still picks up the
    // `LPE` sub-class here because the token starts with an "L"
    #[must_use]
    pub fn of(class: LipidClass, entry_token: &str) -> Option<Self> {
        let lyso = entry_token.starts_with(['L', 'l']);
        let eligible = !matches!(class, FreeFattyAcid | Unknown);
        (lyso && eligible).then_some(Self(class))
    }

    #[must_use]
    pub const fn class(self) -> LipidClass {
        self.0
    }
}

impl Serialize for LipidClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for SubClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
