//! The pure halves of a SwissLipids search: building the search term and picking an identifier out of the response
//!
//! Actually sending the request is left to the caller, which should pass the response status and body straight to
//! [`best_match()`]

// External Crate Imports
use itertools::Itertools;
use log::warn;
use serde::Deserialize;

// Local Crate Imports
use crate::{Convention, Lipid};

/// Where search terms should be sent, as the `term` query parameter
pub const SEARCH_ENDPOINT: &str = "https://www.swisslipids.org/api/search";

/// One entry of a search response
#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
pub struct SearchHit {
    pub entity_id: String,
    #[serde(default)]
    pub classification_level: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
}

// Public API ==========================================================================================================

/// The name to search for, which is always the swiss-convention rendering (so free fatty acids are searched as `FA`)
#[must_use]
pub fn search_term(lipid: &Lipid) -> Option<String> {
    Convention::Swiss.render(lipid)
}

/// Picks the identifier of the best hit out of a search response, or returns `None` if there isn't a clear winner
///
/// Unsuccessful responses and bodies that aren't a JSON list of hits are never treated as errors, they just don't
/// match anything
#[must_use]
pub fn best_match(status: u16, body: &str) -> Option<String> {
    if !(200..=299).contains(&status) {
        warn!("the lipid search failed with status {status}");
        return None;
    }

    match serde_json::from_str::<Vec<SearchHit>>(body) {
        Ok(hits) => select(hits).map(|hit| hit.entity_id),
        Err(error) => {
            warn!("the lipid search response couldn't be decoded: {error}");
            None
        }
    }
}

// Private Helper Functions ============================================================================================

// NOTE: A lone hit is taken as-is, but several hits only produce a match when exactly one of them is class-level
fn select(hits: Vec<SearchHit>) -> Option<SearchHit> {
    if hits.len() == 1 {
        return hits.into_iter().next();
    }

    hits.into_iter()
        .filter(|hit| hit.classification_level.as_deref() == Some("Class"))
        .exactly_one()
        .ok()
}

// Module Tests ========================================================================================================
