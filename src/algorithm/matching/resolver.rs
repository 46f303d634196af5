//! Secondary (CPT) code resolution
//!
//! The first reference entry carrying a primary code decides the secondary
//! code for it. Anything unresolvable comes back as the no-match code.

use rustc_hash::FxHashMap;

use crate::models::placeholders::{NO_MATCH_CODE, is_no_match};
use crate::models::{ConditionEntry, ReferenceTable};

fn primary_code(entry: &ConditionEntry) -> Option<&str> {
    entry
        .icd_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
}

fn secondary_or_no_match(entry: &ConditionEntry) -> String {
    entry
        .cpt_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(NO_MATCH_CODE)
        .to_string()
}

/// Look up the secondary code for a primary code by scanning the table
#[must_use]
pub fn resolve_secondary_code(primary: &str, table: &ReferenceTable) -> String {
    let primary = primary.trim();
    if is_no_match(primary) {
        return NO_MATCH_CODE.to_string();
    }

    table
        .entries()
        .iter()
        .find(|entry| primary_code(entry) == Some(primary))
        .map_or_else(|| NO_MATCH_CODE.to_string(), secondary_or_no_match)
}

/// Pre-built primary to secondary code lookup
///
/// Holds the same answers as [`resolve_secondary_code`] without scanning
/// the table for every patient.
#[derive(Debug, Clone, Default)]
pub struct CodeResolver {
    codes: FxHashMap<String, String>,
}

impl CodeResolver {
    /// Build the lookup, keeping the first entry for each primary code
    #[must_use]
    pub fn new(table: &ReferenceTable) -> Self {
        let mut codes = FxHashMap::default();
        for entry in table.entries() {
            if let Some(primary) = primary_code(entry) {
                codes
                    .entry(primary.to_string())
                    .or_insert_with(|| secondary_or_no_match(entry));
            }
        }
        Self { codes }
    }

    /// Secondary code for a primary code, or the no-match code
    #[must_use]
    pub fn resolve(&self, primary: &str) -> String {
        let primary = primary.trim();
        if is_no_match(primary) {
            return NO_MATCH_CODE.to_string();
        }
        self.codes
            .get(primary)
            .cloned()
            .unwrap_or_else(|| NO_MATCH_CODE.to_string())
    }
}
