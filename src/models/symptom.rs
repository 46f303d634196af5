//! Symptom set model
//!
//! A [`SymptomSet`] keeps the casing of the first occurrence of every symptom
//! for display, while all comparisons go through the lower-cased form.

use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt;

/// Lower-case and trim a symptom for comparison
#[must_use]
pub fn normalize_symptom(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

/// Normalize a symptom collection into a set, dropping empty entries
pub fn normalized_set<I, S>(symptoms: I) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symptoms
        .into_iter()
        .map(|s| normalize_symptom(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ordered, de-duplicated symptoms of one patient
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSet {
    symptoms: Vec<String>,
}

impl SymptomSet {
    /// Build a set from raw pieces
    ///
    /// Pieces are trimmed, empty pieces dropped, and later pieces that equal
    /// an earlier one ignoring case are discarded.
    pub fn from_pieces<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symptoms = pieces
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .unique_by(|s| s.to_lowercase())
            .collect();
        Self { symptoms }
    }

    /// Whether no symptom was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Number of distinct symptoms
    #[must_use]
    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    /// Symptoms in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(String::as_str)
    }

    /// Symptoms in first-seen order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.symptoms
    }

    /// Lower-cased symptoms used for scoring and index lookups
    #[must_use]
    pub fn normalized(&self) -> FxHashSet<String> {
        normalized_set(&self.symptoms)
    }

    /// Comma separated form used in the result file
    #[must_use]
    pub fn display_string(&self) -> String {
        self.symptoms.join(", ")
    }
}

impl fmt::Display for SymptomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl<'a> IntoIterator for &'a SymptomSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.symptoms.iter()
    }
}
