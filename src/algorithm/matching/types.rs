//! Type definitions for the matching algorithm

use crate::models::placeholders::{NO_MATCH_CODE, UNKNOWN, or_unknown};
use crate::models::ConditionEntry;

/// A scored reference entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Position of the entry in the reference table
    pub position: usize,
    /// Jaccard score against the patient's symptoms
    pub score: f64,
}

impl ScoredCandidate {
    /// Whether this candidate should replace the current best
    ///
    /// Only a strictly higher score wins, so the earliest entry keeps ties.
    #[must_use]
    pub fn beats(&self, best: Option<&Self>) -> bool {
        best.is_none_or(|best| self.score > best.score)
    }
}

/// How candidates are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Score every entry of the table
    Linear,
    /// Score only entries sharing a symptom, through the inverted index
    Indexed,
}

/// Diagnostic fields selected for one patient
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Condition name
    pub condition: String,
    /// Primary (ICD) code, or the no-match code
    pub icd_code: String,
    /// Prescription
    pub prescription: String,
    /// Severity label
    pub severity: String,
    /// Onset-duration label
    pub sod: String,
    /// Diagnosis status label
    pub diagnosis_status: String,
    /// Insurance label
    pub insurance: String,
    /// Best candidate found, accepted or not
    pub best: Option<ScoredCandidate>,
}

impl MatchOutcome {
    /// Outcome for a patient no condition was accepted for
    #[must_use]
    pub fn unknown(best: Option<ScoredCandidate>) -> Self {
        Self {
            condition: UNKNOWN.to_string(),
            icd_code: NO_MATCH_CODE.to_string(),
            prescription: UNKNOWN.to_string(),
            severity: UNKNOWN.to_string(),
            sod: UNKNOWN.to_string(),
            diagnosis_status: UNKNOWN.to_string(),
            insurance: UNKNOWN.to_string(),
            best,
        }
    }

    /// Outcome carrying the fields of an accepted entry
    ///
    /// Fields the entry lacks fall back to the placeholder one by one.
    #[must_use]
    pub fn from_entry(entry: &ConditionEntry, best: ScoredCandidate) -> Self {
        Self {
            condition: or_unknown(entry.condition.as_deref()),
            icd_code: or_unknown(entry.icd_code.as_deref()),
            prescription: or_unknown(entry.prescription.as_deref()),
            severity: or_unknown(entry.severity.as_deref()),
            sod: or_unknown(entry.sod.as_deref()),
            diagnosis_status: or_unknown(entry.diagnosis_status.as_deref()),
            insurance: or_unknown(entry.insurance.as_deref()),
            best: Some(best),
        }
    }

    /// Whether a condition was accepted
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.icd_code != NO_MATCH_CODE
    }
}
