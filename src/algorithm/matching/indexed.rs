//! Index-driven candidate scan
//!
//! Only entries sharing at least one symptom with the patient are scored.
//! Candidates come back in ascending table position, so the strict
//! comparison keeps the same tie-break as the linear scan.

use rustc_hash::FxHashSet;

use crate::algorithm::matching::index::SymptomIndex;
use crate::algorithm::matching::similarity::jaccard_of_sets;
use crate::algorithm::matching::types::ScoredCandidate;

/// Find the highest scoring entry among entries sharing a symptom
///
/// Returns `None` when no entry shares a symptom with the patient.
#[must_use]
pub fn best_candidate_indexed(
    patient: &FxHashSet<String>,
    index: &SymptomIndex,
) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for position in index.candidates(patient) {
        let Some(symptoms) = index.entry_symptoms(position) else {
            continue;
        };

        let candidate = ScoredCandidate {
            position,
            score: jaccard_of_sets(patient, symptoms),
        };
        if candidate.beats(best.as_ref()) {
            best = Some(candidate);
        }
    }

    best
}
