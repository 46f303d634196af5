//! Linear scan over the reference table
//!
//! Every entry sharing at least one symptom with the patient is scored, in
//! table order.

use rustc_hash::FxHashSet;

use crate::algorithm::matching::index::SymptomIndex;
use crate::algorithm::matching::similarity::jaccard_of_sets;
use crate::algorithm::matching::types::ScoredCandidate;

/// Find the highest scoring entry by scoring every candidate
///
/// Returns `None` when no entry shares a symptom with the patient.
#[must_use]
pub fn best_candidate_linear(
    patient: &FxHashSet<String>,
    prepared: &SymptomIndex,
) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for (position, symptoms) in prepared.entries() {
        if symptoms.is_disjoint(patient) {
            continue;
        }

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
