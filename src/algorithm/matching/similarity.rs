//! Symptom set similarity
//!
//! Jaccard similarity over lower-cased, trimmed symptoms.

use rustc_hash::FxHashSet;

use crate::models::symptom::normalized_set;

/// Jaccard similarity of two raw symptom collections
///
/// Both sides are normalized first. Returns 0.0 when either side is empty
/// after normalization.
pub fn jaccard_similarity<A, B, SA, SB>(a: A, b: B) -> f64
where
    A: IntoIterator<Item = SA>,
    B: IntoIterator<Item = SB>,
    SA: AsRef<str>,
    SB: AsRef<str>,
{
    jaccard_of_sets(&normalized_set(a), &normalized_set(b))
}

/// Jaccard similarity of two already normalized sets
#[must_use]
pub fn jaccard_of_sets(a: &FxHashSet<String>, b: &FxHashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|s| large.contains(*s)).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}
