//! Prepared reference symptoms and the inverted symptom index
//!
//! Reference symptoms are normalized once per batch instead of once per
//! patient. The inverted index maps each normalized symptom to the table
//! positions that list it, in ascending order.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::models::ReferenceTable;
use crate::models::symptom::normalized_set;

/// Table positions listing one symptom
type Postings = SmallVec<[usize; 4]>;

/// Normalized reference symptoms with an inverted index over them
#[derive(Debug, Clone, Default)]
pub struct SymptomIndex {
    /// Normalized effective symptoms per table position (empty for entries
    /// that can never match)
    entry_symptoms: Vec<FxHashSet<String>>,
    /// Symptom to ascending table positions
    postings: FxHashMap<String, Postings>,
}

impl SymptomIndex {
    /// Prepare the symptoms of every entry and index them
    #[must_use]
    pub fn build(table: &ReferenceTable) -> Self {
        let entry_symptoms: Vec<FxHashSet<String>> = table
            .entries()
            .iter()
            .map(|entry| normalized_set(entry.effective_symptoms()))
            .collect();

        let mut postings: FxHashMap<String, Postings> = FxHashMap::default();
        for (position, symptoms) in entry_symptoms.iter().enumerate() {
            for symptom in symptoms {
                // Positions are visited in ascending order, so each list stays sorted
                postings.entry(symptom.clone()).or_default().push(position);
            }
        }

        Self {
            entry_symptoms,
            postings,
        }
    }

    /// Normalized symptoms of the entry at a table position
    #[must_use]
    pub fn entry_symptoms(&self, position: usize) -> Option<&FxHashSet<String>> {
        self.entry_symptoms.get(position)
    }

    /// Prepared symptoms of all entries, in table order
    pub fn entries(&self) -> impl Iterator<Item = (usize, &FxHashSet<String>)> {
        self.entry_symptoms.iter().enumerate()
    }

    /// Ascending, distinct positions of entries sharing at least one symptom
    #[must_use]
    pub fn candidates(&self, patient: &FxHashSet<String>) -> Vec<usize> {
        let mut positions: Vec<usize> = patient
            .iter()
            .filter_map(|symptom| self.postings.get(symptom))
            .flatten()
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// Number of distinct indexed symptoms
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }
}
