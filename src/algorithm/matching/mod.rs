//! Symptom based condition matching
//!
//! This module maps a patient's free-form symptoms to the best fitting entry
//! of the ICD/CPT reference table. It includes:
//!
//! 1. Symptom extraction from open-schema patient records
//! 2. Jaccard similarity between symptom sets
//! 3. Best-match selection with a linear or an index-driven scan
//! 4. Primary to secondary code resolution

pub mod extraction;
pub mod index;
pub mod indexed;
pub mod matcher;
pub mod resolver;
pub mod sequential;
pub mod similarity;
pub mod types;

// Re-export key types
pub use extraction::{SYMPTOM_FIELDS, extract_symptoms, has_symptom_fields};
pub use matcher::Matcher;
pub use resolver::{CodeResolver, resolve_secondary_code};
pub use similarity::jaccard_similarity;
pub use types::{MatchOutcome, MatchStrategy, ScoredCandidate};
