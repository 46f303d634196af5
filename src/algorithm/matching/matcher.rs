//! Core matching implementation
//!
//! The [`Matcher`] prepares the reference table once and then selects the
//! best fitting condition for each patient's symptoms.

use log::debug;

use crate::algorithm::matching::index::SymptomIndex;
use crate::algorithm::matching::indexed::best_candidate_indexed;
use crate::algorithm::matching::sequential::best_candidate_linear;
use crate::algorithm::matching::similarity::jaccard_of_sets;
use crate::algorithm::matching::types::{MatchOutcome, MatchStrategy, ScoredCandidate};
use crate::config::MatcherConfig;
use crate::error::Result;
use crate::models::{ReferenceTable, SymptomSet};

/// Matcher for selecting a reference condition per patient
#[derive(Debug)]
pub struct Matcher<'a> {
    /// Matching configuration
    config: MatcherConfig,
    /// Reference table the matcher was prepared for
    table: &'a ReferenceTable,
    /// Normalized reference symptoms and inverted index
    index: SymptomIndex,
    /// How candidates are enumerated
    strategy: MatchStrategy,
}

impl<'a> Matcher<'a> {
    /// Prepare a matcher for a reference table
    ///
    /// Tables with at least `index_min_entries` entries are matched through
    /// the inverted index.
    pub fn new(table: &'a ReferenceTable, config: MatcherConfig) -> Result<Self> {
        let strategy = if table.len() >= config.index_min_entries {
            MatchStrategy::Indexed
        } else {
            MatchStrategy::Linear
        };
        Self::with_strategy(table, config, strategy)
    }

    /// Prepare a matcher with an explicit candidate strategy
    pub fn with_strategy(
        table: &'a ReferenceTable,
        config: MatcherConfig,
        strategy: MatchStrategy,
    ) -> Result<Self> {
        config.validate()?;
        let index = SymptomIndex::build(table);
        debug!(
            "Prepared {} reference entries ({} distinct symptoms), strategy {:?}",
            table.len(),
            index.vocabulary_size(),
            strategy
        );
        Ok(Self {
            config,
            table,
            index,
            strategy,
        })
    }

    /// Candidate strategy in use
    #[must_use]
    pub const fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Highest scoring entry for the symptoms, accepted or not
    #[must_use]
    pub fn best_candidate(&self, symptoms: &SymptomSet) -> Option<ScoredCandidate> {
        let patient = symptoms.normalized();
        match self.strategy {
            MatchStrategy::Linear => best_candidate_linear(&patient, &self.index),
            MatchStrategy::Indexed => best_candidate_indexed(&patient, &self.index),
        }
    }

    /// Scores of every entry that has reference symptoms, in table order
    #[must_use]
    pub fn score_all(&self, symptoms: &SymptomSet) -> Vec<ScoredCandidate> {
        let patient = symptoms.normalized();
        self.index
            .entries()
            .filter(|(_, entry)| !entry.is_empty())
            .map(|(position, entry)| ScoredCandidate {
                position,
                score: jaccard_of_sets(&patient, entry),
            })
            .collect()
    }

    /// Select the condition for a patient's symptoms
    ///
    /// A best score below the acceptance threshold, or no candidate at all,
    /// gives the unknown outcome. Never fails.
    #[must_use]
    pub fn find_best_match(&self, symptoms: &SymptomSet) -> MatchOutcome {
        let best = self.best_candidate(symptoms);

        let accepted = best
            .filter(|candidate| candidate.score >= self.config.acceptance_threshold)
            .and_then(|candidate| {
                self.table
                    .get(candidate.position)
                    .map(|entry| MatchOutcome::from_entry(entry, candidate))
            });

        match accepted {
            Some(outcome) => {
                debug!(
                    "Matched [{}] to {} ({}) with score {:.3}",
                    symptoms,
                    outcome.condition,
                    outcome.icd_code,
                    best.map_or(0.0, |b| b.score)
                );
                outcome
            }
            None => {
                debug!(
                    "No condition accepted for [{}] (best score {:.3})",
                    symptoms,
                    best.map_or(0.0, |b| b.score)
                );
                MatchOutcome::unknown(best)
            }
        }
    }
}
