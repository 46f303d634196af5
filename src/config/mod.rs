//! Configuration for the matcher and the batch run.

use std::path::PathBuf;

use crate::error::{DxError, Result};

/// Default reference table location, relative to the working directory
pub const DEFAULT_REFERENCE_PATH: &str = "icd_cpt_codes_extended.csv";
/// Default patient upload location
pub const DEFAULT_PATIENT_PATH: &str = "uploads/patient_data.csv";
/// Default result file location
pub const DEFAULT_OUTPUT_PATH: &str = "uploads/diagnosis_results.csv";

/// Configuration for the condition matcher
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Minimum Jaccard score a candidate needs to be accepted
    pub acceptance_threshold: f64,
    /// Reference tables with at least this many entries are matched through
    /// the inverted symptom index instead of a linear scan
    pub index_min_entries: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: 0.2, // 20% symptom overlap
            index_min_entries: 256,
        }
    }
}

impl MatcherConfig {
    /// Create a new builder for constructing a matcher configuration
    #[must_use]
    pub fn builder() -> MatcherConfigBuilder {
        MatcherConfigBuilder::default()
    }

    /// Check that the configured values are usable
    ///
    /// A threshold of zero would let candidates without any shared symptom
    /// win, which the indexed strategy never scores.
    pub fn validate(&self) -> Result<()> {
        if !(self.acceptance_threshold > 0.0 && self.acceptance_threshold <= 1.0) {
            return Err(DxError::Config(format!(
                "acceptance threshold must be in (0, 1], got {}",
                self.acceptance_threshold
            )));
        }
        Ok(())
    }
}

/// Builder for [`MatcherConfig`]
#[derive(Debug, Clone, Default)]
pub struct MatcherConfigBuilder {
    config: MatcherConfig,
}

impl MatcherConfigBuilder {
    /// Set the acceptance threshold
    #[must_use]
    pub const fn acceptance_threshold(mut self, threshold: f64) -> Self {
        self.config.acceptance_threshold = threshold;
        self
    }

    /// Set the table size from which the inverted index is used
    #[must_use]
    pub const fn index_min_entries(mut self, entries: usize) -> Self {
        self.config.index_min_entries = entries;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<MatcherConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration for one batch run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// ICD/CPT reference table (CSV)
    pub reference_path: PathBuf,
    /// Patient records (CSV or JSON vitals export)
    pub patient_path: PathBuf,
    /// Result file, overwritten on each run
    pub output_path: PathBuf,
    /// Matcher settings
    pub matcher: MatcherConfig,
    /// Draw a progress bar while processing patients
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            patient_path: PathBuf::from(DEFAULT_PATIENT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            matcher: MatcherConfig::default(),
            show_progress: false,
        }
    }
}

impl PipelineConfig {
    /// Check the matcher settings and that input and output do not collide
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;
        if self.output_path == self.reference_path || self.output_path == self.patient_path {
            return Err(DxError::Config(format!(
                "output path {} would overwrite an input file",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}
