//! Aggregate counts over a batch's results
//!
//! These are the figures the results view shows next to the table: how many
//! patients were processed and how they split by diagnosis and severity.

use std::collections::BTreeMap;
use std::fmt::Write;

use itertools::Itertools;

use crate::models::DiagnosisResult;

/// Counts over a result sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of results
    pub total: usize,
    /// Results with an accepted condition
    pub matched: usize,
    /// Results per diagnosis, sorted by diagnosis
    pub by_diagnosis: BTreeMap<String, usize>,
    /// Results per severity label, sorted by label
    pub by_severity: BTreeMap<String, usize>,
}

impl BatchSummary {
    /// Count results by diagnosis and severity
    #[must_use]
    pub fn from_results(results: &[DiagnosisResult]) -> Self {
        Self {
            total: results.len(),
            matched: results.iter().filter(|r| r.is_matched()).count(),
            by_diagnosis: results
                .iter()
                .map(|r| r.diagnosis.clone())
                .counts()
                .into_iter()
                .collect(),
            by_severity: results
                .iter()
                .map(|r| r.severity.clone())
                .counts()
                .into_iter()
                .collect(),
        }
    }

    /// Results no condition was accepted for
    #[must_use]
    pub const fn unmatched(&self) -> usize {
        self.total - self.matched
    }

    /// Human readable summary
    #[must_use]
    pub fn render(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Diagnosis Summary:\n");
        let _ = writeln!(summary, "  Total Patients: {}", self.total);
        let _ = writeln!(summary, "  Matched: {}", self.matched);
        let _ = writeln!(summary, "  Unmatched: {}", self.unmatched());

        summary.push_str("  By Diagnosis:\n");
        for (diagnosis, count) in &self.by_diagnosis {
            let _ = writeln!(summary, "    {diagnosis}: {count}");
        }

        summary.push_str("  By Severity:\n");
        for (severity, count) in &self.by_severity {
            let _ = writeln!(summary, "    {severity}: {count}");
        }

        summary
    }
}

/// Every result row in file order, one block per patient
#[must_use]
pub fn render_results(results: &[DiagnosisResult]) -> String {
    let mut rendered = String::new();
    for (number, r) in results.iter().enumerate() {
        let _ = writeln!(
            rendered,
            "{}. {}: {} (ICD {}, CPT {})",
            number + 1,
            r.patient_email,
            r.diagnosis,
            r.icd_code,
            r.cpt_code
        );
        let _ = writeln!(
            rendered,
            "   Eye: {}, Onset: {}, Status: {}, SOD: {}, Severity: {}, Insurance: {}",
            r.eye, r.onset_date, r.diagnosis_status, r.sod, r.severity, r.insurance
        );
        let _ = writeln!(rendered, "   Prescription: {}", r.prescription);
        let _ = writeln!(rendered, "   Symptoms: {}", r.symptoms);
        let _ = writeln!(rendered, "   Processed: {}", r.processed_at);
    }
    rendered
}
