//! Patient record model
//!
//! Patient uploads have no fixed column set, so a record is a plain field map
//! queried through ordered alias lists.

use rustc_hash::FxHashMap;

/// Field names that may carry the patient's email, in priority order
pub const EMAIL_ALIASES: &[&str] = &["email", "patient_email", "Email", "e-mail"];

/// Field names that may carry the affected eye/side, in priority order
pub const EYE_ALIASES: &[&str] = &["eye", "Eye", "affected_eye", "affected-eye"];

/// Field names that may carry the onset date, in priority order
pub const ONSET_ALIASES: &[&str] = &["onset_date", "Onset_date", "onset", "Onset"];

/// One loosely structured patient record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientRecord {
    fields: FxHashMap<String, String>,
}

impl PatientRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`PatientRecord::insert`]
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Raw value of a field, if the record has it
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed value of a field if present and not blank
    #[must_use]
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the record has any of the given fields (blank or not)
    #[must_use]
    pub fn exposes_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.fields.contains_key(*name))
    }

    /// Value of the first alias that is present with a non-blank value
    #[must_use]
    pub fn first_present(&self, aliases: &[&str]) -> Option<&str> {
        aliases.iter().find_map(|alias| self.non_empty(alias))
    }

    /// Number of fields in the record
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PatientRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
