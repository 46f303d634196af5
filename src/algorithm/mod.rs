//! Algorithm implementations for symptom based diagnosis
//!
//! `matching` holds the per-patient decision procedure; `pipeline` runs it
//! over a batch of records.

pub mod matching;
pub mod pipeline;
