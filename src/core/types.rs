// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The number of a canonical derivation form, 1 through 10.
pub type FormNumber = u8;

/// Shown in place of any derivative or conjugated field that could not
/// be produced.
pub const PLACEHOLDER: &str = "—";

/// Outcome of running a verb through the form classifier.
/// The confidence is a fixed constant per rule hit (0.9), not a computed
/// score: the rules either recognize a pattern or they don't.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub form: Option<FormNumber>,
    pub confidence: f32,
}

impl Classification {
    pub fn none() -> Self {
        Self {
            form: None,
            confidence: 0.0,
        }
    }

    pub fn detected(form: FormNumber, confidence: f32) -> Self {
        Self {
            form: Some(form),
            confidence,
        }
    }
}

/// One row of the comprehensive per-form report: fixed pattern metadata
/// plus the derivatives and key conjugations obtained from the
/// conjugation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveFormRecord {
    pub form: FormNumber,
    /// Roman numeral of the form, "I" through "X".
    pub roman: String,
    pub pattern: String,
    pub meaning: String,
    pub verbal_noun: String,
    pub active_participle: String,
    pub passive_participle: String,
    pub noun_of_place: String,
    pub noun_of_time: String,
    /// Perfect and imperfect at the third person masculine singular.
    pub perfect_active: String,
    pub perfect_passive: String,
    pub imperfect_active: String,
    pub imperfect_passive: String,
    /// Imperative at the second person masculine singular.
    pub imperative: String,
}
