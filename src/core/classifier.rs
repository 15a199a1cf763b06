// src/core/classifier.rs

//! Ordered first-match rule engine mapping a vocalized verb to its form.

use tracing::debug;

use crate::core::diacritics::{self, ALEF, ALEF_WASLA, FATHA, KASRA, NOON, SEEN, SHADDA, TEH};
use crate::core::types::{Classification, FormNumber};

/// Confidence reported on any rule hit. The rules are shape heuristics:
/// a hit means "the pattern is there", not a probability estimate.
const RULE_CONFIDENCE: f32 = 0.9;

/// A verb prepared for rule evaluation: normalized code points plus the
/// length of its harakat-stripped skeleton.
struct RuleInput {
    chars: Vec<char>,
    skeleton: usize,
}

impl RuleInput {
    fn new(verb: &str) -> Self {
        let normalized = diacritics::normalize(verb);
        Self {
            skeleton: diacritics::skeleton_len(&normalized),
            chars: normalized.chars().collect(),
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn starts_with(&self, prefix: &[char]) -> bool {
        self.chars.len() >= prefix.len() && self.chars[..prefix.len()] == *prefix
    }

    /// Code points in `[from, to)`, clamped to the verb. A window that
    /// falls outside the verb is empty and matches nothing; a rule that
    /// cannot be evaluated is a rule that does not match.
    fn window(&self, from: usize, to: usize) -> &[char] {
        let to = to.min(self.chars.len());
        &self.chars[from.min(to)..to]
    }

    /// Everything but the first and last code point.
    fn interior(&self) -> &[char] {
        self.window(1, self.len().saturating_sub(1))
    }

    /// Initial alef+kasra, in plain-alef or alef-wasla spelling.
    fn starts_alef_kasra(&self) -> bool {
        self.starts_with(&[ALEF, KASRA]) || self.starts_with(&[ALEF_WASLA, KASRA])
    }

    fn starts_alef_kasra_then(&self, letter: char) -> bool {
        self.starts_with(&[ALEF, KASRA, letter]) || self.starts_with(&[ALEF_WASLA, KASRA, letter])
    }
}

// Doubled middle radical, with none of the prefixed-form openings.
fn form_ii(v: &RuleInput) -> bool {
    v.interior().contains(&SHADDA)
        && !v.starts_with(&[ALEF, FATHA])
        && !v.starts_with(&[TEH])
        && !v.starts_with(&[ALEF])
}

// Long ā after the first radical.
fn form_iii(v: &RuleInput) -> bool {
    let w = v.window(1, 3);
    v.skeleton >= 4 && w.contains(&ALEF) && w.contains(&FATHA)
}

fn form_iv(v: &RuleInput) -> bool {
    v.starts_with(&[ALEF, FATHA]) && v.skeleton >= 4
}

fn form_v(v: &RuleInput) -> bool {
    v.starts_with(&[TEH, FATHA])
        && v.window(2, v.len().saturating_sub(1)).contains(&SHADDA)
        && v.skeleton >= 5
}

fn form_vi(v: &RuleInput) -> bool {
    v.starts_with(&[TEH, FATHA]) && v.window(2, 5).contains(&ALEF) && v.skeleton >= 5
}

fn form_vii(v: &RuleInput) -> bool {
    v.starts_alef_kasra_then(NOON) && v.skeleton >= 5
}

// The marker of Form VIII is the teh infixed after the first radical,
// so the opening can be any letter except the noon/seen augments owned
// by Forms VII and X.
fn form_viii(v: &RuleInput) -> bool {
    v.starts_alef_kasra()
        && !v.starts_alef_kasra_then(NOON)
        && !v.starts_alef_kasra_then(SEEN)
        && v.window(3, 6).contains(&TEH)
        && v.skeleton >= 5
}

fn form_ix(v: &RuleInput) -> bool {
    v.starts_alef_kasra() && v.chars.last() == Some(&SHADDA) && v.skeleton >= 5
}

fn form_x(v: &RuleInput) -> bool {
    v.starts_alef_kasra_then(SEEN) && v.window(2, 5).contains(&TEH) && v.skeleton >= 6
}

fn form_i(v: &RuleInput) -> bool {
    v.skeleton == 3
        && v.chars.contains(&FATHA)
        && !v.chars.contains(&SHADDA)
        && !v.starts_with(&[ALEF, FATHA])
        && !v.starts_with(&[TEH])
}

type Rule = (FormNumber, fn(&RuleInput) -> bool);

/// Ordered rule table; the first satisfied predicate wins. Form I sits
/// last: its predicate is a permissive catch-all that would shadow the
/// augmented forms if tested earlier.
const RULES: [Rule; 10] = [
    (2, form_ii),
    (3, form_iii),
    (4, form_iv),
    (5, form_v),
    (6, form_vi),
    (7, form_vii),
    (8, form_viii),
    (9, form_ix),
    (10, form_x),
    (1, form_i),
];

/// Maps a vocalized verb to one of the ten forms. Stateless and
/// immutable; construct once and share freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormClassifier;

impl FormClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies `verb`. Empty or unvocalized input is never
    /// classified; without the marks the pattern is not recoverable.
    pub fn classify(&self, verb: &str) -> Classification {
        if verb.is_empty() || !diacritics::is_vocalized(verb) {
            return Classification::none();
        }
        let input = RuleInput::new(verb);
        for (form, rule) in RULES {
            if rule(&input) {
                debug!(form, verb, "form rule matched");
                return Classification::detected(form, RULE_CONFIDENCE);
            }
        }
        Classification::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(verb: &str) -> Classification {
        FormClassifier::new().classify(verb)
    }

    #[test]
    fn canonical_verbs_hit_their_forms() {
        let cases = [
            ("كَتَبَ", 1),
            ("كَتَّبَ", 2),
            ("كَاتَبَ", 3),
            ("أَكْتَبَ", 4),
            ("تَكَتَّبَ", 5),
            ("تَكَاتَبَ", 6),
            ("اِنْكَتَبَ", 7),
            ("اِكْتَتَبَ", 8),
            ("اِسْتَكْتَبَ", 10),
        ];
        for (verb, expected) in cases {
            let result = classify(verb);
            assert_eq!(result.form, Some(expected), "verb {verb}");
            assert_eq!(result.confidence, RULE_CONFIDENCE, "verb {verb}");
        }
    }

    #[test]
    fn form_ix_needs_the_final_shadda() {
        assert_eq!(classify("اِشْوَدّ").form, Some(9));
    }

    #[test]
    fn empty_input_is_unclassified() {
        assert_eq!(classify(""), Classification::none());
    }

    #[test]
    fn unvocalized_input_is_unclassified() {
        assert_eq!(classify("كتب").form, None);
        assert_eq!(classify("استكتب").form, None);
        assert_eq!(classify("كتب").confidence, 0.0);
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify("تَكَاتَبَ");
        let second = classify("تَكَاتَبَ");
        assert_eq!(first, second);
    }

    #[test]
    fn wasla_spellings_are_accepted() {
        assert_eq!(classify("ٱِنْكَتَبَ").form, Some(7));
        assert_eq!(classify("ٱِسْتَكْتَبَ").form, Some(10));
    }

    #[test]
    fn rule_predicates_in_isolation() {
        assert!(form_ii(&RuleInput::new("كَتَّبَ")));
        assert!(!form_ii(&RuleInput::new("تَكَتَّبَ"))); // teh opening is Form V's
        assert!(form_iii(&RuleInput::new("كَاتَبَ")));
        assert!(!form_iii(&RuleInput::new("كَتَبَ"))); // skeleton too short
        assert!(form_viii(&RuleInput::new("اِكْتَتَبَ")));
        assert!(!form_viii(&RuleInput::new("اِنْكَتَبَ"))); // noon belongs to VII
        assert!(!form_viii(&RuleInput::new("اِسْتَكْتَبَ"))); // seen belongs to X
        assert!(form_i(&RuleInput::new("كَتَبَ")));
        assert!(!form_i(&RuleInput::new("كَتَّبَ")));
    }

    #[test]
    fn short_input_fails_rules_without_panicking() {
        // Vocalized but far too short for any window the rules look at.
        assert_eq!(classify("بَ").form, None);
        assert_eq!(classify("َ").form, None);
    }
}
