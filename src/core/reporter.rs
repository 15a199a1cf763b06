// src/core/reporter.rs

//! Fixed-width comparison tables and the comprehensive per-form report.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::core::classifier::FormClassifier;
use crate::core::diacritics::skeleton_len;
use crate::core::generator::generate_variants;
use crate::core::registry::FormRegistry;
use crate::core::types::{ComprehensiveFormRecord, FormNumber, PLACEHOLDER};
use crate::sarf::{
    derivative, pronoun, tense, DisplayFormat, FormRenderer, FutureType, SarfBackend, SarfOutput,
    SarfRequest,
};

/// Report construction failures. The `Display` text of each variant is
/// the stable sentinel wording callers have always received.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("No verb provided")]
    NoVerb,
    #[error("Form {form} not available for verb '{word}'")]
    FormUnavailable { form: FormNumber, word: String },
}

const BORDER: &str = "+-----+----------------------+----------------------+--------------------+";
const HEADER: &str = "|Form | Arabic Name          | Conjugated Verb      | Meaning            |";

/// Renders the ten-row comparison grid. Every form gets a row: the
/// supplied spelling when `forms_data` has one, otherwise the first
/// generated candidate, otherwise the literal `Generated` placeholder
/// (`N/A` when there is no base verb to generate from). The detected
/// form's number is starred, and a detection summary trails the grid.
pub fn comparison_table(
    classifier: &FormClassifier,
    registry: &FormRegistry,
    base_verb: &str,
    forms_data: &HashMap<FormNumber, String>,
) -> String {
    let detected = classifier.classify(base_verb);

    let mut lines = vec![BORDER.to_string(), HEADER.to_string(), BORDER.to_string()];
    for descriptor in registry.all() {
        let form = descriptor.form;
        let cell = match forms_data.get(&form) {
            Some(spelling) => spelling.clone(),
            None if base_verb.is_empty() => "N/A".to_string(),
            None => generate_variants(base_verb, form)
                .into_iter()
                .next()
                .unwrap_or_else(|| "Generated".to_string()),
        };
        let marker = if detected.form == Some(form) {
            format!("{form}*")
        } else {
            form.to_string()
        };
        lines.push(format!(
            "| {:<3} | {:<20} | {:<20} | {:<18} |",
            marker, descriptor.arabic_name, cell, descriptor.english_meaning
        ));
    }
    lines.push(BORDER.to_string());

    if let Some(form) = detected.form {
        if let Ok(descriptor) = registry.describe(form) {
            lines.push(format!(
                "\nDetected: {} is Form {} ({})",
                base_verb, form, descriptor.arabic_name
            ));
            lines.push(format!("Confidence: {:.1}%", detected.confidence * 100.0));
        }
    }
    lines.join("\n")
}

/// Classifies `word`, fills the remaining forms from the generator when
/// the skeleton is triliteral, applies the optional form filter, and
/// renders the comparison grid.
pub fn forms_table(
    classifier: &FormClassifier,
    registry: &FormRegistry,
    word: &str,
    form_filter: Option<FormNumber>,
) -> Result<String, ReportError> {
    if word.is_empty() {
        return Err(ReportError::NoVerb);
    }

    let detected = classifier.classify(word).form;
    let mut forms_data: HashMap<FormNumber, String> = HashMap::new();
    if let Some(form) = detected {
        forms_data.insert(form, word.to_string());
    }

    if skeleton_len(word) == 3 {
        for form in 1..=10u8 {
            if detected == Some(form) {
                continue;
            }
            // Forms without candidates (notably IX) are simply skipped.
            if let Some(first) = generate_variants(word, form).into_iter().next() {
                forms_data.insert(form, first);
            }
        }
    }

    let filtered = match form_filter {
        Some(form) => match forms_data.get(&form) {
            Some(spelling) => HashMap::from([(form, spelling.clone())]),
            None => {
                return Err(ReportError::FormUnavailable {
                    form,
                    word: word.to_string(),
                })
            }
        },
        None => forms_data,
    };

    Ok(comparison_table(classifier, registry, word, &filtered))
}

/// Report metadata, frozen as its own literal table so the report format
/// does not move with the registry.
const COMPREHENSIVE_FORMS: [(FormNumber, &str, &str, &str); 10] = [
    (1, "I", "فَعَلَ", "Basic/Original"),
    (2, "II", "فَعَّلَ", "Intensive/Causative"),
    (3, "III", "فَاعَلَ", "Interactive/Reciprocal"),
    (4, "IV", "أَفْعَلَ", "Causative/Declarative"),
    (5, "V", "تَفَعَّلَ", "Reflexive of Form II"),
    (6, "VI", "تَفاعَلَ", "Reciprocal of Form III"),
    (7, "VII", "اِنْفَعَلَ", "Passive/Reflexive"),
    (8, "VIII", "اِفْتَعَلَ", "Reflexive/Participatory"),
    (9, "IX", "اِفْعَلَّ", "Color/Physical Defects"),
    (10, "X", "اِسْتَفْعَلَ", "Request/Seeking"),
];

/// Builds one record per form. Each form's spelling is the input word
/// when that form was detected, else the first generated candidate for a
/// triliteral skeleton. With a spelling in hand the backend is asked for
/// the full derivative and conjugation tables; whatever it cannot supply
/// is filled with the placeholder.
pub fn comprehensive_records(
    classifier: &FormClassifier,
    backend: &dyn SarfBackend,
    word: &str,
    future_type: FutureType,
    transitive: bool,
) -> Vec<ComprehensiveFormRecord> {
    let detected = classifier.classify(word).form;
    let triliteral = skeleton_len(word) == 3;

    let mut records = Vec::with_capacity(COMPREHENSIVE_FORMS.len());
    for (form, roman, pattern, meaning) in COMPREHENSIVE_FORMS {
        let mut record = blank_record(form, roman, pattern, meaning);

        let spelling = if detected == Some(form) {
            Some(word.to_string())
        } else if triliteral {
            generate_variants(word, form).into_iter().next()
        } else {
            None
        };
        let Some(verb) = spelling else {
            records.push(record);
            continue;
        };

        let request = SarfRequest {
            word: verb.clone(),
            future_type,
            transitive,
            display_format: DisplayFormat::Dict,
            ..SarfRequest::default()
        };
        match backend.do_sarf(&request) {
            Ok(SarfOutput::Structured(tables)) => {
                let get = |value: Option<&str>| value.unwrap_or(PLACEHOLDER).to_string();
                record.verbal_noun = get(tables.derivative(derivative::VERBAL_NOUN));
                record.active_participle = get(tables.derivative(derivative::ACTIVE_PARTICIPLE));
                record.passive_participle = get(tables.derivative(derivative::PASSIVE_PARTICIPLE));
                record.noun_of_place = get(tables.derivative(derivative::NOUN_OF_PLACE));
                record.noun_of_time = get(tables.derivative(derivative::NOUN_OF_TIME));
                record.perfect_active =
                    get(tables.conjugated(tense::PERFECT_ACTIVE, pronoun::THIRD_MASC_SING));
                record.perfect_passive =
                    get(tables.conjugated(tense::PERFECT_PASSIVE, pronoun::THIRD_MASC_SING));
                record.imperfect_active =
                    get(tables.conjugated(tense::IMPERFECT_ACTIVE, pronoun::THIRD_MASC_SING));
                record.imperfect_passive =
                    get(tables.conjugated(tense::IMPERFECT_PASSIVE, pronoun::THIRD_MASC_SING));
                record.imperative =
                    get(tables.conjugated(tense::IMPERATIVE, pronoun::SECOND_MASC_SING));
            }
            Ok(SarfOutput::Rendered(_)) => {
                warn!(form, "backend returned no structured tables; keeping the spelling only");
                record.perfect_active = verb;
            }
            Err(err) => {
                warn!(form, error = %err, "conjugation backend failed; degrading to placeholders");
                record.perfect_active = verb;
            }
        }
        records.push(record);
    }
    records
}

fn blank_record(form: FormNumber, roman: &str, pattern: &str, meaning: &str) -> ComprehensiveFormRecord {
    ComprehensiveFormRecord {
        form,
        roman: roman.to_string(),
        pattern: pattern.to_string(),
        meaning: meaning.to_string(),
        verbal_noun: PLACEHOLDER.to_string(),
        active_participle: PLACEHOLDER.to_string(),
        passive_participle: PLACEHOLDER.to_string(),
        noun_of_place: PLACEHOLDER.to_string(),
        noun_of_time: PLACEHOLDER.to_string(),
        perfect_active: PLACEHOLDER.to_string(),
        perfect_passive: PLACEHOLDER.to_string(),
        imperfect_active: PLACEHOLDER.to_string(),
        imperfect_passive: PLACEHOLDER.to_string(),
        imperative: PLACEHOLDER.to_string(),
    }
}

/// Plain fixed-width rendering of the comprehensive records.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl FormRenderer for PlainTextRenderer {
    fn render(&self, word: &str, records: &[ComprehensiveFormRecord]) -> String {
        let mut lines = vec![format!("Comprehensive forms for '{word}'"), String::new()];
        for record in records {
            lines.push(format!(
                "Form {:<5} {:<14} {}",
                record.roman, record.pattern, record.meaning
            ));
            lines.push(format!(
                "  perfect: {} / {}    imperfect: {} / {}    imperative: {}",
                record.perfect_active,
                record.perfect_passive,
                record.imperfect_active,
                record.imperfect_passive,
                record.imperative
            ));
            lines.push(format!(
                "  verbal noun: {}    participles: {} / {}    place: {}    time: {}",
                record.verbal_noun,
                record.active_participle,
                record.passive_participle,
                record.noun_of_place,
                record.noun_of_time
            ));
        }
        lines.join("\n")
    }
}

/// JSON rendering of the comprehensive records.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormRenderer;

impl FormRenderer for JsonFormRenderer {
    fn render(&self, _word: &str, records: &[ComprehensiveFormRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sarf::UnavailableBackend;

    fn fixtures() -> (FormClassifier, FormRegistry) {
        (FormClassifier::new(), FormRegistry::new())
    }

    fn data_rows(table: &str) -> Vec<&str> {
        table.lines().filter(|l| l.starts_with("| ")).collect()
    }

    fn starred_rows(table: &str) -> usize {
        data_rows(table)
            .iter()
            .filter(|row| {
                row.split('|')
                    .nth(1)
                    .map(|cell| cell.trim().ends_with('*'))
                    .unwrap_or(false)
            })
            .count()
    }

    #[test]
    fn table_always_has_ten_data_rows() {
        let (classifier, registry) = fixtures();
        let empty = comparison_table(&classifier, &registry, "", &HashMap::new());
        assert_eq!(data_rows(&empty).len(), 10);
        assert!(empty.contains("N/A"));
        assert_eq!(starred_rows(&empty), 0);
        assert!(!empty.contains("Detected:"));

        let detected = comparison_table(&classifier, &registry, "كَتَبَ", &HashMap::new());
        assert_eq!(data_rows(&detected).len(), 10);
        assert_eq!(starred_rows(&detected), 1);
        assert!(detected.contains("Detected: كَتَبَ is Form 1"));
        assert!(detected.contains("Confidence: 90.0%"));
    }

    #[test]
    fn undetected_base_verb_generates_without_a_star() {
        let (classifier, registry) = fixtures();
        // Vocalized enough to strip to three letters, but matching no rule.
        let table = comparison_table(&classifier, &registry, "كتبُ", &HashMap::new());
        assert_eq!(data_rows(&table).len(), 10);
        assert_eq!(starred_rows(&table), 0);
    }

    #[test]
    fn form_ix_row_keeps_the_generated_placeholder() {
        let (classifier, registry) = fixtures();
        let table = comparison_table(&classifier, &registry, "كَتَبَ", &HashMap::new());
        assert!(table.contains("Generated"));
    }

    #[test]
    fn forms_table_rejects_empty_words() {
        let (classifier, registry) = fixtures();
        let err = forms_table(&classifier, &registry, "", None).unwrap_err();
        assert_eq!(err, ReportError::NoVerb);
        assert_eq!(err.to_string(), "No verb provided");
    }

    #[test]
    fn forms_table_seeds_the_detected_form() {
        let (classifier, registry) = fixtures();
        let table = forms_table(&classifier, &registry, "كَتَبَ", None).unwrap();
        assert!(table.contains("كَتَبَ"));
        assert_eq!(starred_rows(&table), 1);
    }

    #[test]
    fn forms_table_filter_on_an_available_form() {
        let (classifier, registry) = fixtures();
        let table = forms_table(&classifier, &registry, "كَتَبَ", Some(2)).unwrap();
        assert_eq!(data_rows(&table).len(), 10);
    }

    #[test]
    fn forms_table_filter_on_a_missing_form() {
        let (classifier, registry) = fixtures();
        let err = forms_table(&classifier, &registry, "كَتَبَ", Some(9)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Form 9 not available for verb 'كَتَبَ'"
        );
    }

    #[test]
    fn records_degrade_to_placeholders_without_a_backend() {
        let classifier = FormClassifier::new();
        let records = comprehensive_records(
            &classifier,
            &UnavailableBackend,
            "كَتَبَ",
            FutureType::Damma,
            false,
        );
        assert_eq!(records.len(), 10);

        let first = &records[0];
        assert_eq!(first.perfect_active, "كَتَبَ"); // the detected form keeps the input
        assert_eq!(first.verbal_noun, PLACEHOLDER);
        assert_eq!(first.imperative, PLACEHOLDER);

        let ninth = &records[8];
        assert_eq!(ninth.roman, "IX");
        assert_eq!(ninth.perfect_active, PLACEHOLDER); // no spelling at all
    }

    #[test]
    fn json_renderer_emits_an_array() {
        let classifier = FormClassifier::new();
        let records = comprehensive_records(
            &classifier,
            &UnavailableBackend,
            "كَتَبَ",
            FutureType::Damma,
            false,
        );
        let json = JsonFormRenderer.render("كَتَبَ", &records);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(10));
    }
}
