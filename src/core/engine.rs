// src/core/engine.rs
use std::fmt;

use crate::core::classifier::FormClassifier;
use crate::core::generator;
use crate::core::registry::FormRegistry;
use crate::core::reporter::{self, PlainTextRenderer, ReportError};
use crate::core::types::{Classification, ComprehensiveFormRecord, FormNumber};
use crate::sarf::{
    DisplayFormat, FormRenderer, FutureType, SarfBackend, SarfError, SarfOutput, SarfRequest,
};

/// Main entry point. Owns the classifier, the form catalog and the
/// collaborator handles, and dispatches on the requested display format.
/// Immutable after construction; every method takes `&self`, so a single
/// engine can be shared across threads.
pub struct SarfEngine {
    classifier: FormClassifier,
    registry: FormRegistry,
    backend: Box<dyn SarfBackend>,
    renderer: Box<dyn FormRenderer>,
}

/// Tagged outcome of [`SarfEngine::conjugate`]. `Display` reproduces the
/// historical plain-text sentinels for callers that expect to match on
/// returned text.
#[derive(Debug)]
pub enum ConjugationOutput {
    /// A finished report table (FORM_TABLE / COMPREHENSIVE_TABLE).
    Table(String),
    /// Backend result, forwarded unmodified.
    Sarf(SarfOutput),
    /// The verb's detected form does not match the requested filter.
    FilterMismatch {
        word: String,
        detected: Option<FormNumber>,
        requested: FormNumber,
    },
    /// Report construction failed (empty word, unavailable form).
    Report(ReportError),
    /// The backend failed on a pass-through conjugation.
    Backend(SarfError),
}

impl fmt::Display for ConjugationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(text) => f.write_str(text),
            Self::Sarf(SarfOutput::Rendered(text)) => f.write_str(text),
            Self::Sarf(SarfOutput::Structured(tables)) => {
                let json = serde_json::to_string(tables).unwrap_or_else(|_| "{}".to_string());
                f.write_str(&json)
            }
            Self::FilterMismatch {
                word,
                detected,
                requested,
            } => match detected {
                Some(form) => {
                    write!(f, "Error: Verb '{word}' is Form {form}, not Form {requested}")
                }
                None => {
                    write!(f, "Error: Verb '{word}' is Form unknown, not Form {requested}")
                }
            },
            Self::Report(err) => write!(f, "{err}"),
            Self::Backend(err) => write!(f, "Error: {err}"),
        }
    }
}

impl SarfEngine {
    /// Engine with the built-in plain-text renderer for comprehensive
    /// tables.
    pub fn new(backend: Box<dyn SarfBackend>) -> Self {
        Self::with_renderer(backend, Box::new(PlainTextRenderer))
    }

    pub fn with_renderer(backend: Box<dyn SarfBackend>, renderer: Box<dyn FormRenderer>) -> Self {
        Self {
            classifier: FormClassifier::new(),
            registry: FormRegistry::new(),
            backend,
            renderer,
        }
    }

    pub fn classify(&self, verb: &str) -> Classification {
        self.classifier.classify(verb)
    }

    pub fn registry(&self) -> &FormRegistry {
        &self.registry
    }

    pub fn variants(&self, word: &str, form: FormNumber) -> Vec<String> {
        generator::generate_variants(word, form)
    }

    pub fn forms_table(
        &self,
        word: &str,
        form_filter: Option<FormNumber>,
    ) -> Result<String, ReportError> {
        reporter::forms_table(&self.classifier, &self.registry, word, form_filter)
    }

    pub fn comprehensive_records(
        &self,
        word: &str,
        future_type: FutureType,
        transitive: bool,
    ) -> Vec<ComprehensiveFormRecord> {
        reporter::comprehensive_records(
            &self.classifier,
            self.backend.as_ref(),
            word,
            future_type,
            transitive,
        )
    }

    /// Dispatches a conjugation request. Table formats are built here;
    /// anything else goes to the backend, after the optional form filter
    /// has been validated against the classifier.
    pub fn conjugate(&self, request: &SarfRequest) -> ConjugationOutput {
        match request.display_format {
            DisplayFormat::FormTable => {
                match self.forms_table(&request.word, request.form_filter) {
                    Ok(table) => ConjugationOutput::Table(table),
                    Err(err) => ConjugationOutput::Report(err),
                }
            }
            DisplayFormat::ComprehensiveTable => {
                let records = self.comprehensive_records(
                    &request.word,
                    request.future_type,
                    request.transitive,
                );
                ConjugationOutput::Table(self.renderer.render(&request.word, &records))
            }
            _ => {
                if let Some(requested) = request.form_filter {
                    let detected = self.classifier.classify(&request.word).form;
                    if detected != Some(requested) {
                        return ConjugationOutput::FilterMismatch {
                            word: request.word.clone(),
                            detected,
                            requested,
                        };
                    }
                }
                match self.backend.do_sarf(request) {
                    Ok(output) => ConjugationOutput::Sarf(output),
                    Err(err) => ConjugationOutput::Backend(err),
                }
            }
        }
    }

    /// Legacy text rendering of [`conjugate`](Self::conjugate).
    pub fn conjugate_text(&self, request: &SarfRequest) -> String {
        self.conjugate(request).to_string()
    }
}
