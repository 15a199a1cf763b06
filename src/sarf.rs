// src/sarf.rs

//! Boundary to the full-conjugation engine. This crate decides *which*
//! form a verb has and how a root spells in each form; conjugating a
//! verb across persons, tenses and voices is the backend's job,
//! consumed through the [`SarfBackend`] trait.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::diacritics::{DAMMA, FATHA, KASRA};
use crate::core::types::{ComprehensiveFormRecord, FormNumber};

/// Haraka of the verb's middle radical in the imperfect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FutureType {
    Fatha,
    Damma,
    Kasra,
}

impl FutureType {
    /// Arabic name of the haraka, the spelling backends expect.
    pub fn arabic_name(self) -> &'static str {
        match self {
            Self::Fatha => "فتحة",
            Self::Damma => "ضمة",
            Self::Kasra => "كسرة",
        }
    }

    pub fn mark(self) -> char {
        match self {
            Self::Fatha => FATHA,
            Self::Damma => DAMMA,
            Self::Kasra => KASRA,
        }
    }
}

/// Output format requested from the facade. `FormTable` and
/// `ComprehensiveTable` are handled in this crate; everything else is
/// passed through to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayFormat {
    Text,
    #[default]
    Html,
    HtmlColoredDiacritics,
    Dict,
    Csv,
    Gui,
    Table,
    Xml,
    TeX,
    Rows,
    FormTable,
    ComprehensiveTable,
}

impl DisplayFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Html => "HTML",
            Self::HtmlColoredDiacritics => "HTMLColoredDiacritics",
            Self::Dict => "DICT",
            Self::Csv => "CSV",
            Self::Gui => "GUI",
            Self::Table => "TABLE",
            Self::Xml => "XML",
            Self::TeX => "TeX",
            Self::Rows => "ROWS",
            Self::FormTable => "FORM_TABLE",
            Self::ComprehensiveTable => "COMPREHENSIVE_TABLE",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown display format: {0}")]
pub struct UnknownFormat(String);

impl FromStr for DisplayFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TEXT" => Ok(Self::Text),
            "HTML" => Ok(Self::Html),
            "HTMLCOLOREDDIACRITICS" => Ok(Self::HtmlColoredDiacritics),
            "DICT" => Ok(Self::Dict),
            "CSV" => Ok(Self::Csv),
            "GUI" => Ok(Self::Gui),
            "TABLE" => Ok(Self::Table),
            "XML" => Ok(Self::Xml),
            "TEX" => Ok(Self::TeX),
            "ROWS" => Ok(Self::Rows),
            "FORM_TABLE" => Ok(Self::FormTable),
            "COMPREHENSIVE_TABLE" => Ok(Self::ComprehensiveTable),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Everything a single conjugation call needs. `all_tenses` defaults on;
/// the narrower tense flags exist for callers that want a partial table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarfRequest {
    pub word: String,
    pub future_type: FutureType,
    pub all_tenses: bool,
    pub past: bool,
    pub future: bool,
    pub passive: bool,
    pub imperative: bool,
    pub future_mood: bool,
    pub confirmed: bool,
    pub transitive: bool,
    pub display_format: DisplayFormat,
    pub form_filter: Option<FormNumber>,
}

impl SarfRequest {
    /// All tenses, default display format, no filter.
    pub fn new(word: impl Into<String>, future_type: FutureType) -> Self {
        Self {
            word: word.into(),
            future_type,
            ..Self::default()
        }
    }
}

impl Default for SarfRequest {
    fn default() -> Self {
        Self {
            word: String::new(),
            future_type: FutureType::Fatha,
            all_tenses: true,
            past: false,
            future: false,
            passive: false,
            imperative: false,
            future_mood: false,
            confirmed: false,
            transitive: false,
            display_format: DisplayFormat::default(),
            form_filter: None,
        }
    }
}

/// Role names keying [`SarfTables::derivatives`].
pub mod derivative {
    pub const VERBAL_NOUN: &str = "المصدر";
    pub const ACTIVE_PARTICIPLE: &str = "اسم الفاعل";
    pub const PASSIVE_PARTICIPLE: &str = "اسم المفعول";
    pub const NOUN_OF_PLACE: &str = "اسم المكان";
    pub const NOUN_OF_TIME: &str = "اسم الزمان";
}

/// Tense names keying [`SarfTables::conjugations`].
pub mod tense {
    pub const PERFECT_ACTIVE: &str = "الماضي المعلوم";
    pub const PERFECT_PASSIVE: &str = "الماضي المجهول";
    pub const IMPERFECT_ACTIVE: &str = "المضارع المعلوم";
    pub const IMPERFECT_PASSIVE: &str = "المضارع المجهول";
    pub const IMPERATIVE: &str = "الأمر";
}

/// Pronoun keys inside one tense row.
pub mod pronoun {
    pub const THIRD_MASC_SING: &str = "هو";
    pub const SECOND_MASC_SING: &str = "أنتَ";
}

/// Structured result behind DICT-style formats: derivative nouns keyed
/// by role, and conjugations keyed by tense, then pronoun.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SarfTables {
    pub derivatives: HashMap<String, String>,
    pub conjugations: HashMap<String, HashMap<String, String>>,
}

impl SarfTables {
    pub fn derivative(&self, role: &str) -> Option<&str> {
        self.derivatives.get(role).map(String::as_str)
    }

    pub fn conjugated(&self, tense: &str, pronoun: &str) -> Option<&str> {
        self.conjugations
            .get(tense)
            .and_then(|row| row.get(pronoun))
            .map(String::as_str)
    }
}

/// What a backend hands back: a finished display string, or the
/// structured tables for formats this crate post-processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SarfOutput {
    Rendered(String),
    Structured(SarfTables),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SarfError {
    #[error("no conjugation backend is configured")]
    Unavailable,
    #[error("conjugation backend rejected the verb: {0}")]
    Rejected(String),
}

/// The external full-conjugation engine.
pub trait SarfBackend: Send + Sync {
    fn do_sarf(&self, request: &SarfRequest) -> Result<SarfOutput, SarfError>;
}

/// Renders comprehensive per-form records into a final presentation.
pub trait FormRenderer: Send + Sync {
    fn render(&self, word: &str, records: &[ComprehensiveFormRecord]) -> String;
}

/// Stand-in for running without a conjugation engine. Every call fails
/// with [`SarfError::Unavailable`], which the reporter degrades to
/// placeholder fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

impl SarfBackend for UnavailableBackend {
    fn do_sarf(&self, _request: &SarfRequest) -> Result<SarfOutput, SarfError> {
        Err(SarfError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format_parsing_ignores_case() {
        assert_eq!("form_table".parse(), Ok(DisplayFormat::FormTable));
        assert_eq!("HTML".parse(), Ok(DisplayFormat::Html));
        assert_eq!("tex".parse(), Ok(DisplayFormat::TeX));
        assert_eq!(
            "comprehensive_table".parse(),
            Ok(DisplayFormat::ComprehensiveTable)
        );
        assert!("WORD_ART".parse::<DisplayFormat>().is_err());
    }

    #[test]
    fn display_format_round_trips_through_as_str() {
        let formats = [
            DisplayFormat::Text,
            DisplayFormat::Html,
            DisplayFormat::HtmlColoredDiacritics,
            DisplayFormat::Dict,
            DisplayFormat::TeX,
            DisplayFormat::FormTable,
            DisplayFormat::ComprehensiveTable,
        ];
        for format in formats {
            assert_eq!(format.as_str().parse(), Ok(format));
        }
    }

    #[test]
    fn request_defaults_cover_all_tenses() {
        let request = SarfRequest::new("كَتَبَ", FutureType::Damma);
        assert!(request.all_tenses);
        assert!(!request.passive);
        assert_eq!(request.display_format, DisplayFormat::Html);
        assert_eq!(request.form_filter, None);
    }

    #[test]
    fn tables_lookups_are_total() {
        let tables = SarfTables::default();
        assert_eq!(tables.derivative(derivative::VERBAL_NOUN), None);
        assert_eq!(
            tables.conjugated(tense::PERFECT_ACTIVE, pronoun::THIRD_MASC_SING),
            None
        );
    }

    #[test]
    fn future_type_names_and_marks() {
        assert_eq!(FutureType::Damma.arabic_name(), "ضمة");
        assert_eq!(FutureType::Fatha.mark(), FATHA);
    }
}
