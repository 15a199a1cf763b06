// src/core/registry.rs
use serde::Serialize;
use thiserror::Error;

use crate::core::types::FormNumber;

/// One of the ten canonical derivation patterns (Form I through X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormDescriptor {
    pub form: FormNumber,
    pub arabic_name: &'static str,
    /// Templatic spelling over the radicals ف-ع-ل.
    pub pattern: &'static str,
    pub english_meaning: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no such verb form: {0}")]
    NotFound(FormNumber),
}

const FORMS: [FormDescriptor; 10] = [
    FormDescriptor {
        form: 1,
        arabic_name: "الفعل المجرد",
        pattern: "فَعَلَ",
        english_meaning: "Basic/Original",
        example: "كَتَبَ",
    },
    FormDescriptor {
        form: 2,
        arabic_name: "فَعَّلَ",
        pattern: "فَعَّلَ",
        english_meaning: "Intensive/Causative",
        example: "كَتَّبَ",
    },
    FormDescriptor {
        form: 3,
        arabic_name: "فَاعَلَ",
        pattern: "فَاعَلَ",
        english_meaning: "Interactive/Reciprocal",
        example: "كَاتَبَ",
    },
    FormDescriptor {
        form: 4,
        arabic_name: "أَفْعَلَ",
        pattern: "أَفْعَلَ",
        english_meaning: "Causative/Declarative",
        example: "أَكْتَبَ",
    },
    FormDescriptor {
        form: 5,
        arabic_name: "تَفَعَّلَ",
        pattern: "تَفَعَّلَ",
        english_meaning: "Reflexive of Form II",
        example: "تَكَتَّبَ",
    },
    FormDescriptor {
        form: 6,
        arabic_name: "تَفاعَلَ",
        pattern: "تَفاعَلَ",
        english_meaning: "Reciprocal of Form III",
        example: "تَكَاتَبَ",
    },
    FormDescriptor {
        form: 7,
        arabic_name: "اِنْفَعَلَ",
        pattern: "اِنْفَعَلَ",
        english_meaning: "Passive/Reflexive",
        example: "اِنْكَتَبَ",
    },
    FormDescriptor {
        form: 8,
        arabic_name: "اِفْتَعَلَ",
        pattern: "اِفْتَعَلَ",
        english_meaning: "Reflexive/Participatory",
        example: "اِكْتَتَبَ",
    },
    FormDescriptor {
        form: 9,
        arabic_name: "اِفْعَلَّ",
        pattern: "اِفْعَلَّ",
        english_meaning: "Color/Physical Defects",
        example: "اِشْوَدَّ",
    },
    FormDescriptor {
        form: 10,
        arabic_name: "اِسْتَفْعَلَ",
        pattern: "اِسْتَفْعَلَ",
        english_meaning: "Request/Seeking",
        example: "اِسْتَكْتَبَ",
    },
];

/// Read-only catalog of the ten forms. Plain static data; cheap to copy
/// around.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormRegistry;

impl FormRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(&self, form: FormNumber) -> Result<&'static FormDescriptor, RegistryError> {
        if (1..=10).contains(&form) {
            Ok(&FORMS[usize::from(form) - 1])
        } else {
            Err(RegistryError::NotFound(form))
        }
    }

    pub fn all(&self) -> &'static [FormDescriptor; 10] {
        &FORMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete_and_ordered() {
        let registry = FormRegistry::new();
        assert_eq!(registry.all().len(), 10);
        for (i, descriptor) in registry.all().iter().enumerate() {
            assert_eq!(descriptor.form, (i + 1) as FormNumber);
            assert!(!descriptor.arabic_name.is_empty());
            assert!(!descriptor.pattern.is_empty());
            assert!(!descriptor.english_meaning.is_empty());
            assert!(!descriptor.example.is_empty());
        }
    }

    #[test]
    fn describe_known_forms() {
        let registry = FormRegistry::new();
        assert_eq!(registry.describe(2).unwrap().pattern, "فَعَّلَ");
        assert_eq!(registry.describe(10).unwrap().example, "اِسْتَكْتَبَ");
    }

    #[test]
    fn describe_rejects_out_of_range() {
        let registry = FormRegistry::new();
        assert_eq!(registry.describe(0), Err(RegistryError::NotFound(0)));
        assert_eq!(registry.describe(11), Err(RegistryError::NotFound(11)));
    }
}
