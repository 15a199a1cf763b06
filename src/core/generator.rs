// src/core/generator.rs

//! Rule-based synthesis of form spellings from a triliteral root.

use crate::core::diacritics::{
    strip_harakat, ALEF, ALEF_WASLA, DAMMA, FATHA, KASRA, NOON, SEEN, SHADDA, SUKUN, TEH,
};
use crate::core::types::FormNumber;

/// Builds candidate vocalized spellings of `word`'s root in the given
/// form, most complete spelling first. Harakat are stripped from the
/// input first; only a skeleton of exactly three letters qualifies.
/// Form IX (rare color/defect verbs) has no template and always yields
/// nothing, as does any out-of-range form number.
pub fn generate_variants(word: &str, form: FormNumber) -> Vec<String> {
    let root: Vec<char> = strip_harakat(word).chars().collect();
    if root.len() != 3 {
        return Vec::new();
    }
    let (f1, f2, f3) = (root[0], root[1], root[2]);

    let variants: Vec<String> = match form {
        1 => vec![
            spell([f1, FATHA, f2, FATHA, f3]),
            spell([f1, FATHA, f2, DAMMA, f3]),
            spell([f1, FATHA, f2, KASRA, f3]),
        ],
        2 => vec![
            spell([f1, FATHA, f2, SHADDA, FATHA, f3]),
            spell([f1, FATHA, f2, SHADDA, ALEF, f3]),
        ],
        3 => vec![spell([f1, FATHA, ALEF, f2, FATHA, f3])],
        4 => vec![
            spell([ALEF, FATHA, f1, SUKUN, f2, FATHA, f3, ALEF]),
            spell([ALEF, FATHA, f1, SUKUN, f2, FATHA, f3]),
        ],
        5 => vec![
            spell([TEH, FATHA, f1, FATHA, f2, SHADDA, FATHA, f3, ALEF]),
            spell([TEH, FATHA, f1, FATHA, f2, SHADDA, FATHA, f3]),
        ],
        6 => vec![
            spell([TEH, FATHA, f1, ALEF, f2, FATHA, f3, ALEF]),
            spell([TEH, FATHA, f1, ALEF, f2, FATHA, f3]),
        ],
        7 => vec![
            spell([ALEF_WASLA, KASRA, NOON, SUKUN, f1, FATHA, f2, FATHA, f3, ALEF]),
            spell([ALEF_WASLA, KASRA, NOON, SUKUN, f1, FATHA, f2, FATHA, f3]),
        ],
        // The teh goes in after the first radical.
        8 => vec![
            spell([ALEF_WASLA, KASRA, f1, SUKUN, TEH, FATHA, f2, FATHA, f3, ALEF]),
            spell([ALEF_WASLA, KASRA, f1, SUKUN, TEH, FATHA, f2, FATHA, f3]),
        ],
        10 => vec![
            spell([ALEF_WASLA, KASRA, SEEN, SUKUN, TEH, FATHA, f1, SUKUN, f2, FATHA, f3, ALEF]),
            spell([ALEF_WASLA, KASRA, SEEN, SUKUN, TEH, FATHA, f1, SUKUN, f2, FATHA, f3]),
        ],
        _ => Vec::new(),
    };

    variants
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

fn spell<const N: usize>(seq: [char; N]) -> String {
    seq.iter().collect()
}
