// src/core/diacritics.rs

//! Letters and combining marks of fully vocalized Arabic script, and the
//! predicates the rule engine builds on.

pub const FATHA: char = '\u{064e}';
pub const DAMMA: char = '\u{064f}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const FATHATAN: char = '\u{064b}';
pub const DAMMATAN: char = '\u{064c}';
pub const KASRATAN: char = '\u{064d}';

pub const ALEF: char = 'ا';
pub const ALEF_WASLA: char = 'ٱ';
pub const ALEF_HAMZA_ABOVE: char = 'أ';
pub const ALEF_HAMZA_BELOW: char = 'إ';
pub const ALEF_MADDA: char = 'آ';
pub const HAMZA: char = 'ء';
pub const TEH: char = 'ت';
pub const NOON: char = 'ن';
pub const SEEN: char = 'س';
pub const WAW: char = 'و';
pub const YEH: char = 'ي';
pub const ALEF_MAKSURA: char = 'ى';

/// The five marks whose presence makes a verb "vocalized".
const VOWEL_MARKS: [char; 5] = [FATHA, DAMMA, KASRA, SHADDA, SUKUN];

/// Short vowels, sukun and tanween. The shadda is not in this set: a
/// geminated consonant occupies a slot of the skeleton.
const HARAKAT: [char; 7] = [FATHA, DAMMA, KASRA, SUKUN, FATHATAN, DAMMATAN, KASRATAN];

pub fn is_vocalized(s: &str) -> bool {
    s.chars().any(|c| VOWEL_MARKS.contains(&c))
}

fn is_haraka(c: char) -> bool {
    HARAKAT.contains(&c)
}

/// Removes the harakat, leaving the consonant skeleton (shadda included).
pub fn strip_harakat(s: &str) -> String {
    s.chars().filter(|c| !is_haraka(*c)).collect()
}

/// Number of skeleton slots in `s`, i.e. code points left after
/// `strip_harakat`.
pub fn skeleton_len(s: &str) -> usize {
    s.chars().filter(|c| !is_haraka(*c)).count()
}

/// Prepares a vocalized verb for pattern matching: hamza-carrying alef
/// variants collapse to the plain alef, and a final yeh/alef-maksura to
/// the plain yeh. Unvocalized input is returned unchanged. Skeleton
/// length and mark positions are preserved.
pub fn normalize(s: &str) -> String {
    if !is_vocalized(s) {
        return s.to_string();
    }
    let mut out: Vec<char> = s
        .chars()
        .map(|c| match c {
            ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | ALEF_MADDA => ALEF,
            other => other,
        })
        .collect();
    if let Some(last) = out.last_mut() {
        if *last == ALEF_MAKSURA {
            *last = YEH;
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocalized_detection() {
        assert!(is_vocalized("كَتَبَ"));
        assert!(is_vocalized("كتّب")); // a lone shadda counts
        assert!(!is_vocalized("كتب"));
        assert!(!is_vocalized(""));
    }

    #[test]
    fn strip_keeps_shadda() {
        assert_eq!(strip_harakat("كَتَبَ"), "كتب");
        assert_eq!(strip_harakat("تَكَتَّبَ"), "تكتّب");
        assert_eq!(skeleton_len("تَكَتَّبَ"), 5);
        assert_eq!(skeleton_len("اِسْتَكْتَبَ"), 6);
    }

    #[test]
    fn normalize_collapses_hamzated_alef() {
        let normalized = normalize("أَكْتَبَ");
        assert!(normalized.starts_with(ALEF));
        assert_eq!(skeleton_len(&normalized), 4);
    }

    #[test]
    fn normalize_rewrites_final_maksura() {
        assert!(normalize("مَشَى").ends_with(YEH));
    }

    #[test]
    fn normalize_leaves_unvocalized_alone() {
        assert_eq!(normalize("أكتب"), "أكتب");
    }
}
