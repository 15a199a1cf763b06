// Minimal check harness for the form classifier.
// Run with: cargo run --bin form_check
// src/bin/form_check.rs
use sarf_core::core::classifier::FormClassifier;

fn main() {
    let classifier = FormClassifier::new();
    let cases = [
        "كَتَبَ",
        "كَتَّبَ",
        "كَاتَبَ",
        "أَكْتَبَ",
        "تَكَتَّبَ",
        "تَكَاتَبَ",
        "اِنْكَتَبَ",
        "اِكْتَتَبَ",
        "اِسْتَكْتَبَ",
        "اِشْوَدّ",
        "كتب",
        "",
    ];
    for verb in cases {
        let result = classifier.classify(verb);
        match result.form {
            Some(form) => println!(
                "{verb} => Form {form} ({:.1}%)",
                result.confidence * 100.0
            ),
            None => println!("{verb} => unclassified"),
        }
    }
}
