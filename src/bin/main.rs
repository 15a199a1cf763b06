use std::io::{stdin, stdout, Write};

use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use sarf_core::sarf::{DisplayFormat, FutureType, SarfRequest, UnavailableBackend};
use sarf_core::core::reporter::JsonFormRenderer;
use sarf_core::sarf::FormRenderer;
use sarf_core::SarfEngine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Form tables and classification work standalone; pass-through
    // conjugation needs a real backend wired in instead.
    let engine = SarfEngine::new(Box::new(UnavailableBackend));
    let mut current = String::new();

    println!("Arabic verb form explorer. Type a fully vocalized verb.");
    println!("---------------------------------------------------------------");
    println!("Commands: ':N' show only form N, '!full' comprehensive table,");
    println!("          '!json' records as JSON, 'exit' to quit.\n");

    loop {
        print!("> ");
        let _ = stdout().flush();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => continue,
            "!full" | "!json" if current.is_empty() => {
                color_line(Color::Red, "Type a verb first.");
            }
            "!full" => {
                let request = SarfRequest {
                    word: current.clone(),
                    display_format: DisplayFormat::ComprehensiveTable,
                    ..SarfRequest::default()
                };
                println!("{}", engine.conjugate_text(&request));
            }
            "!json" => {
                let records = engine.comprehensive_records(&current, FutureType::Fatha, false);
                println!("{}", JsonFormRenderer.render(&current, &records));
            }
            s if s.starts_with(':') && s.len() > 1 => match s[1..].parse::<u8>() {
                Ok(_) if current.is_empty() => {
                    color_line(Color::Red, "Type a verb first.");
                }
                Ok(form) => show_table(&engine, &current, Some(form)),
                Err(_) => color_line(Color::Red, "Form numbers are 1-10."),
            },
            verb => {
                current = verb.to_string();
                show_verb(&engine, &current);
            }
        }
    }
}

fn show_verb(engine: &SarfEngine, verb: &str) {
    let classification = engine.classify(verb);
    match classification.form {
        Some(form) => color_line(
            Color::Green,
            &format!(
                "Detected Form {} ({:.0}% confidence)",
                form,
                classification.confidence * 100.0
            ),
        ),
        None => color_line(
            Color::Yellow,
            "No form detected (is the verb fully vocalized?)",
        ),
    }
    show_table(engine, verb, None);
}

fn show_table(engine: &SarfEngine, verb: &str, form_filter: Option<u8>) {
    match engine.forms_table(verb, form_filter) {
        Ok(table) => println!("{table}\n"),
        Err(err) => color_line(Color::Red, &err.to_string()),
    }
}

fn color_line(color: Color, text: &str) {
    let mut out = stdout();
    let _ = execute!(
        out,
        SetForegroundColor(color),
        Print(text),
        Print("\n"),
        ResetColor
    );
}
