//! Helper functions for collecting terminal input
//!
//! Every prompt operation re-prompts indefinitely on invalid input;
//! none of them returns an error to its caller. The only way a prompt
//! resolves to `None` is when standard input is exhausted or unreadable,
//! which the caller treats as a normal end of the session.

use crate::errors::InputError;
use crate::format::format_account_field;
use crate::validation::{is_valid_name, parse_amount, parse_choice};
use rust_decimal::Decimal;
use std::io::{stdin, stdout, Write};

/// **Reads standard input into a line.**
///
/// Signals end of input so the caller can end the session.
///
/// # Panics
/// Panics in case it can't write `label` to `stdout`,
/// or if it can't flush the `stdout` buffer.
pub fn read_from_stdin(label: &str) -> Option<String> {
    let mut lock = stdout().lock();
    write!(lock, "{label}").expect("Failed to write the label to stdout.");
    stdout()
        .flush()
        .expect("Failed to flush the stdout buffer.");

    let mut line = String::new();
    match stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            None
        }
    }
}

/// **Prompts for a non-empty text field, re-prompting until one is given.**
///
/// If `normalize` is requested, the trimmed input is passed through
/// [`format_account_field`] before it is returned.
pub fn prompt_text(label: &str, normalize: bool) -> Option<String> {
    loop {
        let line = read_from_stdin(label)?;
        let text = line.trim();

        if !is_valid_name(text) {
            eprintln!("[ERROR] {}", InputError::EmptyField);
            continue;
        }

        return Some(if normalize {
            format_account_field(text)
        } else {
            text.to_string()
        });
    }
}

/// **Prompts for a non-negative decimal amount, re-prompting until one is given.**
///
/// Token-oriented: only the first whitespace-separated token of the line
/// is considered.
pub fn prompt_amount(label: &str) -> Option<Decimal> {
    loop {
        let line = read_from_stdin(label)?;

        let word = match line.split_whitespace().next() {
            Some(word) => word,
            None => {
                eprintln!("[ERROR] {}", InputError::EmptyField);
                continue;
            }
        };

        match parse_amount(word) {
            Ok(amount) => return Some(amount),
            Err(err) => eprintln!("[ERROR] {}", err),
        }
    }
}

/// **Prompts for an integer choice in `[min, max]`, re-prompting until one is given.**
pub fn prompt_choice(label: &str, min: i32, max: i32) -> Option<i32> {
    loop {
        let line = read_from_stdin(label)?;

        let word = match line.split_whitespace().next() {
            Some(word) => word,
            None => {
                eprintln!("[ERROR] {}", InputError::EmptyField);
                continue;
            }
        };

        match parse_choice(word, min, max) {
            Ok(choice) => return Some(choice),
            Err(err) => eprintln!("[ERROR] {}", err),
        }
    }
}
