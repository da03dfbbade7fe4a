//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use crate::errors::OWNER_NAME_NOT_VALID_MSG;
use crate::validation;
use rust_decimal::Decimal;
use std::io::{stdin, stdout, Write};
use std::str::FromStr;

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    let msg = format!(
        "{HELP} {CREATE} {DEPOSIT} {WITHDRAW} {UNDO} {ACCOUNTS} {ACCOUNT} \
         {HISTORY} {SEARCH} {STATS} {QUIT}"
    );
    msg
}

/// **Contains short variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_short() -> String {
    "h c d w u a ac hi s st q".to_string()
}

/// **Prints all existing commands in their full and short variants.**
pub fn help() {
    println!("{}", help_contents_full());
    println!("{}", help_contents_short());
}

/// **Reads standard input into a line.**
///
/// Signals an empty line so we can ignore it (in the main loop).
///
/// # Panics
/// Panics in case it can't write `label` to `stdout`,
/// or if it can't flush the `stdout` buffer.
pub fn read_from_stdin(label: &str) -> Option<String> {
    let mut lock = stdout().lock();
    write!(lock, "\n{label}").expect("Failed to write the label to stdout.");
    stdout()
        .flush()
        .expect("Failed to flush the stdout buffer.");

    let mut line = String::new();
    match stdin().read_line(&mut line) {
        Ok(_) => {
            if line.trim().is_empty() {
                None
            } else {
                Some(line.to_owned())
            }
        }
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            None
        }
    }
}

/// **Basic input validation for an owner's name**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_name(owner_name: &str) -> bool {
    match validation::is_valid_name(owner_name) {
        Some(msg) => {
            eprintln!(
                "[ERROR] {}: \"{}\". {}",
                OWNER_NAME_NOT_VALID_MSG, owner_name, msg
            );
            false
        }
        None => true,
    }
}

/// Joins the words of a multi-word name, and strips single or double quotes
/// that may wrap it.
pub fn join_name(words: &[&str]) -> String {
    let name = words.join(" ");
    name.trim_matches(|c| c == '\'' || c == '\"')
        .trim()
        .to_string()
}

/// **Parses a decimal amount**
///
/// Prints a more informative message than the one that comes
/// from the parser in case of failure.
pub fn parse_amount(word: &str) -> Option<Decimal> {
    match Decimal::from_str(word) {
        Ok(amount) => Some(amount),
        Err(_err) => {
            cannot_parse_number(word);
            None
        }
    }
}

/// Prints an error message about not being able to parse
/// a string into a decimal number, so that our users can get a
/// more informative message than the generic one.
pub fn cannot_parse_number(word: &str) {
    eprintln!(
        "[ERROR] Only decimal numbers are allowed as the amount; you provided '{}'.",
        word
    );
}

/// **Splits an optional note off the end of a command**
///
/// Everything after [`SEPARATOR`] is the note. Returns the words before it,
/// and the note if there is a non-empty one.
pub fn split_note<'a>(words: &'a [&'a str]) -> (&'a [&'a str], Option<String>) {
    match words.iter().position(|&w| w == SEPARATOR) {
        Some(pos) => {
            let note = words[pos + 1..].join(" ");
            let note = if note.trim().is_empty() {
                None
            } else {
                Some(note)
            };
            (&words[..pos], note)
        }
        None => (words, None),
    }
}
