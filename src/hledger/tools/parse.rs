use chrono::NaiveDate;

use crate::hledger::tools::model::{Posting, Transaction};

/// Strftime pattern for the journal's entry dates.
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Width of a `YYYY-MM-DD` date literal.
const DATE_WIDTH: usize = 10;
/// Minimum run of whitespace separating a posting label from its amount.
const AMOUNT_GAP: usize = 2;

/// Attempts to read an entry date from the first ten characters of a line.
///
/// Lines shorter than ten characters, or whose prefix is not an exact
/// `YYYY-MM-DD` literal, carry no date.
pub fn parse_entry_date(line: &str) -> Option<NaiveDate> {
    let prefix = line.get(..DATE_WIDTH)?;
    NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok()
}

/// Splits a line sequence into dated transaction blocks.
///
/// A block opens at a line whose first ten characters form a date and closes
/// at the next blank line, the next dated line, or the end of input.
/// Continuation lines that precede the first dated line belong to no block
/// and are dropped, matching the historical behavior of these filters.
pub fn parse_transactions<S: AsRef<str>>(lines: &[S]) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut current: Option<Transaction> = None;

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            if let Some(transaction) = current.take() {
                transactions.push(transaction);
            }
        } else if let Some(date) = parse_entry_date(line) {
            if let Some(transaction) = current.take() {
                transactions.push(transaction);
            }
            current = Some(Transaction::new(date, head_description(line), line));
        } else if let Some(transaction) = current.as_mut() {
            transaction.push_line(line);
        }
    }

    if let Some(transaction) = current {
        transactions.push(transaction);
    }
    transactions
}

/// Splits an indented line into its posting label and trailing amount.
///
/// A line qualifies only when it starts with a space, ends in a
/// whitespace-free token, and that token is preceded by at least two
/// whitespace characters. A single space before the amount leaves the line
/// unrecognised; that strictness is what lets narrative continuation lines
/// pass through the aligner untouched.
pub fn parse_posting(line: &str) -> Option<Posting<'_>> {
    if !line.starts_with(' ') {
        return None;
    }
    let last_gap = line.rfind(char::is_whitespace)?;
    let gap_char = line[last_gap..].chars().next()?;
    let amount_start = last_gap + gap_char.len_utf8();
    let amount = &line[amount_start..];
    if amount.is_empty() {
        return None;
    }
    let label = line[..amount_start].trim_end();
    let padding = &line[label.len()..amount_start];
    if padding.chars().count() < AMOUNT_GAP {
        return None;
    }
    Some(Posting { label, amount })
}

/// Extracts the description from a head line: everything after the date and
/// one separator character, when present.
fn head_description(line: &str) -> Option<String> {
    if line.chars().count() > DATE_WIDTH {
        Some(line.get(DATE_WIDTH + 1..).unwrap_or_default().to_string())
    } else {
        None
    }
}
