use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated journal entry together with its verbatim text.
///
/// `body` keeps the original block text untouched, head line included, so
/// filters that do not rewrite postings can re-emit the entry exactly as it
/// appeared in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date read from the first ten characters of the head line.
    pub date: NaiveDate,
    /// Text following the date and one separator character on the head line.
    /// `None` when the head line carries nothing beyond the date itself.
    pub description: Option<String>,
    /// Full original text of the block, including the head line.
    pub body: String,
}

impl Transaction {
    /// Creates a transaction from its head line.
    pub fn new(date: NaiveDate, description: Option<String>, head: impl Into<String>) -> Self {
        Self {
            date,
            description,
            body: head.into(),
        }
    }

    /// Appends a continuation line to the body, preserving it verbatim.
    pub fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }
}

/// The label/amount split of a recognised posting line.
///
/// Both halves borrow from the source line. `label` keeps its leading
/// indentation and loses only the padding before the amount; `amount` is the
/// final whitespace-free token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting<'a> {
    /// Everything before the padding that separates label from amount.
    pub label: &'a str,
    /// The trailing amount token.
    pub amount: &'a str,
}
