use crate::hledger::tools::model::Transaction;
use crate::hledger::tools::parse;

/// Padding emitted between an aligned label and its amount.
const AMOUNT_SEPARATOR: &str = "  ";
/// Separator emitted between serialized transaction blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Re-pads every posting line so all amount tokens start at the same column.
///
/// The column sits two spaces past the widest label in the document. Lines
/// that do not parse as postings, blank lines included, pass through
/// unchanged, so running the filter on its own output is a fixed point.
pub fn align_amounts<S: AsRef<str>>(lines: &[S]) -> String {
    let max_label = lines
        .iter()
        .filter_map(|line| parse::parse_posting(line.as_ref()))
        .map(|posting| posting.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for line in lines {
        let line = line.as_ref();
        match parse::parse_posting(line) {
            Some(posting) => {
                output.push_str(posting.label);
                for _ in posting.label.chars().count()..max_label {
                    output.push(' ');
                }
                output.push_str(AMOUNT_SEPARATOR);
                output.push_str(posting.amount);
            }
            None => output.push_str(line),
        }
        output.push('\n');
    }
    output
}

/// Replaces `source` with `target` inside every transaction whose
/// description contains `filter`, compared case-insensitively.
///
/// The substitution itself is literal and case-sensitive over the whole
/// block body; the two case policies are independent on purpose.
/// Transactions with a non-matching or absent description are emitted byte
/// for byte, in input order.
pub fn rename_account(
    transactions: &[Transaction],
    source: &str,
    target: &str,
    filter: &str,
) -> String {
    let filter = filter.to_lowercase();
    let mut output = String::new();
    for transaction in transactions {
        let description = transaction.description.as_deref().unwrap_or_default();
        if description.to_lowercase().contains(&filter) {
            output.push_str(&transaction.body.replace(source, target));
        } else {
            output.push_str(&transaction.body);
        }
        output.push_str(BLOCK_SEPARATOR);
    }
    output
}

/// Emits transactions in non-decreasing date order.
///
/// The sort is stable: entries sharing a date keep their relative input
/// order.
pub fn reorder_by_date(transactions: &[Transaction]) -> String {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|transaction| transaction.date);

    let mut output = String::new();
    for transaction in ordered {
        output.push_str(&transaction.body);
        output.push_str(BLOCK_SEPARATOR);
    }
    output
}
