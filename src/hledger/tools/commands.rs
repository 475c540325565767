use std::path::Path;

use tracing::{debug, info, instrument};

use crate::hledger::tools::error::Result;
use crate::hledger::tools::filters;
use crate::hledger::tools::io;
use crate::hledger::tools::parse;

/// Aligns the amount column of a journal.
#[instrument(level = "info", skip_all, fields(input = ?input, output = ?output))]
pub fn align(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let lines = io::read_document(input)?;
    info!(line_count = lines.len(), "read journal");
    let aligned = filters::align_amounts(&lines);
    debug!(bytes = aligned.len(), "amount column aligned");
    io::write_document(output, &aligned)
}

/// Rewrites an account name inside the transactions whose description
/// matches `filter`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = ?input, output = ?output, source = %source, target = %target)
)]
pub fn rename(
    input: Option<&Path>,
    output: Option<&Path>,
    source: &str,
    target: &str,
    filter: &str,
) -> Result<()> {
    let lines = io::read_document(input)?;
    let transactions = parse::parse_transactions(&lines);
    info!(transaction_count = transactions.len(), "parsed journal");
    let renamed = filters::rename_account(&transactions, source, target, filter);
    debug!(bytes = renamed.len(), "accounts rewritten");
    io::write_document(output, &renamed)
}

/// Sorts a journal's transactions into date order.
#[instrument(level = "info", skip_all, fields(input = ?input, output = ?output))]
pub fn reorder(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let lines = io::read_document(input)?;
    let transactions = parse::parse_transactions(&lines);
    info!(transaction_count = transactions.len(), "parsed journal");
    let ordered = filters::reorder_by_date(&transactions);
    io::write_document(output, &ordered)
}
