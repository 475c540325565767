use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::hledger::tools::error::Result;

/// Reads the whole document from `path`, or from standard input when no
/// path is given, and splits it into lines.
///
/// One trailing newline is stripped before splitting so that file and
/// stream input yield the same line sequence.
pub fn read_document(path: Option<&Path>) -> Result<Vec<String>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(split_lines(&text))
}

/// Writes the transformed document to `path`, or to standard output when no
/// path is given.
pub fn write_document(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.split('\n').map(str::to_string).collect()
}
