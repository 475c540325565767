//! Core library for the hledger-tools command line application.
//!
//! The library exposes the text filters that power the command-line
//! interface as well as the integration tests. The modules are structured to
//! keep responsibilities narrow and composable: whole-document IO lives
//! under [`hledger::tools::io`], the journal representation inside
//! [`hledger::tools::model`], date and posting recognition in
//! [`hledger::tools::parse`], the pure document transforms in
//! [`hledger::tools::filters`], and the path-level orchestration under
//! [`hledger::tools::commands`].

pub mod hledger;

pub use hledger::tools::{Result, ToolError, commands, error, filters, io, model, parse};
