pub mod commands;
pub mod error;
pub mod filters;
pub mod io;
pub mod model;
pub mod parse;

pub use error::{Result, ToolError};
