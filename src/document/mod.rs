//! Document parsing and data structures module
//!
//! This module turns the lines of an outline-style guide into a typed
//! section tree, plus the diagnostics describing anything that was skipped.

pub mod diagnostics;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod query;

// Re-export all models and query functions
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use loader::{ParsedDocument, load_document, parse_lines, parse_text};
pub use models::*;
pub use query::*;
