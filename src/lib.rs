//! outline2json: converts numbered outline guides into nested JSON
//!
//! This library parses a hand-authored outline document (roman-numeral
//! sections, dotted subsections, paragraphs and bulleted lists) into a typed
//! tree and serializes it as JSON.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod outline;

/// Output format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested JSON tree
    #[default]
    Json,
    /// Indented text summary of the parsed structure
    Outline,
}

// Re-export commonly used types
pub use config::{ConverterConfig, MarkerConfig, OutputConfig};
pub use document::{Diagnostic, DiagnosticKind, ParsedDocument, RootDocument};
pub use error::ConvertError;
