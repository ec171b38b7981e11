//! JSON export
//!
//! The tree's serde derives define the output shape; this module only picks
//! the formatting (indent width) and handles writing. Serialization happens
//! completely in memory before anything touches the destination file.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::document::RootDocument;
use crate::error::Result;

/// Serialize the document with `indent_width` spaces per nesting level
pub fn export_to_json(document: &RootDocument, indent_width: usize) -> Result<String> {
    let indent = " ".repeat(indent_width);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Serialize first, then write; a serialization failure leaves the file untouched
pub async fn write_json(document: &RootDocument, indent_width: usize, path: &Path) -> Result<()> {
    let json = export_to_json(document, indent_width)?;
    crate::document::io::write_text(path, &json).await
}
