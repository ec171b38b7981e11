//! Document loading and orchestration
//!
//! This module contains [`parse_lines`], which runs every extractor over an
//! in-memory line list, and [`load_document`], which reads a file and hands
//! its lines to it.

use std::path::Path;

use super::diagnostics::Diagnostic;
use super::io::{read_lines, validate_source_file};
use super::models::RootDocument;
use super::parsing::body::parse_body;
use super::parsing::front_matter::{
    front_matter_end, locate_toc, parse_foreword, parse_metadata, parse_table_of_contents,
};
use crate::config::MarkerConfig;
use crate::error::Result;

/// A parsed document together with everything the parser had to skip
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub document: RootDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a whole document held in memory.
///
/// This function:
/// 1. Takes the first line as the title and extracts version and codename
/// 2. Locates the table of contents markers and collects the entries
/// 3. Extracts the foreword paragraph following the table of contents
/// 4. Parses the remaining lines into the section tree
///
/// Anomalies never abort parsing; they are returned as diagnostics in the
/// order the extractors run.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], markers: &MarkerConfig) -> ParsedDocument {
    let mut diagnostics = Vec::new();

    let title = lines
        .first()
        .map(|line| line.as_ref().trim().to_string())
        .unwrap_or_default();
    let info = parse_metadata(&title, markers, &mut diagnostics);

    let bounds = locate_toc(lines, markers);
    let table_of_contents = parse_table_of_contents(lines, bounds, markers, &mut diagnostics);
    let foreword = parse_foreword(lines, bounds, markers, &mut diagnostics);

    let body_start = front_matter_end(lines.len(), bounds);
    log::debug!(
        "parsing body from line {} of {}",
        body_start + 1,
        lines.len()
    );
    let body = parse_body(&lines[body_start..], body_start + 1);
    diagnostics.extend(body.diagnostics);

    ParsedDocument {
        document: RootDocument {
            title,
            info,
            table_of_contents,
            foreword,
            sections: body.sections,
        },
        diagnostics,
    }
}

/// Parse text that has not been split into lines yet
pub fn parse_text(content: &str, markers: &MarkerConfig) -> ParsedDocument {
    parse_lines(&super::io::split_lines(content), markers)
}

/// Validate, read and parse a document file
pub async fn load_document(file_path: &Path, markers: &MarkerConfig) -> Result<ParsedDocument> {
    // Validate file type before attempting to parse
    validate_source_file(file_path)?;

    let lines = read_lines(file_path).await?;
    log::debug!("read {} lines from {}", lines.len(), file_path.display());

    Ok(parse_lines(&lines, markers))
}
