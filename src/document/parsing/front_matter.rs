//! Front matter extraction
//!
//! The front matter is everything before the first section: the title line
//! with its version and codename, the table of contents between its marker
//! lines, and the foreword paragraph that follows. Each extractor works on the
//! full line list and reports what it could not find as a diagnostic.

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::diagnostics::{Diagnostic, DiagnosticKind};
use super::super::models::Metadata;
use crate::config::MarkerConfig;

// Lines that end the foreword once some text has been collected
static FOREWORD_STOP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+\s|\d+(\.\d+)*\.\s|[IVXLCDM]+\.\s|[-*•]\s)").unwrap());

/// Line indices of the table of contents markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TocBounds {
    pub(crate) start: usize,
    pub(crate) end: Option<usize>,
}

/// Find the ToC start marker and the first separator line after it
pub(crate) fn locate_toc<S: AsRef<str>>(lines: &[S], markers: &MarkerConfig) -> Option<TocBounds> {
    let start = lines
        .iter()
        .position(|line| line.as_ref().trim() == markers.toc_start)?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| line.as_ref().trim().starts_with(markers.toc_end.as_str()))
        .map(|offset| start + 1 + offset);

    Some(TocBounds { start, end })
}

/// Index of the first line after the front matter markers.
///
/// After the ToC separator when there is one, after the ToC start line when
/// the separator is missing, otherwise right after the title line.
pub(crate) fn front_matter_end(line_count: usize, bounds: Option<TocBounds>) -> usize {
    let index = match bounds {
        Some(TocBounds { end: Some(end), .. }) => end + 1,
        Some(TocBounds { start, end: None }) => start + 1,
        None => 1,
    };
    index.min(line_count)
}

/// Extract version and codename from the title line
pub(crate) fn parse_metadata(
    title_line: &str,
    markers: &MarkerConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Metadata> {
    let metadata = match_metadata(title_line, &markers.title_prefix);
    if metadata.is_none() {
        diagnostics.push(Diagnostic::at_line(
            DiagnosticKind::MalformedTitle,
            1,
            "could not parse version and codename from the title line",
        ));
    }
    metadata
}

fn match_metadata(title_line: &str, prefix: &str) -> Option<Metadata> {
    let prefix = if prefix.is_empty() {
        String::new()
    } else {
        format!("{} ", regex::escape(prefix))
    };
    let pattern = Regex::new(&format!(r#"{prefix}v(\d+\.\d+)\s+"([^"]+)""#)).ok()?;

    let captures = pattern.captures(title_line)?;
    Some(Metadata {
        version: captures.get(1)?.as_str().to_string(),
        codename: captures.get(2)?.as_str().to_string(),
    })
}

/// Collect the trimmed, non-blank lines between the ToC markers
pub(crate) fn parse_table_of_contents<S: AsRef<str>>(
    lines: &[S],
    bounds: Option<TocBounds>,
    markers: &MarkerConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let Some(TocBounds { start, end }) = bounds else {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::TocStartMissing,
            format!("'{}' marker not found", markers.toc_start),
        ));
        return Vec::new();
    };

    let Some(end) = end else {
        diagnostics.push(Diagnostic::at_line(
            DiagnosticKind::TocEndMissing,
            start + 1,
            format!(
                "'{}' found, but no closing '{}' line; table of contents left empty",
                markers.toc_start, markers.toc_end
            ),
        ));
        return Vec::new();
    };

    let items: Vec<String> = lines[start + 1..end]
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        diagnostics.push(Diagnostic::at_line(
            DiagnosticKind::TocEmpty,
            start + 1,
            "table of contents has no items before its closing separator",
        ));
    }

    items
}

/// Find the foreword heading after the ToC and join its paragraph with spaces
pub(crate) fn parse_foreword<S: AsRef<str>>(
    lines: &[S],
    bounds: Option<TocBounds>,
    markers: &MarkerConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let search_from = front_matter_end(lines.len(), bounds);

    let Some(heading_index) = lines[search_from..]
        .iter()
        .position(|line| is_foreword_heading(line.as_ref().trim(), markers))
        .map(|offset| search_from + offset)
    else {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::ForewordMissing,
            "no foreword heading found after the table of contents",
        ));
        return None;
    };

    let mut collected: Vec<&str> = Vec::new();
    for line in &lines[heading_index + 1..] {
        let text = line.as_ref().trim();

        if text.is_empty() {
            // Leading blank lines are skipped; a later one ends the paragraph
            if collected.is_empty() {
                continue;
            }
            break;
        }

        if !collected.is_empty() && FOREWORD_STOP_PATTERN.is_match(text) {
            break;
        }

        collected.push(text);
    }

    if collected.is_empty() {
        diagnostics.push(Diagnostic::at_line(
            DiagnosticKind::ForewordEmpty,
            heading_index + 1,
            format!(
                "foreword heading '{}' has no paragraph after it",
                lines[heading_index].as_ref().trim()
            ),
        ));
        return None;
    }

    Some(collected.join(" "))
}

fn is_foreword_heading(text: &str, markers: &MarkerConfig) -> bool {
    text == markers.foreword_heading
        || (!markers.foreword_prefix.is_empty() && text.starts_with(markers.foreword_prefix.as_str()))
}
