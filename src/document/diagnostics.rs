//! Structured reports of recoverable anomalies
//!
//! The parser never prints. Anything it had to skip or leave empty is
//! recorded here and handed back to the caller with the parsed tree.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Title line lacks the version/codename pattern
    MalformedTitle,
    TocStartMissing,
    /// ToC start marker found without a closing separator line
    TocEndMissing,
    TocEmpty,
    ForewordMissing,
    /// Foreword heading found with no paragraph after it
    ForewordEmpty,
    OrphanSubsection,
    OrphanSubsubsection,
    /// Lines dropped because no section was open to receive them
    ContentOutsideSection,
    DuplicateSectionNumber,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::MalformedTitle => "malformed-title",
            DiagnosticKind::TocStartMissing => "toc-start-missing",
            DiagnosticKind::TocEndMissing => "toc-end-missing",
            DiagnosticKind::TocEmpty => "toc-empty",
            DiagnosticKind::ForewordMissing => "foreword-missing",
            DiagnosticKind::ForewordEmpty => "foreword-empty",
            DiagnosticKind::OrphanSubsection => "orphan-subsection",
            DiagnosticKind::OrphanSubsubsection => "orphan-subsubsection",
            DiagnosticKind::ContentOutsideSection => "content-outside-section",
            DiagnosticKind::DuplicateSectionNumber => "duplicate-section-number",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number in the input, when the anomaly has a location
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: Some(line),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.kind, line, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}
