//! Document body parsing
//!
//! Walks the body line by line and builds the section tree. The parser keeps
//! the open nodes by value in [`OpenNode`]; closing a node moves it into its
//! parent's content, so the tree is assembled in document order without any
//! shared references. Runs of non-heading lines are buffered and handed to the
//! block segmenter whenever a heading or a blank line ends them.

use std::collections::HashSet;

use super::super::diagnostics::{Diagnostic, DiagnosticKind};
use super::super::models::*;
use super::classify::{Heading, HeadingLevel, LineKind, classify_line};
use super::segment::segment_blocks;

/// The currently open path through the tree, deepest node last
#[derive(Debug, Default)]
enum OpenNode {
    #[default]
    NoneOpen,
    SectionOpen(Section),
    SubsectionOpen(Section, Subsection),
    SubsubsectionOpen(Section, Subsection, Subsubsection),
}

impl OpenNode {
    /// Append blocks to the deepest open node. Hands the blocks back if nothing is open.
    fn attach(&mut self, blocks: Vec<Block>) -> Result<(), Vec<Block>> {
        match self {
            OpenNode::NoneOpen => return Err(blocks),
            OpenNode::SectionOpen(section) => {
                section.content.extend(blocks.into_iter().map(Into::into));
            }
            OpenNode::SubsectionOpen(_, subsection) => {
                subsection.content.extend(blocks.into_iter().map(Into::into));
            }
            OpenNode::SubsubsectionOpen(_, _, subsubsection) => {
                subsubsection.content.extend(blocks);
            }
        }
        Ok(())
    }

    /// Close every open node and return the finished section, if any
    fn close_all(self) -> Option<Section> {
        match self {
            OpenNode::NoneOpen => None,
            OpenNode::SectionOpen(section) => Some(section),
            OpenNode::SubsectionOpen(mut section, subsection) => {
                section.content.push(SectionContent::Subsection(subsection));
                Some(section)
            }
            OpenNode::SubsubsectionOpen(mut section, mut subsection, subsubsection) => {
                subsection
                    .content
                    .push(SubsectionContent::Subsubsection(subsubsection));
                section.content.push(SectionContent::Subsection(subsection));
                Some(section)
            }
        }
    }
}

/// Result of parsing the body
#[derive(Debug, Default)]
pub(crate) struct BodyOutput {
    pub(crate) sections: Vec<Section>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

struct BodyParser {
    state: OpenNode,
    sections: Vec<Section>,
    seen_numbers: HashSet<String>,
    pending: Vec<String>,
    /// Line number of the first buffered line
    pending_start: usize,
    diagnostics: Vec<Diagnostic>,
}

impl BodyParser {
    fn new() -> Self {
        Self {
            state: OpenNode::NoneOpen,
            sections: Vec::new(),
            seen_numbers: HashSet::new(),
            pending: Vec::new(),
            pending_start: 0,
            diagnostics: Vec::new(),
        }
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let lines = std::mem::take(&mut self.pending);
        let blocks = segment_blocks(&lines);
        if self.state.attach(blocks).is_err() {
            self.diagnostics.push(Diagnostic::at_line(
                DiagnosticKind::ContentOutsideSection,
                self.pending_start,
                format!(
                    "{} content line(s) found outside any main section were dropped",
                    lines.len()
                ),
            ));
        }
    }

    fn push_text(&mut self, line: &str, line_no: usize) {
        if self.pending.is_empty() {
            self.pending_start = line_no;
        }
        self.pending.push(line.to_string());
    }

    fn open_heading(&mut self, heading: Heading<'_>, raw: &str, line_no: usize) {
        self.flush_pending();

        let state = std::mem::take(&mut self.state);
        self.state = match (heading.level, state) {
            (HeadingLevel::Section, state) => {
                if let Some(finished) = state.close_all() {
                    self.sections.push(finished);
                }
                if !self.seen_numbers.insert(heading.number.to_string()) {
                    self.diagnostics.push(Diagnostic::at_line(
                        DiagnosticKind::DuplicateSectionNumber,
                        line_no,
                        format!("section number '{}' appears more than once", heading.number),
                    ));
                }
                log::debug!("line {line_no}: section {} {}", heading.number, heading.title);
                OpenNode::SectionOpen(Section::new(heading.number, heading.title))
            }

            (HeadingLevel::Subsection, OpenNode::NoneOpen) => {
                self.diagnostics.push(Diagnostic::at_line(
                    DiagnosticKind::OrphanSubsection,
                    line_no,
                    format!("subsection '{}' has no open main section; skipped", raw.trim()),
                ));
                OpenNode::NoneOpen
            }
            (HeadingLevel::Subsection, OpenNode::SectionOpen(section)) => {
                OpenNode::SubsectionOpen(section, Subsection::new(heading.number, heading.title))
            }
            (HeadingLevel::Subsection, OpenNode::SubsectionOpen(mut section, previous)) => {
                section.content.push(SectionContent::Subsection(previous));
                OpenNode::SubsectionOpen(section, Subsection::new(heading.number, heading.title))
            }
            (
                HeadingLevel::Subsection,
                OpenNode::SubsubsectionOpen(mut section, mut previous, deepest),
            ) => {
                previous
                    .content
                    .push(SubsectionContent::Subsubsection(deepest));
                section.content.push(SectionContent::Subsection(previous));
                OpenNode::SubsectionOpen(section, Subsection::new(heading.number, heading.title))
            }

            (HeadingLevel::Subsubsection, state @ (OpenNode::NoneOpen | OpenNode::SectionOpen(_))) => {
                self.diagnostics.push(Diagnostic::at_line(
                    DiagnosticKind::OrphanSubsubsection,
                    line_no,
                    format!(
                        "sub-subsection '{}' has no open subsection; skipped",
                        raw.trim()
                    ),
                ));
                state
            }
            (HeadingLevel::Subsubsection, OpenNode::SubsectionOpen(section, subsection)) => {
                OpenNode::SubsubsectionOpen(
                    section,
                    subsection,
                    Subsubsection::new(heading.number, heading.title),
                )
            }
            (
                HeadingLevel::Subsubsection,
                OpenNode::SubsubsectionOpen(section, mut subsection, previous),
            ) => {
                subsection
                    .content
                    .push(SubsectionContent::Subsubsection(previous));
                OpenNode::SubsubsectionOpen(
                    section,
                    subsection,
                    Subsubsection::new(heading.number, heading.title),
                )
            }
        };
    }

    fn finish(mut self) -> BodyOutput {
        self.flush_pending();
        if let Some(finished) = self.state.close_all() {
            self.sections.push(finished);
        }
        BodyOutput {
            sections: self.sections,
            diagnostics: self.diagnostics,
        }
    }
}

/// Parse body lines into the section tree.
///
/// `first_line` is the 1-based input line number of `lines[0]`, used to
/// locate diagnostics in the original document.
pub(crate) fn parse_body<S: AsRef<str>>(lines: &[S], first_line: usize) -> BodyOutput {
    let mut parser = BodyParser::new();

    for (offset, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_no = first_line + offset;

        match classify_line(line) {
            LineKind::Heading(heading) => parser.open_heading(heading, line, line_no),
            LineKind::Blank => parser.flush_pending(),
            LineKind::ListItem(_) | LineKind::Text(_) => parser.push_text(line, line_no),
        }
    }

    parser.finish()
}
