//! Block segmentation
//!
//! This module groups a run of non-heading lines into paragraphs and
//! bulleted lists, preserving source order.

use super::super::models::Block;
use super::classify::{LineKind, classify_line};

#[derive(Debug, Default)]
struct Segmenter {
    blocks: Vec<Block>,
    paragraph_lines: Vec<String>,
    list_items: Vec<String>,
}

impl Segmenter {
    fn flush_paragraph(&mut self) {
        if !self.paragraph_lines.is_empty() {
            let text = std::mem::take(&mut self.paragraph_lines).join("\n");
            self.blocks.push(Block::paragraph(text));
        }
    }

    fn flush_list(&mut self) {
        if !self.list_items.is_empty() {
            self.blocks.push(Block::list(std::mem::take(&mut self.list_items)));
        }
    }

    fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::ListItem(item) => {
                // Any preceding text was a paragraph
                self.flush_paragraph();
                self.list_items.push(item.to_string());
            }
            LineKind::Blank => {
                self.flush_list();
                self.flush_paragraph();
            }
            LineKind::Text(text) => {
                self.flush_list();
                self.paragraph_lines.push(text.to_string());
            }
            // Headings are excised by the body parser; one slipping through is kept as text
            LineKind::Heading(_) => {
                self.flush_list();
                self.paragraph_lines.push(line.trim().to_string());
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.flush_list();
        self.blocks
    }
}

/// Convert a run of raw lines into ordered paragraph and list blocks
pub(crate) fn segment_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let mut segmenter = Segmenter::default();
    for line in lines {
        segmenter.push_line(line.as_ref());
    }
    segmenter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_then_paragraph() {
        let blocks = segment_blocks(&["- Alpha", "- Beta", "", "Gamma text."]);
        assert_eq!(
            blocks,
            vec![
                Block::list(["Alpha", "Beta"]),
                Block::paragraph("Gamma text.")
            ]
        );
    }

    #[test]
    fn test_plain_lines_form_one_paragraph() {
        let lines = ["  First line.", "Second line.  ", "\tThird line."];
        let blocks = segment_blocks(&lines);
        assert_eq!(
            blocks,
            vec![Block::paragraph("First line.\nSecond line.\nThird line.")]
        );
    }

    #[test]
    fn test_list_ends_without_blank_line() {
        let blocks = segment_blocks(&["* one", "• two", "After the list."]);
        assert_eq!(
            blocks,
            vec![
                Block::list(["one", "two"]),
                Block::paragraph("After the list.")
            ]
        );
    }

    #[test]
    fn test_paragraph_ends_at_list_start() {
        let blocks = segment_blocks(&["Intro:", "- first", "- second"]);
        assert_eq!(
            blocks,
            vec![Block::paragraph("Intro:"), Block::list(["first", "second"])]
        );
    }

    #[test]
    fn test_blank_lines_split_paragraphs() {
        let blocks = segment_blocks(&["", "One.", "", "", "Two.", ""]);
        assert_eq!(
            blocks,
            vec![Block::paragraph("One."), Block::paragraph("Two.")]
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let blocks = segment_blocks(&["- a", "", "- b"]);
        assert_eq!(blocks, vec![Block::list(["a"]), Block::list(["b"])]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(segment_blocks(&empty).is_empty());
        assert!(segment_blocks(&["", "   "]).is_empty());
    }

    #[test]
    fn test_owned_lines() {
        let lines = vec!["- x".to_string(), "text".to_string()];
        assert_eq!(
            segment_blocks(&lines),
            vec![Block::list(["x"]), Block::paragraph("text")]
        );
    }
}
