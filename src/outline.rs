use std::fmt::Write;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

use crate::document::*;
use crate::error::Result;

pub struct OutlineOptions {
    /// Graphemes of paragraph text shown per paragraph
    pub paragraph_preview: usize,
    /// Graphemes of the first list item shown per list
    pub list_preview: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            paragraph_preview: 30,
            list_preview: 20,
        }
    }
}

pub fn export_to_outline(document: &RootDocument) -> String {
    export_to_outline_with_options(document, &OutlineOptions::default())
}

/// Render the parsed structure as an indented text summary
pub fn export_to_outline_with_options(document: &RootDocument, options: &OutlineOptions) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail
    let _ = render_outline(&mut output, document, options);
    output
}

/// Write the default outline to a file, reporting failures like JSON output does
pub async fn write_outline(document: &RootDocument, path: &Path) -> Result<()> {
    crate::document::io::write_text(path, &export_to_outline(document)).await
}

fn render_outline(
    output: &mut String,
    document: &RootDocument,
    options: &OutlineOptions,
) -> std::fmt::Result {
    writeln!(output, "Document Title: {}", document.title)?;
    if let Some(info) = &document.info {
        writeln!(output, "Version: {}", info.version)?;
        writeln!(output, "Codename: {}", info.codename)?;
    }
    writeln!(
        output,
        "Table of Contents: {} items",
        document.table_of_contents.len()
    )?;
    match &document.foreword {
        Some(foreword) => writeln!(output, "Foreword: {}", preview(foreword, options.paragraph_preview))?,
        None => writeln!(output, "Foreword: (none)")?,
    }
    output.push('\n');

    if document.sections.is_empty() {
        writeln!(output, "No main sections parsed.")?;
        return Ok(());
    }

    for (index, section) in document.sections.iter().enumerate() {
        writeln!(
            output,
            "Section {}: {}. {}",
            index + 1,
            section.number,
            section.title
        )?;

        for (index, item) in section.content.iter().enumerate() {
            match item {
                SectionContent::Subsection(subsection) => {
                    writeln!(
                        output,
                        "  L1 Item {}: Subsection - {}. {}",
                        index + 1,
                        subsection.number,
                        subsection.title
                    )?;
                    write_subsection(output, subsection, options)?;
                }
                SectionContent::Paragraph(paragraph) => {
                    write_paragraph(output, 1, index, paragraph, options)?;
                }
                SectionContent::List(list) => write_list(output, 1, index, list, options)?,
            }
        }
    }

    writeln!(output, "Total main sections found: {}", document.sections.len())
}

fn write_subsection(
    output: &mut String,
    subsection: &Subsection,
    options: &OutlineOptions,
) -> std::fmt::Result {
    for (index, item) in subsection.content.iter().enumerate() {
        match item {
            SubsectionContent::Subsubsection(subsubsection) => {
                writeln!(
                    output,
                    "    L2 Item {}: Subsubsection - {}. {}",
                    index + 1,
                    subsubsection.number,
                    subsubsection.title
                )?;
                for (index, block) in subsubsection.content.iter().enumerate() {
                    match block {
                        Block::Paragraph(paragraph) => {
                            write_paragraph(output, 3, index, paragraph, options)?
                        }
                        Block::List(list) => write_list(output, 3, index, list, options)?,
                    }
                }
            }
            SubsectionContent::Paragraph(paragraph) => {
                write_paragraph(output, 2, index, paragraph, options)?
            }
            SubsectionContent::List(list) => write_list(output, 2, index, list, options)?,
        }
    }
    Ok(())
}

fn write_paragraph(
    output: &mut String,
    depth: usize,
    index: usize,
    paragraph: &Paragraph,
    options: &OutlineOptions,
) -> std::fmt::Result {
    writeln!(
        output,
        "{}L{} Item {}: Paragraph - '{}...' ({} chars)",
        "  ".repeat(depth),
        depth,
        index + 1,
        preview(&paragraph.text, options.paragraph_preview),
        paragraph.text.chars().count()
    )
}

fn write_list(
    output: &mut String,
    depth: usize,
    index: usize,
    list: &List,
    options: &OutlineOptions,
) -> std::fmt::Result {
    let first = list
        .items
        .first()
        .map(|item| preview(item, options.list_preview))
        .unwrap_or_else(|| "N/A".to_string());
    writeln!(
        output,
        "{}L{} Item {}: List - {} items. First: '{}...'",
        "  ".repeat(depth),
        depth,
        index + 1,
        list.items.len(),
        first
    )
}

/// First `limit` graphemes with line breaks flattened to spaces
fn preview(text: &str, limit: usize) -> String {
    text.graphemes(true)
        .take(limit)
        .map(|grapheme| if grapheme == "\n" || grapheme == "\r\n" { " " } else { grapheme })
        .collect()
}
