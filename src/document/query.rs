//! Read-only queries over a parsed document
//!
//! Node counting for the conversion summary the binary logs.

use super::models::*;

pub fn document_stats(document: &RootDocument) -> DocumentStats {
    let mut stats = DocumentStats {
        sections: document.sections.len(),
        ..DocumentStats::default()
    };

    for section in &document.sections {
        for item in &section.content {
            match item {
                SectionContent::Subsection(subsection) => {
                    stats.subsections += 1;
                    for item in &subsection.content {
                        match item {
                            SubsectionContent::Subsubsection(subsubsection) => {
                                stats.subsubsections += 1;
                                for block in &subsubsection.content {
                                    count_block(&mut stats, block);
                                }
                            }
                            SubsectionContent::Paragraph(_) => stats.paragraphs += 1,
                            SubsectionContent::List(list) => count_list(&mut stats, list),
                        }
                    }
                }
                SectionContent::Paragraph(_) => stats.paragraphs += 1,
                SectionContent::List(list) => count_list(&mut stats, list),
            }
        }
    }

    stats
}

fn count_block(stats: &mut DocumentStats, block: &Block) {
    match block {
        Block::Paragraph(_) => stats.paragraphs += 1,
        Block::List(list) => count_list(stats, list),
    }
}

fn count_list(stats: &mut DocumentStats, list: &List) {
    stats.lists += 1;
    stats.list_items += list.items.len();
}
