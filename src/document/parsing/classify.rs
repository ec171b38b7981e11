//! Line classification
//!
//! A body line is one of: a main section heading ("IV. Title"), a subsection
//! heading ("4.2. Title"), a sub-subsection heading ("4.2.1. Title"), a
//! bulleted list item, a blank line, or plain text. Heading patterns are tried
//! before the list pattern and all patterns are anchored at the line start.

use once_cell::sync::Lazy;
use regex::Regex;

// Lazy static regex patterns for line classification
static MAIN_SECTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([IVXLCDM]+)\.\s+(.*)").unwrap());
static SUBSECTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d+)\.\s+(.*)").unwrap());
static SUBSUBSECTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d+\.\d+)\.\s+(.*)").unwrap());
static LIST_ITEM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+(.*)").unwrap());

/// Heading depth, from the roman-numeral level down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeadingLevel {
    Section,
    Subsection,
    Subsubsection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Heading<'a> {
    pub(crate) level: HeadingLevel,
    pub(crate) number: &'a str,
    pub(crate) title: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Heading(Heading<'a>),
    ListItem(&'a str),
    Blank,
    Text(&'a str),
}

/// Classify a single line of text
pub(crate) fn classify_line(line: &str) -> LineKind<'_> {
    let text = line.trim();

    if text.is_empty() {
        return LineKind::Blank;
    }

    if let Some(heading) = match_heading(text) {
        return LineKind::Heading(heading);
    }

    if let Some(item) = match_list_item(text) {
        return LineKind::ListItem(item);
    }

    LineKind::Text(text)
}

/// Match the three heading patterns in priority order against trimmed text
pub(crate) fn match_heading(text: &str) -> Option<Heading<'_>> {
    let patterns = [
        (HeadingLevel::Section, &*MAIN_SECTION_PATTERN),
        (HeadingLevel::Subsection, &*SUBSECTION_PATTERN),
        (HeadingLevel::Subsubsection, &*SUBSUBSECTION_PATTERN),
    ];

    for (level, pattern) in patterns {
        if let Some(captures) = pattern.captures(text) {
            if let (Some(number), Some(title)) = (captures.get(1), captures.get(2)) {
                return Some(Heading {
                    level,
                    number: number.as_str(),
                    title: title.as_str(),
                });
            }
        }
    }

    None
}

/// Return the item text of a bulleted line, marker and surrounding whitespace removed
pub(crate) fn match_list_item(text: &str) -> Option<&str> {
    LIST_ITEM_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|item| item.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: HeadingLevel, number: &'static str, title: &'static str) -> LineKind<'static> {
        LineKind::Heading(Heading {
            level,
            number,
            title,
        })
    }

    #[test]
    fn test_main_section_headings() {
        assert_eq!(
            classify_line("I. Introduction to EOTS v2.5"),
            heading(HeadingLevel::Section, "I", "Introduction to EOTS v2.5")
        );
        assert_eq!(
            classify_line("  XVII.   Appendix  "),
            heading(HeadingLevel::Section, "XVII", "Appendix")
        );
        assert_eq!(
            classify_line("MCMXC. Odd but valid"),
            heading(HeadingLevel::Section, "MCMXC", "Odd but valid")
        );

        // Lowercase numerals, missing space and embedded numerals are plain text
        assert_eq!(classify_line("iv. lower"), LineKind::Text("iv. lower"));
        assert_eq!(classify_line("IV.NoSpace"), LineKind::Text("IV.NoSpace"));
        assert_eq!(
            classify_line("See section IV. for details"),
            LineKind::Text("See section IV. for details")
        );
        assert_eq!(classify_line("IVY. League"), LineKind::Text("IVY. League"));
    }

    #[test]
    fn test_dotted_headings() {
        assert_eq!(
            classify_line("1.1. Purpose of This Guide"),
            heading(HeadingLevel::Subsection, "1.1", "Purpose of This Guide")
        );
        assert_eq!(
            classify_line("17.12. Formulas"),
            heading(HeadingLevel::Subsection, "17.12", "Formulas")
        );
        assert_eq!(
            classify_line("1.2.1. Core Philosophy"),
            heading(HeadingLevel::Subsubsection, "1.2.1", "Core Philosophy")
        );

        // The trailing period is required
        assert_eq!(classify_line("1.1 Purpose"), LineKind::Text("1.1 Purpose"));
        assert_eq!(classify_line("1. Single level"), LineKind::Text("1. Single level"));
        assert_eq!(
            classify_line("1.2.3.4. Too deep"),
            LineKind::Text("1.2.3.4. Too deep")
        );
    }

    #[test]
    fn test_list_items() {
        assert_eq!(classify_line("- Alpha"), LineKind::ListItem("Alpha"));
        assert_eq!(classify_line("*   Beta  "), LineKind::ListItem("Beta"));
        assert_eq!(classify_line("• Gamma"), LineKind::ListItem("Gamma"));
        assert_eq!(classify_line("    - indented"), LineKind::ListItem("indented"));

        // A marker needs whitespace after it
        assert_eq!(classify_line("-5 degrees"), LineKind::Text("-5 degrees"));
        assert_eq!(classify_line("**bold**"), LineKind::Text("**bold**"));
    }

    #[test]
    fn test_blank_and_text() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
        assert_eq!(
            classify_line("  Plain prose line.  "),
            LineKind::Text("Plain prose line.")
        );
    }

    #[test]
    fn test_heading_takes_precedence_over_list() {
        assert!(matches!(
            classify_line("I. - dash title"),
            LineKind::Heading(Heading {
                level: HeadingLevel::Section,
                ..
            })
        ));
        assert_eq!(
            classify_line("- I. inside a list"),
            LineKind::ListItem("I. inside a list")
        );
    }

    #[test]
    fn test_main_section_agrees_with_pattern() {
        let samples = [
            "I. Intro",
            "II.\tTabbed",
            "X. ",
            "V.",
            "C.  Spaced title",
            "D. M. Two numerals",
            "L1. Mixed",
            "Intro I. trailing",
        ];

        for sample in samples {
            let text = sample.trim();
            let expected = MAIN_SECTION_PATTERN
                .captures(text)
                .map(|c| (c[1].to_string(), c[2].to_string()));
            let actual = match classify_line(sample) {
                LineKind::Heading(Heading {
                    level: HeadingLevel::Section,
                    number,
                    title,
                }) => Some((number.to_string(), title.to_string())),
                _ => None,
            };
            assert_eq!(actual, expected, "mismatch for {sample:?}");
        }
    }
}
