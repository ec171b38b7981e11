//! Core data structures for document representation
//!
//! This module defines the typed tree produced by the parser: the root
//! document with its front matter, and the three levels of sections whose
//! content is an ordered mix of nested sections, paragraphs and lists.
//!
//! The serde attributes define the JSON shape directly. Every content node
//! carries a `"type"` discriminant so a reader never has to guess a node's kind
//! from its fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootDocument {
    #[serde(rename = "document_title")]
    pub title: String,
    #[serde(rename = "document_info")]
    pub info: Option<Metadata>,
    pub table_of_contents: Vec<String>,
    #[serde(
        default,
        serialize_with = "serialize_foreword",
        deserialize_with = "deserialize_foreword"
    )]
    pub foreword: Option<String>,
    pub sections: Vec<Section>,
}

/// Version and codename recovered from the title line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    pub codename: String,
}

/// Top-level section, numbered with a roman numeral ("I", "IV", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "section")]
pub struct Section {
    #[serde(rename = "section_number")]
    pub number: String,
    #[serde(rename = "section_title")]
    pub title: String,
    pub content: Vec<SectionContent>,
}

/// Second-level section, numbered "major.minor"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsection {
    #[serde(rename = "subsection_number")]
    pub number: String,
    #[serde(rename = "subsection_title")]
    pub title: String,
    pub content: Vec<SubsectionContent>,
}

/// Third-level section, numbered "major.minor.patch". Holds no further nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subsubsection {
    #[serde(rename = "subsubsection_number")]
    pub number: String,
    #[serde(rename = "subsubsection_title")]
    pub title: String,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionContent {
    Subsection(Subsection),
    Paragraph(Paragraph),
    List(List),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubsectionContent {
    Subsubsection(Subsubsection),
    Paragraph(Paragraph),
    List(List),
}

/// Leaf content produced by the block segmenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph(Paragraph),
    List(List),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph { text: text.into() })
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List(List {
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<Block> for SectionContent {
    fn from(block: Block) -> Self {
        match block {
            Block::Paragraph(paragraph) => SectionContent::Paragraph(paragraph),
            Block::List(list) => SectionContent::List(list),
        }
    }
}

impl From<Block> for SubsectionContent {
    fn from(block: Block) -> Self {
        match block {
            Block::Paragraph(paragraph) => SubsectionContent::Paragraph(paragraph),
            Block::List(list) => SubsectionContent::List(list),
        }
    }
}

impl Section {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            content: Vec::new(),
        }
    }
}

impl Subsection {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            content: Vec::new(),
        }
    }
}

impl Subsubsection {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            content: Vec::new(),
        }
    }
}

// An absent foreword is written as "" rather than null, and "" reads back as absent.
fn serialize_foreword<S>(foreword: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(foreword.as_deref().unwrap_or(""))
}

fn deserialize_foreword<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|text| !text.is_empty()))
}

/// Node counts across the whole tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub sections: usize,
    pub subsections: usize,
    pub subsubsections: usize,
    pub paragraphs: usize,
    pub lists: usize,
    pub list_items: usize,
}
