//! Document parsing utilities
//!
//! This module contains the line classifier, the block segmenter, the body
//! state machine and the front matter extractors.

pub(crate) mod body;
pub(crate) mod classify;
pub(crate) mod front_matter;
pub(crate) mod segment;
