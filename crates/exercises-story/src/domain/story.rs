//! The story graph: chapters keyed by identifier.

use std::collections::BTreeMap;
use std::io::Read;

use exercises_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A labelled link from one chapter to another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryOption {
    /// Display text of the link.
    pub text: String,
    /// Identifier of the target chapter.
    #[serde(rename(deserialize = "arc"))]
    pub chapter: String,
}

/// A named node in the story graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    /// Chapter heading.
    pub title: String,
    /// Narrative paragraphs, in reading order.
    #[serde(rename(deserialize = "story"))]
    pub paragraphs: Vec<String>,
    /// Outgoing options, in display order.
    pub options: Vec<StoryOption>,
}

/// Mapping from chapter identifier to chapter content.
///
/// Loaded once at startup and read-only afterwards. No graph validation is
/// performed: options may point at chapters that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Story {
    chapters: BTreeMap<String, Chapter>,
}

impl Story {
    /// Identifier of the chapter every reader starts at.
    pub const INTRO: &'static str = "intro";

    /// Decodes a story from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document is not a JSON object
    /// of chapters.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomainError> {
        serde_json::from_reader(reader).map_err(malformed)
    }

    /// Decodes a story from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the document is not a JSON object
    /// of chapters.
    pub fn from_json_str(source: &str) -> Result<Self, DomainError> {
        serde_json::from_str(source).map_err(malformed)
    }

    /// Looks up a chapter by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no chapter has that identifier.
    pub fn chapter(&self, id: &str) -> Result<&Chapter, DomainError> {
        self.chapters
            .get(id)
            .ok_or_else(|| DomainError::NotFound(format!("chapter {id:?}")))
    }

    /// Iterates over chapter identifiers in sorted order.
    pub fn chapter_ids(&self) -> impl Iterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }

    /// Number of chapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the story has no chapters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

fn malformed(err: serde_json::Error) -> DomainError {
    DomainError::Validation(format!("story document is malformed: {err}"))
}
