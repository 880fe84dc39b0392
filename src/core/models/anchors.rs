//! Section anchors
//!
//! The six literal headings that open each section of the bug template.

use thiserror::Error;

use super::{Field, SECTION_COUNT};

/// Default anchors of the bug template, in section order
pub const DEFAULT_ANCHORS: [&str; SECTION_COUNT] = [
    "#### 1. Root Cause Analysis (RCA) (optional)",
    "#### 2. Symptom (optional)",
    "#### 3. All Trigger Conditions (optional)",
    "#### 4. Workaround (optional)",
    "#### 5. Affected versions",
    "#### 6. Fixed versions",
];

/// Errors that can occur when building an anchor list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    /// Not exactly one anchor per section
    #[error("expected 6 anchors, got {0}")]
    WrongCount(usize),

    /// An anchor is blank
    #[error("anchor {0} is empty")]
    Empty(usize),

    /// The same anchor is used for two sections
    #[error("duplicate anchor: {0}")]
    Duplicate(String),
}

/// A validated list of six anchors, one per [`Field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchors {
    anchors: [String; SECTION_COUNT],
}

impl Default for SectionAnchors {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_ANCHORS.map(String::from),
        }
    }
}

impl SectionAnchors {
    /// Validate and build an anchor list
    pub fn new(anchors: Vec<String>) -> Result<Self, AnchorError> {
        let anchors: [String; SECTION_COUNT] = anchors
            .try_into()
            .map_err(|v: Vec<String>| AnchorError::WrongCount(v.len()))?;

        for (i, anchor) in anchors.iter().enumerate() {
            if anchor.trim().is_empty() {
                return Err(AnchorError::Empty(i + 1));
            }
            if anchors[..i].contains(anchor) {
                return Err(AnchorError::Duplicate(anchor.clone()));
            }
        }

        Ok(Self { anchors })
    }

    /// Anchor opening a field's section
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.anchors[field.index()]
    }

    /// All anchors in section order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.anchors
    }

    /// Iterate over `(field, anchor)` pairs in section order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().zip(self.anchors.iter().map(String::as_str))
    }
}
