//! Section splitter - carves a comment into the six template sections
//!
//! Lookup is strictly forward. Each anchor is searched for in the text that
//! remains after the previous section. A missing anchor leaves its section
//! empty and does not consume anything. An anchor that appears out of order
//! is treated as ordinary body text.

use crate::core::models::{Field, SECTION_COUNT, SectionAnchors};

/// Forward-only scanner over the anchor boundaries of a comment
#[derive(Debug)]
pub struct SectionScanner<'a> {
    anchors: &'a SectionAnchors,
    rest: &'a str,
    next: usize,
}

impl<'a> SectionScanner<'a> {
    /// Start scanning a normalized comment
    #[must_use]
    pub const fn new(text: &'a str, anchors: &'a SectionAnchors) -> Self {
        Self {
            anchors,
            rest: text,
            next: 0,
        }
    }

    /// Text not yet consumed by any section
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Raw body of the next section, before blank-line cleanup
    ///
    /// Returns `None` once all six sections have been produced.
    pub fn next_body(&mut self) -> Option<(Field, &'a str)> {
        let field = *Field::ALL.get(self.next)?;
        self.next += 1;

        let anchor = self.anchors.get(field);
        let Some(start) = self.rest.find(anchor) else {
            return Some((field, ""));
        };
        let body_start = start + anchor.len();

        let end = Field::ALL
            .get(field.index() + 1)
            .and_then(|next| self.rest[body_start..].find(self.anchors.get(*next)))
            .map_or(self.rest.len(), |offset| body_start + offset);

        let body = &self.rest[body_start..end];
        self.rest = &self.rest[end..];
        Some((field, body))
    }
}

impl Iterator for SectionScanner<'_> {
    type Item = (Field, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_body().map(|(field, body)| (field, squeeze_blank_lines(body)))
    }
}

/// Split a normalized comment into its six section bodies, in template order
#[must_use]
pub fn split_sections(text: &str, anchors: &SectionAnchors) -> [String; SECTION_COUNT] {
    let mut sections: [String; SECTION_COUNT] = Default::default();
    for (field, body) in SectionScanner::new(text, anchors) {
        log::debug!("section {field}: {} byte(s)", body.len());
        sections[field.index()] = body;
    }
    sections
}

/// Trim every line, drop blank ones, and join the rest with `\n`
#[must_use]
pub fn squeeze_blank_lines(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if the text contains all six anchors in order
///
/// Callers run this before extraction to decide whether a comment follows
/// the template at all.
#[must_use]
pub fn contains_template(text: &str, anchors: &SectionAnchors) -> bool {
    let mut rest = text;
    for (_, anchor) in anchors.iter() {
        match rest.find(anchor) {
            Some(idx) => rest = &rest[idx + anchor.len()..],
            None => return false,
        }
    }
    true
}
