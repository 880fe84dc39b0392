//! Extraction pipeline
//!
//! Normalize → split → parse both version sections → validate. Every stage
//! runs on every call; a field error is recorded and the remaining fields
//! are still extracted.

use crate::core::models::{
    Extraction, Field, FieldError, FieldErrorSet, SectionAnchors, VersionToken,
};

use super::grammar::{self, Scan};
use super::normalize::strip_comment_markup;
use super::sections::{contains_template, split_sections};
use super::validate::validate;

/// Extracts reports from comments that follow one template
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    anchors: SectionAnchors,
}

impl Extractor {
    /// Create an extractor for the given anchors
    #[must_use]
    pub const fn new(anchors: SectionAnchors) -> Self {
        Self { anchors }
    }

    /// Anchors this extractor splits on
    #[must_use]
    pub const fn anchors(&self) -> &SectionAnchors {
        &self.anchors
    }

    /// Check if a comment contains all six anchors in order
    #[must_use]
    pub fn detect(&self, comment: &str) -> bool {
        contains_template(comment, &self.anchors)
    }

    /// Extract a report and every field error from a comment
    #[must_use]
    pub fn extract(&self, comment: &str) -> Extraction {
        let normalized = strip_comment_markup(comment);
        let [root_cause, symptom, trigger_conditions, workaround, affected, fixed] =
            split_sections(&normalized, &self.anchors);

        let mut extraction = Extraction::default();
        let report = &mut extraction.report;
        report.root_cause = root_cause;
        report.symptom = symptom;
        report.trigger_conditions = trigger_conditions;
        report.workaround = workaround;

        let errors = &mut extraction.errors;
        report.affected_versions = collect_versions(
            Field::AffectedVersions,
            grammar::parse_affected_versions(&affected),
            errors,
        );
        report.fixed_versions = collect_versions(
            Field::FixedVersions,
            grammar::parse_fixed_versions(&fixed),
            errors,
        );
        log::debug!(
            "extracted {} affected and {} fixed version(s)",
            report.affected_versions.len(),
            report.fixed_versions.len()
        );

        validate(report, errors);
        extraction
    }
}

/// Take the tokens of a successful scan, recording rejected tokens, leftover
/// content or the scan failure against the field
fn collect_versions(
    field: Field,
    scanned: Result<Scan, FieldError>,
    errors: &mut FieldErrorSet,
) -> Vec<VersionToken> {
    match scanned {
        Ok(scan) => {
            for err in &scan.rejected {
                errors.push(field, err.clone());
            }
            if let Some(err) = scan.unexpected_content() {
                errors.push(field, err);
            }
            scan.tokens
        },
        Err(err) => {
            errors.push(field, err);
            Vec::new()
        },
    }
}

/// Extract a report from a comment using the given anchors
#[must_use]
pub fn parse_comment(comment: &str, anchors: &SectionAnchors) -> Extraction {
    Extractor::new(anchors.clone()).extract(comment)
}
