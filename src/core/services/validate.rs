//! Consistency validator - cross-field checks on an extracted report
//!
//! Checks never mutate the report and never short-circuit each other.

use crate::core::models::{ExtractedReport, Field, FieldError, FieldErrorSet, VersionToken};

/// Run every check, appending findings to `errors`
pub fn validate(report: &ExtractedReport, errors: &mut FieldErrorSet) {
    for field in empty_required_fields(report) {
        errors.push(field, FieldError::FieldEmpty);
    }
    for gap in version_gaps(&report.affected_versions, &report.fixed_versions) {
        errors.push(Field::FixedVersions, gap);
    }
}

/// Required fields that extracted nothing
#[must_use]
pub fn empty_required_fields(report: &ExtractedReport) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .filter(|field| report.versions(*field).is_some_and(<[VersionToken]>::is_empty))
        .collect()
}

/// Fixed versions whose immediately preceding patch is not listed as affected
///
/// `master` and minor-line entries are exempt. A fix in `x.y.0` has no
/// predecessor and is always reported.
#[must_use]
pub fn version_gaps(affected: &[VersionToken], fixed: &[VersionToken]) -> Vec<FieldError> {
    fixed
        .iter()
        .filter(|f| f.as_release().is_some())
        .filter_map(|f| match f.predecessor() {
            Some(prev) if affected.contains(&prev) => None,
            Some(prev) => Some(FieldError::VersionGap {
                fixed: f.clone(),
                missing: prev.to_string(),
            }),
            None => Some(FieldError::VersionGap {
                fixed: f.clone(),
                missing: format!("a release before {f}"),
            }),
        })
        .collect()
}
