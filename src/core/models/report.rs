//! The structured record extracted from a bug-report comment

use serde::Serialize;

use super::{Field, FieldErrorSet, VersionToken};

/// A report extracted from one comment
///
/// Version lists keep the order in which tokens appear in the comment,
/// duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedReport {
    /// Root cause analysis
    pub root_cause: String,
    /// What the user sees
    pub symptom: String,
    /// All conditions that trigger the defect
    pub trigger_conditions: String,
    /// How to avoid the defect
    pub workaround: String,
    /// Versions containing the defect
    pub affected_versions: Vec<VersionToken>,
    /// First versions, per minor line, containing the fix
    pub fixed_versions: Vec<VersionToken>,
}

impl ExtractedReport {
    /// Free text of a text field; `None` for the version fields
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::RootCause => Some(&self.root_cause),
            Field::Symptom => Some(&self.symptom),
            Field::TriggerConditions => Some(&self.trigger_conditions),
            Field::Workaround => Some(&self.workaround),
            Field::AffectedVersions | Field::FixedVersions => None,
        }
    }

    /// Versions of a version field; `None` for the text fields
    #[must_use]
    pub fn versions(&self, field: Field) -> Option<&[VersionToken]> {
        match field {
            Field::AffectedVersions => Some(&self.affected_versions),
            Field::FixedVersions => Some(&self.fixed_versions),
            _ => None,
        }
    }
}

/// Output of one extraction: the report together with every field error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Best-effort report
    pub report: ExtractedReport,
    /// Problems found, grouped by field
    pub errors: FieldErrorSet,
}

impl Extraction {
    /// Check if extraction found no problems
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
