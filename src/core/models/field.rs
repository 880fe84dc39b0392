//! Report fields, in template order

use serde::Serialize;

/// Number of sections in the bug template
pub const SECTION_COUNT: usize = 6;

/// One field of an extracted report, one per template section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    /// Root cause analysis
    RootCause,
    /// What the user sees
    Symptom,
    /// Conditions that trigger the defect
    TriggerConditions,
    /// How to avoid the defect
    Workaround,
    /// Versions containing the defect
    AffectedVersions,
    /// First versions containing the fix
    FixedVersions,
}

impl Field {
    /// All fields in template order
    pub const ALL: [Self; SECTION_COUNT] = [
        Self::RootCause,
        Self::Symptom,
        Self::TriggerConditions,
        Self::Workaround,
        Self::AffectedVersions,
        Self::FixedVersions,
    ];

    /// Position of this field's section in the template
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if extraction requires at least one value for this field
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::AffectedVersions | Self::FixedVersions)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RootCause => "Root cause",
            Self::Symptom => "Symptom",
            Self::TriggerConditions => "Trigger conditions",
            Self::Workaround => "Workaround",
            Self::AffectedVersions => "Affected versions",
            Self::FixedVersions => "Fixed versions",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootCause => write!(f, "RootCause"),
            Self::Symptom => write!(f, "Symptom"),
            Self::TriggerConditions => write!(f, "TriggerConditions"),
            Self::Workaround => write!(f, "Workaround"),
            Self::AffectedVersions => write!(f, "AffectedVersions"),
            Self::FixedVersions => write!(f, "FixedVersions"),
        }
    }
}
