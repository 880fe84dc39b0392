//! Field-scoped extraction errors
//!
//! Errors never abort extraction. They are collected per field in a
//! [`FieldErrorSet`] and returned next to the best-effort report.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{Field, VersionToken};

/// A problem found while extracting a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Interval bounds differ in major/minor, or start patch exceeds end patch
    #[error("invalid version interval [{start}:{end}]")]
    InvalidVersionInterval {
        /// Parsed start bound
        start: VersionToken,
        /// Parsed end bound
        end: VersionToken,
    },

    /// A `major.minor.patch` triple could not be read as a version
    #[error("invalid semver: {0}")]
    InvalidSemver(String),

    /// Text left over after every recognised token was removed
    #[error("invalid content, got unexpected content: {0}")]
    InvalidContent(String),

    /// A fixed version whose immediately preceding patch is not listed as affected
    #[error("missing some versions between affected-version & fixed-version: {fixed} requires {missing}")]
    VersionGap {
        /// The fixed version being checked
        fixed: VersionToken,
        /// The affected version that should have been listed
        missing: String,
    },

    /// A required field extracted nothing
    #[error("field is empty")]
    FieldEmpty,
}

/// Kind of a [`FieldError`], without its detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// See [`FieldError::InvalidVersionInterval`]
    InvalidVersionInterval,
    /// See [`FieldError::InvalidSemver`]
    InvalidSemver,
    /// See [`FieldError::InvalidContent`]
    InvalidContent,
    /// See [`FieldError::VersionGap`]
    VersionGap,
    /// See [`FieldError::FieldEmpty`]
    FieldEmpty,
}

impl FieldError {
    /// The kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVersionInterval { .. } => ErrorKind::InvalidVersionInterval,
            Self::InvalidSemver(_) => ErrorKind::InvalidSemver,
            Self::InvalidContent(_) => ErrorKind::InvalidContent,
            Self::VersionGap { .. } => ErrorKind::VersionGap,
            Self::FieldEmpty => ErrorKind::FieldEmpty,
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("kind", &self.kind())?;
        map.serialize_entry("message", &self.to_string())?;
        map.end()
    }
}

/// Errors grouped by field, each list in the order the errors were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    errors: BTreeMap<Field, Vec<FieldError>>,
}

impl FieldErrorSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field
    pub fn push(&mut self, field: Field, error: FieldError) {
        log::debug!("{field}: {error}");
        self.errors.entry(field).or_default().push(error);
    }

    /// Errors recorded for a field, in order
    #[must_use]
    pub fn get(&self, field: Field) -> &[FieldError] {
        self.errors.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Kinds recorded for a field, in order
    #[must_use]
    pub fn kinds(&self, field: Field) -> Vec<ErrorKind> {
        self.get(field).iter().map(FieldError::kind).collect()
    }

    /// Check if a field has an error of the given kind
    #[must_use]
    pub fn has(&self, field: Field, kind: ErrorKind) -> bool {
        self.get(field).iter().any(|e| e.kind() == kind)
    }

    /// Check if no errors were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Iterate over fields with errors, in template order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[FieldError])> {
        self.errors.iter().map(|(field, errs)| (*field, errs.as_slice()))
    }
}

impl Serialize for FieldErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, errs) in &self.errors {
            map.serialize_entry(&field.to_string(), errs)?;
        }
        map.end()
    }
}
