//! Version tokens
//!
//! A [`VersionToken`] is one entry of the affected or fixed version lists:
//! - a released version `major.minor.patch`
//! - a minor line `major.minor`, produced when an interval ends in the
//!   sentinel patch [`UNPLANNED_PATCH`]
//! - `master`, which absorbs the spellings `unreleased`, `unplanned` and `unplaned`
//!
//! # Examples
//!
//! ```
//! use bugform::core::models::VersionToken;
//!
//! let v: VersionToken = "v4.0.1".parse().unwrap();
//! assert_eq!(v.to_string(), "4.0.1");
//!
//! let m: VersionToken = "unplanned".parse().unwrap();
//! assert_eq!(m, VersionToken::Master);
//! ```

use semver::Version;
use serde::{Serialize, Serializer};

use super::FieldError;

/// Patch number meaning "no patch release in this minor line will get the fix"
pub const UNPLANNED_PATCH: u64 = 99;

/// Spellings accepted for the `master` sentinel
pub const MASTER_KEYWORDS: &[&str] = &["master", "unreleased", "unplanned", "unplaned"];

/// A single entry of a version list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionToken {
    /// A concrete `major.minor.patch` release
    Release(Version),
    /// A whole minor line, `major.minor`, with no planned patch release
    Line {
        /// Major number
        major: u64,
        /// Minor number
        minor: u64,
    },
    /// Unreleased development branch
    Master,
}

impl VersionToken {
    /// Create a release token
    #[must_use]
    pub const fn release(major: u64, minor: u64, patch: u64) -> Self {
        Self::Release(Version::new(major, minor, patch))
    }

    /// Parse a bare `major.minor.patch` triple (no `v`, no brackets)
    ///
    /// Each part is ASCII digits and must fit in a `u64`. Leading zeros are
    /// accepted, so `4.0.01` is `4.0.1`.
    pub fn parse_triple(triple: &str) -> Result<Version, FieldError> {
        let mut parts = triple.split('.').map(parse_number);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Some(major)), Some(Some(minor)), Some(Some(patch)), None) => {
                Ok(Version::new(major, minor, patch))
            },
            _ => Err(FieldError::InvalidSemver(triple.to_string())),
        }
    }

    /// Map a keyword spelling to [`VersionToken::Master`]
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        MASTER_KEYWORDS
            .iter()
            .any(|k| k.eq_ignore_ascii_case(word))
            .then_some(Self::Master)
    }

    /// The release this token names, if it is a concrete release
    #[must_use]
    pub const fn as_release(&self) -> Option<&Version> {
        match self {
            Self::Release(v) => Some(v),
            _ => None,
        }
    }

    /// The release immediately before this one within the same minor line
    ///
    /// `None` for `master`, minor lines, and `x.y.0`.
    #[must_use]
    pub fn predecessor(&self) -> Option<Self> {
        let v = self.as_release()?;
        let patch = v.patch.checked_sub(1)?;
        Some(Self::release(v.major, v.minor, patch))
    }
}

fn parse_number(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl std::fmt::Display for VersionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Release(v) => write!(f, "{}.{}.{}", v.major, v.minor, v.patch),
            Self::Line { major, minor } => write!(f, "{major}.{minor}"),
            Self::Master => write!(f, "master"),
        }
    }
}

impl std::str::FromStr for VersionToken {
    type Err = FieldError;

    /// Accepts `master` keywords, `[v]major.minor.patch` and `major.minor`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(master) = Self::from_keyword(s) {
            return Ok(master);
        }

        let digits = s.strip_prefix('v').unwrap_or(s);
        let parts: Vec<&str> = digits.split('.').collect();
        if let [major, minor] = parts.as_slice() {
            let invalid = || FieldError::InvalidSemver(s.to_string());
            return Ok(Self::Line {
                major: parse_number(major).ok_or_else(invalid)?,
                minor: parse_number(minor).ok_or_else(invalid)?,
            });
        }

        Self::parse_triple(digits).map(Self::Release)
    }
}

impl Serialize for VersionToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
