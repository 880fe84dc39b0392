//! Closed patch intervals within a single minor line

use semver::Version;

use super::{FieldError, UNPLANNED_PATCH, VersionToken};

/// Most patches a single interval may expand to
pub const MAX_INTERVAL_PATCHES: u64 = 1000;

/// A closed range of patch releases sharing major and minor numbers
///
/// Construction rejects intervals whose bounds differ in major or minor,
/// whose start patch is greater than the end patch, or that would expand to
/// more than [`MAX_INTERVAL_PATCHES`] releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInterval {
    start: Version,
    end: Version,
}

impl VersionInterval {
    /// Create an interval, validating the bounds
    pub fn new(start: Version, end: Version) -> Result<Self, FieldError> {
        if start.major != end.major
            || start.minor != end.minor
            || start.patch > end.patch
            || end.patch - start.patch >= MAX_INTERVAL_PATCHES
        {
            return Err(FieldError::InvalidVersionInterval {
                start: VersionToken::Release(start),
                end: VersionToken::Release(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Create the interval `[major.minor.0 : end]`
    pub fn up_to(end: Version) -> Result<Self, FieldError> {
        Self::new(Version::new(end.major, end.minor, 0), end)
    }

    /// Start bound
    #[must_use]
    pub const fn start(&self) -> &Version {
        &self.start
    }

    /// Check if the end bound is the "no planned patch" sentinel
    #[must_use]
    pub const fn is_unplanned(&self) -> bool {
        self.end.patch == UNPLANNED_PATCH
    }

    /// Expand into concrete tokens
    ///
    /// An unplanned interval collapses to a single `major.minor` line token.
    /// Otherwise every patch from start to end is listed in ascending order.
    #[must_use]
    pub fn expand(&self) -> Vec<VersionToken> {
        if self.is_unplanned() {
            return vec![VersionToken::Line {
                major: self.start.major,
                minor: self.start.minor,
            }];
        }

        (self.start.patch..=self.end.patch)
            .map(|patch| VersionToken::release(self.start.major, self.start.minor, patch))
            .collect()
    }
}

impl std::fmt::Display for VersionInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[v{}:v{}]", self.start, self.end)
    }
}
