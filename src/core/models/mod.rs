//! Domain models for bugform
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`VersionToken`] - One entry of a version list
//! - [`VersionInterval`] - A closed patch range in one minor line
//! - [`ExtractedReport`] - The structured record built from a comment
//! - [`FieldErrorSet`] - Problems found, grouped by [`Field`]
//! - [`SectionAnchors`] - The headings that open each template section

mod anchors;
mod error;
mod field;
mod interval;
mod report;
mod span;
mod version;

pub use anchors::{AnchorError, DEFAULT_ANCHORS, SectionAnchors};
pub use error::{ErrorKind, FieldError, FieldErrorSet};
pub use field::{Field, SECTION_COUNT};
pub use interval::{MAX_INTERVAL_PATCHES, VersionInterval};
pub use report::{ExtractedReport, Extraction};
pub use span::Span;
pub use version::{MASTER_KEYWORDS, UNPLANNED_PATCH, VersionToken};
