//! bugform - Extract structured bug reports from templated comments
//!
//! This library turns a filled-in bug template comment into an
//! [`ExtractedReport`](core::models::ExtractedReport): free-text sections plus
//! the affected and fixed version lists, with intervals expanded. Problems are
//! collected per field in a [`FieldErrorSet`](core::models::FieldErrorSet)
//! instead of aborting extraction.
//!
//! ```
//! use bugform::core::models::{ErrorKind, Field, SectionAnchors};
//! use bugform::core::services::parse_comment;
//!
//! let comment = "#### 5. Affected versions\n[v4.0.1:v4.0.3]\n#### 6. Fixed versions\nv4.0.4";
//! let extraction = parse_comment(comment, &SectionAnchors::default());
//!
//! let affected: Vec<String> =
//!     extraction.report.affected_versions.iter().map(ToString::to_string).collect();
//! assert_eq!(affected, ["4.0.1", "4.0.2", "4.0.3"]);
//! assert!(extraction.errors.is_empty());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
