//! Business logic services
//!
//! Pure extraction logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! text passed in and return results.
//!
//! - [`normalize`] - Strip comment markup
//! - [`sections`] - Split a comment into template sections
//! - [`grammar`] - Recognise version tokens and intervals
//! - [`validate`] - Cross-field consistency checks
//! - [`extractor`] - The full pipeline

pub mod extractor;
pub mod grammar;
pub mod normalize;
pub mod sections;
pub mod validate;

pub use extractor::{Extractor, parse_comment};
pub use grammar::{AFFECTED_RULES, FIXED_RULES, Rule, RuleMatch, Scan, scan};
pub use normalize::strip_comment_markup;
pub use sections::{SectionScanner, contains_template, split_sections, squeeze_blank_lines};
pub use validate::{empty_required_fields, validate, version_gaps};
