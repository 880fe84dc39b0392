//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core extraction logic
//! and external systems (files, issue trackers).
//!
//! Implementations live in the `adapters` module.

mod comment_source;

pub use comment_source::{Comment, CommentSource};
