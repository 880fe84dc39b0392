//! Core domain logic for bugform
//!
//! This module contains pure extraction logic with no I/O dependencies.
//! Comment retrieval is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (VersionToken, VersionInterval, ExtractedReport, FieldErrorSet)
//! - `services/` - The extraction pipeline
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
