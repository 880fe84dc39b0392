//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Comments read from files or stdin

pub mod file;
