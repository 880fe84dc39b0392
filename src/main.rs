//! bugform - Extract structured bug reports from templated comments
//!
//! Reads issue comments that follow the bug template and prints the root
//! cause, symptom, trigger conditions, workaround, affected versions and
//! fixed versions, together with every field that could not be read.

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
    clippy::cargo_common_metadata,
    clippy::needless_pass_by_value
)]

mod cli;
mod commands;

/// Main entry point for the bugform CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
