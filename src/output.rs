//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Extraction, Field};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of extracting one comment
#[derive(Debug, Serialize)]
pub struct ParseResult {
    /// Where the comment came from
    pub origin: String,
    /// Whether the comment contains all six anchors in order
    pub template_found: bool,
    /// Whether extraction recorded no field errors
    pub valid: bool,
    /// The report and its field errors
    #[serde(flatten)]
    pub extraction: Extraction,
}

/// Result of a template detection
#[derive(Debug, Serialize)]
pub struct DetectResult {
    /// Where the comment came from
    pub origin: String,
    /// Whether the comment contains all six anchors in order
    pub template_found: bool,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// The active anchor list
#[derive(Debug, Serialize)]
pub struct AnchorsResult {
    /// Anchors in section order
    pub anchors: Vec<String>,
}

impl ParseResult {
    /// Build a result for an extraction
    #[must_use]
    pub fn new(origin: impl Into<String>, template_found: bool, extraction: Extraction) -> Self {
        Self {
            origin: origin.into(),
            template_found,
            valid: extraction.is_valid(),
            extraction,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}", self.origin.bold());
        if !self.template_found {
            println!("{}", "Bug template not found; sections may be incomplete.".yellow());
        }

        let report = &self.extraction.report;
        for field in Field::ALL {
            let value = report.text(field).map_or_else(
                || {
                    report
                        .versions(field)
                        .unwrap_or_default()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                },
                ToString::to_string,
            );
            println!("  {}:", field.label());
            for line in value.lines() {
                println!("    {line}");
            }
        }
        println!();

        if self.valid {
            println!("{}", "No problems found.".green());
        } else {
            print!("{}", self.feedback().red());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Markdown listing every field error, for posting back to the author
    ///
    /// Empty when extraction found no problems.
    #[must_use]
    pub fn feedback(&self) -> String {
        let errors = &self.extraction.errors;
        if errors.is_empty() {
            return String::new();
        }

        let mut out = format!("Found {} problem(s) in the bug report:\n", errors.len());
        for (field, errs) in errors.iter() {
            for err in errs {
                let _ = writeln!(out, "- **{}**: {err}", field.label());
            }
        }
        out
    }
}

impl DetectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.template_found {
                    println!("{}: bug template found", self.origin);
                } else {
                    println!("{}: no bug template", self.origin);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl AnchorsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for (i, anchor) in self.anchors.iter().enumerate() {
                    println!("{}. {anchor}", i + 1);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
