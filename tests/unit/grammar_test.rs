//! Tests for the version grammar

use bugform::core::models::{ErrorKind, VersionToken};
use bugform::core::services::grammar::{parse_affected_versions, parse_fixed_versions};
use bugform::core::services::{AFFECTED_RULES, FIXED_RULES, Rule, scan};

use crate::common::{strings, v};

#[test]
fn test_closed_interval_expands() {
    let scan = parse_affected_versions("[v4.0.1:v4.0.3]").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.2", "4.0.3"]);
    assert!(scan.unexpected_content().is_none());
}

#[test]
fn test_closed_interval_delimiters() {
    for text in ["[v4.0.1:v4.0.2]", "[v4.0.1：v4.0.2]", "[v4.0.1,v4.0.2]", "[v4.0.1，v4.0.2]"] {
        let scan = parse_affected_versions(text).unwrap();
        assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.2"], "{text}");
        assert_eq!(scan.matches[0].rule, Rule::Closed, "{text}");
    }
}

#[test]
fn test_closed_interval_tolerates_spaces_and_missing_v() {
    let scan = parse_affected_versions("[4.0.1 : v4.0.2]").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.2"]);
}

#[test]
fn test_half_open_interval() {
    let scan = parse_affected_versions("[:v4.0.2]").unwrap();
    assert_eq!(scan.matches[0].rule, Rule::HalfOpen);
    assert_eq!(strings(&scan.tokens), ["4.0.0", "4.0.1", "4.0.2"]);
}

#[test]
fn test_bare_tokens_keep_order_and_duplicates() {
    let scan = parse_affected_versions("v4.0.2, [v3.0.1], master, v4.0.2").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.2", "3.0.1", "master", "4.0.2"]);
    assert!(scan.matches.iter().all(|m| m.rule == Rule::Bare));
}

#[test]
fn test_mixed_forms_in_order_of_appearance() {
    let scan = parse_affected_versions("[v3.0.1:v3.0.2], [:v4.0.1], unreleased").unwrap();
    assert_eq!(strings(&scan.tokens), ["3.0.1", "3.0.2", "4.0.0", "4.0.1", "master"]);
    let rules: Vec<Rule> = scan.matches.iter().map(|m| m.rule).collect();
    assert_eq!(rules, [Rule::Closed, Rule::HalfOpen, Rule::Bare]);
}

#[test]
fn test_unplanned_interval() {
    let scan = parse_affected_versions("[v4.0.1:v4.0.99]").unwrap();
    assert_eq!(scan.tokens, [VersionToken::Line { major: 4, minor: 0 }]);
}

#[test]
fn test_mismatched_interval_fails_field() {
    let err = parse_affected_versions("v3.0.1, [v4.0.1:v4.1.2]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVersionInterval);
}

#[test]
fn test_overflowing_bare_version_keeps_siblings() {
    let scan = parse_affected_versions("v4.0.1, v99999999999999999999.0.1, v4.0.2").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.2"]);
    assert_eq!(scan.rejected.len(), 1);
    assert_eq!(scan.rejected[0].kind(), ErrorKind::InvalidSemver);
    assert!(scan.unexpected_content().is_none());
}

#[test]
fn test_leading_zeros_are_accepted() {
    let scan = parse_affected_versions("v4.0.01, [v4.0.02:v4.0.03]").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.2", "4.0.3"]);
    assert!(scan.rejected.is_empty());

    let scan = parse_fixed_versions("v4.0.03, v5.0.1").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.3", "5.0.1"]);
}

#[test]
fn test_fullwidth_digits_are_not_versions() {
    let scan = parse_fixed_versions("v4.0.2 ４.０.３").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.2"]);
    assert!(scan.rejected.is_empty());
    assert_eq!(scan.unexpected_content().unwrap().kind(), ErrorKind::InvalidContent);
}

#[test]
fn test_oversized_interval_fails_field() {
    let err = parse_affected_versions("[:v4.0.18446744073709551615]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVersionInterval);

    let err = parse_affected_versions("[v4.0.1:v4.0.5000]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVersionInterval);
}

#[test]
fn test_leftover_is_reported() {
    let scan = parse_affected_versions("[v4.0.1:v4.0.2] and 4.1").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.2"]);
    assert_eq!(scan.leftover, " and 4.1");
    let err = scan.unexpected_content().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidContent);
    assert!(err.to_string().contains("and 4.1"));
}

#[test]
fn test_delimiters_are_not_leftover() {
    let scan = parse_affected_versions("v4.0.1，v4.0.2,\n\tv4.0.3  ").unwrap();
    assert_eq!(scan.residue(), "");
    assert!(scan.unexpected_content().is_none());
}

#[test]
fn test_fixed_versions_accept_keywords() {
    let scan = parse_fixed_versions("v4.0.5, unplanned, unplaned, [v3.0.2]").unwrap();
    assert_eq!(scan.tokens, [v("4.0.5"), VersionToken::Master, VersionToken::Master, v("3.0.2")]);
}

#[test]
fn test_fixed_versions_reject_interval_syntax() {
    let scan = parse_fixed_versions("[v4.0.1:v4.0.3]").unwrap();
    assert_eq!(strings(&scan.tokens), ["4.0.1", "4.0.3"]);
    assert!(scan.unexpected_content().is_some());
}

#[test]
fn test_rule_sets() {
    assert_eq!(AFFECTED_RULES, [Rule::Closed, Rule::HalfOpen, Rule::Bare]);
    assert_eq!(FIXED_RULES, [Rule::Bare]);
    assert_eq!(Rule::HalfOpen.name(), "half_open");
}

#[test]
fn test_spans_cover_matched_text() {
    let text = "x [v4.0.1:v4.0.2] y master";
    let scan = scan(text, AFFECTED_RULES).unwrap();
    let matched: Vec<&str> = scan.matches.iter().map(|m| m.span.slice(text)).collect();
    assert_eq!(matched, ["[v4.0.1:v4.0.2]", "master"]);
    assert_eq!(scan.leftover, "x  y ");
}

#[test]
fn test_empty_section() {
    let scan = parse_affected_versions("").unwrap();
    assert!(scan.tokens.is_empty());
    assert!(scan.unexpected_content().is_none());
}
