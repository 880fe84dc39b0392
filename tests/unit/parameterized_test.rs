//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use bugform::core::models::{ErrorKind, Field, SectionAnchors, VersionToken};
use bugform::core::services::grammar::parse_affected_versions;
use bugform::core::services::parse_comment;
use test_case::test_case;

use crate::common::{CommentBuilder, strings};

// =============================================================================
// Keyword Tests
// =============================================================================

#[test_case("master" ; "master")]
#[test_case("unreleased" ; "unreleased")]
#[test_case("unplanned" ; "unplanned")]
#[test_case("unplaned" ; "misspelled unplanned")]
fn test_keyword_is_master(word: &str) {
    assert_eq!(word.parse::<VersionToken>().unwrap(), VersionToken::Master);
}

// =============================================================================
// Affected Version Grammar Tests
// =============================================================================

#[test_case("[v4.0.1:v4.0.3]", &["4.0.1", "4.0.2", "4.0.3"] ; "closed interval")]
#[test_case("[v4.0.1:v4.0.99]", &["4.0"] ; "unplanned interval")]
#[test_case("[:v4.0.2]", &["4.0.0", "4.0.1", "4.0.2"] ; "half open interval")]
#[test_case("[，v4.0.1]", &["4.0.0", "4.0.1"] ; "half open fullwidth comma")]
#[test_case("v4.0.5", &["4.0.5"] ; "bare version")]
#[test_case("4.0.5", &["4.0.5"] ; "bare version without v")]
#[test_case("[v4.0.5]", &["4.0.5"] ; "bracketed version")]
#[test_case("unreleased", &["master"] ; "unreleased keyword")]
#[test_case("[v3.0.1:v3.0.2], v4.0.1", &["3.0.1", "3.0.2", "4.0.1"] ; "interval then bare")]
fn test_affected_expansion(text: &str, expected: &[&str]) {
    let scan = parse_affected_versions(text).unwrap();
    assert_eq!(strings(&scan.tokens), expected, "text={text:?}");
}

#[test_case("[v4.0.1:v4.1.2]", ErrorKind::InvalidVersionInterval ; "different minor")]
#[test_case("[v3.0.1:v4.0.2]", ErrorKind::InvalidVersionInterval ; "different major")]
#[test_case("[v4.0.5:v4.0.1]", ErrorKind::InvalidVersionInterval ; "descending")]
#[test_case("[v4.0.1:v4.0.99999999999999999999]", ErrorKind::InvalidSemver ; "overflow")]
fn test_affected_failure(text: &str, expected: ErrorKind) {
    assert_eq!(parse_affected_versions(text).unwrap_err().kind(), expected);
}

// =============================================================================
// Gap Tests
// =============================================================================

#[test_case("[v4.0.1:v4.0.2]", "v4.0.3", false ; "contiguous fix")]
#[test_case("[v4.0.1:v4.0.2]", "v4.0.4", true ; "skipped patch")]
#[test_case("[v4.0.1:v4.0.99]", "unplanned", false ; "unplanned line")]
#[test_case("[:v4.0.2], [:v3.0.1]", "v4.0.3, v3.0.2", false ; "two minor lines")]
#[test_case("[:v4.0.2], [:v3.0.1]", "v4.0.3, v3.0.3", true ; "one line with gap")]
#[test_case("v4.0.1", "v4.0.0", true ; "fix in zero patch")]
fn test_version_gap(affected: &str, fixed: &str, gap: bool) {
    let comment = CommentBuilder::new().affected(affected).fixed(fixed).build();
    let extraction = parse_comment(&comment, &SectionAnchors::default());
    assert_eq!(
        extraction.errors.has(Field::FixedVersions, ErrorKind::VersionGap),
        gap,
        "affected={affected:?} fixed={fixed:?}"
    );
}
