//! Version grammar - recognises version tokens and intervals in section text
//!
//! Three surface forms, tried in this order at every position:
//!
//! ```text
//! closed     [v4.0.1:v4.0.5]   delimiter is one of  :  ：  ,  ，
//! half_open  [:v4.0.5]         same as [v4.0.0:v4.0.5]
//! bare       v4.0.5 | [v4.0.5] | master | unreleased | unplanned | unplaned
//! ```
//!
//! The first rule that matches at a position wins and the scan continues
//! after the match. When no rule matches, the scan moves forward one
//! character and that character ends up in the leftover text.
//!
//! A bad interval fails the whole scan. A bare token that does not parse is
//! set aside in [`Scan::rejected`] and the tokens around it are kept.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::models::{FieldError, Span, VersionInterval, VersionToken};

static CLOSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[ \t]*v?([0-9]+\.[0-9]+\.[0-9]+)[ \t]*(?::|：|,|，)[ \t]*v?([0-9]+\.[0-9]+\.[0-9]+)[ \t]*\]")
        .expect("valid closed interval pattern")
});

static HALF_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[ \t]*(?::|：|,|，)[ \t]*v?([0-9]+\.[0-9]+\.[0-9]+)[ \t]*\]")
        .expect("valid half-open interval pattern")
});

static BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[?v?([0-9]+\.[0-9]+\.[0-9]+|master|unreleased|unplanned|unplaned)\]?")
        .expect("valid bare token pattern")
});

/// A named grammar rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `[start:end]`
    Closed,
    /// `[:end]`
    HalfOpen,
    /// A single version or keyword, optionally bracketed
    Bare,
}

/// Rules accepted in the affected-versions section, in precedence order
pub const AFFECTED_RULES: &[Rule] = &[Rule::Closed, Rule::HalfOpen, Rule::Bare];

/// Rules accepted in the fixed-versions section; no interval syntax
pub const FIXED_RULES: &[Rule] = &[Rule::Bare];

/// Characters that may separate tokens without being reported as leftover
const DELIMITERS: &[char] = &[',', '，'];

impl Rule {
    /// Rule name, as used in diagnostics
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::HalfOpen => "half_open",
            Self::Bare => "bare",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Closed => &*CLOSED,
            Self::HalfOpen => &*HALF_OPEN,
            Self::Bare => &*BARE,
        }
    }

    /// Tokens produced by one match of this rule
    fn tokens(self, caps: &Captures<'_>) -> Result<Vec<VersionToken>, FieldError> {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        match self {
            Self::Closed => {
                let start = VersionToken::parse_triple(group(1))?;
                let end = VersionToken::parse_triple(group(2))?;
                Ok(VersionInterval::new(start, end)?.expand())
            },
            Self::HalfOpen => {
                let end = VersionToken::parse_triple(group(1))?;
                Ok(VersionInterval::up_to(end)?.expand())
            },
            Self::Bare => {
                let word = group(1);
                let token = match VersionToken::from_keyword(word) {
                    Some(master) => master,
                    None => VersionToken::Release(VersionToken::parse_triple(word)?),
                };
                Ok(vec![token])
            },
        }
    }
}

/// Where a rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Rule that matched
    pub rule: Rule,
    /// Matched bytes in the scanned text
    pub span: Span,
}

/// Result of scanning one section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Tokens in order of appearance, intervals expanded
    pub tokens: Vec<VersionToken>,
    /// Every match, in order, non-overlapping
    pub matches: Vec<RuleMatch>,
    /// The scanned text with every matched span removed
    pub leftover: String,
    /// Errors for bare tokens that matched but did not parse
    pub rejected: Vec<FieldError>,
}

impl Scan {
    /// Leftover with delimiters and whitespace removed
    #[must_use]
    pub fn residue(&self) -> String {
        self.leftover
            .chars()
            .filter(|c| !c.is_whitespace() && !DELIMITERS.contains(c))
            .collect()
    }

    /// An [`FieldError::InvalidContent`] if anything unrecognised remains
    #[must_use]
    pub fn unexpected_content(&self) -> Option<FieldError> {
        if self.residue().is_empty() {
            None
        } else {
            Some(FieldError::InvalidContent(self.leftover.trim().to_string()))
        }
    }
}

/// Scan text with the given rules
///
/// Fails on the first interval whose bounds are invalid, such as one
/// spanning two minor lines.
pub fn scan(text: &str, rules: &[Rule]) -> Result<Scan, FieldError> {
    let mut result = Scan::default();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = rules
            .iter()
            .find_map(|rule| rule.regex().captures(rest).map(|caps| (*rule, caps)));

        match hit {
            Some((rule, caps)) if !caps[0].is_empty() => {
                let len = caps[0].len();
                match rule.tokens(&caps) {
                    Ok(tokens) => result.tokens.extend(tokens),
                    Err(err) if rule == Rule::Bare => result.rejected.push(err),
                    Err(err) => return Err(err),
                }
                result.matches.push(RuleMatch {
                    rule,
                    span: Span::new(pos, pos + len),
                });
                pos += len;
            },
            _ => {
                let ch = rest.chars().next().map_or(1, char::len_utf8);
                result.leftover.push_str(&rest[..ch]);
                pos += ch;
            },
        }
    }

    Ok(result)
}

/// Scan the affected-versions section
pub fn parse_affected_versions(text: &str) -> Result<Scan, FieldError> {
    scan(text, AFFECTED_RULES)
}

/// Scan the fixed-versions section
pub fn parse_fixed_versions(text: &str) -> Result<Scan, FieldError> {
    scan(text, FIXED_RULES)
}
