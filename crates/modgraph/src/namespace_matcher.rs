//! Matching namespaces against namespace patterns.
//!
//! Pattern syntax:
//!
//! - `*` matches one namespace segment, `(*)` also captures it
//! - `(**)` captures one or more dot-joined segments
//! - `..` matches any sequence of segments, including none
//! - `[a|b]` matches either alternative
//!
//! `com.(*)..` matches `com.shop` and `com.shop.orders` and captures `shop`
//! in both cases.

use regex::Regex;

use crate::{Error, Result};

const TWO_STAR_CAPTURE_LITERAL: &str = "(**)";
const TWO_STAR_CAPTURE_REGEX: &str = r"(\w+(?:\.\w+)*)";
const TWO_STAR_MARKER: &str = "#%#%#";
const ANY_SEGMENTS_REGEX: &str = r"(?:(?:^\w*)?\.(?:\w+\.)*(?:\w*$)?)?";

#[derive(Debug, Clone)]
pub struct NamespaceMatcher {
    pattern: String,
    regex: Regex,
}

/// Groups captured by a successful match, in pattern order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMatch {
    groups: Vec<String>,
}

impl NamespaceMatch {
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Captured group at the 1-based `index`.
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .map(String::as_str)
    }

    pub fn into_groups(self) -> Vec<String> {
        self.groups
    }
}

impl NamespaceMatcher {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        validate(&pattern)?;

        let regex = Regex::new(&format!("^{}$", convert_to_regex(&pattern))).map_err(|err| {
            Error::InvalidNamespacePattern {
                pattern: pattern.clone(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, namespace: &str) -> bool {
        self.regex.is_match(namespace)
    }

    pub fn match_namespace(&self, namespace: &str) -> Option<NamespaceMatch> {
        let captures = self.regex.captures(namespace)?;
        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        Some(NamespaceMatch { groups })
    }
}

fn validate(pattern: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidNamespacePattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    if pattern.contains("...") {
        return Err(invalid("may not contain more than two '.' in a row"));
    }

    if pattern.contains("(..)") {
        return Err(invalid("capturing via (..) is not supported, use (**) instead"));
    }

    if let Some(ch) = pattern
        .chars()
        .find(|&c| !(c.is_alphanumeric() || "_$.*()[]|".contains(c)))
    {
        return Err(invalid(&format!(
            "unsupported character '{ch}', only identifier characters and '.*()[]|' are allowed"
        )));
    }

    Ok(())
}

fn convert_to_regex(pattern: &str) -> String {
    pattern
        .replace('$', r"\$")
        .replace(TWO_STAR_CAPTURE_LITERAL, TWO_STAR_MARKER)
        .replace('*', r"\w+")
        .replace('.', r"\.")
        .replace(TWO_STAR_MARKER, TWO_STAR_CAPTURE_REGEX)
        .replace(r"\.\.", ANY_SEGMENTS_REGEX)
        .replace('[', "(?:")
        .replace(']', ")")
}
