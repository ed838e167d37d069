//! Deriving module names from identifiers.
//!
//! A naming pattern may contain `$n` or `${n}` to insert the n-th (1-based)
//! identifier part and `$@` to insert all parts joined by `:`.
//!
//! ```
//! use modgraph::{Identifier, NamingPattern};
//!
//! let identifier = Identifier::from_parts(["a", "b"])?;
//! assert_eq!(NamingPattern::parse("Mod[$1/${2}]").apply(&identifier), "Mod[a/b]");
//! assert_eq!(NamingPattern::parse("Mod[$@]").apply(&identifier), "Mod[a:b]");
//! # Ok::<(), modgraph::Error>(())
//! ```

use crate::identifier::Identifier;

/// Pattern used when no other naming is configured.
pub const DEFAULT_NAMING_PATTERN: &str = "Module [$@]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Part { index: usize, source: String },
    Joined,
}

/// A pre-compiled naming pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl NamingPattern {
    /// Compile a pattern. Every `$` that does not start a placeholder is kept
    /// literally, so parsing cannot fail.
    pub fn parse(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let bytes = pattern.as_bytes();
        let mut i = 0;

        while i < pattern.len() {
            if bytes[i] != b'$' {
                let ch = pattern[i..].chars().next().unwrap_or_default();
                literal.push(ch);
                i += ch.len_utf8();
                continue;
            }

            match parse_placeholder(&pattern[i..]) {
                Some((segment, consumed)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    i += consumed;
                }
                None => {
                    literal.push('$');
                    i += 1;
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { pattern, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Render the name for `identifier`. Placeholders referring to parts the
    /// identifier does not have are left as written.
    pub fn apply(&self, identifier: &Identifier) -> String {
        let mut name = String::with_capacity(self.pattern.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => name.push_str(text),
                Segment::Joined => name.push_str(&identifier.joined()),
                Segment::Part { index, source } => match identifier.part(*index) {
                    Ok(part) => name.push_str(part),
                    Err(_) => name.push_str(source),
                },
            }
        }
        name
    }
}

impl Default for NamingPattern {
    fn default() -> Self {
        Self::parse(DEFAULT_NAMING_PATTERN)
    }
}

/// Parses a placeholder at the start of `input` (which begins with `$`),
/// returning the segment and the number of bytes consumed.
fn parse_placeholder(input: &str) -> Option<(Segment, usize)> {
    let rest = &input[1..];

    if rest.starts_with('@') {
        return Some((Segment::Joined, 2));
    }

    let (digits, consumed) = if let Some(braced) = rest.strip_prefix('{') {
        let end = braced.find('}')?;
        (&braced[..end], end + 3)
    } else {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        (&rest[..end], end + 1)
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let index = digits.parse().ok()?;
    Some((
        Segment::Part {
            index,
            source: input[..consumed].to_string(),
        },
        consumed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier(parts: &[&str]) -> Identifier {
        Identifier::from_parts(parts.iter().copied()).unwrap()
    }

    #[test]
    fn default_pattern_brackets_joined_parts() {
        assert_eq!(
            NamingPattern::default().apply(&identifier(&["a", "b"])),
            "Module [a:b]"
        );
    }

    #[test]
    fn replaces_positional_placeholders() {
        let pattern = NamingPattern::parse("MyModule [$1][${2}]");
        assert_eq!(
            pattern.apply(&identifier(&["module1", "sub1"])),
            "MyModule [module1][sub1]"
        );
    }

    #[test]
    fn replaces_repeated_placeholders() {
        let pattern = NamingPattern::parse("$1-$1-$@");
        assert_eq!(pattern.apply(&identifier(&["x", "y"])), "x-x-x:y");
    }

    #[test]
    fn keeps_out_of_range_placeholders() {
        let pattern = NamingPattern::parse("Any $1->$3 ${4}");
        assert_eq!(pattern.apply(&identifier(&["a", "b"])), "Any a->$3 ${4}");
    }

    #[test]
    fn multi_digit_indices() {
        let parts: Vec<String> = (1..=12).map(|i| format!("p{i}")).collect();
        let identifier = Identifier::from_parts(parts).unwrap();
        assert_eq!(NamingPattern::parse("$12/$1").apply(&identifier), "p12/p1");
    }

    #[test]
    fn stray_dollars_are_literal() {
        let pattern = NamingPattern::parse("$ cost ${x} $");
        assert_eq!(pattern.apply(&identifier(&["a"])), "$ cost ${x} $");
    }

    #[test]
    fn unicode_literals_survive() {
        let pattern = NamingPattern::parse("Modül «$1»");
        assert_eq!(pattern.apply(&identifier(&["ä"])), "Modül «ä»");
    }
}
