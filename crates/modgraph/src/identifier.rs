//! Module identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Ordered, non-empty sequence of string parts naming a module.
///
/// [`Identifier::ignore`] is the distinguished zero-part value: classes mapped
/// to it are left out of every module. Deserialization validates like
/// [`Identifier::from_parts`], so the ignore value cannot be deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IdentifierParts")]
pub struct Identifier {
    parts: Vec<String>,
}

#[derive(Deserialize)]
struct IdentifierParts {
    parts: Vec<String>,
}

impl TryFrom<IdentifierParts> for Identifier {
    type Error = Error;

    fn try_from(value: IdentifierParts) -> Result<Self> {
        Self::from_parts(value.parts)
    }
}

impl Identifier {
    /// Create an identifier from its parts.
    ///
    /// # Example
    ///
    /// ```
    /// use modgraph::Identifier;
    ///
    /// let identifier = Identifier::from_parts(["customer", "creation"])?;
    /// assert_eq!(identifier.part(2)?, "creation");
    /// assert!(Identifier::from_parts(Vec::<String>::new()).is_err());
    /// # Ok::<(), modgraph::Error>(())
    /// ```
    pub fn from_parts<I, S>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();

        if parts.is_empty() {
            return Err(Error::EmptyIdentifier);
        }

        if let Some(position) = parts.iter().position(String::is_empty) {
            return Err(Error::EmptyIdentifierPart {
                index: position + 1,
            });
        }

        Ok(Self { parts })
    }

    /// The identifier of classes that belong to no module.
    pub fn ignore() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn is_ignored(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn number_of_parts(&self) -> usize {
        self.parts.len()
    }

    /// Part at the 1-based `index`.
    pub fn part(&self, index: usize) -> Result<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.parts.get(i))
            .map(String::as_str)
            .ok_or(Error::PartIndexOutOfBounds {
                index,
                number_of_parts: self.parts.len(),
            })
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.parts.iter()
    }

    /// Parts joined by `:`, as used by the default module name.
    pub fn joined(&self) -> String {
        self.parts.join(":")
    }
}

impl<'a> IntoIterator for &'a Identifier {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_parts_in_order() {
        let ab = Identifier::from_parts(["a", "b"]).unwrap();
        assert_eq!(ab, Identifier::from_parts(vec!["a".to_string(), "b".to_string()]).unwrap());
        assert_ne!(ab, Identifier::from_parts(["b", "a"]).unwrap());
        assert_ne!(ab, Identifier::from_parts(["a"]).unwrap());
    }

    #[test]
    fn ignore_never_equals_a_real_identifier() {
        let ignore = Identifier::ignore();
        assert!(ignore.is_ignored());
        assert_eq!(ignore.number_of_parts(), 0);
        assert_ne!(ignore, Identifier::from_parts(["a"]).unwrap());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(matches!(
            Identifier::from_parts(Vec::<&str>::new()),
            Err(Error::EmptyIdentifier)
        ));
        assert!(matches!(
            Identifier::from_parts(["a", ""]),
            Err(Error::EmptyIdentifierPart { index: 2 })
        ));
    }

    #[test]
    fn deserialization_validates_parts() {
        let identifier: Identifier = serde_json::from_str(r#"{"parts":["a","b"]}"#).unwrap();
        assert_eq!(identifier, Identifier::from_parts(["a", "b"]).unwrap());

        let err = serde_json::from_str::<Identifier>(r#"{"parts":["a",""]}"#).unwrap_err();
        assert!(err.to_string().contains("part 2 must not be empty"));
        assert!(serde_json::from_str::<Identifier>(r#"{"parts":[]}"#).is_err());
    }

    #[test]
    fn serializes_as_parts() {
        let identifier = Identifier::from_parts(["a", "b"]).unwrap();
        assert_eq!(serde_json::to_string(&identifier).unwrap(), r#"{"parts":["a","b"]}"#);
    }

    #[test]
    fn parts_are_one_indexed() {
        let identifier = Identifier::from_parts(["first", "second"]).unwrap();
        assert_eq!(identifier.part(1).unwrap(), "first");
        assert_eq!(identifier.part(2).unwrap(), "second");
        assert!(identifier.part(0).is_err());
        let err = identifier.part(3).unwrap_err();
        assert!(err.to_string().contains("Index 3 is out of bounds"));
    }

    #[test]
    fn renders_parts() {
        let identifier = Identifier::from_parts(["a", "b"]).unwrap();
        assert_eq!(identifier.to_string(), "[a, b]");
        assert_eq!(identifier.joined(), "a:b");
        assert_eq!(identifier.iter().count(), 2);
    }
}
