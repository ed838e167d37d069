//! Class-level input model: class nodes, their metadata and the directed
//! dependencies between them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Fully qualified, dot-segmented class name such as `com.example.Service`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(String);

impl ClassId {
    /// Create a class identifier, rejecting empty names and empty segments.
    pub fn new(name: impl Into<String>) -> Result<Self, ClassIdError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ClassIdError::Empty);
        }

        if name.split('.').any(str::is_empty) {
            return Err(ClassIdError::EmptySegment { name });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace of the class, empty for classes in the root namespace.
    pub fn namespace(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(namespace, _)| namespace)
    }

    pub fn simple_name(&self) -> &str {
        self.0.rsplit_once('.').map_or(&self.0, |(_, simple)| simple)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ClassId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClassId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ClassId::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error type for `ClassId` construction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassIdError {
    #[error("class name is empty")]
    Empty,

    #[error("class name '{name}' contains an empty segment")]
    EmptySegment { name: String },
}

/// Declarative metadata attached to a class, e.g. a marker declaring which
/// architecture module the class's namespace forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub kind: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// A class node of the analysed code base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

impl Class {
    pub fn new(id: ClassId) -> Self {
        Self {
            id,
            metadata: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    pub fn namespace(&self) -> &str {
        self.id.namespace()
    }

    pub fn simple_name(&self) -> &str {
        self.id.simple_name()
    }

    /// First metadata entry of the given kind.
    pub fn metadata_of(&self, kind: &str) -> Option<&Metadata> {
        self.metadata.iter().find(|m| m.kind == kind)
    }

    pub fn has_metadata(&self, kind: &str) -> bool {
        self.metadata_of(kind).is_some()
    }
}

/// A directed fact that `origin` depends on `target`.
///
/// The description is part of the identity: the same pair of classes may be
/// connected by several distinct dependencies (a call, a field type, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassDependency {
    origin: ClassId,
    target: ClassId,
    description: String,
}

impl ClassDependency {
    pub fn new(origin: ClassId, target: ClassId, description: impl Into<String>) -> Self {
        Self {
            origin,
            target,
            description: description.into(),
        }
    }

    pub fn origin(&self) -> &ClassId {
        &self.origin
    }

    pub fn target(&self) -> &ClassId {
        &self.target
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ClassDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.target, self.description)
    }
}
