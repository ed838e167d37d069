//! Module descriptors.
//!
//! Every module carries a descriptor; the descriptor's name is the module's
//! name. Custom descriptors can hold any extra information a rule layer wants
//! to attach to a module.

use crate::class::Metadata;

pub trait Descriptor: Send + Sync + 'static {
    fn name(&self) -> &str;
}

/// Descriptor carrying nothing but the module name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedDescriptor {
    name: String,
}

impl NamedDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Descriptor for NamedDescriptor {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Descriptor of a module declared through metadata on its root class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDescriptor {
    name: String,
    metadata: Metadata,
}

impl MetadataDescriptor {
    pub fn new(name: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

    /// The metadata found on the module's root class.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Descriptor for MetadataDescriptor {
    fn name(&self) -> &str {
        &self.name
    }
}
