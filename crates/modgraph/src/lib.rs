//! # modgraph
//!
//! Partition a class-level dependency graph into architecture modules and
//! derive the dependencies between them.
//!
//! ## Overview
//!
//! 1. Describe the analysed code as a [`ClassGraph`]: classes plus their direct
//!    dependencies.
//! 2. Pick an identification strategy ([`define_by_namespaces`],
//!    [`define_by_root_classes`], [`define_by_metadata`] or any
//!    [`IdentifierAssociation`]).
//! 3. [`Creator::modularize`] groups the classes into [`Module`]s and
//!    aggregates crossing class dependencies into [`ModuleDependency`]s.
//!    Dependencies on classes that belong to no module are reported as
//!    undefined dependencies of the depending module.
//! 4. Query the resulting [`ModuleGraph`] or search it for cycles.
//!
//! ```
//! use modgraph::{Class, ClassDependency, ClassGraph, ClassId, CycleSettings, define_by_namespaces};
//!
//! let a = ClassId::new("shop.orders.Order")?;
//! let b = ClassId::new("shop.billing.Invoice")?;
//! let classes = ClassGraph::builder()
//!     .class(Class::new(a.clone()))
//!     .class(Class::new(b.clone()))
//!     .dependency(ClassDependency::new(a.clone(), b.clone(), "Order creates Invoice"))
//!     .dependency(ClassDependency::new(b, a, "Invoice references Order"))
//!     .build()?;
//!
//! let modules = define_by_namespaces("shop.(*)")?.modularize(&classes)?;
//! assert_eq!(modules.len(), 2);
//!
//! let cycles = modules.cycles(&CycleSettings::default());
//! assert_eq!(cycles.len(), 1);
//! # Ok::<(), modgraph::Error>(())
//! ```
//!
//! ## Features
//!
//! - `logging`: [`logging::init_logging`] and friends to install a
//!   `tracing-subscriber` for applications
//! - `proptest`: property tests over random class graphs

pub mod association;
pub mod class;
pub mod class_graph;
pub mod creator;
pub mod dependency;
pub mod descriptor;
pub mod graph;
pub mod identifier;
pub mod module;
pub mod modules;
pub mod namespace_matcher;
pub mod naming;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(test)]
mod tests;

pub use association::{IdentifierAssociation, NamespaceAssociation, RootClassAssociation};
pub use class::{Class, ClassDependency, ClassId, ClassIdError, Metadata};
pub use class_graph::{ClassGraph, ClassGraphBuilder};
pub use creator::{
    Creator, RootClassesCreator, define_by, define_by_metadata, define_by_metadata_named,
    define_by_namespaces, define_by_root_classes,
};
pub use dependency::ModuleDependency;
pub use descriptor::{Descriptor, MetadataDescriptor, NamedDescriptor};
pub use graph::{Cycle, Cycles, Edge, Graph, GraphError, Path};
pub use identifier::Identifier;
pub use module::Module;
pub use modules::ModuleGraph;
pub use namespace_matcher::{NamespaceMatch, NamespaceMatcher};
pub use naming::{DEFAULT_NAMING_PATTERN, NamingPattern};

pub use modgraph_config::{AggregationSettings, CycleSettings, ModgraphConfig};

/// Errors raised while building or querying module graphs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Identifier must consist of at least one part")]
    EmptyIdentifier,

    #[error("Identifier part {index} must not be empty")]
    EmptyIdentifierPart { index: usize },

    #[error("Index {index} is out of bounds for an identifier with {number_of_parts} parts (parts are 1-based)")]
    PartIndexOutOfBounds {
        index: usize,
        number_of_parts: usize,
    },

    #[error("Invalid namespace pattern '{pattern}': {reason}")]
    InvalidNamespacePattern { pattern: String, reason: String },

    #[error("Class {class} is defined twice")]
    DuplicateClass { class: ClassId },

    #[error("Dependency {dependency} starts at a class outside the class graph")]
    UnknownDependencyOrigin { dependency: String },

    #[error("Module {identifier} must have a non-empty name")]
    EmptyModuleName { identifier: Identifier },

    #[error("Found multiple modules with the same identifier {identifier}")]
    DuplicateIdentifier { identifier: Identifier },

    #[error("Found multiple modules with the same name '{name}'")]
    DuplicateName { name: String },

    #[error("modules from root classes would overlap in '{first}' and '{second}'")]
    OverlappingRootNamespaces { first: String, second: String },

    #[error("Root class {class} lies in the root namespace and cannot span a module")]
    RootClassWithoutNamespace { class: ClassId },

    #[error("Module {identifier} contains no root class")]
    MissingRootClass { identifier: Identifier },

    #[error("There is no module with identifier {identifier}")]
    ModuleNotFoundByIdentifier { identifier: String },

    #[error("There is no module with name {name}")]
    ModuleNotFoundByName { name: String },

    #[error("Invalid log level '{level}', expected one of off, error, warn, info, debug")]
    InvalidLogLevel { level: String },

    #[error(transparent)]
    ClassId(#[from] ClassIdError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, Error>;
