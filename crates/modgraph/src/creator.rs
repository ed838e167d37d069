//! Entry points for turning a class graph into modules.
//!
//! A [`Creator`] combines an identification strategy with a way to describe
//! each resulting module:
//!
//! ```
//! use modgraph::{Class, ClassDependency, ClassGraph, ClassId, define_by_namespaces};
//!
//! let x1 = ClassId::new("a.one.X1")?;
//! let y1 = ClassId::new("a.two.Y1")?;
//! let classes = ClassGraph::builder()
//!     .class(Class::new(x1.clone()))
//!     .class(Class::new(y1.clone()))
//!     .dependency(ClassDependency::new(x1, y1, "X1 calls Y1"))
//!     .build()?;
//!
//! let modules = define_by_namespaces("a.(*)")?
//!     .derive_name_from_pattern("Module $1")
//!     .modularize(&classes)?;
//!
//! let one = modules.by_name("Module one")?;
//! assert_eq!(one.module_dependencies_from_self().len(), 1);
//! # Ok::<(), modgraph::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use modgraph_config::AggregationSettings;

use crate::association::{
    ClassPredicate, IdentifierAssociation, NamespaceAssociation, RootClassAssociation,
};
use crate::class::{Class, Metadata};
use crate::class_graph::ClassGraph;
use crate::descriptor::{Descriptor, MetadataDescriptor, NamedDescriptor};
use crate::identifier::Identifier;
use crate::module::RawModule;
use crate::modules::ModuleGraph;
use crate::naming::NamingPattern;
use crate::{Error, Result};

type Describer<D> = Box<dyn Fn(&Identifier, &[Arc<Class>]) -> Result<D> + Send + Sync>;

/// Modules from the capture groups of a namespace pattern, e.g. `app.(*)..`.
pub fn define_by_namespaces(pattern: impl Into<String>) -> Result<Creator> {
    Ok(define_by(NamespaceAssociation::new(pattern)?))
}

/// One module per class matching `predicate`, spanning the root's namespace.
pub fn define_by_root_classes<P>(predicate: P) -> RootClassesCreator
where
    P: Fn(&Class) -> bool + Send + Sync + 'static,
{
    RootClassesCreator::new(Arc::new(predicate))
}

/// Modules from an arbitrary association.
pub fn define_by<A>(association: A) -> Creator
where
    A: IdentifierAssociation + 'static,
{
    Creator {
        association: Box::new(association),
        describer: naming_describer(NamingPattern::default()),
        aggregation: AggregationSettings::default(),
    }
}

/// One module per class carrying metadata of `kind`, named by the metadata's
/// `name` attribute.
pub fn define_by_metadata(kind: impl Into<String>) -> Creator<MetadataDescriptor> {
    define_by_metadata_named(kind, |metadata| {
        metadata.attribute("name").unwrap_or_default().to_string()
    })
}

/// Like [`define_by_metadata`], deriving the module name from the metadata
/// with `name`.
pub fn define_by_metadata_named<F>(kind: impl Into<String>, name: F) -> Creator<MetadataDescriptor>
where
    F: Fn(&Metadata) -> String + Send + Sync + 'static,
{
    let kind = kind.into();
    let predicate_kind = kind.clone();
    let predicate: ClassPredicate = Arc::new(move |class: &Class| class.has_metadata(&predicate_kind));

    RootClassesCreator::new(predicate).describe_module_by_root_class(move |_, root| {
        let metadata = root.metadata_of(&kind).cloned().unwrap_or_else(|| Metadata::new(&kind));
        MetadataDescriptor::new(name(&metadata), metadata)
    })
}

/// Builds a [`ModuleGraph`] from a [`ClassGraph`].
pub struct Creator<D = NamedDescriptor> {
    association: Box<dyn IdentifierAssociation>,
    describer: Describer<D>,
    aggregation: AggregationSettings,
}

impl<D: Descriptor> Creator<D> {
    /// Name modules by a pattern over their identifier parts.
    ///
    /// `$1`, `${1}` insert the first part and `$@` inserts all parts joined
    /// by `:`.
    pub fn derive_name_from_pattern(self, pattern: &str) -> Creator<NamedDescriptor> {
        Creator {
            association: self.association,
            describer: naming_describer(NamingPattern::parse(pattern)),
            aggregation: self.aggregation,
        }
    }

    /// Describe each module from its identifier and contained classes.
    pub fn describe_by<E, F>(self, describe: F) -> Creator<E>
    where
        E: Descriptor,
        F: Fn(&Identifier, &[Arc<Class>]) -> E + Send + Sync + 'static,
    {
        Creator {
            association: self.association,
            describer: Box::new(move |identifier: &Identifier, classes: &[Arc<Class>]| {
                Ok(describe(identifier, classes))
            }),
            aggregation: self.aggregation,
        }
    }

    pub fn with_aggregation(mut self, aggregation: AggregationSettings) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Partitions `classes` into modules and derives their dependencies.
    pub fn modularize(&mut self, classes: &ClassGraph) -> Result<ModuleGraph<D>> {
        self.association.init(classes)?;

        let mut groups: BTreeMap<Identifier, Vec<Arc<Class>>> = BTreeMap::new();
        let mut ignored = 0usize;
        for class in classes.classes() {
            let identifier = self.association.associate(class);
            if identifier.is_ignored() {
                ignored += 1;
                continue;
            }
            groups.entry(identifier).or_default().push(Arc::clone(class));
        }

        tracing::debug!(
            "Grouped {} classes into {} modules ({} ignored)",
            classes.len() - ignored,
            groups.len(),
            ignored
        );

        let raw = groups
            .into_iter()
            .enumerate()
            .map(|(index, (identifier, members))| {
                let descriptor = (self.describer)(&identifier, &members)?;
                RawModule::new(index, identifier, descriptor, members, classes)
            })
            .collect::<Result<Vec<_>>>()?;

        let graph = ModuleGraph::assemble(raw, &self.aggregation)?;
        tracing::info!(
            "Built module graph with {} modules and {} module dependencies",
            graph.len(),
            graph.module_dependencies().len()
        );
        Ok(graph)
    }
}

impl<D> fmt::Debug for Creator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Creator")
            .field("aggregation", &self.aggregation)
            .finish_non_exhaustive()
    }
}

/// Creator for modules defined by root classes.
///
/// Besides the options of [`Creator`], modules can be described by their root
/// class.
pub struct RootClassesCreator {
    predicate: ClassPredicate,
    creator: Creator,
}

impl RootClassesCreator {
    fn new(predicate: ClassPredicate) -> Self {
        Self {
            creator: define_by(RootClassAssociation::from_predicate(Arc::clone(&predicate))),
            predicate,
        }
    }

    /// Describe each module from its identifier and root class.
    pub fn describe_module_by_root_class<E, F>(self, describe: F) -> Creator<E>
    where
        E: Descriptor,
        F: Fn(&Identifier, &Class) -> E + Send + Sync + 'static,
    {
        let predicate = self.predicate;
        Creator {
            association: self.creator.association,
            describer: Box::new(move |identifier: &Identifier, classes: &[Arc<Class>]| {
                let root = classes
                    .iter()
                    .find(|class| predicate(class))
                    .ok_or_else(|| Error::MissingRootClass {
                        identifier: identifier.clone(),
                    })?;
                Ok(describe(identifier, root))
            }),
            aggregation: self.creator.aggregation,
        }
    }

    pub fn derive_name_from_pattern(self, pattern: &str) -> Creator {
        self.creator.derive_name_from_pattern(pattern)
    }

    pub fn describe_by<E, F>(self, describe: F) -> Creator<E>
    where
        E: Descriptor,
        F: Fn(&Identifier, &[Arc<Class>]) -> E + Send + Sync + 'static,
    {
        self.creator.describe_by(describe)
    }

    pub fn with_aggregation(mut self, aggregation: AggregationSettings) -> Self {
        self.creator = self.creator.with_aggregation(aggregation);
        self
    }

    pub fn modularize(&mut self, classes: &ClassGraph) -> Result<ModuleGraph> {
        self.creator.modularize(classes)
    }
}

impl fmt::Debug for RootClassesCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootClassesCreator")
            .field("creator", &self.creator)
            .finish_non_exhaustive()
    }
}

fn naming_describer(pattern: NamingPattern) -> Describer<NamedDescriptor> {
    Box::new(move |identifier: &Identifier, _: &[Arc<Class>]| {
        Ok(NamedDescriptor::new(pattern.apply(identifier)))
    })
}
