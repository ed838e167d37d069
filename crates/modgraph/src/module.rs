//! Modules: named, immutable partitions of classes.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet as HashSet;

use crate::class::{Class, ClassDependency, ClassId};
use crate::class_graph::ClassGraph;
use crate::dependency::ModuleDependency;
use crate::descriptor::{Descriptor, NamedDescriptor};
use crate::identifier::Identifier;
use crate::{Error, Result};

/// A module before the module graph has aggregated its dependencies.
///
/// Holds the class-level data only; [`RawModule::finish`] turns it into the
/// public [`Module`] once the module-level views are known.
#[derive(Debug)]
pub(crate) struct RawModule<D> {
    pub(crate) index: usize,
    pub(crate) identifier: Identifier,
    pub(crate) descriptor: D,
    classes: Vec<Arc<Class>>,
    members: HashSet<ClassId>,
    pub(crate) from_self: BTreeSet<ClassDependency>,
    graph: ClassGraph,
}

impl<D: Descriptor> RawModule<D> {
    pub(crate) fn new(
        index: usize,
        identifier: Identifier,
        descriptor: D,
        classes: Vec<Arc<Class>>,
        graph: &ClassGraph,
    ) -> Result<Self> {
        if descriptor.name().is_empty() {
            return Err(Error::EmptyModuleName { identifier });
        }

        let members: HashSet<ClassId> = classes.iter().map(|class| class.id.clone()).collect();
        let from_self = classes
            .iter()
            .flat_map(|class| graph.dependencies_from(&class.id))
            .filter(|dependency| !members.contains(dependency.target()))
            .cloned()
            .collect();

        Ok(Self {
            index,
            identifier,
            descriptor,
            classes,
            members,
            from_self,
            graph: graph.clone(),
        })
    }

    pub(crate) fn contains(&self, id: &ClassId) -> bool {
        self.members.contains(id)
    }

    pub(crate) fn class_ids(&self) -> impl Iterator<Item = &ClassId> {
        self.classes.iter().map(|class| &class.id)
    }

    pub(crate) fn finish(
        self,
        from_self: Vec<Arc<ModuleDependency>>,
        to_self: Vec<Arc<ModuleDependency>>,
    ) -> Module<D> {
        let claimed: HashSet<&ClassDependency> = from_self
            .iter()
            .flat_map(|dependency| dependency.class_dependencies())
            .collect();
        let undefined = self
            .from_self
            .iter()
            .filter(|dependency| !claimed.contains(dependency))
            .cloned()
            .collect();

        Module {
            identifier: self.identifier,
            descriptor: self.descriptor,
            classes: self.classes,
            members: self.members,
            class_dependencies_from_self: self.from_self,
            class_dependencies_to_self: OnceCell::new(),
            module_dependencies_from_self: from_self,
            module_dependencies_to_self: to_self,
            undefined_dependencies: undefined,
            graph: self.graph,
        }
    }
}

/// A named group of classes together with its dependency views.
///
/// Two modules are equal when their identifiers are equal.
pub struct Module<D = NamedDescriptor> {
    identifier: Identifier,
    descriptor: D,
    classes: Vec<Arc<Class>>,
    members: HashSet<ClassId>,
    class_dependencies_from_self: BTreeSet<ClassDependency>,
    class_dependencies_to_self: OnceCell<BTreeSet<ClassDependency>>,
    module_dependencies_from_self: Vec<Arc<ModuleDependency>>,
    module_dependencies_to_self: Vec<Arc<ModuleDependency>>,
    undefined_dependencies: BTreeSet<ClassDependency>,
    graph: ClassGraph,
}

impl<D: Descriptor> Module<D> {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    /// Contained classes, ordered by id.
    pub fn classes(&self) -> &[Arc<Class>] {
        &self.classes
    }

    pub fn contains(&self, id: &ClassId) -> bool {
        self.members.contains(id)
    }

    /// Dependencies of contained classes on classes outside this module.
    pub fn class_dependencies_from_self(&self) -> &BTreeSet<ClassDependency> {
        &self.class_dependencies_from_self
    }

    /// Dependencies of classes outside this module on contained classes.
    ///
    /// Resolved on first access from the class graph's reverse index and
    /// cached; concurrent first callers share one computation.
    pub fn class_dependencies_to_self(&self) -> &BTreeSet<ClassDependency> {
        self.class_dependencies_to_self.get_or_init(|| {
            let dependencies: BTreeSet<ClassDependency> = self
                .classes
                .iter()
                .flat_map(|class| self.graph.dependencies_to(&class.id))
                .filter(|dependency| !self.members.contains(dependency.origin()))
                .cloned()
                .collect();
            tracing::trace!(
                "Resolved {} incoming class dependencies of {}",
                dependencies.len(),
                self.name()
            );
            dependencies
        })
    }

    /// Dependencies of this module on other modules, ordered by target.
    pub fn module_dependencies_from_self(&self) -> &[Arc<ModuleDependency>] {
        &self.module_dependencies_from_self
    }

    /// Dependencies of other modules on this module, ordered by origin.
    pub fn module_dependencies_to_self(&self) -> &[Arc<ModuleDependency>] {
        &self.module_dependencies_to_self
    }

    /// Class dependencies leaving this module towards classes of no module.
    pub fn undefined_dependencies(&self) -> &BTreeSet<ClassDependency> {
        &self.undefined_dependencies
    }
}

impl<D> PartialEq for Module<D> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<D> Eq for Module<D> {}

impl<D> Hash for Module<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl<D: Descriptor> fmt::Debug for Module<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("identifier", &self.identifier)
            .field("name", &self.name())
            .field("classes", &self.classes.len())
            .finish_non_exhaustive()
    }
}

impl<D: Descriptor> fmt::Display for Module<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
