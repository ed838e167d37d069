//! Query methods for ModuleGraph.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::graph::ModuleGraph;
use crate::dependency::ModuleDependency;
use crate::descriptor::Descriptor;
use crate::identifier::Identifier;
use crate::module::Module;
use crate::{Error, Result};

impl<D: Descriptor> ModuleGraph<D> {
    pub fn len(&self) -> usize {
        self.inner.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.modules.is_empty()
    }

    /// Modules ordered by identifier.
    pub fn iter(&self) -> std::slice::Iter<'_, Module<D>> {
        self.inner.modules.iter()
    }

    pub fn get(&self, identifier: &Identifier) -> Option<&Module<D>> {
        let index = *self.inner.by_identifier.get(identifier)?;
        self.inner.modules.get(index)
    }

    /// The module whose identifier consists of exactly `parts`.
    ///
    /// # Example
    ///
    /// ```
    /// use modgraph::{Class, ClassGraph, ClassId, define_by_namespaces};
    ///
    /// let classes = ClassGraph::builder()
    ///     .class(Class::new(ClassId::new("app.billing.Invoice")?))
    ///     .build()?;
    /// let modules = define_by_namespaces("app.(*)")?.modularize(&classes)?;
    ///
    /// assert!(modules.try_by_identifier(&["billing"]).is_some());
    /// assert!(modules.try_by_identifier(&["shipping"]).is_none());
    /// # Ok::<(), modgraph::Error>(())
    /// ```
    pub fn try_by_identifier<S: AsRef<str>>(&self, parts: &[S]) -> Option<&Module<D>> {
        let identifier = Identifier::from_parts(parts.iter().map(AsRef::as_ref)).ok()?;
        self.get(&identifier)
    }

    /// Like [`try_by_identifier`](Self::try_by_identifier), failing if no
    /// module matches.
    pub fn by_identifier<S: AsRef<str>>(&self, parts: &[S]) -> Result<&Module<D>> {
        self.try_by_identifier(parts)
            .ok_or_else(|| Error::ModuleNotFoundByIdentifier {
                identifier: format!(
                    "[{}]",
                    parts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
                ),
            })
    }

    pub fn try_by_name(&self, name: &str) -> Option<&Module<D>> {
        let index = *self.inner.by_name.get(name)?;
        self.inner.modules.get(index)
    }

    pub fn by_name(&self, name: &str) -> Result<&Module<D>> {
        self.try_by_name(name)
            .ok_or_else(|| Error::ModuleNotFoundByName {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.inner.modules.iter().map(Module::name).collect()
    }

    /// Every module dependency, ordered by origin and then target.
    pub fn module_dependencies(&self) -> &[Arc<ModuleDependency>] {
        &self.inner.dependencies
    }

    /// The depending module of `dependency`, if it belongs to this graph.
    pub fn origin_of(&self, dependency: &ModuleDependency) -> Option<&Module<D>> {
        self.inner
            .modules
            .get(dependency.origin_index)
            .filter(|module| module.identifier() == dependency.origin())
    }

    /// The module `dependency` points to, if it belongs to this graph.
    pub fn target_of(&self, dependency: &ModuleDependency) -> Option<&Module<D>> {
        self.inner
            .modules
            .get(dependency.target_index)
            .filter(|module| module.identifier() == dependency.target())
    }
}
