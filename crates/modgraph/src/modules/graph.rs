//! Core ModuleGraph structure and inner state.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::dependency::ModuleDependency;
use crate::descriptor::{Descriptor, NamedDescriptor};
use crate::identifier::Identifier;
use crate::module::Module;

/// Modules derived from one class graph together with the dependencies
/// between them.
///
/// Immutable once built; clones share the same modules.
pub struct ModuleGraph<D = NamedDescriptor> {
    pub(super) inner: Arc<GraphInner<D>>,
}

pub(super) struct GraphInner<D> {
    /// Modules ordered by identifier; a module's position is its index
    pub modules: Vec<Module<D>>,
    pub by_identifier: HashMap<Identifier, usize>,
    pub by_name: HashMap<String, usize>,
    /// All module dependencies, ordered by origin then target
    pub dependencies: Vec<Arc<ModuleDependency>>,
}

impl<D> Clone for ModuleGraph<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Descriptor> fmt::Debug for ModuleGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleGraph")
            .field("modules", &self.inner.modules)
            .field("dependencies", &self.inner.dependencies.len())
            .finish()
    }
}

impl<'a, D> IntoIterator for &'a ModuleGraph<D> {
    type Item = &'a Module<D>;
    type IntoIter = std::slice::Iter<'a, Module<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.modules.iter()
    }
}
