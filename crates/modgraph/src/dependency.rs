//! Aggregated dependencies between two modules.

use std::collections::BTreeSet;
use std::fmt;

use crate::class::ClassDependency;
use crate::descriptor::Descriptor;
use crate::identifier::Identifier;
use crate::module::RawModule;

/// A directed dependency from one module to a different module, backed by
/// every class dependency that crosses from the origin into the target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleDependency {
    pub(crate) origin_index: usize,
    pub(crate) target_index: usize,
    origin: Identifier,
    target: Identifier,
    origin_name: String,
    target_name: String,
    class_dependencies: BTreeSet<ClassDependency>,
}

impl ModuleDependency {
    /// Keeps the candidates whose target class lies in `target`.
    ///
    /// Returns `None` for a dependency of a module on itself or when no
    /// candidate crosses into `target`.
    pub(crate) fn try_create<D, I>(
        origin: &RawModule<D>,
        target: &RawModule<D>,
        candidates: I,
    ) -> Option<Self>
    where
        D: Descriptor,
        I: IntoIterator<Item = ClassDependency>,
    {
        if origin.index == target.index {
            return None;
        }

        let class_dependencies: BTreeSet<_> = candidates
            .into_iter()
            .filter(|dependency| target.contains(dependency.target()))
            .collect();

        if class_dependencies.is_empty() {
            return None;
        }

        Some(Self {
            origin_index: origin.index,
            target_index: target.index,
            origin: origin.identifier.clone(),
            target: target.identifier.clone(),
            origin_name: origin.descriptor.name().to_string(),
            target_name: target.descriptor.name().to_string(),
            class_dependencies,
        })
    }

    /// Identifier of the depending module.
    pub fn origin(&self) -> &Identifier {
        &self.origin
    }

    /// Identifier of the module depended upon.
    pub fn target(&self) -> &Identifier {
        &self.target
    }

    pub fn class_dependencies(&self) -> &BTreeSet<ClassDependency> {
        &self.class_dependencies
    }

    pub fn description(&self) -> String {
        format!("Module Dependency [{} -> {}]", self.origin_name, self.target_name)
    }
}

impl fmt::Display for ModuleDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
