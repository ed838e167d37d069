//! Strategies that assign classes to module identifiers.
//!
//! Any `Fn(&Class) -> Identifier` closure is an association. The provided
//! strategies cover the common layouts:
//!
//! - [`NamespaceAssociation`] - capture groups of a namespace pattern
//! - [`RootClassAssociation`] - namespaces of selected "root" classes

mod namespace;
mod root_classes;

pub use namespace::NamespaceAssociation;
pub use root_classes::RootClassAssociation;

pub(crate) use root_classes::ClassPredicate;

use crate::Result;
use crate::class::Class;
use crate::class_graph::ClassGraph;
use crate::identifier::Identifier;

/// Decides which classes end up in the same module.
pub trait IdentifierAssociation: Send + Sync {
    /// Called once with all classes before any call to [`associate`](Self::associate).
    fn init(&mut self, _classes: &ClassGraph) -> Result<()> {
        Ok(())
    }

    /// The identifier of the module `class` belongs to, or
    /// [`Identifier::ignore`] if it belongs to none.
    fn associate(&self, class: &Class) -> Identifier;
}

impl<F> IdentifierAssociation for F
where
    F: Fn(&Class) -> Identifier + Send + Sync,
{
    fn associate(&self, class: &Class) -> Identifier {
        self(class)
    }
}

/// Returns true if `child` equals `parent` or lies below it.
pub(crate) fn namespace_contains(parent: &str, child: &str) -> bool {
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}
