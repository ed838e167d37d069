use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::class::Class;
use crate::class_graph::ClassGraph;
use crate::identifier::Identifier;
use crate::{Error, Result};

use super::{IdentifierAssociation, namespace_contains};

pub(crate) type ClassPredicate = Arc<dyn Fn(&Class) -> bool + Send + Sync>;

/// Forms one module per root class, containing every class in the root's
/// namespace or below it.
///
/// Root namespaces must not overlap: no root may live in the namespace of
/// another root or below it.
pub struct RootClassAssociation {
    predicate: ClassPredicate,
    roots: BTreeMap<String, Identifier>,
}

impl RootClassAssociation {
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&Class) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(Arc::new(predicate))
    }

    pub(crate) fn from_predicate(predicate: ClassPredicate) -> Self {
        Self {
            predicate,
            roots: BTreeMap::new(),
        }
    }

    pub fn is_root(&self, class: &Class) -> bool {
        (self.predicate)(class)
    }

    /// Root namespaces registered by the last [`init`](IdentifierAssociation::init).
    pub fn root_namespaces(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }
}

impl fmt::Debug for RootClassAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootClassAssociation")
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

impl IdentifierAssociation for RootClassAssociation {
    fn init(&mut self, classes: &ClassGraph) -> Result<()> {
        self.roots.clear();

        for root in classes.classes().iter().filter(|c| (self.predicate)(c)) {
            let namespace = root.namespace();
            if namespace.is_empty() {
                return Err(Error::RootClassWithoutNamespace {
                    class: root.id.clone(),
                });
            }
            if let Some(existing) = self.roots.keys().find(|existing| {
                namespace_contains(existing, namespace) || namespace_contains(namespace, existing)
            }) {
                return Err(Error::OverlappingRootNamespaces {
                    first: existing.clone(),
                    second: namespace.to_string(),
                });
            }

            tracing::debug!("Registering root class {} for namespace '{}'", root.id, namespace);
            self.roots
                .insert(namespace.to_string(), Identifier::from_parts([namespace])?);
        }

        Ok(())
    }

    fn associate(&self, class: &Class) -> Identifier {
        let namespace = class.namespace();
        self.roots
            .iter()
            .filter(|(root, _)| namespace_contains(root, namespace))
            .max_by_key(|(root, _)| root.len())
            .map(|(_, identifier)| identifier.clone())
            .unwrap_or_else(Identifier::ignore)
    }
}
