//! Immutable snapshot of the analysed classes and their direct dependencies.

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap as HashMap;

use crate::class::{Class, ClassDependency, ClassId};
use crate::{Error, Result};

/// The class-level dependency graph that modules are derived from.
///
/// Outgoing dependencies are indexed at build time. The reverse index is only
/// built the first time incoming dependencies are requested; concurrent first
/// callers block on a single computation. Clones share the same snapshot.
#[derive(Debug, Clone)]
pub struct ClassGraph {
    inner: Arc<ClassGraphInner>,
}

#[derive(Debug)]
struct ClassGraphInner {
    /// Classes ordered by id
    classes: Vec<Arc<Class>>,
    index: HashMap<ClassId, usize>,
    /// Outgoing dependencies, parallel to `classes`
    outgoing: Vec<Vec<ClassDependency>>,
    incoming: OnceCell<HashMap<ClassId, Vec<ClassDependency>>>,
}

impl ClassGraph {
    pub fn builder() -> ClassGraphBuilder {
        ClassGraphBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.inner.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.classes.is_empty()
    }

    /// All classes, ordered by id.
    pub fn classes(&self) -> &[Arc<Class>] {
        &self.inner.classes
    }

    pub fn get(&self, id: &ClassId) -> Option<&Arc<Class>> {
        self.inner.index.get(id).map(|&i| &self.inner.classes[i])
    }

    pub fn contains(&self, id: &ClassId) -> bool {
        self.inner.index.contains_key(id)
    }

    /// Direct dependencies originating from `id`.
    pub fn dependencies_from(&self, id: &ClassId) -> &[ClassDependency] {
        self.inner
            .index
            .get(id)
            .map(|&i| self.inner.outgoing[i].as_slice())
            .unwrap_or_default()
    }

    /// Direct dependencies targeting `id`, whether or not `id` is part of the
    /// snapshot.
    pub fn dependencies_to(&self, id: &ClassId) -> &[ClassDependency] {
        self.incoming_index()
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of class dependencies in the snapshot.
    pub fn dependency_count(&self) -> usize {
        self.inner.outgoing.iter().map(Vec::len).sum()
    }

    fn incoming_index(&self) -> &HashMap<ClassId, Vec<ClassDependency>> {
        self.inner.incoming.get_or_init(|| {
            tracing::debug!(
                "Resolving incoming dependencies for {} classes",
                self.inner.classes.len()
            );
            let mut incoming: HashMap<ClassId, Vec<ClassDependency>> = HashMap::default();
            for dependency in self.inner.outgoing.iter().flatten() {
                incoming
                    .entry(dependency.target().clone())
                    .or_default()
                    .push(dependency.clone());
            }
            incoming
        })
    }
}

/// Builder for [`ClassGraph`]; validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ClassGraphBuilder {
    classes: Vec<Class>,
    dependencies: Vec<ClassDependency>,
}

impl ClassGraphBuilder {
    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = Class>,
    {
        self.classes.extend(classes);
        self
    }

    pub fn dependency(mut self, dependency: ClassDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn dependencies<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = ClassDependency>,
    {
        self.dependencies.extend(dependencies);
        self
    }

    /// Freeze the snapshot.
    ///
    /// Fails if a class id occurs twice or if a dependency originates from a
    /// class that is not part of the snapshot. Dependency targets may lie
    /// outside the snapshot. Identical dependencies collapse into one.
    pub fn build(self) -> Result<ClassGraph> {
        let mut classes = self.classes;
        classes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut index = HashMap::default();
        for (i, class) in classes.iter().enumerate() {
            if index.insert(class.id.clone(), i).is_some() {
                return Err(Error::DuplicateClass {
                    class: class.id.clone(),
                });
            }
        }

        let mut outgoing = vec![Vec::new(); classes.len()];
        let unique: BTreeSet<ClassDependency> = self.dependencies.into_iter().collect();
        for dependency in unique {
            let Some(&origin) = index.get(dependency.origin()) else {
                return Err(Error::UnknownDependencyOrigin {
                    dependency: dependency.to_string(),
                });
            };
            outgoing[origin].push(dependency);
        }

        Ok(ClassGraph {
            inner: Arc::new(ClassGraphInner {
                classes: classes.into_iter().map(Arc::new).collect(),
                index,
                outgoing,
                incoming: OnceCell::new(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ClassId {
        ClassId::new(name).unwrap()
    }

    fn dep(origin: &str, target: &str) -> ClassDependency {
        ClassDependency::new(id(origin), id(target), format!("{origin} calls {target}"))
    }

    fn sample() -> ClassGraph {
        ClassGraph::builder()
            .class(Class::new(id("a.B")))
            .class(Class::new(id("a.A")))
            .dependency(dep("a.A", "a.B"))
            .dependency(dep("a.A", "java.lang.Object"))
            .dependency(dep("a.B", "a.A"))
            .build()
            .unwrap()
    }

    #[test]
    fn orders_classes_by_id() {
        let graph = sample();
        let names: Vec<_> = graph.classes().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(names, ["a.A", "a.B"]);
    }

    #[test]
    fn indexes_outgoing_dependencies() {
        let graph = sample();
        assert_eq!(graph.dependencies_from(&id("a.A")).len(), 2);
        assert_eq!(graph.dependencies_from(&id("a.B")), &[dep("a.B", "a.A")]);
        assert!(graph.dependencies_from(&id("x.Unknown")).is_empty());
        assert_eq!(graph.dependency_count(), 3);
    }

    #[test]
    fn resolves_incoming_dependencies_for_external_targets() {
        let graph = sample();
        assert_eq!(
            graph.dependencies_to(&id("java.lang.Object")),
            &[dep("a.A", "java.lang.Object")]
        );
        assert_eq!(graph.dependencies_to(&id("a.A")), &[dep("a.B", "a.A")]);
    }

    #[test]
    fn collapses_identical_dependencies() {
        let graph = ClassGraph::builder()
            .class(Class::new(id("a.A")))
            .dependency(dep("a.A", "b.B"))
            .dependency(dep("a.A", "b.B"))
            .build()
            .unwrap();
        assert_eq!(graph.dependency_count(), 1);
    }

    #[test]
    fn rejects_duplicate_classes() {
        let err = ClassGraph::builder()
            .class(Class::new(id("a.A")))
            .class(Class::new(id("a.A")))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("a.A"));
    }

    #[test]
    fn rejects_dependencies_from_unknown_classes() {
        let err = ClassGraph::builder()
            .class(Class::new(id("a.A")))
            .dependency(dep("x.Y", "a.A"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDependencyOrigin { .. }));
    }
}
