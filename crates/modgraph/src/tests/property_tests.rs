//! Property-based tests for module graph construction using proptest.
//!
//! Run with: cargo test --features proptest --package modgraph property_tests

#![cfg(feature = "proptest")]

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::{class, dependency};
use crate::{AggregationSettings, ClassDependency, ClassGraph, ModuleGraph, define_by_namespaces};

/// Classes under `p.` (grouped into modules) and `q.` (ignored), plus
/// dependencies between them and on classes outside the snapshot.
fn class_graph_strategy() -> impl Strategy<Value = ClassGraph> {
    let names = prop::collection::btree_set(
        (prop::bool::ANY, 0..6usize, 0..4usize).prop_map(|(grouped, namespace, member)| {
            let root = if grouped { "p" } else { "q" };
            format!("{root}.n{namespace}.C{member}")
        }),
        1..=30,
    );

    names.prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let count = names.len();
        prop::collection::vec((0..count, 0..count + 3), 0..=60).prop_map(move |pairs| {
            let dependencies = pairs.into_iter().filter_map(|(origin, target)| {
                let target = names
                    .get(target)
                    .cloned()
                    .unwrap_or_else(|| format!("x.External{target}"));
                (names[origin] != target).then(|| dependency(&names[origin], &target))
            });

            ClassGraph::builder()
                .classes(names.iter().map(|name| class(name)))
                .dependencies(dependencies.collect::<Vec<_>>())
                .build()
                .unwrap()
        })
    })
}

fn modularize(classes: &ClassGraph, aggregation: AggregationSettings) -> ModuleGraph {
    define_by_namespaces("p.(*)")
        .unwrap()
        .with_aggregation(aggregation)
        .modularize(classes)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every grouped class is in exactly one module, ignored
    /// classes in none
    #[test]
    fn prop_partition_completeness(classes in class_graph_strategy()) {
        let modules = modularize(&classes, AggregationSettings::sequential());

        for class in classes.classes() {
            let owners = modules.iter().filter(|m| m.contains(&class.id)).count();
            let expected = usize::from(class.namespace().starts_with("p."));
            prop_assert_eq!(owners, expected, "{} owned by {} modules", class.id, owners);
        }
    }

    /// Property: from-self = module dependencies ⊎ undefined dependencies
    #[test]
    fn prop_dependency_conservation(classes in class_graph_strategy()) {
        let modules = modularize(&classes, AggregationSettings::sequential());

        for module in &modules {
            let claimed: Vec<&ClassDependency> = module
                .module_dependencies_from_self()
                .iter()
                .flat_map(|d| d.class_dependencies())
                .chain(module.undefined_dependencies())
                .collect();
            let unique: BTreeSet<ClassDependency> = claimed.iter().map(|d| (*d).clone()).collect();

            prop_assert_eq!(claimed.len(), unique.len(), "overlapping views in {}", module);
            prop_assert_eq!(&unique, module.class_dependencies_from_self());
        }
    }

    /// Property: A→B is listed by A as outgoing iff B lists it as incoming,
    /// and never points back to its origin
    #[test]
    fn prop_index_symmetry_without_self_dependencies(classes in class_graph_strategy()) {
        let modules = modularize(&classes, AggregationSettings::sequential());

        for dependency in modules.module_dependencies() {
            prop_assert_ne!(dependency.origin(), dependency.target());

            let origin = modules.get(dependency.origin()).unwrap();
            let target = modules.get(dependency.target()).unwrap();
            prop_assert!(origin.module_dependencies_from_self().contains(dependency));
            prop_assert!(target.module_dependencies_to_self().contains(dependency));
        }
    }

    /// Property: aggregation on the rayon pool gives the sequential result
    #[test]
    fn prop_parallel_matches_sequential(classes in class_graph_strategy()) {
        let sequential = modularize(&classes, AggregationSettings::sequential());
        let parallel = modularize(
            &classes,
            AggregationSettings { parallel: true, parallel_threshold: 1 },
        );

        prop_assert_eq!(
            sequential.module_dependencies().to_vec(),
            parallel.module_dependencies().to_vec()
        );
    }
}
