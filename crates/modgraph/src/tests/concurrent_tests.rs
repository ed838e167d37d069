use std::collections::BTreeSet;
use std::thread;

use super::generated_class_graph;
use crate::{ClassDependency, define_by_namespaces};

/// Concurrent first access to the lazy incoming view resolves it once
#[test]
fn concurrent_first_access_shares_one_result() {
    let classes = generated_class_graph();
    let modules = define_by_namespaces("app.(*)")
        .unwrap()
        .modularize(&classes)
        .unwrap();
    let module = modules.by_identifier(&["m3"]).unwrap();

    let seen: Vec<*const BTreeSet<ClassDependency>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| std::ptr::from_ref(module.class_dependencies_to_self()) as usize))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap() as *const BTreeSet<ClassDependency>)
            .collect()
    });

    let first = seen[0];
    assert!(seen.iter().all(|&pointer| pointer == first));
    assert!(std::ptr::eq(first, module.class_dependencies_to_self()));
}

/// Module graphs and class graphs are shared read-only across threads
#[test]
fn graphs_can_be_queried_from_many_threads() {
    let classes = generated_class_graph();
    let modules = define_by_namespaces("app.(*)")
        .unwrap()
        .modularize(&classes)
        .unwrap();

    let expected: Vec<usize> = modules
        .iter()
        .map(|module| module.class_dependencies_to_self().len())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let modules = modules.clone();
            thread::spawn(move || {
                modules
                    .iter()
                    .map(|module| module.class_dependencies_to_self().len())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
