mod concurrent_tests;
mod property_tests;

use crate::{Class, ClassDependency, ClassGraph, ClassId};

pub(crate) fn id(name: &str) -> ClassId {
    ClassId::new(name).unwrap()
}

pub(crate) fn class(name: &str) -> Class {
    Class::new(id(name))
}

pub(crate) fn dependency(origin: &str, target: &str) -> ClassDependency {
    ClassDependency::new(id(origin), id(target), format!("{origin} uses {target}"))
}

pub(crate) fn class_graph(classes: &[&str], dependencies: &[(&str, &str)]) -> ClassGraph {
    ClassGraph::builder()
        .classes(classes.iter().map(|name| class(name)))
        .dependencies(dependencies.iter().map(|(o, t)| dependency(o, t)))
        .build()
        .unwrap()
}

/// Ten modules under `app.`, a few unmatched classes under `lib.` and
/// dependencies on classes outside the snapshot.
pub(crate) fn generated_class_graph() -> ClassGraph {
    let mut classes = Vec::new();
    for module in 0..10 {
        for member in 0..5 {
            classes.push(format!("app.m{module}.C{member}"));
        }
    }
    for member in 0..3 {
        classes.push(format!("lib.L{member}"));
    }

    let mut dependencies = Vec::new();
    let mut seed: u64 = 17;
    for origin in &classes {
        for _ in 0..4 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let pick = (seed >> 33) as usize % (classes.len() + 2);
            let target = match classes.get(pick) {
                Some(target) => target.clone(),
                None => format!("ext.E{}", pick - classes.len()),
            };
            if &target != origin {
                dependencies.push(dependency(origin, &target));
            }
        }
    }

    ClassGraph::builder()
        .classes(classes.iter().map(|name| class(name)))
        .dependencies(dependencies)
        .build()
        .unwrap()
}
