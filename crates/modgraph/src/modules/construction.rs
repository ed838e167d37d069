//! Building a ModuleGraph from raw modules.

use std::collections::BTreeMap;
use std::sync::Arc;

use modgraph_config::AggregationSettings;
use rayon::prelude::*;
use rustc_hash::FxHashMap as HashMap;

use super::graph::{GraphInner, ModuleGraph};
use crate::class::{ClassDependency, ClassId};
use crate::dependency::ModuleDependency;
use crate::descriptor::Descriptor;
use crate::module::RawModule;
use crate::{Error, Result};

/// Outgoing class dependencies of one module, keyed by the index of the
/// module owning the target class.
type Buckets = BTreeMap<usize, Vec<ClassDependency>>;

impl<D: Descriptor> ModuleGraph<D> {
    /// Validates uniqueness and aggregates module dependencies.
    ///
    /// `raw` must be ordered by index, starting at zero.
    pub(crate) fn assemble(raw: Vec<RawModule<D>>, settings: &AggregationSettings) -> Result<Self> {
        debug_assert!(raw.iter().enumerate().all(|(i, m)| m.index == i));

        let mut by_identifier = HashMap::default();
        let mut by_name = HashMap::default();
        for module in &raw {
            if by_identifier
                .insert(module.identifier.clone(), module.index)
                .is_some()
            {
                return Err(Error::DuplicateIdentifier {
                    identifier: module.identifier.clone(),
                });
            }
            if by_name
                .insert(module.descriptor.name().to_string(), module.index)
                .is_some()
            {
                return Err(Error::DuplicateName {
                    name: module.descriptor.name().to_string(),
                });
            }
        }

        let owners: HashMap<&ClassId, usize> = raw
            .iter()
            .flat_map(|module| module.class_ids().map(move |id| (id, module.index)))
            .collect();

        let bucket = |module: &RawModule<D>| -> Buckets {
            let mut buckets = Buckets::new();
            for dependency in &module.from_self {
                if let Some(&owner) = owners.get(dependency.target()) {
                    buckets.entry(owner).or_default().push(dependency.clone());
                }
            }
            buckets
        };

        let parallel = settings.runs_parallel(raw.len());
        let buckets: Vec<Buckets> = if parallel {
            raw.par_iter().map(bucket).collect()
        } else {
            raw.iter().map(bucket).collect()
        };

        let mut from_self = vec![Vec::new(); raw.len()];
        let mut to_self = vec![Vec::new(); raw.len()];
        let mut dependencies = Vec::new();

        for (origin, targets) in buckets.into_iter().enumerate() {
            for (target, candidates) in targets {
                let Some(dependency) =
                    ModuleDependency::try_create(&raw[origin], &raw[target], candidates)
                else {
                    continue;
                };
                let dependency = Arc::new(dependency);
                from_self[origin].push(Arc::clone(&dependency));
                to_self[target].push(Arc::clone(&dependency));
                dependencies.push(dependency);
            }
        }

        tracing::debug!(
            "Aggregated {} module dependencies between {} modules ({})",
            dependencies.len(),
            raw.len(),
            if parallel { "parallel" } else { "sequential" }
        );

        let modules = raw
            .into_iter()
            .zip(from_self.into_iter().zip(to_self))
            .map(|(module, (from_self, to_self))| module.finish(from_self, to_self))
            .collect();

        Ok(Self {
            inner: Arc::new(GraphInner {
                modules,
                by_identifier,
                by_name,
                dependencies,
            }),
        })
    }
}
