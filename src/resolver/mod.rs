//! Depth-first import resolution over a registry of configuration units.
//!
//! Resolution walks the import graph once, merging bean declarations in a
//! single deterministic order: a unit's own beans first, then its imports in
//! declared (or selector-returned) order. The traversal keeps no state across
//! calls; the path and merged-unit bookkeeping live only for the duration of
//! one [`Resolver::resolve`] invocation.

mod context;
mod error;
mod options;

pub use context::ResolvedContext;
pub use error::ResolveError;
pub use options::{MergePolicy, ResolveOptions};

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::api::{
    BeanDeclaration, ImportDeclaration, SelectionContext, UnitName, UnitRegistry,
};

use context::ResolvedBean;

/// Resolves a root configuration unit into a fully merged [`ResolvedContext`].
///
/// The resolver only reads the registry, so independent resolutions over the
/// same registry may run in parallel, each writing to its own context.
pub struct Resolver<'a> {
    registry: &'a UnitRegistry,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the provided registry with default options.
    #[must_use]
    pub fn new(registry: &'a UnitRegistry) -> Self {
        Self {
            registry,
            options: ResolveOptions::default(),
        }
    }

    /// Replace the options used by this resolver.
    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve the named root unit and every unit it transitively imports.
    ///
    /// Fails with [`ResolveError::UnresolvedUnit`] when a referenced name has
    /// no registered definition and with [`ResolveError::CyclicImport`] when
    /// the import graph revisits a unit already on the current path. On
    /// failure the partially merged context is discarded.
    pub fn resolve(&self, root: impl Into<UnitName>) -> Result<ResolvedContext, ResolveError> {
        let root = root.into();
        debug!(root = %root, "resolving configuration unit");
        let mut traversal = Traversal {
            registry: self.registry,
            options: &self.options,
            beans: IndexMap::new(),
            path: Vec::new(),
            merged: HashSet::new(),
        };
        traversal.merge_unit(&root, None)?;
        debug!(root = %root, beans = traversal.beans.len(), "resolution complete");
        Ok(ResolvedContext::new(traversal.beans))
    }
}

/// Transient state for one depth-first resolution pass.
struct Traversal<'a> {
    registry: &'a UnitRegistry,
    options: &'a ResolveOptions,
    beans: IndexMap<String, ResolvedBean>,
    /// Units on the current recursion path, for cycle reporting.
    path: Vec<UnitName>,
    /// Units already merged into the context; re-encounters are skipped.
    merged: HashSet<UnitName>,
}

impl Traversal<'_> {
    fn merge_unit(
        &mut self,
        name: &UnitName,
        requested_by: Option<&UnitName>,
    ) -> Result<(), ResolveError> {
        if self.path.contains(name) {
            let start = self
                .path
                .iter()
                .position(|entry| entry == name)
                .unwrap_or(0);
            let mut cycle = self.path[start..].to_vec();
            cycle.push(name.clone());
            return Err(ResolveError::CyclicImport { path: cycle });
        }
        if self.merged.contains(name) {
            trace!(unit = %name, "unit already merged, skipping");
            return Ok(());
        }
        let Some(registered) = self.registry.unit(name) else {
            return Err(ResolveError::UnresolvedUnit {
                name: name.clone(),
                requested_by: requested_by.cloned(),
            });
        };

        let unit = registered.unit();
        self.path.push(name.clone());
        self.merged.insert(name.clone());
        debug!(unit = %name, beans = unit.beans().len(), "merging configuration unit");

        for declaration in unit.beans() {
            self.merge_bean(name, declaration)?;
        }

        match unit.import() {
            None => {}
            Some(ImportDeclaration::Static(imports)) => {
                for import in imports {
                    self.merge_unit(import, Some(name))?;
                }
            }
            Some(ImportDeclaration::Selector(selector)) => {
                let selected = selector.select(SelectionContext::new(unit.descriptor()));
                trace!(unit = %name, selected = ?selected, "selector chose imports");
                for import in &selected {
                    self.merge_unit(import, Some(name))?;
                }
            }
        }

        self.path.pop();
        Ok(())
    }

    fn merge_bean(
        &mut self,
        unit: &UnitName,
        declaration: &BeanDeclaration,
    ) -> Result<(), ResolveError> {
        let bean = declaration.name();
        if let Some(previous) = self.beans.get(bean) {
            match self.options.merge_policy {
                MergePolicy::Reject => {
                    return Err(ResolveError::DuplicateBean {
                        bean: bean.to_string(),
                        unit: unit.clone(),
                        previous_unit: previous.source.clone(),
                    });
                }
                MergePolicy::LastWins => {
                    debug!(bean, unit = %unit, previous = %previous.source, "overwriting bean");
                }
            }
        }
        trace!(bean, unit = %unit, "producing bean value");
        self.beans.insert(
            bean.to_string(),
            ResolvedBean {
                value: declaration.produce(),
                source: unit.clone(),
            },
        );
        Ok(())
    }
}
