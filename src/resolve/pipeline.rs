//! Resolution pipeline orchestration

use super::aggregate::aggregate;
use super::config::FilterSpec;
use super::lookup::resolve_scope;
use super::selector::{ItemSelector, Selection};
use crate::catalog::CatalogReader;
use crate::error::Result;
use crate::model::ItemId;

/// Resolves a [`FilterSpec`] against a catalog into a sorted path list
pub struct ResolvePipeline<C: CatalogReader> {
    spec: FilterSpec,
    catalog: C,
}

impl<C: CatalogReader> ResolvePipeline<C> {
    pub fn new(spec: FilterSpec, catalog: C) -> Self {
        Self { spec, catalog }
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Run the complete resolution
    ///
    /// Either every requested path comes back deduplicated and sorted, or
    /// a fatal error is returned and nothing is.
    pub fn resolve(&self) -> Result<Vec<String>> {
        log::debug!("Resolving {:?}", self.spec.mode);

        // Step 1: library names to section ids, before touching anything else
        let scope = resolve_scope(&self.catalog, &self.spec.libraries)?;

        // Step 2: select items, or files directly in all-items mode
        let selector = ItemSelector::new(&self.catalog, &scope);
        let raw_paths = match selector.select(&self.spec.mode)? {
            Selection::Items(items) => {
                log::debug!("Selected {} media items", items.len());
                self.fetch_parts(items)
            }
            Selection::Paths(paths) => paths,
        };

        // Step 3: rewrite prefixes, then dedup and sort
        let normalizer = self.spec.normalizer();
        let paths = aggregate(raw_paths.iter().filter_map(|p| normalizer.normalize(p)));

        log::debug!("Resolved {} paths", paths.len());
        Ok(paths)
    }

    /// Files of every item, concatenated; failed lookups contribute nothing
    fn fetch_parts(&self, items: impl IntoIterator<Item = ItemId>) -> Vec<String> {
        let mut parts = Vec::new();
        for item in items {
            match self.catalog.item_parts(item) {
                Ok(found) => {
                    log::debug!("Media item {} parts: {}", item, found.join(", "));
                    parts.extend(found);
                }
                Err(e) => log::error!("Failed to get media parts of media item {}: {}", item, e),
            }
        }
        parts
    }
}
