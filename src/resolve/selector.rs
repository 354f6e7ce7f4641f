//! Playable item selection

use super::config::FilterMode;
use super::expand::descendants;
use super::lookup::resolve_tag;
use crate::catalog::{CatalogReader, LibraryScope};
use crate::error::{LocatorError, Result};
use crate::model::{ItemId, NodeId};
use std::collections::BTreeSet;

/// What a selection produced; all-items mode skips straight to files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Items(BTreeSet<ItemId>),
    Paths(Vec<String>),
}

/// Selects playable items within a library scope
pub struct ItemSelector<'a, C: CatalogReader> {
    catalog: &'a C,
    scope: &'a LibraryScope,
}

impl<'a, C: CatalogReader> ItemSelector<'a, C> {
    pub fn new(catalog: &'a C, scope: &'a LibraryScope) -> Self {
        Self { catalog, scope }
    }

    /// Run the selection for `mode`
    ///
    /// Only the all-items query can fail the run; every other lookup
    /// failure is logged and contributes nothing.
    pub fn select(&self, mode: &FilterMode) -> Result<Selection> {
        match mode {
            FilterMode::ByTags(tags) => Ok(Selection::Items(self.tagged_items(tags))),
            FilterMode::NoTags => Ok(Selection::Items(self.untagged_items())),
            FilterMode::AllItems => self.all_parts().map(Selection::Paths),
        }
    }

    /// Union of the items matched by each tag
    pub fn tagged_items(&self, tags: &[String]) -> BTreeSet<ItemId> {
        let names: BTreeSet<&str> = tags.iter().map(String::as_str).collect();
        names
            .into_iter()
            .flat_map(|tag| self.items_for_tag(tag))
            .collect()
    }

    /// Items on nodes tagged with `tag` or descending from one
    pub fn items_for_tag(&self, tag: &str) -> BTreeSet<ItemId> {
        let Some(tag_id) = resolve_tag(self.catalog, tag) else {
            return BTreeSet::new();
        };

        let tagged = match self.catalog.tagged_nodes(tag_id) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::error!("Failed to get taggings for tag {}: {}", tag, e);
                return BTreeSet::new();
            }
        };

        let mut nodes: BTreeSet<NodeId> = BTreeSet::new();
        for node in tagged {
            if nodes.insert(node) {
                nodes.extend(descendants(self.catalog, node));
            }
        }

        let mut items = BTreeSet::new();
        for node in nodes {
            match self.catalog.node_items(node, self.scope) {
                Ok(found) => items.extend(found),
                Err(e) => log::error!(
                    "Failed to get media items of metadata item {} for tag {}: {}",
                    node,
                    tag,
                    e
                ),
            }
        }

        log::debug!("Tag {} matched {} media items", tag, items.len());
        items
    }

    /// Items with no tag on their node or any of its ancestors
    pub fn untagged_items(&self) -> BTreeSet<ItemId> {
        match self.catalog.untagged_items(self.scope) {
            Ok(items) => {
                log::debug!("Media items with no tags: {}", items.len());
                items.into_iter().collect()
            }
            Err(e) => {
                log::error!("Failed to query media items with no tags: {}", e);
                BTreeSet::new()
            }
        }
    }

    /// Every file in scope; failure here is fatal
    pub fn all_parts(&self) -> Result<Vec<String>> {
        let parts = self
            .catalog
            .all_parts(self.scope)
            .map_err(LocatorError::AllPartsQuery)?;
        log::debug!("Got a total of {} media parts", parts.len());
        Ok(parts)
    }
}
