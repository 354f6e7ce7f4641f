//! Read-only access to the media server catalog
//!
//! [`CatalogReader`] lists every lookup the resolver performs. The SQLite
//! implementation is the only one used in production; tests substitute
//! readers that fail on purpose.

mod query;
mod sqlite;

#[cfg(test)]
pub(crate) mod fixture;

pub use query::LibraryScope;
pub use sqlite::SqliteCatalog;

use crate::model::{ItemId, NodeId, SectionId, TagId};

/// Lookups against the catalog's six relations
///
/// Every method is a single read; none of them mutate the store.
pub trait CatalogReader {
    /// Ids of the library sections whose name is in `names`
    ///
    /// Unknown names are simply absent from the result.
    fn section_ids(&self, names: &[String]) -> rusqlite::Result<Vec<SectionId>>;

    /// Id of the tag called `name`, if any
    fn tag_id(&self, name: &str) -> rusqlite::Result<Option<TagId>>;

    /// Metadata nodes carrying `tag` directly
    fn tagged_nodes(&self, tag: TagId) -> rusqlite::Result<Vec<NodeId>>;

    /// Direct children of `parent`
    fn child_nodes(&self, parent: NodeId) -> rusqlite::Result<Vec<NodeId>>;

    /// Playable items owned by `node` within `scope`
    fn node_items(&self, node: NodeId, scope: &LibraryScope) -> rusqlite::Result<Vec<ItemId>>;

    /// Playable items whose metadata node has no tagging, neither on
    /// itself nor on any ancestor
    fn untagged_items(&self, scope: &LibraryScope) -> rusqlite::Result<Vec<ItemId>>;

    /// Files backing `item`, in catalog order
    fn item_parts(&self, item: ItemId) -> rusqlite::Result<Vec<String>>;

    /// Every file in the catalog within `scope`
    fn all_parts(&self, scope: &LibraryScope) -> rusqlite::Result<Vec<String>>;
}
