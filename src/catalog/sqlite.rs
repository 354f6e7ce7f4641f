//! Plex library database reader

use super::query::{placeholders, LibraryScope, Select};
use super::CatalogReader;
use crate::error::{LocatorError, Result};
use crate::model::{ItemId, NodeId, SectionId, TagId};
use rusqlite::{params_from_iter, Connection, OpenFlags, OptionalExtension};
use std::path::Path;

/// Media items plus `tagged`: every node carrying a tag, directly or
/// through an ancestor. `UNION` deduplicates, so cyclic parent links
/// still terminate.
const UNTAGGED_ITEMS: &str = "
WITH RECURSIVE tagged(id) AS (
    SELECT metadata_item_id FROM taggings WHERE metadata_item_id IS NOT NULL
    UNION
    SELECT m.id FROM metadata_items m JOIN tagged t ON m.parent_id = t.id
)
SELECT id FROM media_items";

/// Catalog backed by a SQLite connection opened read-only
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Open the catalog at `path` without write access
    pub fn open(path: &Path) -> Result<Self> {
        match path.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(LocatorError::CatalogNotFound(path.to_path_buf())),
            Err(source) => {
                return Err(LocatorError::CatalogAccess {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }

        log::debug!("Opening catalog {:?}", path);
        let catalog = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .and_then(Self::from_connection)
        .map_err(|source| LocatorError::CatalogOpen {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(catalog)
    }

    /// Wrap an existing connection, probing that it is a readable database
    pub fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |_| Ok(()))?;
        Ok(Self { conn })
    }

    /// Run a one-column id query; rows that do not hold an integer are skipped
    fn query_ids<T: From<i64>>(&self, select: &Select) -> rusqlite::Result<Vec<T>> {
        let sql = select.sql();
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params_from_iter(select.params()), |row| {
            row.get::<_, i64>(0)
        })?;

        let mut ids = Vec::new();
        for row in rows {
            match row {
                Ok(id) => ids.push(T::from(id)),
                Err(e) => log::warn!("Skipping unreadable row of `{}`: {}", sql, e),
            }
        }
        Ok(ids)
    }

    /// Run a one-column file query; NULL files are skipped
    fn query_files(&self, select: &Select) -> rusqlite::Result<Vec<String>> {
        let sql = select.sql();
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params_from_iter(select.params()), |row| {
            row.get::<_, Option<String>>(0)
        })?;

        let mut files = Vec::new();
        for row in rows {
            match row {
                Ok(Some(file)) => files.push(file),
                Ok(None) => {}
                Err(e) => log::warn!("Skipping unreadable row of `{}`: {}", sql, e),
            }
        }
        Ok(files)
    }
}

impl CatalogReader for SqliteCatalog {
    fn section_ids(&self, names: &[String]) -> rusqlite::Result<Vec<SectionId>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT id FROM library_sections WHERE name IN ({})",
            placeholders(names.len())
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(names), |row| row.get::<_, i64>(0))?;

        let mut ids = Vec::new();
        for row in rows {
            match row {
                Ok(id) => ids.push(SectionId(id)),
                Err(e) => log::warn!("Skipping unreadable library section row: {}", e),
            }
        }
        Ok(ids)
    }

    fn tag_id(&self, name: &str) -> rusqlite::Result<Option<TagId>> {
        self.conn
            .prepare_cached("SELECT id FROM tags WHERE tag = ? ORDER BY id LIMIT 1")?
            .query_row([name], |row| row.get::<_, i64>(0))
            .optional()
            .map(|id| id.map(TagId))
    }

    fn tagged_nodes(&self, tag: TagId) -> rusqlite::Result<Vec<NodeId>> {
        self.query_ids(
            &Select::new("SELECT metadata_item_id FROM taggings").eq("tag_id", tag.get()),
        )
    }

    fn child_nodes(&self, parent: NodeId) -> rusqlite::Result<Vec<NodeId>> {
        self.query_ids(
            &Select::new("SELECT id FROM metadata_items").eq("parent_id", parent.get()),
        )
    }

    fn node_items(&self, node: NodeId, scope: &LibraryScope) -> rusqlite::Result<Vec<ItemId>> {
        self.query_ids(
            &Select::new("SELECT id FROM media_items")
                .eq("metadata_item_id", node.get())
                .scoped(scope, "library_section_id"),
        )
    }

    fn untagged_items(&self, scope: &LibraryScope) -> rusqlite::Result<Vec<ItemId>> {
        self.query_ids(
            &Select::new(UNTAGGED_ITEMS)
                .filter("metadata_item_id NOT IN (SELECT id FROM tagged)")
                .scoped(scope, "library_section_id"),
        )
    }

    fn item_parts(&self, item: ItemId) -> rusqlite::Result<Vec<String>> {
        self.query_files(
            &Select::new("SELECT file FROM media_parts").eq("media_item_id", item.get()),
        )
    }

    fn all_parts(&self, scope: &LibraryScope) -> rusqlite::Result<Vec<String>> {
        let select = if scope.is_scoped() {
            Select::new(
                "SELECT mp.file FROM media_parts mp JOIN media_items mi ON mp.media_item_id = mi.id",
            )
            .scoped(scope, "mi.library_section_id")
        } else {
            Select::new("SELECT file FROM media_parts")
        };
        self.query_files(&select)
    }
}
