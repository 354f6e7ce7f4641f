//! In-memory catalogs for unit tests

use super::SqliteCatalog;
use rusqlite::{params, Connection};

const SCHEMA: &str = "
CREATE TABLE library_sections (id INTEGER PRIMARY KEY, name TEXT);
CREATE TABLE tags (id INTEGER PRIMARY KEY, tag TEXT);
CREATE TABLE taggings (id INTEGER PRIMARY KEY, tag_id INTEGER, metadata_item_id INTEGER);
CREATE TABLE metadata_items (id INTEGER PRIMARY KEY, parent_id INTEGER);
CREATE TABLE media_items (id INTEGER PRIMARY KEY, metadata_item_id INTEGER, library_section_id INTEGER);
CREATE TABLE media_parts (id INTEGER PRIMARY KEY, media_item_id INTEGER, file TEXT);
";

pub struct CatalogBuilder {
    conn: Connection,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        Self { conn }
    }

    pub fn section(self, id: i64, name: &str) -> Self {
        self.conn
            .execute("INSERT INTO library_sections (id, name) VALUES (?1, ?2)", params![id, name])
            .unwrap();
        self
    }

    pub fn tag(self, id: i64, name: &str) -> Self {
        self.conn
            .execute("INSERT INTO tags (id, tag) VALUES (?1, ?2)", params![id, name])
            .unwrap();
        self
    }

    pub fn tagging(self, tag_id: i64, node_id: i64) -> Self {
        self.conn
            .execute(
                "INSERT INTO taggings (tag_id, metadata_item_id) VALUES (?1, ?2)",
                params![tag_id, node_id],
            )
            .unwrap();
        self
    }

    pub fn null_tagging(self, tag_id: i64) -> Self {
        self.conn
            .execute("INSERT INTO taggings (tag_id, metadata_item_id) VALUES (?1, NULL)", [tag_id])
            .unwrap();
        self
    }

    pub fn node(self, id: i64, parent: Option<i64>) -> Self {
        self.conn
            .execute(
                "INSERT INTO metadata_items (id, parent_id) VALUES (?1, ?2)",
                params![id, parent],
            )
            .unwrap();
        self
    }

    pub fn item(self, id: i64, node_id: i64, section_id: i64) -> Self {
        self.conn
            .execute(
                "INSERT INTO media_items (id, metadata_item_id, library_section_id) VALUES (?1, ?2, ?3)",
                params![id, node_id, section_id],
            )
            .unwrap();
        self
    }

    pub fn part(self, item_id: i64, file: &str) -> Self {
        self.conn
            .execute(
                "INSERT INTO media_parts (media_item_id, file) VALUES (?1, ?2)",
                params![item_id, file],
            )
            .unwrap();
        self
    }

    pub fn null_part(self, item_id: i64) -> Self {
        self.conn
            .execute("INSERT INTO media_parts (media_item_id, file) VALUES (?1, NULL)", [item_id])
            .unwrap();
        self
    }

    pub fn build(self) -> SqliteCatalog {
        SqliteCatalog::from_connection(self.conn).unwrap()
    }
}

/// A small Plex-like catalog
///
/// - Movies (1): Heat (node 4, "action"), Up (node 5, "kids" + "favorite")
/// - TV Shows (2): Bluey (node 1, "kids") > season (2) > episodes 3 and 6;
///   node 8 is an untagged special whose item has no files
/// - Home Videos (3): untagged birthday clip (node 7)
pub fn sample_catalog() -> SqliteCatalog {
    CatalogBuilder::new()
        .section(1, "Movies")
        .section(2, "TV Shows")
        .section(3, "Home Videos")
        .tag(100, "kids")
        .tag(101, "action")
        .tag(102, "favorite")
        .node(1, None)
        .node(2, Some(1))
        .node(3, Some(2))
        .node(6, Some(2))
        .node(4, None)
        .node(5, None)
        .node(7, None)
        .node(8, None)
        .tagging(100, 1)
        .tagging(101, 4)
        .tagging(100, 5)
        .tagging(102, 5)
        .item(10, 3, 2)
        .item(11, 6, 2)
        .item(20, 4, 1)
        .item(30, 5, 1)
        .item(50, 7, 3)
        .item(60, 8, 2)
        .part(10, "/lib/shows/bluey/s01e01.mkv")
        .part(11, "/lib/shows/bluey/s01e02.mkv")
        .part(11, "/lib/shows/bluey/s01e02.part2.mkv")
        .part(20, "/lib/movies/heat.mkv")
        .part(30, "/lib/movies/up.mkv")
        .part(50, "/lib/home/birthday.mp4")
        .build()
}
