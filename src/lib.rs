//! Media Locator - list the files behind tagged Plex catalog items
//!
//! Reads the Plex library database (read-only) and resolves the media part
//! paths of items selected by tag, by absence of tags, or unconditionally,
//! optionally limited to some library sections.

pub mod catalog;
pub mod error;
pub mod model;
pub mod output;
pub mod resolve;

pub use catalog::{CatalogReader, LibraryScope, SqliteCatalog};
pub use error::LocatorError;
pub use output::OutputTarget;
pub use resolve::{FilterMode, FilterSpec, ResolvePipeline};
