//! Name to id resolution for library sections and tags

use crate::catalog::{CatalogReader, LibraryScope};
use crate::error::{LocatorError, Result};
use crate::model::TagId;

/// Resolve library section names into a scope
///
/// No names means unscoped. Names that match no section at all are a
/// configuration error, never an empty scope.
pub fn resolve_scope<C: CatalogReader>(catalog: &C, names: &[String]) -> Result<LibraryScope> {
    if names.is_empty() {
        return Ok(LibraryScope::All);
    }

    let ids = catalog
        .section_ids(names)
        .map_err(LocatorError::LibraryLookup)?;

    if ids.is_empty() {
        return Err(LocatorError::UnknownLibraries(names.to_vec()));
    }

    log::debug!("Libraries {:?} resolved to section ids {:?}", names, ids);
    Ok(LibraryScope::Sections(ids))
}

/// Resolve a tag name; unknown tags and failed lookups both yield `None`
pub fn resolve_tag<C: CatalogReader>(catalog: &C, name: &str) -> Option<TagId> {
    match catalog.tag_id(name) {
        Ok(Some(id)) => {
            log::debug!("Tag {} has id {}", name, id);
            Some(id)
        }
        Ok(None) => {
            log::debug!("Tag {} not found", name);
            None
        }
        Err(e) => {
            log::error!("Failed to look up tag {}: {}", name, e);
            None
        }
    }
}
