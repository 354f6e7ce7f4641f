//! Typed identifiers for catalog rows
//!
//! The catalog is read-only, so the model only carries the ids that flow
//! between lookups; paths are plain strings.

mod ids;

pub use ids::{ItemId, NodeId, SectionId, TagId};
