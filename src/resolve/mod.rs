//! Tag-driven media part resolution
//!
//! Walks tags → tagged metadata items → descendant items → media items →
//! media parts, applies library scoping and prefix rewriting, and returns
//! a deduplicated, sorted path list.

pub mod aggregate;
pub mod config;
pub mod expand;
pub mod lookup;
pub mod normalize;
pub mod pipeline;
pub mod selector;

pub use aggregate::aggregate;
pub use config::{split_list, FilterMode, FilterSpec};
pub use normalize::PathNormalizer;
pub use pipeline::ResolvePipeline;
pub use selector::{ItemSelector, Selection};
