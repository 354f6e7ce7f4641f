//! Final deduplication and ordering of resolved paths

use std::collections::BTreeSet;

/// Deduplicate paths and sort them byte-wise ascending
pub fn aggregate<I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    paths
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
