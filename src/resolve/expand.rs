//! Metadata tree expansion

use crate::catalog::CatalogReader;
use crate::model::NodeId;
use std::collections::HashSet;

/// All transitive descendants of `root`, excluding `root` itself
///
/// Walks an explicit worklist instead of recursing. A node reached twice
/// means the catalog's parent links form a cycle; it is reported and not
/// expanded again. A failed child lookup drops that branch only.
pub fn descendants<C: CatalogReader>(catalog: &C, root: NodeId) -> Vec<NodeId> {
    let mut found = Vec::new();
    let mut visited = HashSet::from([root]);
    let mut pending = vec![root];

    while let Some(parent) = pending.pop() {
        let children = match catalog.child_nodes(parent) {
            Ok(children) => children,
            Err(e) => {
                log::error!("Failed to get children of metadata item {}: {}", parent, e);
                continue;
            }
        };

        for child in children {
            if !visited.insert(child) {
                log::warn!(
                    "Metadata item {} reached twice below {}, parent links form a cycle",
                    child,
                    root
                );
                continue;
            }
            found.push(child);
            pending.push(child);
        }
    }

    found
}
