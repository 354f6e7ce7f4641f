//! Path prefix rewriting

use std::path::Path;

/// Rewrites catalog paths for the consumer's filesystem layout
///
/// The strip prefix is removed first (a literal, not segment-aware, match),
/// then the add prefix is joined in front with exactly one `/`.
#[derive(Debug, Clone, Default)]
pub struct PathNormalizer {
    strip_prefix: Option<String>,
    add_prefix: Option<String>,
}

impl PathNormalizer {
    /// Empty prefixes are treated as absent
    pub fn new(strip_prefix: Option<String>, add_prefix: Option<String>) -> Self {
        Self {
            strip_prefix: strip_prefix.filter(|p| !p.is_empty()),
            add_prefix: add_prefix.filter(|p| !p.is_empty()),
        }
    }

    /// Rewrite `path`; `None` when nothing is left after stripping
    pub fn normalize(&self, path: &str) -> Option<String> {
        let stripped = match &self.strip_prefix {
            Some(prefix) => path.strip_prefix(prefix.as_str()).unwrap_or(path),
            None => path,
        }
        .trim();

        if stripped.is_empty() {
            return None;
        }

        match &self.add_prefix {
            Some(prefix) => Some(join_prefix(prefix, stripped)),
            None => Some(stripped.to_string()),
        }
    }
}

fn join_prefix(prefix: &str, path: &str) -> String {
    // Already under the prefix: leave it alone so normalizing twice is a no-op
    if Path::new(path).starts_with(prefix) {
        return path.to_string();
    }

    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
