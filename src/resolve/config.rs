//! Resolution configuration

use super::normalize::PathNormalizer;

/// Which items a run selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMode {
    /// Items tagged (directly or through an ancestor) with any of these tags
    ByTags(Vec<String>),

    /// Items with no tag on their metadata node or any ancestor
    NoTags,

    /// Every media part, skipping item selection
    AllItems,
}

/// Configuration for one resolution run
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Selection mode
    pub mode: FilterMode,

    /// Library section names to restrict to (empty = every library)
    pub libraries: Vec<String>,

    /// Prefix joined in front of every path
    pub add_prefix: Option<String>,

    /// Literal prefix removed from every path before `add_prefix`
    pub strip_prefix: Option<String>,
}

impl FilterSpec {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            libraries: Vec::new(),
            add_prefix: None,
            strip_prefix: None,
        }
    }

    pub fn by_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FilterMode::ByTags(tags.into_iter().map(Into::into).collect()))
    }

    pub fn no_tags() -> Self {
        Self::new(FilterMode::NoTags)
    }

    pub fn all_items() -> Self {
        Self::new(FilterMode::AllItems)
    }

    /// Restrict the run to these library sections
    pub fn with_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.libraries = libraries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_add_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.add_prefix = Some(prefix.into());
        self
    }

    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// Path rewriting configured by this spec
    pub fn normalizer(&self) -> PathNormalizer {
        PathNormalizer::new(self.strip_prefix.clone(), self.add_prefix.clone())
    }
}

/// Split a comma-separated list, trimming items and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
