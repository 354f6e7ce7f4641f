//! Parameterised SELECT composition
//!
//! Column names are `'static` so nothing user-supplied is ever spliced into
//! SQL; every value goes through a bound parameter.

use crate::model::SectionId;

/// Which library sections a query may return rows from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryScope {
    /// No scoping requested: every section
    All,

    /// Only rows belonging to one of these sections (never empty)
    Sections(Vec<SectionId>),
}

impl LibraryScope {
    pub fn is_scoped(&self) -> bool {
        matches!(self, LibraryScope::Sections(_))
    }
}

/// A SELECT statement with its conditions and bound values
#[derive(Debug, Clone)]
pub(crate) struct Select {
    base: &'static str,
    conditions: Vec<String>,
    params: Vec<i64>,
}

impl Select {
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            conditions: Vec::new(),
            params: Vec::new(),
        }
    }

    /// `column = ?`
    pub fn eq(mut self, column: &'static str, value: i64) -> Self {
        self.conditions.push(format!("{} = ?", column));
        self.params.push(value);
        self
    }

    /// A fixed condition without parameters
    pub fn filter(mut self, condition: &'static str) -> Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// `column IN (?, ...)` when scoped, nothing otherwise
    pub fn scoped(mut self, scope: &LibraryScope, column: &'static str) -> Self {
        if let LibraryScope::Sections(ids) = scope {
            self.conditions
                .push(format!("{} IN ({})", column, placeholders(ids.len())));
            self.params.extend(ids.iter().map(|id| id.get()));
        }
        self
    }

    pub fn sql(&self) -> String {
        if self.conditions.is_empty() {
            self.base.to_string()
        } else {
            format!("{} WHERE {}", self.base, self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[i64] {
        &self.params
    }
}

/// `?, ?, ?` for `count` values
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_select_has_no_where() {
        let select = Select::new("SELECT file FROM media_parts").scoped(&LibraryScope::All, "x");
        assert_eq!(select.sql(), "SELECT file FROM media_parts");
        assert!(select.params().is_empty());
    }

    #[test]
    fn test_conditions_are_joined_in_order() {
        let scope = LibraryScope::Sections(vec![SectionId(1), SectionId(4)]);
        let select = Select::new("SELECT id FROM media_items")
            .eq("metadata_item_id", 42)
            .scoped(&scope, "library_section_id");

        assert_eq!(
            select.sql(),
            "SELECT id FROM media_items WHERE metadata_item_id = ? AND library_section_id IN (?, ?)"
        );
        assert_eq!(select.params(), &[42, 1, 4]);
    }

    #[test]
    fn test_fixed_filter_binds_nothing() {
        let select = Select::new("SELECT id FROM media_items").filter("metadata_item_id > 0");
        assert_eq!(select.sql(), "SELECT id FROM media_items WHERE metadata_item_id > 0");
        assert!(select.params().is_empty());
    }
}
