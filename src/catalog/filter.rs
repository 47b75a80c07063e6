//! Script list visibility
//!
//! Presentation-only: the filter decides which script entries are shown,
//! never what is selected, and plays no part in command compilation.

use super::{Catalog, ScriptEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptFilter {
    /// Case-insensitive prefix matched against display names
    pub query: String,
    /// Show non-featured scripts when no query is typed
    pub show_all: bool,
}

impl ScriptFilter {
    pub fn new(show_all: bool) -> Self {
        Self {
            query: String::new(),
            show_all,
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Whether an entry is hidden under the current filter
    pub fn is_hidden(&self, script: &ScriptEntry) -> bool {
        if self.query.is_empty() {
            return !(self.show_all || script.entry.featured);
        }
        !script
            .entry
            .name
            .to_lowercase()
            .starts_with(&self.query.to_lowercase())
    }

    /// Visible scripts, in catalog order
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ScriptEntry> {
        catalog
            .scripts
            .iter()
            .filter(|script| !self.is_hidden(script))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(scripts: &[&'a ScriptEntry]) -> Vec<&'a str> {
        scripts.iter().map(|s| s.entry.name.as_str()).collect()
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let filter = ScriptFilter {
            query: "Old".to_string(),
            show_all: false,
        };
        assert_eq!(
            names(&filter.visible(&catalog)),
            vec!["Old Italic", "Old Persian", "Old South Arabian", "Old Turkic"]
        );

        let lower = ScriptFilter {
            query: "old".to_string(),
            show_all: false,
        };
        assert_eq!(filter.visible(&catalog), lower.visible(&catalog));
    }

    #[test]
    fn test_prefix_not_substring() {
        let catalog = Catalog::builtin().unwrap();
        let filter = ScriptFilter {
            query: "tai".to_string(),
            show_all: false,
        };
        assert_eq!(
            names(&filter.visible(&catalog)),
            vec!["Tai Le", "Tai Tham", "Tai Viet"]
        );
    }

    #[test]
    fn test_empty_query_shows_featured_unless_show_all() {
        let catalog = Catalog::builtin().unwrap();
        let featured = ScriptFilter::new(false).visible(&catalog);
        assert!(featured.iter().all(|s| s.entry.featured));
        assert!(featured.iter().any(|s| s.entry.value == "Latin"));

        let all = ScriptFilter::new(true).visible(&catalog);
        assert_eq!(all.len(), catalog.scripts.len());
    }
}
