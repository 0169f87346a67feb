//! Import collection for generated files.

use indexmap::IndexSet;

/// Import path of the `write!` target trait used by every formatting fragment.
pub const FORMAT_IMPORT: &str = "std::fmt::Write";

/// Import path of the map type taken by the population function.
pub const FORM_MAP_IMPORT: &str = "std::collections::HashMap";

/// Tracks the module paths required by the fragments emitted so far.
///
/// Insertion is idempotent and the set keeps insertion order, so rendering
/// it is deterministic.
///
/// # Example
///
/// ```
/// use structform_codegen::generation::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("std::fmt::Write");
/// imports.add("std::collections::HashMap");
/// imports.add("std::fmt::Write");
///
/// assert_eq!(imports.len(), 2);
/// assert_eq!(
///     imports.render(),
///     "use std::fmt::Write;\nuse std::collections::HashMap;\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    paths: IndexSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Adding a path twice is a no-op.
    pub fn add(&mut self, path: &str) {
        if !self.paths.contains(path) {
            self.paths.insert(path.to_string());
        }
    }

    /// Merge another set into this one, keeping this set's order first.
    pub fn merge(&mut self, other: &ImportSet) {
        for path in &other.paths {
            self.add(path);
        }
    }

    /// Check if a path is already imported.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over all import paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Render one `use` declaration per path.
    pub fn render(&self) -> String {
        self.iter().map(|path| format!("use {};\n", path)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut imports = ImportSet::new();
        for _ in 0..5 {
            imports.add(FORMAT_IMPORT);
        }

        assert_eq!(imports.len(), 1);
        assert!(imports.contains(FORMAT_IMPORT));
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = ImportSet::new();
        a.add("super::*");
        a.add(FORMAT_IMPORT);

        let mut b = ImportSet::new();
        b.add(FORM_MAP_IMPORT);
        b.add(FORMAT_IMPORT);

        a.merge(&b);

        let paths: Vec<&str> = a.iter().collect();
        assert_eq!(paths, vec!["super::*", FORMAT_IMPORT, FORM_MAP_IMPORT]);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ImportSet::new().render(), "");
        assert!(ImportSet::new().is_empty());
    }
}
