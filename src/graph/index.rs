//! Adjacency index over parsed relationships.

use std::collections::HashMap;

use crate::parser::{ModuleName, Relationship};

/// Relationships grouped by the module of their upstream (dependency) side.
///
/// Input order is preserved within each group. The index is immutable once
/// built; the walker only reads from it.
///
/// # Example
///
/// ```
/// use modscope::graph::EdgeIndex;
/// use modscope::parser::parse_str;
///
/// let rels = parse_str("app@v1 lib@v1\ntool@v2 lib@v2\n").unwrap();
/// let index = EdgeIndex::build(&rels);
///
/// assert_eq!(index.edges_for("lib").len(), 2);
/// assert!(index.edges_for("app").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    by_upstream_module: HashMap<ModuleName, Vec<Relationship>>,
}

impl EdgeIndex {
    /// Builds the index from a slice of relationships.
    pub fn build(relationships: &[Relationship]) -> Self {
        relationships.iter().cloned().collect()
    }

    /// Returns every relationship whose upstream is `module`, in input order.
    ///
    /// Unknown modules yield an empty slice.
    pub fn edges_for(&self, module: &str) -> &[Relationship] {
        self.by_upstream_module
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct upstream modules.
    pub fn module_count(&self) -> usize {
        self.by_upstream_module.len()
    }

    /// Total number of indexed relationships.
    pub fn edge_count(&self) -> usize {
        self.by_upstream_module.values().map(Vec::len).sum()
    }

    /// Returns true if no relationships were indexed.
    pub fn is_empty(&self) -> bool {
        self.by_upstream_module.is_empty()
    }
}

impl FromIterator<Relationship> for EdgeIndex {
    fn from_iter<I: IntoIterator<Item = Relationship>>(iter: I) -> Self {
        let mut by_upstream_module: HashMap<ModuleName, Vec<Relationship>> = HashMap::new();
        for rel in iter {
            by_upstream_module
                .entry(rel.upstream.module.clone())
                .or_default()
                .push(rel);
        }
        Self { by_upstream_module }
    }
}
