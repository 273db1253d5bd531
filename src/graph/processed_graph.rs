//! The filtered, grouped graph produced by the reachability walk.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::parser::{ModuleAndVersion, ModuleName, Relationship};

/// The set of versions observed for one module during the walk.
///
/// The owning module is implied by the key this subgraph is stored under in
/// [`ProcessedGraph::subgraphs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subgraph {
    contains: HashSet<ModuleAndVersion>,
}

impl Subgraph {
    /// Creates an empty subgraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Returns false if it was already present.
    pub fn insert(&mut self, node: ModuleAndVersion) -> bool {
        self.contains.insert(node)
    }

    /// Returns true if the node is part of this subgraph.
    pub fn contains(&self, node: &ModuleAndVersion) -> bool {
        self.contains.contains(node)
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.contains.len()
    }

    /// Returns true if no node was recorded.
    ///
    /// This is the case for modules that were reached but are never
    /// depended upon by anything, such as a top-level application.
    pub fn is_empty(&self) -> bool {
        self.contains.is_empty()
    }

    /// Returns the nodes sorted by version string.
    ///
    /// The underlying set has no order; this gives renderers a stable one.
    pub fn contents_ordered(&self) -> Vec<&ModuleAndVersion> {
        let mut nodes: Vec<&ModuleAndVersion> = self.contains.iter().collect();
        nodes.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.module.cmp(&b.module)));
        nodes
    }
}

/// A group of modules that depend on each other in a loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCycle {
    /// Member modules, sorted by name.
    pub modules: Vec<ModuleName>,
}

impl ModuleCycle {
    /// Number of modules in the cycle.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if the cycle has no members.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Display for ModuleCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, module) in self.modules.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", module)?;
        }
        Ok(())
    }
}

/// Everything reachable from a focus module, grouped by module.
///
/// Built once by [`walk`](super::walk) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedGraph {
    pub(super) focus: ModuleName,
    pub(super) subgraphs: BTreeMap<ModuleName, Subgraph>,
    pub(super) relationships: Vec<Relationship>,
}

impl ProcessedGraph {
    pub(super) fn empty(focus: ModuleName) -> Self {
        Self {
            focus,
            subgraphs: BTreeMap::new(),
            relationships: Vec::new(),
        }
    }

    /// The module the walk started from.
    pub fn focus(&self) -> &ModuleName {
        &self.focus
    }

    /// Subgraphs keyed by module name, in name order.
    pub fn subgraphs(&self) -> &BTreeMap<ModuleName, Subgraph> {
        &self.subgraphs
    }

    /// Looks up the subgraph of a module.
    pub fn subgraph(&self, module: &str) -> Option<&Subgraph> {
        self.subgraphs.get(module)
    }

    /// Traversed relationships in visitation order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Returns true if the walk reached `module`.
    pub fn contains_module(&self, module: &str) -> bool {
        self.subgraphs.contains_key(module)
    }

    /// Number of modules reached, including the focus.
    pub fn module_count(&self) -> usize {
        self.subgraphs.len()
    }

    /// Number of distinct module versions across all subgraphs.
    pub fn node_count(&self) -> usize {
        self.subgraphs.values().map(Subgraph::len).sum()
    }

    /// Number of recorded relationships, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.relationships.len()
    }

    /// Detects module-level cycles among the recorded relationships.
    ///
    /// A cycle is a strongly connected component with more than one module,
    /// or a single module with a relationship to itself. Members are sorted
    /// and so is the returned list.
    ///
    /// # Example
    ///
    /// ```
    /// use modscope::graph::walk_relationships;
    /// use modscope::parser::parse_str;
    ///
    /// let rels = parse_str("a@v1 b@v1\nb@v1 a@v1\nc@v1 a@v1\n").unwrap();
    /// let pg = walk_relationships(&"a".into(), &rels);
    ///
    /// let cycles = pg.module_cycles();
    /// assert_eq!(cycles.len(), 1);
    /// assert_eq!(cycles[0].to_string(), "a, b");
    /// ```
    pub fn module_cycles(&self) -> Vec<ModuleCycle> {
        let mut graph: DiGraph<&ModuleName, ()> =
            DiGraph::with_capacity(self.subgraphs.len(), self.relationships.len());
        let indices: HashMap<&ModuleName, NodeIndex> = self
            .subgraphs
            .keys()
            .map(|module| (module, graph.add_node(module)))
            .collect();

        for rel in &self.relationships {
            let from = indices.get(&rel.downstream.module);
            let to = indices.get(&rel.upstream.module);
            if let (Some(&from), Some(&to)) = (from, to) {
                graph.update_edge(from, to, ());
            }
        }

        let mut cycles: Vec<ModuleCycle> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || scc.iter().any(|&idx| graph.contains_edge(idx, idx)))
            .map(|scc| {
                let mut modules: Vec<ModuleName> = scc
                    .iter()
                    .filter_map(|&idx| graph.node_weight(idx))
                    .map(|module| (*module).clone())
                    .collect();
                modules.sort();
                ModuleCycle { modules }
            })
            .collect();
        cycles.sort_by(|a, b| a.modules.cmp(&b.modules));
        cycles
    }
}
