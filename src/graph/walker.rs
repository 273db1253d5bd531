//! Depth-first reachability walk from a focus module.

use std::slice;

use tracing::debug;

use super::index::EdgeIndex;
use super::processed_graph::{ProcessedGraph, Subgraph};
use crate::parser::{ModuleName, Relationship};

/// Walks outward from `focus` and collects everything that depends on it.
///
/// Visitation is by module name. The first time a module is reached it gets
/// an empty [`Subgraph`], and then every relationship with that module on the
/// upstream side is recorded. The relationship's upstream node goes into the
/// module's subgraph and its downstream module is visited next. Reaching a
/// module a second time does nothing, which keeps cycles finite and records
/// each module's relationships exactly once.
///
/// Because visitation is by module and not by `(module, version)`, all
/// versions of a reached module are included, even versions whose own
/// dependents never lead back to the focus. This shows what an upgrade is
/// likely to run into.
///
/// An explicit stack replaces recursion; the order of recorded relationships
/// is the same as a recursive depth-first walk.
///
/// # Example
///
/// ```
/// use modscope::graph::{walk, EdgeIndex};
/// use modscope::parser::{parse_str, ModuleName};
///
/// let rels = parse_str("app@v1 libA@v1\nlibA@v1 libB@v2\nlibC@v1 libB@v2\n").unwrap();
/// let index = EdgeIndex::build(&rels);
///
/// let pg = walk(&ModuleName::from("libA"), &index);
/// assert!(pg.contains_module("app"));
/// assert!(!pg.contains_module("libB"));
/// assert_eq!(pg.edge_count(), 1);
/// ```
pub fn walk(focus: &ModuleName, index: &EdgeIndex) -> ProcessedGraph {
    let mut pg = ProcessedGraph::empty(focus.clone());
    let mut stack: Vec<(&ModuleName, slice::Iter<'_, Relationship>)> = Vec::new();

    pg.subgraphs.insert(focus.clone(), Subgraph::new());
    stack.push((focus, index.edges_for(focus.as_str()).iter()));

    while let Some((module, edges)) = stack.last_mut() {
        let module: &ModuleName = *module;
        let Some(edge) = edges.next() else {
            stack.pop();
            continue;
        };

        pg.relationships.push(edge.clone());
        if let Some(subgraph) = pg.subgraphs.get_mut(module) {
            subgraph.insert(edge.upstream.clone());
        }

        let next = &edge.downstream.module;
        if !pg.subgraphs.contains_key(next) {
            pg.subgraphs.insert(next.clone(), Subgraph::new());
            stack.push((next, index.edges_for(next.as_str()).iter()));
        }
    }

    debug!(
        focus = %focus,
        modules = pg.module_count(),
        edges = pg.edge_count(),
        "walk finished"
    );
    pg
}

/// Builds the index over `relationships` and walks it from `focus`.
pub fn walk_relationships(focus: &ModuleName, relationships: &[Relationship]) -> ProcessedGraph {
    walk(focus, &EdgeIndex::build(relationships))
}
