//! Graph module for focused dependency graphs.
//!
//! This module builds an [`EdgeIndex`] over parsed relationships and walks it
//! from a focus module, producing a [`ProcessedGraph`] that keeps only the
//! modules that depend on the focus, grouped into one [`Subgraph`] per module.
//!
//! # Example
//!
//! ```rust
//! use modscope::graph::{walk, EdgeIndex};
//! use modscope::parser::{parse_str, ModuleName};
//!
//! let rels = parse_str("app@v1 lib@v1\nlib@v1 core@v2\n").unwrap();
//! let pg = walk(&ModuleName::from("core"), &EdgeIndex::build(&rels));
//!
//! assert_eq!(pg.module_count(), 3);
//! assert_eq!(pg.edge_count(), 2);
//! ```

mod index;
mod processed_graph;
mod walker;

pub use index::EdgeIndex;
pub use processed_graph::{ModuleCycle, ProcessedGraph, Subgraph};
pub use walker::{walk, walk_relationships};
