//! End-to-end pipeline: load, walk, render.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::export::{export_to_string, ExportFormat};
use crate::graph::{walk, EdgeIndex, ProcessedGraph};
use crate::parser::{ModuleName, Relationship};
use crate::source::EdgeSource;
use crate::timing::timed;

/// Loads the relationships of every directory, concatenated in order.
///
/// Stops at the first directory that fails; nothing partial is returned.
pub fn load_relationships<S, P>(source: &S, directories: &[P]) -> Result<Vec<Relationship>>
where
    S: EdgeSource + ?Sized,
    P: AsRef<Path>,
{
    let mut relationships = Vec::new();
    for dir in directories {
        relationships.extend(source.load(dir.as_ref())?);
    }
    Ok(relationships)
}

/// Loads, filters and groups the module graph around `focus`.
pub fn build<S, P>(source: &S, directories: &[P], focus: &ModuleName) -> Result<ProcessedGraph>
where
    S: EdgeSource + ?Sized,
    P: AsRef<Path>,
{
    let relationships = timed("gathering module data", || {
        load_relationships(source, directories)
    })?;

    let graph = timed("processing graph", || {
        walk(focus, &EdgeIndex::build(&relationships))
    });

    info!(
        focus = %focus,
        modules = graph.module_count(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph processed"
    );
    for cycle in graph.module_cycles() {
        info!(modules = %cycle, "module cycle");
    }
    Ok(graph)
}

/// Builds the focused graph and renders it completely into a string.
///
/// Rendering happens in memory so that a failure never leaves partial
/// output behind.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use modscope::{build_and_render, EdgeSource, ExportFormat, Relationship};
/// use modscope::parser::parse_str;
///
/// struct Fixed;
///
/// impl EdgeSource for Fixed {
///     fn load(&self, _dir: &Path) -> modscope::Result<Vec<Relationship>> {
///         Ok(parse_str("app@v1 lib@v1\n")?)
///     }
/// }
///
/// let dot = build_and_render(&Fixed, &["repo"], &"lib".into(), ExportFormat::Dot).unwrap();
/// assert!(dot.contains("\"app@v1\" -> \"lib@v1\";"));
/// ```
pub fn build_and_render<S, P>(
    source: &S,
    directories: &[P],
    focus: &ModuleName,
    format: ExportFormat,
) -> Result<String>
where
    S: EdgeSource + ?Sized,
    P: AsRef<Path>,
{
    let graph = build(source, directories, focus)?;
    let rendered = timed("rendering graph", || export_to_string(format, &graph))?;
    Ok(rendered)
}
