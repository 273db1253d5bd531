//! JSON export implementation.
//!
//! Exports a processed graph in JSON format for machine-readable output.

use super::Exporter;
use crate::graph::ProcessedGraph;
use crate::parser::{ModuleAndVersion, ModuleName, Relationship, VersionName};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    modules: usize,
    nodes: usize,
    edges: usize,
    module_cycles: usize,
}

/// One module and the versions observed for it.
#[derive(Serialize)]
struct JsonSubgraph<'a> {
    module: &'a ModuleName,
    versions: Vec<&'a VersionName>,
    nodes: Vec<&'a ModuleAndVersion>,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    focus: &'a ModuleName,
    summary: JsonSummary,
    subgraphs: Vec<JsonSubgraph<'a>>,
    edges: &'a [Relationship],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    module_cycles: Vec<Vec<ModuleName>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, graph: &ProcessedGraph, writer: &mut W) -> io::Result<()> {
        let module_cycles: Vec<Vec<ModuleName>> = graph
            .module_cycles()
            .into_iter()
            .map(|cycle| cycle.modules)
            .collect();

        let subgraphs: Vec<JsonSubgraph<'_>> = graph
            .subgraphs()
            .iter()
            .map(|(module, subgraph)| {
                let nodes = subgraph.contents_ordered();
                JsonSubgraph {
                    module,
                    versions: nodes.iter().map(|&node| &node.version).collect(),
                    nodes,
                }
            })
            .collect();

        let export = JsonExport {
            focus: graph.focus(),
            summary: JsonSummary {
                modules: graph.module_count(),
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                module_cycles: module_cycles.len(),
            },
            subgraphs,
            edges: graph.relationships(),
            module_cycles,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
