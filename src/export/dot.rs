//! Graphviz DOT export implementation.
//!
//! Each reached module becomes a `cluster_` subgraph holding one node per
//! version. Edges point from consumer to dependency and follow all subgraph
//! blocks in walk order.

use super::Exporter;
use crate::graph::ProcessedGraph;
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

/// Global styling emitted right after the graph header.
const GRAPH_ATTRIBUTES: &[&str] = &[
    "node [penwidth=2 fontsize=10 shape=rectangle];",
    "edge [tailport=e penwidth=2];",
    "compound=true;",
    "rankdir=LR;",
    "ranksep=\"2.5\";",
    "quantum=\"0.5\";",
];

impl Exporter for DotExporter {
    fn export<W: Write>(&self, graph: &ProcessedGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph G {{")?;
        for attribute in GRAPH_ATTRIBUTES {
            writeln!(writer, "    {}", attribute)?;
        }

        for (module, subgraph) in graph.subgraphs() {
            let module = escape(module.as_str());
            writeln!(writer, "    subgraph \"cluster_{}\" {{", module)?;
            writeln!(writer, "        label=\"{}\";", module)?;
            writeln!(writer, "        rankdir=TB;")?;
            for (rank, node) in subgraph.contents_ordered().into_iter().enumerate() {
                writeln!(
                    writer,
                    "        \"{}\" [label=\"{}\" rank={}];",
                    escape(&node.to_string()),
                    escape(node.version.as_str()),
                    rank
                )?;
            }
            writeln!(writer, "    }}")?;
        }

        for rel in graph.relationships() {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\";",
                escape(&rel.downstream.to_string()),
                escape(&rel.upstream.to_string())
            )?;
        }

        writeln!(writer, "}}")
    }
}

/// Escapes a value for use inside a double-quoted DOT ID.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::walk_relationships;
    use crate::parser::parse_str;

    fn render(input: &str, focus: &str) -> String {
        let rels = parse_str(input).unwrap();
        let pg = walk_relationships(&focus.into(), &rels);
        let mut buffer = Vec::new();
        DotExporter.export(&pg, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_dot_export_full_output() {
        let output = render("app@v1 libA@v1\nlibA@v1 libB@v2\nlibC@v1 libB@v2\n", "libA");
        let expected = "\
digraph G {
    node [penwidth=2 fontsize=10 shape=rectangle];
    edge [tailport=e penwidth=2];
    compound=true;
    rankdir=LR;
    ranksep=\"2.5\";
    quantum=\"0.5\";
    subgraph \"cluster_app\" {
        label=\"app\";
        rankdir=TB;
    }
    subgraph \"cluster_libA\" {
        label=\"libA\";
        rankdir=TB;
        \"libA@v1\" [label=\"v1\" rank=0];
    }
    \"app@v1\" -> \"libA@v1\";
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_dot_export_nodes_sorted_by_version() {
        let output = render(
            "a@v1 lib@v1.3.0\nb@v1 lib@v1.1.0\nc@v1 lib@v1.2.0\n",
            "lib",
        );
        let first = output.find("\"lib@v1.1.0\" [label=\"v1.1.0\" rank=0]").unwrap();
        let second = output.find("\"lib@v1.2.0\" [label=\"v1.2.0\" rank=1]").unwrap();
        let third = output.find("\"lib@v1.3.0\" [label=\"v1.3.0\" rank=2]").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_dot_export_edges_in_walk_order_with_duplicates() {
        let output = render("x@v1 core@v1\ny@v1 core@v1\nx@v1 core@v1\nz@v1 x@v1\n", "core");
        let edges: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("->"))
            .map(str::trim)
            .collect();
        assert_eq!(
            edges,
            vec![
                "\"x@v1\" -> \"core@v1\";",
                "\"z@v1\" -> \"x@v1\";",
                "\"y@v1\" -> \"core@v1\";",
                "\"x@v1\" -> \"core@v1\";",
            ]
        );
    }

    #[test]
    fn test_dot_export_subgraphs_before_edges() {
        let output = render("x@v1 core@v1\n", "core");
        let last_subgraph = output.rfind("subgraph").unwrap();
        let first_edge = output.find("->").unwrap();
        assert!(last_subgraph < first_edge);
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_dot_export_is_deterministic() {
        let input = "b@v1 core@v2\na@v1 core@v1\nc@v3 a@v1\nc@v1 b@v1\n";
        assert_eq!(render(input, "core"), render(input, "core"));
    }

    #[test]
    fn test_dot_export_tip_version() {
        let output = render("example.com/app example.com/lib@v0.1.0\n", "example.com/lib");
        assert!(output.contains("\"example.com/app@tip\" -> \"example.com/lib@v0.1.0\";"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
    }
}
