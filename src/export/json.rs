//! JSON export implementation.
//!
//! Exports the graph in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::graph::{GraphMode, Vertex};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable edge for JSON output.
#[derive(Serialize)]
struct JsonEdge<'a> {
    from: &'a Vertex,
    to: &'a Vertex,
}

/// Serializable dependency check for JSON output.
#[derive(Serialize)]
struct JsonDependencyCheck<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycle: Option<&'a [Vertex]>,
    #[serde(skip_serializing_if = "String::is_empty")]
    path: String,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    vertices: usize,
    edges: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    title: &'a str,
    mode: GraphMode,
    directed: bool,
    summary: JsonSummary,
    vertices: &'a [Vertex],
    edges: Vec<JsonEdge<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependency_check: Option<JsonDependencyCheck<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let edges: Vec<JsonEdge<'_>> = data
            .edges
            .iter()
            .map(|(from, to)| JsonEdge { from, to })
            .collect();

        let dependency_check = data.report.as_ref().map(|report| JsonDependencyCheck {
            valid: report.is_valid(),
            cycle: report.cycle.as_deref(),
            path: report.cycle_path(),
        });

        let export = JsonExport {
            title: &data.title,
            mode: data.mode,
            directed: data.is_directed(),
            summary: JsonSummary {
                vertices: data.vertices.len(),
                edges: data.edges.len(),
            },
            vertices: &data.vertices,
            edges,
            dependency_check,
        };

        serde_json::to_writer_pretty(&mut *writer, &export)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn export_json(marker: &str, lines: &[&str]) -> serde_json::Value {
        let graph = Graph::load(Some(marker), lines.iter().copied());
        let data = ExportData::new("deps.txt", &graph);
        let mut output = Vec::new();
        JsonExporter.export(&data, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_export_directed() {
        let json = export_json("D", &["a b", "b c"]);

        assert_eq!(json["title"], "deps.txt");
        assert_eq!(json["mode"], "directed");
        assert_eq!(json["directed"], true);
        assert_eq!(json["summary"]["vertices"], 3);
        assert_eq!(json["summary"]["edges"], 2);
        assert_eq!(json["vertices"][0], "A");
        assert_eq!(json["edges"][1]["from"], "B");
        assert_eq!(json["edges"][1]["to"], "C");
        assert_eq!(json["dependency_check"]["valid"], true);
        assert!(json["dependency_check"].get("cycle").is_none());
    }

    #[test]
    fn test_json_export_cycle() {
        let json = export_json("D", &["a b", "b a"]);

        assert_eq!(json["dependency_check"]["valid"], false);
        assert_eq!(json["dependency_check"]["path"], "B -> A -> B");
        assert_eq!(json["dependency_check"]["cycle"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_export_undirected() {
        let json = export_json("ND", &["a b", "b a"]);

        assert_eq!(json["directed"], false);
        assert_eq!(json["summary"]["edges"], 1);
        assert!(json.get("dependency_check").is_none());
    }
}
