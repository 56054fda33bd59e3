//! Export functionality for loaded graphs.
//!
//! This module provides exporters for writing a graph out in various
//! formats: Graphviz DOT, JSON, CSV and Markdown, plus the hand-off of the
//! DOT text to the external Graphviz renderer for image output.

pub mod csv;
pub mod dot;
pub mod json;
pub mod markdown;
pub mod render;

use crate::graph::{DependencyReport, Graph, GraphMode, Vertex};
use std::io::{self, Write};

pub use render::{GraphvizRenderer, RenderError};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT - input for image renderers
    Dot,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - one edge per row
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "gv" => Ok(ExportFormat::Dot),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: dot, json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
///
/// Holds the parts of a graph that exporters are allowed to see: the
/// vertex set, the listed edges and the dependency check result.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Name shown in report headings, usually the input file name
    pub title: String,
    /// Whether edges are directed
    pub mode: GraphMode,
    /// Vertices in first-seen order
    pub vertices: Vec<Vertex>,
    /// Edges as listed by [`Graph::edges`]
    pub edges: Vec<(Vertex, Vertex)>,
    /// Dependency check, present for directed graphs only
    pub report: Option<DependencyReport>,
}

impl ExportData {
    /// Collect export data from a loaded graph.
    pub fn new(title: impl Into<String>, graph: &Graph) -> Self {
        Self {
            title: title.into(),
            mode: graph.mode(),
            vertices: graph.vertices().to_vec(),
            edges: graph.edges(),
            report: graph.dependency_report(),
        }
    }

    /// Returns true if edges are directed.
    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// Edge connector used in text output: `->` or `--`.
    pub fn connector(&self) -> &'static str {
        if self.is_directed() {
            "->"
        } else {
            "--"
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Dot => dot::DotExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("dot".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!("gv".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("png".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Dot), "dot");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Csv), "csv");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
    }

    #[test]
    fn test_export_data_new() {
        let graph = Graph::load(Some("D"), ["a b", "b a"]);
        let data = ExportData::new("deps.txt", &graph);

        assert!(data.is_directed());
        assert_eq!(data.connector(), "->");
        assert_eq!(data.vertices.len(), 2);
        assert_eq!(data.edges.len(), 2);
        assert!(data.report.as_ref().is_some_and(|r| !r.is_valid()));
    }

    #[test]
    fn test_export_data_undirected_has_no_report() {
        let graph = Graph::load(None, ["a b", "b a"]);
        let data = ExportData::new("g", &graph);

        assert_eq!(data.connector(), "--");
        assert_eq!(data.edges.len(), 1);
        assert!(data.report.is_none());
    }
}
