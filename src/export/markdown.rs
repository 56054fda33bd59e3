//! Markdown export implementation.
//!
//! Exports the graph in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Graph Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Source:** {} ({})", data.title, data.mode)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", data.vertices.len())?;
        writeln!(writer, "| Edges | {} |", data.edges.len())?;
        writeln!(writer)?;

        // Vertices
        writeln!(writer, "## Vertices")?;
        writeln!(writer)?;
        if data.vertices.is_empty() {
            writeln!(writer, "_No vertices._")?;
        } else {
            let names: Vec<String> = data.vertices.iter().map(|v| format!("`{}`", v)).collect();
            writeln!(writer, "{}", names.join(", "))?;
        }
        writeln!(writer)?;

        // Edges
        writeln!(writer, "## Edges")?;
        writeln!(writer)?;
        if data.edges.is_empty() {
            writeln!(writer, "_No edges._")?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "| From | To |")?;
            writeln!(writer, "|------|----|")?;
            for (from, to) in &data.edges {
                writeln!(writer, "| {} | {} |", from, to)?;
            }
            writeln!(writer)?;
        }

        // Dependency check, directed graphs only
        if let Some(report) = &data.report {
            writeln!(writer, "## Dependency Check")?;
            writeln!(writer)?;

            if report.is_valid() {
                writeln!(writer, "✅ No circular dependencies found.")?;
            } else {
                writeln!(writer, "❌ Circular dependency: `{}`", report.cycle_path())?;
                writeln!(writer)?;
                for (from, to) in report.links() {
                    writeln!(writer, "- {} {} {}", from, data.connector(), to)?;
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn export_markdown(marker: &str, lines: &[&str]) -> String {
        let graph = Graph::load(Some(marker), lines.iter().copied());
        let data = ExportData::new("deps.txt", &graph);
        let mut output = Vec::new();
        MarkdownExporter.export(&data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_export_basic() {
        let md = export_markdown("D", &["a b"]);

        assert!(md.contains("# Graph Report"));
        assert!(md.contains("**Source:** deps.txt (directed)"));
        assert!(md.contains("| Vertices | 2 |"));
        assert!(md.contains("| Edges | 1 |"));
        assert!(md.contains("`A`, `B`"));
        assert!(md.contains("| A | B |"));
        assert!(md.contains("No circular dependencies found."));
    }

    #[test]
    fn test_markdown_export_cycle() {
        let md = export_markdown("D", &["a b", "b c", "c a"]);

        assert!(md.contains("Circular dependency: `C -> A -> B -> C`"));
        assert!(md.contains("- C -> A"));
        assert!(md.contains("- A -> B"));
        assert!(md.contains("- B -> C"));
    }

    #[test]
    fn test_markdown_export_undirected_has_no_check() {
        let md = export_markdown("ND", &["a b"]);

        assert!(md.contains("(undirected)"));
        assert!(!md.contains("Dependency Check"));
    }

    #[test]
    fn test_markdown_export_empty() {
        let md = export_markdown("D", &[]);

        assert!(md.contains("_No vertices._"));
        assert!(md.contains("_No edges._"));
    }
}
