//! Graphviz DOT export implementation.
//!
//! The exported vertices and edges are copied into a petgraph graph of the
//! matching edge type and printed with petgraph's DOT writer.

use super::{ExportData, Exporter};
use petgraph::dot::{Config, Dot};
use petgraph::graph::NodeIndex;
use petgraph::{Directed, EdgeType, Graph, Undirected};
use std::collections::HashMap;
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

/// Copies the export data into a petgraph graph labelled by vertex name.
/// Edges carry an empty label.
fn to_petgraph<Ty: EdgeType>(data: &ExportData) -> Graph<&str, &str, Ty> {
    let mut graph = Graph::with_capacity(data.vertices.len(), data.edges.len());
    let indices: HashMap<&str, NodeIndex> = data
        .vertices
        .iter()
        .map(|v| (v.as_str(), graph.add_node(v.as_str())))
        .collect();

    for (from, to) in &data.edges {
        if let (Some(&a), Some(&b)) = (indices.get(from.as_str()), indices.get(to.as_str())) {
            graph.add_edge(a, b, "");
        }
    }

    graph
}

impl Exporter for DotExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let config = [Config::EdgeNoLabel];
        if data.is_directed() {
            let graph = to_petgraph::<Directed>(data);
            write!(writer, "{}", Dot::with_config(&graph, &config))
        } else {
            let graph = to_petgraph::<Undirected>(data);
            write!(writer, "{}", Dot::with_config(&graph, &config))
        }
    }
}
