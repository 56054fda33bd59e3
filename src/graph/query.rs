//! Result shapes for queries whose answer depends on directedness.

use super::Vertex;
use serde::Serialize;
use std::fmt;

/// Whether a graph's edges carry a direction.
///
/// Decided once from the mode marker on the first line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    /// Edges are symmetric; `A B` also connects B to A.
    #[default]
    Undirected,
    /// Edges point from the first token to the second.
    Directed,
}

impl GraphMode {
    /// Interprets a mode marker.
    ///
    /// Only `D` (any case, surrounding whitespace ignored) selects a directed
    /// graph. Anything else, including a missing marker, is undirected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::GraphMode;
    ///
    /// assert_eq!(GraphMode::from_marker(Some(" d ")), GraphMode::Directed);
    /// assert_eq!(GraphMode::from_marker(Some("ND")), GraphMode::Undirected);
    /// assert_eq!(GraphMode::from_marker(None), GraphMode::Undirected);
    /// ```
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(m) if m.trim().eq_ignore_ascii_case("d") => Self::Directed,
            _ => Self::Undirected,
        }
    }

    /// Returns true for [`GraphMode::Directed`].
    pub fn is_directed(self) -> bool {
        self == Self::Directed
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undirected => write!(f, "undirected"),
            Self::Directed => write!(f, "directed"),
        }
    }
}

/// Degree of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    /// Number of arcs stored from the vertex in an undirected graph.
    Undirected(usize),
    /// Outgoing and incoming arc counts in a directed graph.
    Directed { out_degree: usize, in_degree: usize },
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undirected(n) => write!(f, "{}", n),
            Self::Directed {
                out_degree,
                in_degree,
            } => write!(f, "out: {}, in: {}", out_degree, in_degree),
        }
    }
}

/// Neighbors of a vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Neighbors {
    /// Stored targets of the vertex, duplicates kept.
    Undirected(Vec<Vertex>),
    /// Targets of outgoing arcs and sources of incoming arcs.
    Directed {
        successors: Vec<Vertex>,
        predecessors: Vec<Vertex>,
    },
}

impl Neighbors {
    /// Total number of listed neighbors.
    pub fn len(&self) -> usize {
        match self {
            Self::Undirected(list) => list.len(),
            Self::Directed {
                successors,
                predecessors,
            } => successors.len() + predecessors.len(),
        }
    }

    /// Returns true if the vertex is isolated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Joins vertices as `[A, B, C]` for display.
pub fn format_vertex_list(vertices: &[Vertex]) -> String {
    let names: Vec<&str> = vertices.iter().map(Vertex::as_str).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_marker() {
        assert_eq!(GraphMode::from_marker(Some("D")), GraphMode::Directed);
        assert_eq!(GraphMode::from_marker(Some("d")), GraphMode::Directed);
        assert_eq!(GraphMode::from_marker(Some("")), GraphMode::Undirected);
        assert_eq!(GraphMode::from_marker(Some("DD")), GraphMode::Undirected);
        assert_eq!(GraphMode::from_marker(Some("A B")), GraphMode::Undirected);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GraphMode::Directed.to_string(), "directed");
        assert_eq!(GraphMode::default().to_string(), "undirected");
    }

    #[test]
    fn test_degree_display() {
        let d = Degree::Directed {
            out_degree: 2,
            in_degree: 1,
        };
        assert_eq!(d.to_string(), "out: 2, in: 1");
        assert_eq!(Degree::Undirected(4).to_string(), "4");
    }

    #[test]
    fn test_neighbors_len() {
        let n = Neighbors::Directed {
            successors: vec![Vertex::new("a")],
            predecessors: vec![],
        };
        assert_eq!(n.len(), 1);
        assert!(Neighbors::Undirected(vec![]).is_empty());
    }

    #[test]
    fn test_format_vertex_list() {
        let vs = vec![Vertex::new("a"), Vertex::new("b")];
        assert_eq!(format_vertex_list(&vs), "[A, B]");
        assert_eq!(format_vertex_list(&[]), "[]");
    }
}
