//! Adjacency-list graph loaded from an edge list.
//!
//! Provides the [`Graph`] structure together with its structural queries:
//! adjacency, degree, neighbors and edge listing. Cycle detection lives in
//! the sibling `cycle` module.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::query::{Degree, GraphMode, Neighbors};
use super::Vertex;

/// A directed or undirected graph stored as adjacency lists.
///
/// Vertices are kept in first-seen order and addressed internally by their
/// position in that order. Each stored edge `A B` is a single arc A→B. The
/// reverse arc is never stored: undirected adjacency tests and edge listing
/// read each arc in both directions, while degree and neighbors report the
/// stored list of the vertex.
///
/// The graph is built once by [`Graph::load`] and is read-only afterwards.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{Degree, Graph};
///
/// let graph = Graph::load(Some("D"), ["app core", "core util"]);
///
/// assert!(graph.is_adjacent("APP", "core"));
/// assert!(!graph.is_adjacent("core", "app"));
/// assert_eq!(
///     graph.degree("core"),
///     Some(Degree::Directed { out_degree: 1, in_degree: 1 })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    mode: GraphMode,
    /// Vertices in first-seen order
    vertices: Vec<Vertex>,
    /// Maps vertex identifiers to their position in `vertices`
    indices: HashMap<Vertex, usize>,
    /// Outgoing arcs per vertex, in insertion order
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from a mode marker and the edge lines that follow it.
    ///
    /// Each non-blank line contributes one arc from its first token to its
    /// second. Extra tokens are ignored and lines with fewer than two tokens
    /// are skipped without error.
    ///
    /// # Arguments
    ///
    /// * `mode_marker` - First line of the input; `D` selects a directed graph
    /// * `lines` - Edge lines, one `v1 v2` pair per line
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::Graph;
    ///
    /// let graph = Graph::load(None, ["a b", "", "lonely", "b c extra"]);
    /// assert!(!graph.is_directed());
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn load<I, S>(mode_marker: Option<&str>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self {
            mode: GraphMode::from_marker(mode_marker),
            ..Self::default()
        };
        let mut skipped = 0usize;

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(from), Some(to)) => graph.add_edge(Vertex::new(from), Vertex::new(to)),
                _ => {
                    skipped += 1;
                    debug!(line, "skipping edge line with fewer than two tokens");
                }
            }
        }

        debug!(
            mode = %graph.mode,
            vertices = graph.vertex_count(),
            arcs = graph.edge_count(),
            skipped,
            "graph loaded"
        );
        graph
    }

    fn add_vertex(&mut self, vertex: Vertex) -> usize {
        if let Some(&idx) = self.indices.get(&vertex) {
            return idx;
        }

        let idx = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.indices.insert(vertex, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    fn add_edge(&mut self, from: Vertex, to: Vertex) {
        let from_idx = self.add_vertex(from);
        let to_idx = self.add_vertex(to);
        self.adjacency[from_idx].push(to_idx);
    }

    /// Position of a raw vertex name, after normalization.
    pub(crate) fn index_of(&self, raw: &str) -> Option<usize> {
        self.indices.get(Vertex::new(raw).as_str()).copied()
    }

    /// Outgoing arcs of the vertex at `idx`, in stored order.
    pub(crate) fn arcs(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> &Vertex {
        &self.vertices[idx]
    }

    /// Sources of every stored arc ending at `target`, in vertex order,
    /// repeated once per arc.
    fn incoming_arcs(&self, target: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(source, arcs)| {
                arcs.iter()
                    .filter(move |&&to| to == target)
                    .map(move |_| source)
            })
    }

    fn to_vertices(&self, indices: impl IntoIterator<Item = usize>) -> Vec<Vertex> {
        indices
            .into_iter()
            .map(|idx| self.vertices[idx].clone())
            .collect()
    }

    /// Returns the graph's mode.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Returns true if edges carry a direction.
    pub fn is_directed(&self) -> bool {
        self.mode.is_directed()
    }

    /// All vertices in first-seen order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Checks if a vertex exists. The name is normalized first.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored arcs, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks whether two vertices are adjacent.
    ///
    /// In a directed graph only an arc `v1 -> v2` counts. In an undirected
    /// graph an edge stored in either orientation counts. Unknown vertices
    /// are never adjacent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::Graph;
    ///
    /// let graph = Graph::load(Some("nd"), ["a b"]);
    /// assert!(graph.is_adjacent("b", "A"));
    /// assert!(!graph.is_adjacent("a", "z"));
    /// ```
    pub fn is_adjacent(&self, v1: &str, v2: &str) -> bool {
        let (Some(a), Some(b)) = (self.index_of(v1), self.index_of(v2)) else {
            return false;
        };

        let forward = self.adjacency[a].contains(&b);
        if self.is_directed() {
            forward
        } else {
            forward || self.adjacency[b].contains(&a)
        }
    }

    /// Computes the degree of a vertex.
    ///
    /// # Returns
    ///
    /// `None` if the vertex is not in the graph. Otherwise a
    /// [`Degree::Directed`] with out/in arc counts for directed graphs, or
    /// a [`Degree::Undirected`] count of the arcs stored from the vertex.
    ///
    /// Incoming arcs are counted with a full scan of the adjacency lists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Degree, Graph};
    ///
    /// let graph = Graph::load(Some("ND"), ["a b"]);
    /// assert_eq!(graph.degree("a"), Some(Degree::Undirected(1)));
    /// assert_eq!(graph.degree("b"), Some(Degree::Undirected(0)));
    /// ```
    pub fn degree(&self, name: &str) -> Option<Degree> {
        let idx = self.index_of(name)?;

        let degree = if self.is_directed() {
            Degree::Directed {
                out_degree: self.adjacency[idx].len(),
                in_degree: self.incoming_arcs(idx).count(),
            }
        } else {
            Degree::Undirected(self.adjacency[idx].len())
        };
        Some(degree)
    }

    /// Lists the neighbors of a vertex.
    ///
    /// # Returns
    ///
    /// `None` if the vertex is not in the graph. For directed graphs the
    /// successors (stored order) and predecessors (vertex order, each once).
    /// For undirected graphs the stored targets, duplicates kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Neighbors, Vertex};
    ///
    /// let graph = Graph::load(Some("D"), ["a b", "c b", "b d"]);
    /// let Some(Neighbors::Directed { successors, predecessors }) = graph.neighbors("b") else {
    ///     panic!("expected directed neighbors");
    /// };
    /// assert_eq!(successors, vec![Vertex::new("d")]);
    /// assert_eq!(predecessors, vec![Vertex::new("a"), Vertex::new("c")]);
    /// ```
    pub fn neighbors(&self, name: &str) -> Option<Neighbors> {
        let idx = self.index_of(name)?;
        let successors = self.adjacency[idx].iter().copied();

        let neighbors = if self.is_directed() {
            let mut sources: Vec<usize> = self.incoming_arcs(idx).collect();
            // grouped by source, so adjacent duplicates are all there is
            sources.dedup();
            Neighbors::Directed {
                successors: self.to_vertices(successors),
                predecessors: self.to_vertices(sources),
            }
        } else {
            Neighbors::Undirected(self.to_vertices(successors))
        };
        Some(neighbors)
    }

    /// Lists the edges of the graph as `(from, to)` pairs.
    ///
    /// Directed graphs list every stored arc. Undirected graphs list each
    /// pair of endpoints once, keeping the orientation it was first stored
    /// in, so `A B` followed by `B A` yields only `(A, B)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Graph, Vertex};
    ///
    /// let graph = Graph::load(None, ["b a", "a b", "b c"]);
    /// let edges = graph.edges();
    /// assert_eq!(edges.len(), 2);
    /// assert_eq!(edges[0], (Vertex::new("b"), Vertex::new("a")));
    /// ```
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::with_capacity(self.edge_count());

        for (from, arcs) in self.adjacency.iter().enumerate() {
            for &to in arcs {
                if !self.is_directed() && !seen.insert((from.min(to), from.max(to))) {
                    continue;
                }
                edges.push((self.vertices[from].clone(), self.vertices[to].clone()));
            }
        }

        edges
    }
}
