//! Directed cycle detection and the dependency check built on it.
//!
//! The search is a three-colour depth-first traversal driven by an explicit
//! stack, so deep dependency chains cannot overflow the call stack. It visits
//! vertices in exactly the order a recursive traversal would and returns the
//! first cycle it meets as an explicit path.

use tracing::warn;

use super::{Graph, Vertex};

/// Outcome of [`Graph::detect_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleDetection {
    /// The graph is undirected, so the check does not apply.
    Undirected,
    /// No directed cycle exists.
    Acyclic,
    /// A cycle was found. The path starts and ends at the same vertex and
    /// each consecutive pair is a stored arc.
    Cycle(Vec<Vertex>),
}

impl CycleDetection {
    /// Returns true if a cycle was found.
    pub fn has_cycle(&self) -> bool {
        matches!(self, Self::Cycle(_))
    }

    /// The cycle path, empty when there is none.
    pub fn path(&self) -> &[Vertex] {
        match self {
            Self::Cycle(path) => path,
            Self::Undirected | Self::Acyclic => &[],
        }
    }

    /// Splits the outcome into `(has_cycle, path)`.
    pub fn into_parts(self) -> (bool, Vec<Vertex>) {
        match self {
            Self::Cycle(path) => (true, path),
            Self::Undirected | Self::Acyclic => (false, Vec::new()),
        }
    }
}

/// Result of validating a directed graph as a dependency structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    /// The circular dependency found, if any
    pub cycle: Option<Vec<Vertex>>,
}

impl DependencyReport {
    /// Returns true if no circular dependency exists.
    pub fn is_valid(&self) -> bool {
        self.cycle.is_none()
    }

    /// Formats the cycle as `A -> B -> A`, or an empty string.
    pub fn cycle_path(&self) -> String {
        self.cycle
            .as_deref()
            .map(|path| {
                path.iter()
                    .map(Vertex::as_str)
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
            .unwrap_or_default()
    }

    /// The individual dependencies that make up the cycle, in order.
    pub fn links(&self) -> Vec<(&Vertex, &Vertex)> {
        self.cycle
            .as_deref()
            .map(|path| path.windows(2).map(|pair| (&pair[0], &pair[1])).collect())
            .unwrap_or_default()
    }
}

impl Graph {
    /// Searches for a directed cycle.
    ///
    /// Every vertex is used as a starting point in first-seen order, so
    /// cycles in components unreachable from the first vertex are found too.
    /// The first back edge encountered ends the search; this is a witness
    /// search, not an enumeration of all cycles.
    ///
    /// On an undirected graph a warning is logged and
    /// [`CycleDetection::Undirected`] is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{CycleDetection, Graph, Vertex};
    ///
    /// let graph = Graph::load(Some("D"), ["a b", "b c", "c a"]);
    /// let path: Vec<Vertex> = ["c", "a", "b", "c"].into_iter().map(Vertex::new).collect();
    /// assert_eq!(graph.detect_cycle(), CycleDetection::Cycle(path));
    /// ```
    pub fn detect_cycle(&self) -> CycleDetection {
        if !self.is_directed() {
            warn!("cycle detection only applies to directed graphs");
            return CycleDetection::Undirected;
        }

        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        // (vertex, index of the next arc to examine)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            on_stack[start] = true;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (current, cursor) = *frame;
                let Some(&next) = self.arcs(current).get(cursor) else {
                    on_stack[current] = false;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                if !visited[next] {
                    parent[next] = Some(current);
                    visited[next] = true;
                    on_stack[next] = true;
                    stack.push((next, 0));
                } else if on_stack[next] {
                    return CycleDetection::Cycle(self.trace_cycle(current, next, &parent));
                }
            }
        }

        CycleDetection::Acyclic
    }

    /// Rebuilds the cycle closed by the back edge `current -> ancestor`.
    ///
    /// The path begins and ends at `current`: the back edge comes first,
    /// followed by the tree path from `ancestor` down to `current`.
    fn trace_cycle(
        &self,
        current: usize,
        ancestor: usize,
        parent: &[Option<usize>],
    ) -> Vec<Vertex> {
        let mut path = Vec::new();
        let mut cursor = current;
        while cursor != ancestor {
            path.push(cursor);
            match parent[cursor] {
                Some(up) => cursor = up,
                None => break,
            }
        }
        path.push(ancestor);
        path.push(current);
        path.reverse();

        path.into_iter()
            .map(|idx| self.vertex_at(idx).clone())
            .collect()
    }

    /// Validates the graph as a dependency structure.
    ///
    /// # Returns
    ///
    /// `None` for undirected graphs, where dependencies have no direction.
    /// Otherwise a report carrying the circular dependency, if one exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::Graph;
    ///
    /// let graph = Graph::load(Some("D"), ["ui core", "core ui"]);
    /// let report = graph.dependency_report().unwrap();
    /// assert!(!report.is_valid());
    /// assert_eq!(report.cycle_path(), "CORE -> UI -> CORE");
    /// ```
    pub fn dependency_report(&self) -> Option<DependencyReport> {
        match self.detect_cycle() {
            CycleDetection::Undirected => None,
            CycleDetection::Acyclic => Some(DependencyReport { cycle: None }),
            CycleDetection::Cycle(path) => Some(DependencyReport { cycle: Some(path) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed(lines: &[&str]) -> Graph {
        Graph::load(Some("D"), lines.iter().copied())
    }

    fn path(names: &[&str]) -> Vec<Vertex> {
        names.iter().map(|n| Vertex::new(n)).collect()
    }

    fn assert_closed_walk(graph: &Graph, cycle: &[Vertex]) {
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(
                graph.is_adjacent(pair[0].as_str(), pair[1].as_str()),
                "{} -> {} is not an arc",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_triangle_cycle() {
        let graph = directed(&["a b", "b c", "c a"]);
        let result = graph.detect_cycle();
        assert!(result.has_cycle());
        assert_eq!(result.path(), path(&["c", "a", "b", "c"]).as_slice());
        assert_closed_walk(&graph, result.path());
    }

    #[test]
    fn test_chain_has_no_cycle() {
        let graph = directed(&["a b", "b c"]);
        assert_eq!(graph.detect_cycle(), CycleDetection::Acyclic);
        assert_eq!(graph.detect_cycle().into_parts(), (false, vec![]));
    }

    #[test]
    fn test_diamond_cross_edge_is_not_a_cycle() {
        let graph = directed(&["a b", "a c", "b d", "c d"]);
        assert_eq!(graph.detect_cycle(), CycleDetection::Acyclic);
    }

    #[test]
    fn test_cycle_in_second_component() {
        let graph = directed(&["a b", "b c", "x y", "y z", "z x"]);
        let result = graph.detect_cycle();
        assert_eq!(result.path(), path(&["z", "x", "y", "z"]).as_slice());
        assert_closed_walk(&graph, result.path());
    }

    #[test]
    fn test_cycle_reached_through_later_start() {
        // the A/B cycle sits in a component the first root C does not reach
        let graph = directed(&["c d", "a b", "b a"]);
        let result = graph.detect_cycle();
        assert_eq!(result.path(), path(&["b", "a", "b"]).as_slice());
    }

    #[test]
    fn test_self_loop() {
        let graph = directed(&["a a"]);
        assert_eq!(graph.detect_cycle(), CycleDetection::Cycle(path(&["a", "a"])));
    }

    #[test]
    fn test_two_cycle() {
        let graph = directed(&["a b", "b a"]);
        let (found, cycle) = graph.detect_cycle().into_parts();
        assert!(found);
        assert_eq!(cycle, path(&["b", "a", "b"]));
    }

    #[test]
    fn test_first_cycle_in_visit_order_wins() {
        let graph = directed(&["a b", "b a", "a c", "c c"]);
        assert_eq!(graph.detect_cycle().path(), path(&["b", "a", "b"]).as_slice());
    }

    #[test]
    fn test_cycle_below_tail() {
        let graph = directed(&["root a", "a b", "b c", "c d", "d b"]);
        let result = graph.detect_cycle();
        assert_eq!(result.path(), path(&["d", "b", "c", "d"]).as_slice());
        assert_closed_walk(&graph, result.path());
    }

    #[test]
    fn test_backtracking_clears_on_stack() {
        // b is finished before c reaches it, so c -> b is a cross edge
        let graph = directed(&["a b", "a c", "c b"]);
        assert_eq!(graph.detect_cycle(), CycleDetection::Acyclic);
    }

    #[test]
    fn test_undirected_is_not_checked() {
        let graph = Graph::load(None, ["a b", "b a"]);
        let result = graph.detect_cycle();
        assert_eq!(result, CycleDetection::Undirected);
        assert!(!result.has_cycle());
        assert!(result.path().is_empty());
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let lines: Vec<String> = (0..100_000).map(|i| format!("n{} n{}", i, i + 1)).collect();
        let graph = Graph::load(Some("D"), &lines);
        assert_eq!(graph.detect_cycle(), CycleDetection::Acyclic);
    }

    #[test]
    fn test_dependency_report_valid() {
        let report = directed(&["app lib"]).dependency_report().unwrap();
        assert!(report.is_valid());
        assert_eq!(report.cycle_path(), "");
        assert!(report.links().is_empty());
    }

    #[test]
    fn test_dependency_report_links() {
        let report = directed(&["a b", "b c", "c a"]).dependency_report().unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.cycle_path(), "C -> A -> B -> C");

        let links: Vec<(&str, &str)> = report
            .links()
            .into_iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();
        assert_eq!(links, vec![("C", "A"), ("A", "B"), ("B", "C")]);
    }

    #[test]
    fn test_dependency_report_undirected() {
        assert!(Graph::load(Some("x"), ["a b"]).dependency_report().is_none());
    }
}
