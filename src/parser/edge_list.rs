//! Loader for edge-list files.
//!
//! Reading is the only fallible step. Once the text is in memory every line
//! is accepted: blank lines and lines with a single token are skipped by
//! [`Graph::load`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::graph::Graph;

/// Errors that can occur while loading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("Failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but reading it failed (including invalid UTF-8).
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loads a graph from a file path.
///
/// # Arguments
///
/// * `path` - Path to the edge-list file
///
/// # Returns
///
/// The loaded [`Graph`], or a [`LoadError`] if the file cannot be opened or
/// read. No partial graph is returned on error.
pub fn parse_file(path: &Path) -> LoadResult<Graph> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading graph file");

    parse_reader(BufReader::new(file)).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a graph from any buffered reader.
///
/// The first line is the mode marker; it is never read as an edge.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<Graph> {
    let mut lines = reader.lines();
    let marker = lines.next().transpose()?;
    let edges = lines.collect::<std::io::Result<Vec<String>>>()?;
    Ok(Graph::load(marker.as_deref(), edges))
}

/// Loads a graph from in-memory text.
///
/// # Example
///
/// ```
/// use graphscope::parser::parse_str;
///
/// let graph = parse_str("D\nA B\nb c\n");
/// assert!(graph.is_directed());
/// assert!(graph.is_adjacent("a", "b"));
/// assert_eq!(graph.vertex_count(), 3);
/// ```
pub fn parse_str(content: &str) -> Graph {
    let mut lines = content.lines();
    let marker = lines.next();
    Graph::load(marker, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_str_directed() {
        let graph = parse_str("d\na b\nb c\n");
        assert!(graph.is_directed());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_parse_str_undirected_markers() {
        assert!(!parse_str("ND\na b").is_directed());
        assert!(!parse_str("\na b").is_directed());
        assert!(!parse_str("").is_directed());
    }

    #[test]
    fn test_marker_line_is_not_an_edge() {
        let graph = parse_str("x y\na b\n");
        assert!(!graph.is_directed());
        assert!(!graph.contains("x"));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_marker_with_whitespace_and_crlf() {
        let graph = parse_str("  D  \r\nA B\r\n");
        assert!(graph.is_directed());
        assert!(graph.is_adjacent("a", "b"));
    }

    #[test]
    fn test_parse_reader() {
        let input = "D\nA B\n\nC\nB A\n";
        let graph = parse_reader(input.as_bytes()).unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.detect_cycle().has_cycle());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "D").unwrap();
        writeln!(file, "core util").unwrap();
        writeln!(file, "app core").unwrap();

        let graph = parse_file(file.path()).unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.vertices().len(), 3);
        assert!(graph.is_adjacent("APP", "CORE"));
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = parse_file(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"D\nA \xff\xfe\n").unwrap();

        let err = parse_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
