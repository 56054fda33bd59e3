//! Graph module for edge-list graphs.
//!
//! This module provides the [`Graph`] struct, an adjacency-list model that
//! is loaded once from an edge list and then queried: adjacency, degree,
//! neighbors, edge listing and directed cycle detection.
//!
//! # Example
//!
//! ```rust
//! use graphscope::graph::{Degree, Graph};
//!
//! let graph = Graph::load(Some("D"), ["app core", "core app"]);
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.detect_cycle().has_cycle());
//! assert_eq!(
//!     graph.degree("app"),
//!     Some(Degree::Directed { out_degree: 1, in_degree: 1 })
//! );
//! ```

mod cycle;
mod model;
mod query;
mod vertex;

pub use cycle::{CycleDetection, DependencyReport};
pub use model::Graph;
pub use query::{format_vertex_list, Degree, GraphMode, Neighbors};
pub use vertex::Vertex;
