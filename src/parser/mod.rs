//! Parser module for graph input files.
//!
//! An input file starts with a mode marker line (`D` for directed, anything
//! else for undirected) followed by one `v1 v2` edge per line.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use graphscope::parser::parse_file;
//!
//! let graph = parse_file(Path::new("deps.txt")).unwrap();
//! println!("Loaded {} vertices", graph.vertex_count());
//! ```

pub mod edge_list;

pub use edge_list::{parse_file, parse_reader, parse_str, LoadError, LoadResult};
