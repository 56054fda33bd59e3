//! GraphScope - edge-list graph explorer with circular dependency checks
//!
//! This crate loads directed or undirected graphs from plain edge-list
//! files and answers structural queries about them: adjacency, degree,
//! neighbors, edge listing and directed cycle detection.

pub mod export;
pub mod graph;
pub mod parser;
pub mod ui;
