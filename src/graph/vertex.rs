//! Vertex identifiers.
//!
//! Every name that enters the graph, whether from the edge list or from a
//! query, goes through [`Vertex::new`], which uppercases it. There is no
//! other way to build a [`Vertex`].

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// A case-insensitive vertex identifier, stored in uppercase.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::Vertex;
///
/// let v = Vertex::new("  lib-a ");
/// assert_eq!(v.as_str(), "LIB-A");
/// assert_eq!(v, Vertex::new("LIB-a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    /// Normalizes a raw identifier: surrounding whitespace is trimmed and
    /// the rest is uppercased.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Returns the normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
