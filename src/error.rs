// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Typed failures reported by graph operations

use thiserror::Error;

/// Everything that can go wrong when mutating or querying a [`crate::Graph`].
///
/// A failed operation never leaves the graph partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with this name is already present
    #[error("Vertex already in graph: {0}")]
    DuplicateVertex(String),

    /// No vertex with this name exists
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// The shortest-path target cannot be reached from the source
    #[error("{to} is unreachable from {from}")]
    Unreachable {
        /// Start of the requested path
        from: String,
        /// Vertex that could not be reached
        to: String,
    },

    /// Text that does not describe an edge
    #[error("Invalid edge '{0}': expected SOURCE:DESTINATION:WEIGHT")]
    InvalidEdge(String),
}
