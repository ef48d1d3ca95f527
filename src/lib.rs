// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Matrixgraph library - weighted directed graphs on an adjacency matrix
//!
//! This crate provides a small graph type backed by an N×N weight matrix,
//! together with the classic algorithms that run over it: label-setting
//! shortest paths, depth-first traversal and a greedy nearest-neighbour
//! tour.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::Graph;

/// Core value types shared by the graph, its algorithms and the CLI
pub mod types {
    use crate::error::GraphError;
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    /// Weight of a directed edge. Zero is reserved for "no edge".
    pub type Weight = u32;

    /// Accumulated length of a path
    pub type Distance = u64;

    // =========================================================================
    // Edge
    // =========================================================================

    /// A directed, weighted edge supplied by the caller.
    ///
    /// Edges are not stored by the graph; only their effect on the matrix
    /// persists.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Edge {
        source: String,
        destination: String,
        weight: Weight,
    }

    impl Edge {
        /// Create an edge from `source` to `destination`
        #[must_use]
        pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: Weight) -> Self {
            Self {
                source: source.into(),
                destination: destination.into(),
                weight,
            }
        }

        /// Name of the vertex the edge leaves
        #[must_use]
        pub fn source(&self) -> &str {
            &self.source
        }

        /// Name of the vertex the edge enters
        #[must_use]
        pub fn destination(&self) -> &str {
            &self.destination
        }

        /// Edge weight
        #[must_use]
        pub fn weight(&self) -> Weight {
            self.weight
        }
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} -({})-> {}", self.source, self.weight, self.destination)
        }
    }

    /// Parses `SOURCE:DESTINATION:WEIGHT`
    impl FromStr for Edge {
        type Err = GraphError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let invalid = || GraphError::InvalidEdge(s.to_string());

            let (endpoints, weight) = s.rsplit_once(':').ok_or_else(invalid)?;
            let (source, destination) = endpoints.split_once(':').ok_or_else(invalid)?;
            let weight = weight.trim().parse::<Weight>().map_err(|_| invalid())?;

            let (source, destination) = (source.trim(), destination.trim());
            if source.is_empty() || destination.is_empty() {
                return Err(invalid());
            }

            Ok(Self::new(source, destination, weight))
        }
    }

    // =========================================================================
    // Algorithm results
    // =========================================================================

    /// A shortest path between two vertices
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ShortestPath {
        /// Vertex names from source to target, inclusive
        pub path: Vec<String>,
        /// Weight of each traversed edge; one fewer entry than `path`
        pub leg_weights: Vec<Weight>,
        /// Sum of `leg_weights`
        pub total_weight: Distance,
    }

    impl fmt::Display for ShortestPath {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_legs(f, &self.path, &self.leg_weights)?;
            write!(f, "; total {}", self.total_weight)
        }
    }

    /// Result of the nearest-neighbour tour heuristic
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Tour {
        /// Vertices in visitation order, starting with the start vertex
        pub stops: Vec<String>,
        /// Weight of each edge taken between consecutive stops
        pub leg_weights: Vec<Weight>,
        /// Weight of the edge from the last stop back to the start, if the
        /// graph has one
        pub closing_weight: Option<Weight>,
        /// Sum of all legs, including the closing leg when present
        pub total_weight: Distance,
    }

    impl Tour {
        /// Whether the tour ends back at its start vertex
        #[must_use]
        pub fn is_closed(&self) -> bool {
            self.closing_weight.is_some()
        }
    }

    impl fmt::Display for Tour {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_legs(f, &self.stops, &self.leg_weights)?;
            if let (Some(weight), Some(start)) = (self.closing_weight, self.stops.first()) {
                write!(f, " -({weight})-> {start}")?;
            }
            write!(f, "; total {}", self.total_weight)
        }
    }

    fn write_legs(f: &mut fmt::Formatter<'_>, stops: &[String], weights: &[Weight]) -> fmt::Result {
        let mut stops = stops.iter();
        if let Some(first) = stops.next() {
            write!(f, "{first}")?;
        }
        for (stop, weight) in stops.zip(weights) {
            write!(f, " -({weight})-> {stop}")?;
        }
        Ok(())
    }

}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::graph::Graph;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
