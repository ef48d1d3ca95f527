// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Adjacency-matrix graph storage, mutation and queries
//!
//! Cell `(row, column)` of the matrix holds the weight of the directed edge
//! from the row vertex (source) to the column vertex (destination). A weight
//! of 0 means "no edge", so zero-weight edges cannot be represented.

use crate::error::GraphError;
use crate::types::{Edge, Weight};
use serde::Serialize;
use tracing::{debug, warn};

/// Column width used by [`Graph::render`]
pub const DEFAULT_CELL_WIDTH: usize = 10;

/// A directed, weighted graph stored as an N×N adjacency matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Vertex names; the position of a name is its matrix index
    vertices: Vec<String>,
    /// Edge weights, always `vertices.len()` rows of `vertices.len()` cells
    #[serde(rename = "adjacency_matrix")]
    matrix: Vec<Vec<Weight>>,
}

impl Graph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a vertex list and an edge list.
    ///
    /// Vertex names are taken as given, duplicates included; only
    /// [`Graph::insert_vertex`] rejects duplicates. Edges are applied in
    /// order through [`Graph::insert_edge`]. An edge naming an unknown
    /// vertex is logged and skipped without affecting the others.
    pub fn from_parts<I, S, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = Edge>,
    {
        let vertices: Vec<String> = vertices.into_iter().map(Into::into).collect();
        let size = vertices.len();
        let mut graph = Self {
            vertices,
            matrix: vec![vec![0; size]; size],
        };

        for edge in edges {
            if let Err(err) = graph.insert_edge(&edge) {
                warn!("Skipping edge {}: {}", edge, err);
            }
        }

        graph
    }

    // =========================================================================
    // Vertex mutation
    // =========================================================================

    /// Append a vertex with no edges
    pub fn insert_vertex(&mut self, name: &str) -> Result<(), GraphError> {
        if self.resolve_vertex(name).is_some() {
            return Err(GraphError::DuplicateVertex(name.to_string()));
        }

        self.vertices.push(name.to_string());
        let size = self.vertices.len();
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; size]);

        debug!("Inserted vertex {} at index {}", name, size - 1);
        Ok(())
    }

    /// Remove a vertex together with its row and column.
    ///
    /// Every vertex after it moves down one index; edges between the
    /// remaining vertices are kept.
    pub fn delete_vertex(&mut self, name: &str) -> Result<(), GraphError> {
        let index = self.require(name)?;

        self.vertices.remove(index);
        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }

        debug!("Deleted vertex {} from index {}", name, index);
        Ok(())
    }

    // =========================================================================
    // Edge mutation
    // =========================================================================

    /// Store an edge, replacing any weight already in its cell
    pub fn insert_edge(&mut self, edge: &Edge) -> Result<(), GraphError> {
        let (from, to) = self.endpoints(edge)?;
        if edge.weight() == 0 {
            warn!("Edge {} has weight 0 and will read as no edge", edge);
        }
        self.matrix[from][to] = edge.weight();
        debug!("Inserted edge {}", edge);
        Ok(())
    }

    /// Clear the cell of an edge. The edge's weight is ignored.
    pub fn delete_edge(&mut self, edge: &Edge) -> Result<(), GraphError> {
        let (from, to) = self.endpoints(edge)?;
        self.matrix[from][to] = 0;
        debug!("Deleted edge {} -> {}", edge.source(), edge.destination());
        Ok(())
    }

    /// Overwrite the directed weight from `from` to `to`, whether or not an
    /// edge was there before
    pub fn set_edge_weight(&mut self, from: &str, to: &str, weight: Weight) -> Result<(), GraphError> {
        let (row, column) = (self.require(from)?, self.require(to)?);
        self.matrix[row][column] = weight;
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Translate a vertex name to its current matrix index
    #[must_use]
    pub fn resolve_vertex(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v == name)
    }

    /// Whether an edge runs between two vertices in either direction.
    ///
    /// Storage is directed but this relation is symmetric, unlike
    /// [`Graph::neighbours`].
    pub fn adjacent(&self, first: &str, second: &str) -> Result<bool, GraphError> {
        let (a, b) = (self.require(first)?, self.require(second)?);
        Ok(self.matrix[a][b] != 0 || self.matrix[b][a] != 0)
    }

    /// Vertices reachable over one outgoing edge, in index order
    pub fn neighbours(&self, name: &str) -> Result<Vec<String>, GraphError> {
        let index = self.require(name)?;
        Ok(self
            .out_edges(index)
            .map(|(to, _)| self.vertices[to].clone())
            .collect())
    }

    /// Weight of the directed edge from `from` to `to`.
    ///
    /// Returns 0 when the vertices are not adjacent. When only the reverse
    /// edge exists they are adjacent, yet this still returns 0 because the
    /// weight is read in the requested direction only.
    pub fn edge_weight(&self, from: &str, to: &str) -> Result<Weight, GraphError> {
        if !self.adjacent(from, to)? {
            return Ok(0);
        }
        let (row, column) = (self.require(from)?, self.require(to)?);
        Ok(self.matrix[row][column])
    }

    /// Vertex names in index order
    #[must_use]
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// The weight matrix, one row per source vertex
    #[must_use]
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of non-zero cells
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.matrix.iter().flatten().filter(|w| **w != 0).count()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All stored edges in row-major order
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.vertices.len())
            .flat_map(move |from| {
                self.out_edges(from)
                    .map(move |(to, weight)| (from, to, weight))
            })
            .map(|(from, to, weight)| {
                Edge::new(self.vertices[from].clone(), self.vertices[to].clone(), weight)
            })
            .collect()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Human-readable matrix dump with the default column width
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(DEFAULT_CELL_WIDTH)
    }

    /// Human-readable matrix dump: a header of vertex names followed by one
    /// `NAME --> weights` line per vertex
    #[must_use]
    pub fn render_with(&self, cell_width: usize) -> String {
        let label_width = cell_width + "--> ".len();

        let mut header = " ".repeat(label_width);
        for vertex in &self.vertices {
            header.push_str(&format!("{vertex:<cell_width$}"));
        }

        let mut out = header.trim_end().to_string();
        for (vertex, row) in self.vertices.iter().zip(&self.matrix) {
            let mut line = format!("{vertex:<cell_width$}--> ");
            for weight in row {
                line.push_str(&format!("{weight:<cell_width$}"));
            }
            out.push('\n');
            out.push_str(line.trim_end());
        }
        out
    }

    // =========================================================================
    // Crate-internal index access
    // =========================================================================

    /// Resolve a name or fail with [`GraphError::VertexNotFound`]
    pub(crate) fn require(&self, name: &str) -> Result<usize, GraphError> {
        self.resolve_vertex(name)
            .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        &self.vertices[index]
    }

    pub(crate) fn weight_at(&self, from: usize, to: usize) -> Weight {
        self.matrix[from][to]
    }

    /// Non-zero cells of row `from` as `(destination, weight)`
    pub(crate) fn out_edges(&self, from: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.matrix[from]
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, weight)| *weight != 0)
    }

    fn endpoints(&self, edge: &Edge) -> Result<(usize, usize), GraphError> {
        Ok((self.require(edge.source())?, self.require(edge.destination())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph {
        Graph::from_parts(["A", "B", "C"], [])
    }

    fn assert_square(graph: &Graph) {
        let n = graph.vertex_count();
        assert_eq!(graph.matrix().len(), n);
        for row in graph.matrix() {
            assert_eq!(row.len(), n);
        }
    }

    #[test]
    fn test_new_is_empty() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.render(), "");
    }

    #[test]
    fn test_from_parts_applies_edges() {
        let graph = Graph::from_parts(
            ["A", "B", "C"],
            [Edge::new("A", "B", 1), Edge::new("B", "C", 2)],
        );

        assert_square(&graph);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.matrix()[0][1], 1);
        assert_eq!(graph.matrix()[1][2], 2);
    }

    #[test]
    fn test_from_parts_skips_unknown_vertex_edges() {
        let graph = Graph::from_parts(
            ["A", "B"],
            [
                Edge::new("A", "X", 4),
                Edge::new("A", "B", 3),
                Edge::new("Y", "B", 9),
            ],
        );

        assert_eq!(graph.edges(), vec![Edge::new("A", "B", 3)]);
    }

    #[test]
    fn test_from_parts_keeps_duplicate_names() {
        let graph = Graph::from_parts(["A", "A", "B"], [Edge::new("A", "B", 2)]);

        assert_eq!(graph.vertex_count(), 3);
        assert_square(&graph);
        // The first occurrence wins name resolution
        assert_eq!(graph.resolve_vertex("A"), Some(0));
        assert_eq!(graph.matrix()[0][2], 2);
    }

    #[test]
    fn test_insert_vertex_grows_matrix() {
        let mut graph = Graph::from_parts(["A", "B"], [Edge::new("A", "B", 7)]);

        graph.insert_vertex("C").unwrap();

        assert_square(&graph);
        assert_eq!(graph.vertices(), ["A", "B", "C"]);
        assert_eq!(graph.edge_weight("A", "B").unwrap(), 7);
        assert_eq!(graph.matrix()[2], vec![0, 0, 0]);
    }

    #[test]
    fn test_insert_duplicate_vertex() {
        let mut graph = abc();
        let before = graph.clone();

        let err = graph.insert_vertex("A").unwrap_err();

        assert_eq!(err, GraphError::DuplicateVertex("A".into()));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_delete_vertex_reindexes() {
        let mut graph = Graph::from_parts(
            ["A", "B", "C", "D"],
            [
                Edge::new("A", "C", 1),
                Edge::new("C", "D", 2),
                Edge::new("D", "A", 3),
                Edge::new("B", "D", 4),
            ],
        );

        graph.delete_vertex("B").unwrap();

        assert_square(&graph);
        assert_eq!(graph.vertices(), ["A", "C", "D"]);
        assert_eq!(graph.resolve_vertex("D"), Some(2));
        assert_eq!(
            graph.edges(),
            vec![
                Edge::new("A", "C", 1),
                Edge::new("C", "D", 2),
                Edge::new("D", "A", 3),
            ]
        );
    }

    #[test]
    fn test_delete_last_vertex_leaves_empty_graph() {
        let mut graph = Graph::from_parts(["A"], [Edge::new("A", "A", 1)]);

        graph.delete_vertex("A").unwrap();

        assert!(graph.is_empty());
        assert!(graph.matrix().is_empty());
    }

    #[test]
    fn test_delete_unknown_vertex() {
        let mut graph = abc();
        let before = graph.clone();

        let err = graph.delete_vertex("Z").unwrap_err();

        assert_eq!(err, GraphError::VertexNotFound("Z".into()));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_edge_storage_is_directed_adjacency_is_not() {
        let mut graph = abc();
        graph.insert_edge(&Edge::new("A", "B", 5)).unwrap();

        assert_eq!(graph.edge_weight("A", "B").unwrap(), 5);
        assert_eq!(graph.edge_weight("B", "A").unwrap(), 0);
        assert!(graph.adjacent("A", "B").unwrap());
        assert!(graph.adjacent("B", "A").unwrap());
        assert!(!graph.adjacent("A", "C").unwrap());
    }

    #[test]
    fn test_insert_edge_overwrites() {
        let mut graph = abc();
        graph.insert_edge(&Edge::new("A", "B", 5)).unwrap();
        graph.insert_edge(&Edge::new("A", "B", 8)).unwrap();

        assert_eq!(graph.edge_weight("A", "B").unwrap(), 8);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_insert_edge_unknown_vertex() {
        let mut graph = abc();
        let before = graph.clone();

        let err = graph.insert_edge(&Edge::new("A", "Q", 5)).unwrap_err();

        assert_eq!(err, GraphError::VertexNotFound("Q".into()));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_delete_edge() {
        let mut graph = abc();
        graph.insert_edge(&Edge::new("A", "B", 5)).unwrap();

        graph.delete_edge(&Edge::new("A", "B", 0)).unwrap();

        assert_eq!(graph.edge_weight("A", "B").unwrap(), 0);
        assert!(!graph.adjacent("A", "B").unwrap());
    }

    #[test]
    fn test_delete_edge_keeps_reverse_edge() {
        let mut graph = abc();
        graph.insert_edge(&Edge::new("A", "B", 5)).unwrap();
        graph.insert_edge(&Edge::new("B", "A", 6)).unwrap();

        graph.delete_edge(&Edge::new("A", "B", 5)).unwrap();

        assert!(graph.adjacent("A", "B").unwrap());
        assert_eq!(graph.edge_weight("B", "A").unwrap(), 6);
    }

    #[test]
    fn test_zero_weight_edge_reads_as_absent() {
        let mut graph = abc();
        graph.insert_edge(&Edge::new("A", "B", 0)).unwrap();

        assert!(!graph.adjacent("A", "B").unwrap());
        assert!(graph.neighbours("A").unwrap().is_empty());
    }

    #[test]
    fn test_adjacent_unknown_vertex() {
        let graph = abc();
        assert_eq!(
            graph.adjacent("A", "nowhere"),
            Err(GraphError::VertexNotFound("nowhere".into()))
        );
        assert_eq!(
            graph.edge_weight("nowhere", "A"),
            Err(GraphError::VertexNotFound("nowhere".into()))
        );
    }

    #[test]
    fn test_neighbours_are_outgoing_only() {
        let graph = Graph::from_parts(
            ["A", "B", "C", "D"],
            [
                Edge::new("A", "D", 1),
                Edge::new("A", "B", 1),
                Edge::new("C", "A", 1),
            ],
        );

        assert_eq!(graph.neighbours("A").unwrap(), vec!["B", "D"]);
        assert!(graph.neighbours("B").unwrap().is_empty());
        assert_eq!(graph.neighbours("C").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_neighbours_unknown_vertex() {
        let graph = abc();
        assert_eq!(
            graph.neighbours("Z"),
            Err(GraphError::VertexNotFound("Z".into()))
        );
    }

    #[test]
    fn test_set_edge_weight() {
        let mut graph = abc();

        graph.set_edge_weight("B", "C", 4).unwrap();
        assert_eq!(graph.edge_weight("B", "C").unwrap(), 4);

        graph.set_edge_weight("B", "C", 9).unwrap();
        assert_eq!(graph.edge_weight("B", "C").unwrap(), 9);

        let before = graph.clone();
        assert_eq!(
            graph.set_edge_weight("B", "Z", 1),
            Err(GraphError::VertexNotFound("Z".into()))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let graph = Graph::from_parts(
            ["A", "B", "C"],
            [Edge::new("A", "B", 1), Edge::new("C", "A", 2)],
        );
        let before = graph.clone();

        let _ = graph.render();
        let _ = graph.adjacent("A", "C");
        let _ = graph.neighbours("A");
        let _ = graph.edge_weight("C", "A");
        let _ = graph.edges();

        assert_eq!(graph, before);
    }

    #[test]
    fn test_render() {
        let graph = Graph::from_parts(
            ["A", "B", "C"],
            [
                Edge::new("A", "B", 1),
                Edge::new("B", "C", 2),
                Edge::new("A", "C", 10),
            ],
        );

        insta::assert_snapshot!(graph.render_with(4), @r"
                A   B   C
        A   --> 0   1   10
        B   --> 0   0   2
        C   --> 0   0   0
        ");
    }

    #[test]
    fn test_render_default_width() {
        let graph = Graph::from_parts(["Bonn", "Köln"], [Edge::new("Bonn", "Köln", 27)]);
        let lines: Vec<_> = graph.render().lines().map(String::from).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{}Bonn      Köln", " ".repeat(14)));
        assert_eq!(lines[1], "Bonn      --> 0         27");
        assert_eq!(lines[2], "Köln      --> 0         0");
    }
}
