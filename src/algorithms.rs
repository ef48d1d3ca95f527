// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph algorithms over the adjacency matrix
//!
//! All scratch state (distances, parents, visited flags) is allocated per
//! call, so repeated or interleaved runs never see each other's marks.

use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::{Distance, ShortestPath, Tour, Weight};
use tracing::debug;

/// Distance and parent labels produced by one shortest-path search
struct Labels {
    /// `None` until a vertex is reached
    distance: Vec<Option<Distance>>,
    parent: Vec<Option<usize>>,
}

impl Graph {
    // =========================================================================
    // Shortest paths
    // =========================================================================

    /// Cheapest path from `source` to `target`.
    ///
    /// Label-setting search with a linear minimum scan each round, O(N²)
    /// overall. Weights are unsigned, so the non-negativity precondition
    /// always holds. Among equally distant candidates the lowest index is
    /// finalised first, which makes tie-broken paths deterministic.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexNotFound`] for an unknown name and
    /// [`GraphError::Unreachable`] when no path exists.
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<ShortestPath, GraphError> {
        let (from, to) = (self.require(source)?, self.require(target)?);
        let labels = self.label(from);

        let Some(total_weight) = labels.distance[to] else {
            return Err(GraphError::Unreachable {
                from: source.to_string(),
                to: target.to_string(),
            });
        };

        let mut indices = vec![to];
        let mut current = to;
        while let Some(parent) = labels.parent[current] {
            indices.push(parent);
            current = parent;
        }
        indices.reverse();

        let leg_weights = indices
            .windows(2)
            .map(|leg| self.weight_at(leg[0], leg[1]))
            .collect();

        Ok(ShortestPath {
            path: indices.iter().map(|&i| self.name(i).to_string()).collect(),
            leg_weights,
            total_weight,
        })
    }

    /// Shortest distance from `source` to every vertex, in index order.
    /// Unreachable vertices are `None`.
    pub fn shortest_distances(&self, source: &str) -> Result<Vec<Option<Distance>>, GraphError> {
        let from = self.require(source)?;
        Ok(self.label(from).distance)
    }

    fn label(&self, source: usize) -> Labels {
        let size = self.vertex_count();
        let mut labels = Labels {
            distance: vec![None; size],
            parent: vec![None; size],
        };
        let mut finalized = vec![false; size];
        labels.distance[source] = Some(0);

        while let Some((current, base)) = closest_open(&labels.distance, &finalized) {
            finalized[current] = true;
            debug!("Finalized {} at distance {}", self.name(current), base);

            for (next, weight) in self.out_edges(current) {
                if finalized[next] {
                    continue;
                }
                let candidate = base.saturating_add(Distance::from(weight));
                if labels.distance[next].map_or(true, |known| candidate < known) {
                    labels.distance[next] = Some(candidate);
                    labels.parent[next] = Some(current);
                }
            }
        }

        labels
    }

    // =========================================================================
    // Depth-first traversal
    // =========================================================================

    /// Vertices in depth-first visitation order from `start`, following
    /// outgoing edges in index order. Each reachable vertex appears once.
    ///
    /// # Panics
    ///
    /// The traversal recurses once per vertex on the current path, so stack
    /// depth grows with the longest simple path from `start`. A long enough
    /// chain overflows the thread's stack.
    pub fn depth_first(&self, start: &str) -> Result<Vec<String>, GraphError> {
        let start = self.require(start)?;
        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();

        self.visit(start, &mut visited, &mut order);

        Ok(order.into_iter().map(|i| self.name(i).to_string()).collect())
    }

    fn visit(&self, index: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[index] = true;
        order.push(index);
        for (next, _) in self.out_edges(index) {
            if !visited[next] {
                self.visit(next, visited, order);
            }
        }
    }

    // =========================================================================
    // Nearest-neighbour tour
    // =========================================================================

    /// Visitation order of the greedy nearest-neighbour tour from `start`.
    /// See [`Graph::salesman_tour`].
    pub fn nearest_neighbour_tour(&self, start: &str) -> Result<Vec<String>, GraphError> {
        Ok(self.salesman_tour(start)?.stops)
    }

    /// Greedy travelling-salesman approximation.
    ///
    /// From the current vertex, always take the cheapest outgoing edge to a
    /// vertex not yet visited (lowest index on equal weights), until no such
    /// edge remains. The tour is closed only if the graph already holds an
    /// edge from the last stop back to `start`. Neither optimality nor a
    /// visit of every vertex is guaranteed.
    pub fn salesman_tour(&self, start: &str) -> Result<Tour, GraphError> {
        let start = self.require(start)?;
        let mut visited = vec![false; self.vertex_count()];
        visited[start] = true;

        let mut stops = vec![start];
        let mut leg_weights = Vec::new();
        let mut current = start;
        while let Some((next, weight)) = self.nearest_open_neighbour(current, &visited) {
            debug!("Travelling {} -> {} ({})", self.name(current), self.name(next), weight);
            visited[next] = true;
            stops.push(next);
            leg_weights.push(weight);
            current = next;
        }

        let closing_weight = match self.weight_at(current, start) {
            weight if weight != 0 && stops.len() > 1 => Some(weight),
            _ => None,
        };
        let total_weight = leg_weights
            .iter()
            .chain(closing_weight.as_ref())
            .map(|&w| Distance::from(w))
            .sum();

        Ok(Tour {
            stops: stops.into_iter().map(|i| self.name(i).to_string()).collect(),
            leg_weights,
            closing_weight,
            total_weight,
        })
    }

    fn nearest_open_neighbour(&self, from: usize, visited: &[bool]) -> Option<(usize, Weight)> {
        self.out_edges(from)
            .filter(|(to, _)| !visited[*to])
            .min_by_key(|&(to, weight)| (weight, to))
    }
}

/// Non-finalised vertex with the smallest known distance, lowest index first
fn closest_open(distance: &[Option<Distance>], finalized: &[bool]) -> Option<(usize, Distance)> {
    distance
        .iter()
        .zip(finalized)
        .enumerate()
        .filter(|(_, (_, done))| !**done)
        .filter_map(|(index, (known, _))| known.map(|d| (index, d)))
        .min_by_key(|&(index, d)| (d, index))
}
