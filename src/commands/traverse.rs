// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Traversal commands - depth-first walk and nearest-neighbour tour

use super::Output;
use crate::graph::Graph;
use anyhow::Result;
use tracing::info;

/// Run the dfs command
pub fn dfs(graph: &Graph, out: &Output, start: &str) -> Result<()> {
    let order = graph.depth_first(start)?;
    info!("Depth-first walk from {} reached {} vertices", start, order.len());

    if out.json {
        return out.emit_json(&order);
    }
    out.line(&out.sequence(&order))
}

/// Run the tour command
pub fn tour(graph: &Graph, out: &Output, start: &str) -> Result<()> {
    let tour = graph.salesman_tour(start)?;

    if tour.stops.len() < graph.vertex_count() {
        info!(
            "Tour from {} stopped after {} of {} vertices",
            start,
            tour.stops.len(),
            graph.vertex_count()
        );
    }

    if out.json {
        return out.emit_json(&tour);
    }
    out.line(&out.highlight(&tour.to_string()))
}
