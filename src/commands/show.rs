// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Show command - prints the adjacency matrix

use super::Output;
use crate::graph::Graph;
use anyhow::Result;
use tracing::{info, warn};

/// Run the show command
pub fn run(graph: &Graph, out: &Output) -> Result<()> {
    info!(
        "Showing {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if graph.is_empty() {
        warn!("Graph is empty. Pass --vertices to describe one.");
    }

    if out.json {
        return out.emit_json(graph);
    }
    out.line(&graph.render_with(out.cell_width))
}
