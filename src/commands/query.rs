// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Query commands - adjacency, neighbours and edge weights

use super::Output;
use crate::graph::Graph;
use crate::types::Weight;
use anyhow::Result;
use serde_json::json;
use tracing::info;

/// Report whether two vertices are adjacent in either direction
pub fn adjacent(graph: &Graph, out: &Output, first: &str, second: &str) -> Result<()> {
    let adjacent = graph.adjacent(first, second)?;

    if out.json {
        return out.emit_json(&json!({ "first": first, "second": second, "adjacent": adjacent }));
    }

    let verdict = if adjacent { "adjacent" } else { "not adjacent" };
    out.line(&format!(
        "{} and {} are {}",
        out.vertex(first),
        out.vertex(second),
        verdict
    ))
}

/// List the outgoing neighbours of a vertex
pub fn neighbours(graph: &Graph, out: &Output, vertex: &str) -> Result<()> {
    let neighbours = graph.neighbours(vertex)?;

    if out.json {
        return out.emit_json(&neighbours);
    }

    if neighbours.is_empty() {
        return out.line(&format!("{} has no outgoing edges", out.vertex(vertex)));
    }
    for name in &neighbours {
        out.line(&out.vertex(name))?;
    }
    Ok(())
}

/// Print the directed weight between two vertices
pub fn weight(graph: &Graph, out: &Output, from: &str, to: &str) -> Result<()> {
    let weight = graph.edge_weight(from, to)?;

    if out.json {
        return out.emit_json(&json!({ "from": from, "to": to, "weight": weight }));
    }
    out.line(&weight.to_string())
}

/// Overwrite a directed weight and show the resulting matrix
pub fn set_weight(graph: &mut Graph, out: &Output, from: &str, to: &str, weight: Weight) -> Result<()> {
    graph.set_edge_weight(from, to, weight)?;
    info!("Set weight {} -> {} to {}", from, to, weight);
    super::show::run(graph, out)
}
