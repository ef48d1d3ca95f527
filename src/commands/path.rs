// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path commands - shortest path and single-source distances

use super::Output;
use crate::graph::Graph;
use crate::types::Distance;
use anyhow::Result;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct VertexDistance<'a> {
    vertex: &'a str,
    distance: Option<Distance>,
}

/// Run the path command
pub fn run(graph: &Graph, out: &Output, source: &str, target: &str) -> Result<()> {
    info!("Searching shortest path {} -> {}", source, target);

    let path = graph.shortest_path(source, target)?;

    if out.json {
        return out.emit_json(&path);
    }
    out.line(&out.highlight(&path.to_string()))
}

/// Run the distances command
pub fn distances(graph: &Graph, out: &Output, source: &str) -> Result<()> {
    let distances = graph.shortest_distances(source)?;
    let rows: Vec<_> = graph
        .vertices()
        .iter()
        .zip(distances)
        .map(|(vertex, distance)| VertexDistance { vertex, distance })
        .collect();

    if out.json {
        return out.emit_json(&rows);
    }

    for row in rows {
        let distance = row
            .distance
            .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
        out.line(&format!("{}\t{}", out.vertex(row.vertex), distance))?;
    }
    Ok(())
}
