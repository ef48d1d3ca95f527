// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Applies arbitrary mutation sequences and checks the matrix stays square

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use matrixgraph::types::Edge;
use matrixgraph::Graph;

#[derive(Debug, Arbitrary)]
enum Op {
    InsertVertex(u8),
    DeleteVertex(u8),
    InsertEdge(u8, u8, u32),
    DeleteEdge(u8, u8),
    SetWeight(u8, u8, u32),
    ShortestPath(u8, u8),
    DepthFirst(u8),
    Tour(u8),
}

fn name(id: u8) -> String {
    format!("v{}", id % 16)
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph = Graph::new();

    for op in ops {
        let before = graph.clone();
        let result = match op {
            Op::InsertVertex(v) => graph.insert_vertex(&name(v)),
            Op::DeleteVertex(v) => graph.delete_vertex(&name(v)),
            Op::InsertEdge(a, b, w) => graph.insert_edge(&Edge::new(name(a), name(b), w)),
            Op::DeleteEdge(a, b) => graph.delete_edge(&Edge::new(name(a), name(b), 0)),
            Op::SetWeight(a, b, w) => graph.set_edge_weight(&name(a), &name(b), w),
            Op::ShortestPath(a, b) => graph.shortest_path(&name(a), &name(b)).map(|_| ()),
            Op::DepthFirst(v) => graph.depth_first(&name(v)).map(|_| ()),
            Op::Tour(v) => graph.salesman_tour(&name(v)).map(|_| ()),
        };

        if result.is_err() {
            assert_eq!(graph, before, "failed operation changed the graph");
        }

        let size = graph.vertex_count();
        assert_eq!(graph.matrix().len(), size);
        assert!(graph.matrix().iter().all(|row| row.len() == size));
    }
});
