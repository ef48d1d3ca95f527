// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Fuzz the SOURCE:DESTINATION:WEIGHT edge parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use matrixgraph::types::Edge;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(edge) = text.parse::<Edge>() {
            // Whatever parses must name two non-empty vertices
            assert!(!edge.source().is_empty());
            assert!(!edge.destination().is_empty());
        }
    }
});
