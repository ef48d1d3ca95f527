// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod path;
pub mod query;
pub mod show;
pub mod traverse;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use std::io::Write;

/// How command results are written to stdout
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Emit JSON instead of text
    pub json: bool,
    /// Style vertex names with ANSI colors when stdout supports them
    pub color: bool,
    /// Column width for rendered matrices
    pub cell_width: usize,
}

impl Output {
    /// Write `value` as pretty-printed JSON
    pub fn emit_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        self.line(&text)
    }

    /// Write one line of text
    pub fn line(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").context("Failed to write to stdout")?;
        Ok(())
    }

    /// A vertex name, bold when color is on and stdout is a terminal
    #[must_use]
    pub fn vertex(&self, name: &str) -> String {
        if self.color {
            name.if_supports_color(Stream::Stdout, |name| name.bold())
                .to_string()
        } else {
            name.to_string()
        }
    }

    /// A whole result line, green when color is on and stdout is a terminal
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        if self.color {
            text.if_supports_color(Stream::Stdout, |text| text.green())
                .to_string()
        } else {
            text.to_string()
        }
    }

    /// Vertex names joined by arrows
    #[must_use]
    pub fn sequence(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|name| self.vertex(name))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
