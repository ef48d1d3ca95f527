// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - prints the effective configuration

use super::Output;
use crate::config::Config;
use anyhow::{Context, Result};

/// Print the effective configuration
pub fn run(config: &Config, out: &Output) -> Result<()> {
    if out.json {
        return out.emit_json(config);
    }
    let text = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    out.line(text.trim_end())
}
