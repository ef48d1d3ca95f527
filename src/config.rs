// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Sources, later ones winning: built-in defaults, a TOML file, then
//! `MATRIXGRAPH_*` environment variables.

use crate::graph::DEFAULT_CELL_WIDTH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "MATRIXGRAPH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Column width of the rendered adjacency matrix
    pub cell_width: usize,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            cell_width: DEFAULT_CELL_WIDTH,
            color: true,
        }
    }
}

/// Default location of the configuration file, if the platform has one
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "matrixgraph")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location) and the
/// environment. Only a missing file at the default location is tolerated;
/// an explicitly named file must exist.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let required = path.is_some();
    let file = path.map(Path::to_path_buf).or_else(default_path);

    let mut builder = config::Config::builder()
        .set_default("log_level", defaults.log_level)?
        .set_default("cell_width", i64::try_from(defaults.cell_width)?)?
        .set_default("color", defaults.color)?;

    if let Some(file) = &file {
        builder = builder.add_source(config::File::from(file.as_path()).required(required));
    }

    builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .and_then(|settings| settings.try_deserialize::<Config>())
        .with_context(|| match &file {
            Some(file) => format!("Failed to load configuration from {}", file.display()),
            None => "Failed to load configuration".to_string(),
        })
}
