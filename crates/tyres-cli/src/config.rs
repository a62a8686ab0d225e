//! `tyres.json` configuration.
//!
//! ```json
//! {
//!   "dialect": "typescript",
//!   "resolver": { "maxChainDepth": 64 }
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tyres::{Dialect, ResolverConfig};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TyresConfig {
    /// `flow`, `typescript` or `ts`. Unknown names are rejected on load.
    pub dialect: Option<Dialect>,
    pub resolver: ResolverConfig,
}

pub fn parse_config(source: &str) -> Result<TyresConfig> {
    let config = serde_json::from_str(source)
        .context("failed to parse tyres config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<TyresConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}
