//! Options shared by every command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use nnc_core::SearchConfig;

/// Largest board on which an exhaustive search finishes in reasonable time
const EXHAUSTIVE_SIZE_LIMIT: usize = 3;

#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Board size (n for an n x n board)
    #[arg(long, default_value = "3")]
    pub size: usize,

    /// AI search depth in plies (default: size^2, searching to the end)
    #[arg(long)]
    pub depth: Option<u32>,

    /// Search root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Search configuration JSON file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SearchArgs {
    /// Merge the config file (if any) with command-line flags
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SearchConfig::default(),
        };

        if let Some(depth) = self.depth {
            config.max_depth = Some(depth);
        }
        if self.parallel {
            config.parallel = true;
        }

        if config.max_depth.is_none() && self.size > EXHAUSTIVE_SIZE_LIMIT {
            tracing::warn!(
                "Exhaustive search on a {0}x{0} board grows exponentially; consider --depth",
                self.size
            );
        }

        Ok(config)
    }
}

/// Load a search configuration from JSON
pub fn load_config(path: &Path) -> Result<SearchConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: SearchConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    tracing::debug!(?config, "Loaded search config from {}", path.display());
    Ok(config)
}
