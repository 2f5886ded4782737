//! Search configuration

use serde::{Deserialize, Serialize};

/// AI configuration for move selection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Ply limit; `None` searches `size^2` plies, i.e. to the end of the game
    pub max_depth: Option<u32>,
    /// Fan root moves out across threads (needs the `parallel` feature)
    pub parallel: bool,
}

impl SearchConfig {
    /// Create config with an explicit ply limit
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Depth actually searched on a board of the given size
    pub fn depth_for(&self, size: usize) -> u32 {
        self.max_depth.unwrap_or((size * size) as u32)
    }
}
