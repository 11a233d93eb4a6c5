//! Runtime configuration
//!
//! Everything has a default; a JSON file may override any subset:
//!
//! ```json
//! {
//!   "tokenize": "words",
//!   "suffix_array": { "parallel_threshold": 50000 },
//!   "render": { "gap_marker": "<eps>" }
//! }
//! ```

use crate::align::RenderConfig;
use crate::error::{Result, TextSearchError};
use crate::suffix_array::SuffixArrayConfig;
use crate::symbols::TokenizeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokenize: TokenizeMode,
    pub suffix_array: SuffixArrayConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Load a config file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|source| TextSearchError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
