//! Search configuration loader.

use std::path::Path;

use delve_core::SearchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for search configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`SearchConfig::default`], so an empty file
    /// is a valid configuration.
    pub fn load(path: &Path) -> LoadResult<SearchConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<SearchConfig> {
        let config: SearchConfig = toml::from_str(content)?;
        Ok(config)
    }
}
