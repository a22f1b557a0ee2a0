//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // Directory
    /// Tree scanned when listing posts
    pub posts_dir: String,
    /// Tree scanned when listing slugs
    pub slugs_dir: String,
    pub public_dir: String,

    // Writing
    /// Content file extension, without the dot
    pub extension: String,

    // Home page
    pub latest_posts: usize,

    // Date format (Moment.js tokens)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),

            posts_dir: "pages/blog".to_string(),
            slugs_dir: "posts".to_string(),
            public_dir: "public".to_string(),

            extension: "mdx".to_string(),

            latest_posts: 3,

            date_format: "DD.MM.YYYY".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.extension = config.extension.trim_start_matches('.').to_string();
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}
