//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

const CONFIG_TEMPLATE: &str = r#"# Site
title: Blog
author: ''

# Directory
posts_dir: pages/blog
slugs_dir: posts
public_dir: public

# Writing
extension: mdx

# Home page
latest_posts: 3

# Date format
date_format: DD.MM.YYYY
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let config: SiteConfig = serde_yaml::from_str(CONFIG_TEMPLATE)?;
    let posts_dir = target_dir.join(&config.posts_dir);

    fs::create_dir_all(&posts_dir).with_context(|| format!("Failed to create {:?}", posts_dir))?;
    fs::create_dir_all(target_dir.join(&config.slugs_dir))?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let hello_dir = posts_dir.join("hello-world");
    fs::create_dir_all(&hello_dir)?;
    let hello = format!(
        "---\ntitle: Hello World\ndate: {}\n---\n\nWelcome! This is your first post.\n",
        chrono::Local::now().format("%Y-%m-%d")
    );
    fs::write(hello_dir.join(format!("index.{}", config.extension)), hello)?;

    tracing::debug!("Wrote site skeleton to {:?}", target_dir);
    Ok(())
}
