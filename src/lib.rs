//! folio-rs: file-based post lister for an MDX blog
//!
//! Posts live in `<posts_dir>/<slug>/index.mdx`, each starting with a
//! front-matter block. This crate lists them newest first, lists their
//! slugs, and writes the JSON page props a static renderer consumes.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Limit, Post, PostLister};

/// The main site handle
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory scanned for posts
    pub posts_dir: PathBuf,
    /// Directory scanned for slugs
    pub slugs_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance from an already-loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let posts_dir = base_dir.join(&config.posts_dir);
        let slugs_dir = base_dir.join(&config.slugs_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            slugs_dir,
            public_dir,
        }
    }

    /// Lister over the posts directory
    pub fn posts(&self) -> PostLister {
        PostLister::new(&self.posts_dir, &self.config.extension)
    }

    /// List posts newest first
    pub fn list_posts(&self, limit: Option<Limit>) -> Result<Vec<Post>> {
        Ok(self.posts().list_posts(limit)?)
    }

    /// List slugs found under the slugs directory
    pub fn list_slugs(&self) -> Result<Vec<String>> {
        let lister = PostLister::new(&self.slugs_dir, &self.config.extension);
        Ok(lister.list_slugs()?)
    }

    /// Write page props to the public directory
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, slug: Option<&str>) -> Result<PathBuf> {
        commands::new::create_post(self, title, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_uses_config_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "posts_dir: content/posts\nslugs_dir: content/posts\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.posts_dir, dir.path().join("content/posts"));
        assert_eq!(folio.slugs_dir, dir.path().join("content/posts"));
        assert_eq!(folio.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_posts_and_slugs_use_separate_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let post = folio.posts_dir.join("hello/index.mdx");
        fs::create_dir_all(post.parent().unwrap()).unwrap();
        fs::write(&post, "---\ntitle: Hello\ndate: 2023-01-01\n---\n").unwrap();

        let other = folio.slugs_dir.join("elsewhere/index.mdx");
        fs::create_dir_all(other.parent().unwrap()).unwrap();
        fs::write(&other, "").unwrap();

        let posts = folio.list_posts(None).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello");
        assert_eq!(folio.list_slugs().unwrap(), vec!["elsewhere"]);
    }
}
