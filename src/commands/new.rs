//! Create a new post

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Create `<posts_dir>/<slug>/index.<ext>` and return its path
pub fn create_post(folio: &Folio, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    let target_dir = folio.posts_dir.join(&slug);
    let file_path = target_dir.join(format!("index.{}", folio.config.extension));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {:?}", target_dir))?;

    // Quote the title so characters like ':' stay valid YAML
    let quoted = serde_json::to_string(title)?;
    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n\n",
        quoted,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content).with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_post_is_listed() {
        let dir = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, "Hello: World", None).unwrap();
        assert_eq!(path, folio.posts_dir.join("hello-world/index.mdx"));

        let posts = folio.list_posts(None).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
        assert_eq!(posts[0].title(), "Hello: World");
    }

    #[test]
    fn test_explicit_slug_and_duplicates() {
        let dir = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, "Anything", Some("My Slug")).unwrap();
        assert!(path.ends_with("my-slug/index.mdx"));

        assert!(create_post(&folio, "Again", Some("my-slug")).is_err());
        assert!(create_post(&folio, "!!!", None).is_err());
    }
}
