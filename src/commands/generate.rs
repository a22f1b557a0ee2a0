//! Generate page props

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{Limit, Post};
use crate::Folio;

/// Props for a page listing several posts
#[derive(Serialize)]
struct ListProps<'a> {
    posts: &'a [Post],
}

/// Props for a single post page
#[derive(Serialize)]
struct PostProps<'a> {
    post: &'a Post,
}

/// Write `index.json`, `blog.json` and `blog/<slug>.json` to the public directory
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = folio.list_posts(None)?;
    tracing::info!("Loaded {} posts", posts.len());

    check_unique_slugs(&posts)?;

    // Start from an empty blog/ so deleted posts leave nothing behind
    let public_dir = &folio.public_dir;
    let blog_dir = public_dir.join("blog");
    if blog_dir.exists() {
        fs::remove_dir_all(&blog_dir)
            .with_context(|| format!("Failed to clear {:?}", blog_dir))?;
    }
    fs::create_dir_all(&blog_dir).with_context(|| format!("Failed to create {:?}", blog_dir))?;

    // Home page shows the newest few
    let latest = match Limit::from_raw(folio.config.latest_posts as i64) {
        Some(limit) => &posts[..posts.len().min(limit.get())],
        None => &posts[..],
    };
    write_json(&public_dir.join("index.json"), &ListProps { posts: latest })?;
    write_json(&public_dir.join("blog.json"), &ListProps { posts: &posts })?;

    for post in &posts {
        let path = blog_dir.join(format!("{}.json", post.slug));
        write_json(&path, &PostProps { post })?;
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Each post page is keyed by slug, so two posts may not share one
fn check_unique_slugs(posts: &[Post]) -> Result<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for post in posts {
        if let Some(first) = seen.insert(&post.slug, &post.source) {
            anyhow::bail!(
                "Duplicate slug {:?}: {:?} and {:?}",
                post.slug,
                first,
                post.source
            );
        }
    }
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
