//! Content loader - lists posts and slugs from a base directory

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};

/// Maximum number of posts to return from a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(NonZeroUsize);

impl Limit {
    pub fn new(n: NonZeroUsize) -> Self {
        Self(n)
    }

    /// Convert an unchecked count; anything below one means "no limit"
    pub fn from_raw(n: i64) -> Option<Self> {
        let limit = usize::try_from(n).ok().and_then(NonZeroUsize::new).map(Self);
        if limit.is_none() {
            tracing::warn!("Ignoring non-positive limit {}, listing everything", n);
        }
        limit
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// Lists posts stored as `<base>/<slug>/<file>.<ext>`
#[derive(Debug, Clone)]
pub struct PostLister {
    base_dir: PathBuf,
    extension: String,
}

impl PostLister {
    /// Create a lister over `base_dir` for files ending in `.extension`
    pub fn new<P: AsRef<Path>>(base_dir: P, extension: &str) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Load every post, newest first, truncated to `limit` when given.
    ///
    /// Posts sharing a date keep their discovery order.
    pub fn list_posts(&self, limit: Option<Limit>) -> Result<Vec<Post>, ContentError> {
        let mut posts = Vec::new();

        for path in self.content_files()? {
            posts.push(self.load_post(&path)?);
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date().cmp(&a.date()));

        if let Some(limit) = limit {
            posts.truncate(limit.get());
        }

        tracing::info!("Listed {} posts from {:?}", posts.len(), self.base_dir);
        Ok(posts)
    }

    /// Slugs of every content file, in directory order, without parsing them
    pub fn list_slugs(&self) -> Result<Vec<String>, ContentError> {
        if !self.base_dir.is_dir() {
            tracing::debug!("Slug directory {:?} does not exist", self.base_dir);
            return Ok(Vec::new());
        }

        let mut slugs = Vec::new();

        for entry in WalkDir::new(&self.base_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.base_dir.clone());
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                ContentError::io(path, source)
            })?;

            let path = entry.path();
            if entry.file_type().is_file() && self.is_content_file(path) {
                slugs.push(slug_for(path)?);
            }
        }

        Ok(slugs)
    }

    /// Glob `<base>/**/*.<ext>` and keep regular files with the exact extension
    fn content_files(&self) -> Result<Vec<PathBuf>, ContentError> {
        if !self.base_dir.is_dir() {
            tracing::debug!("Posts directory {:?} does not exist", self.base_dir);
            return Ok(Vec::new());
        }

        let base = self
            .base_dir
            .to_str()
            .ok_or_else(|| ContentError::NonUtf8Path {
                path: self.base_dir.clone(),
            })?;
        let pattern = format!(
            "{}/**/*.{}",
            glob::Pattern::escape(base),
            glob::Pattern::escape(&self.extension)
        );

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                ContentError::io(path, e.into_error())
            })?;

            if path.is_file() && self.is_content_file(&path) {
                files.push(path);
            } else {
                tracing::debug!("Skipping {:?}", path);
            }
        }

        Ok(files)
    }

    fn load_post(&self, path: &Path) -> Result<Post, ContentError> {
        tracing::debug!("Loading post {:?}", path);

        let text = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (data, body) =
            FrontMatter::parse(&text).map_err(|source| ContentError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?;

        let date = data.parse_date().ok_or_else(|| ContentError::InvalidDate {
            path: path.to_path_buf(),
            value: data.date().to_string(),
        })?;

        let slug = slug_for(path)?;
        Ok(Post::new(
            data,
            date,
            body.to_string(),
            slug,
            path.to_path_buf(),
        ))
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}

/// Name of the directory that holds `path`
fn slug_for(path: &Path) -> Result<String, ContentError> {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ContentError::MissingSlug {
            path: path.to_path_buf(),
        })
}
