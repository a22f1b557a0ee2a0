//! Error types for content loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while splitting and parsing a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no front-matter block at the start of the document")]
    Missing,

    #[error("front-matter block opened with `{0}` is never closed")]
    Unterminated(&'static str),

    #[error("required front-matter field `{0}` is missing")]
    MissingField(&'static str),

    #[error("front-matter field `{0}` must be a string or a number")]
    NotText(&'static str),

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while listing posts or slugs
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed front-matter in {}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("unparseable date {value:?} in {}", path.display())]
    InvalidDate { path: PathBuf, value: String },

    #[error("cannot derive a slug for {}: parent directory has no usable name", path.display())]
    MissingSlug { path: PathBuf },

    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::FrontMatter { path, .. }
            | Self::InvalidDate { path, .. }
            | Self::MissingSlug { path }
            | Self::NonUtf8Path { path } => Some(path),
            Self::Pattern(_) => None,
        }
    }
}
