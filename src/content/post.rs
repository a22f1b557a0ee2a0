//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;

use super::FrontMatter;

/// A blog post, rebuilt from disk on every listing
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Front-matter (title, date and pass-through keys)
    pub data: FrontMatter,

    /// Raw document body
    pub content: String,

    /// Name of the directory holding the source file
    pub slug: String,

    /// Full source file path
    #[serde(skip)]
    pub source: PathBuf,

    #[serde(skip)]
    date: NaiveDateTime,
}

impl Post {
    /// Create a post from already-validated parts
    pub fn new(
        data: FrontMatter,
        date: NaiveDateTime,
        content: String,
        slug: String,
        source: PathBuf,
    ) -> Self {
        Self {
            data,
            content,
            slug,
            source,
            date,
        }
    }

    /// Publication date parsed from `data.date`
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn title(&self) -> &str {
        self.data.title()
    }
}
