//! Content module - posts, front-matter and the post lister

mod error;
mod frontmatter;
pub mod loader;
mod post;

pub use error::{ContentError, FrontMatterError};
pub use frontmatter::{parse_date, FrontMatter};
pub use loader::{Limit, PostLister};
pub use post::Post;
