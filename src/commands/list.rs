//! List site content

use anyhow::Result;

use crate::content::Limit;
use crate::helpers::Helpers;
use crate::Folio;

/// Render the listing for a content type as printable lines
pub fn render(folio: &Folio, content_type: &str, limit: Option<Limit>) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" => {
            let helpers = Helpers::new(&folio.config);
            let posts = folio.list_posts(limit)?;
            lines.push(format!("Posts ({}):", posts.len()));
            for post in posts {
                lines.push(format!(
                    "  {} - {} [{}]",
                    helpers.date(&post.date(), None),
                    post.title(),
                    post.slug
                ));
            }
        }
        "slug" | "slugs" => {
            let slugs = folio.list_slugs()?;
            lines.push(format!("Slugs ({}):", slugs.len()));
            lines.extend(slugs.into_iter().map(|s| format!("  {}", s)));
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, slug", content_type);
        }
    }

    Ok(lines)
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, limit: Option<Limit>) -> Result<()> {
    for line in render(folio, content_type, limit)? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> (tempfile::TempDir, Folio) {
        let dir = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        for (slug, title, date) in [("a", "First", "2023-01-01"), ("b", "Second", "2023-06-15")] {
            let path = folio.posts_dir.join(slug).join("index.mdx");
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("---\ntitle: {}\ndate: {}\n---\n", title, date)).unwrap();
        }
        (dir, folio)
    }

    #[test]
    fn test_render_posts() {
        let (_dir, folio) = site();

        let lines = render(&folio, "post", None).unwrap();
        assert_eq!(
            lines,
            vec![
                "Posts (2):",
                "  15.06.2023 - Second [b]",
                "  01.01.2023 - First [a]",
            ]
        );

        let lines = render(&folio, "posts", Limit::from_raw(1)).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_slugs_and_unknown_type() {
        let (_dir, folio) = site();

        let lines = render(&folio, "slug", None).unwrap();
        assert_eq!(lines, vec!["Slugs (0):"]);
        assert!(render(&folio, "tag", None).is_err());
    }

    #[test]
    fn test_render_with_literal_percent_format() {
        let (dir, _) = site();
        fs::write(dir.path().join("_config.yml"), "date_format: \"DD% MM\"\n").unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let lines = render(&folio, "post", None).unwrap();
        assert_eq!(lines[1], "  15% 06 - Second [b]");
    }
}
