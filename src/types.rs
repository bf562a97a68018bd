use std::fmt;

use serde::Serialize;

/// The single recognized content file extension
pub const POST_EXTENSION: &str = ".md";

/// A filename guaranteed to end with the recognized content extension
///
/// Filenames and slugs are exact inverses: stripping the extension from a
/// `PostFilename` yields the slug, and `from_slug` puts it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostFilename(String);

impl PostFilename {
    /// Accept a name only if it carries the recognized extension
    ///
    /// Returns `None` otherwise; directory listings use this as their filter.
    pub fn parse(name: &str) -> Option<Self> {
        if name.len() > POST_EXTENSION.len() && name.ends_with(POST_EXTENSION) {
            Some(Self(name.to_string()))
        } else {
            None
        }
    }

    /// Reconstruct the filename a slug was derived from
    pub fn from_slug(slug: &str) -> Self {
        Self(format!("{}{}", slug, POST_EXTENSION))
    }

    /// The URL slug for this file: the name with the extension stripped
    pub fn slug(&self) -> &str {
        self.0.strip_suffix(POST_EXTENSION).unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One raw content file: front-matter plus markdown body, undecoded
///
/// Created fresh on every fetch and never cached or mutated.
#[derive(Debug, Clone)]
pub struct PostFile {
    pub name: PostFilename,
    pub contents: String,
}

/// A post as it appears in the index listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
}

/// A fully resolved post for the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetail {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_markdown_names() {
        let name = PostFilename::parse("hello-world.md").unwrap();
        assert_eq!(name.as_str(), "hello-world.md");
        assert_eq!(name.slug(), "hello-world");
    }

    #[test]
    fn test_parse_rejects_other_extensions() {
        assert!(PostFilename::parse("notes.txt").is_none());
        assert!(PostFilename::parse("post.mdx").is_none());
        assert!(PostFilename::parse("README").is_none());
        // A bare extension has no slug to derive
        assert!(PostFilename::parse(".md").is_none());
    }

    #[test]
    fn test_slug_round_trip() {
        for slug in ["a", "hello-world", "2024-review", "post.draft"] {
            assert_eq!(PostFilename::from_slug(slug).slug(), slug);
        }

        let name = PostFilename::parse("mocking-graphql.md").unwrap();
        assert_eq!(PostFilename::from_slug(name.slug()), name);
    }
}
