use std::sync::Arc;

use crate::{
    error::Result,
    frontmatter, markdown,
    source::PostSource,
    types::{PostDetail, PostFilename, PostSummary},
};

/// Turns raw content files into post records
///
/// The only component with domain knowledge of what a post is: it splits
/// front-matter from body, validates metadata, derives slugs from filenames
/// and renders markdown. The backing source is injected at construction, so
/// the resolver tests run against an in-memory fake.
pub struct PostResolver {
    source: Arc<dyn PostSource>,
}

impl PostResolver {
    /// Create a resolver over the given source
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    /// List every post in the source
    ///
    /// Fail-fast: a single malformed file aborts the whole listing, so
    /// broken content surfaces at publish time instead of a post quietly
    /// dropping out of the index. Order follows the source's listing order,
    /// which is unspecified.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        let files = self.source.get_files().await?;

        files
            .iter()
            .map(|file| {
                let document = frontmatter::parse(file.name.as_str(), &file.contents)?;
                let title = document.attributes.require_title(file.name.as_str())?;

                Ok(PostSummary {
                    slug: file.name.slug().to_string(),
                    title: title.to_string(),
                })
            })
            .collect()
    }

    /// Resolve a single post by its slug
    ///
    /// Transport errors from the source propagate unchanged, so callers can
    /// tell a missing post (`NotFound`) from broken content
    /// (`InvalidContent`) and an unreachable source (`SourceUnavailable`).
    pub async fn get_post(&self, slug: &str) -> Result<PostDetail> {
        let name = PostFilename::from_slug(slug);
        let file = self.source.get_file(&name).await?;

        let document = frontmatter::parse(name.as_str(), &file.contents)?;
        let title = document.attributes.require_title(name.as_str())?.to_string();

        Ok(PostDetail {
            slug: slug.to_string(),
            title,
            description: document.attributes.description,
            html: markdown::render_html(document.body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::types::PostFile;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct InMemorySource {
        files: HashMap<String, String>,
    }

    impl InMemorySource {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(name, contents)| (name.to_string(), contents.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PostSource for InMemorySource {
        async fn get_file(&self, name: &PostFilename) -> Result<PostFile> {
            self.files
                .get(name.as_str())
                .map(|contents| PostFile {
                    name: name.clone(),
                    contents: contents.clone(),
                })
                .ok_or_else(|| ContentError::NotFound {
                    name: name.as_str().to_string(),
                })
        }

        async fn get_files(&self) -> Result<Vec<PostFile>> {
            let mut files = Vec::new();
            for name in self.files.keys() {
                if let Some(name) = PostFilename::parse(name) {
                    files.push(self.get_file(&name).await?);
                }
            }
            Ok(files)
        }

        fn identifier(&self) -> String {
            "memory".to_string()
        }
    }

    fn resolver(files: &[(&str, &str)]) -> PostResolver {
        PostResolver::new(Arc::new(InMemorySource::new(files)))
    }

    #[tokio::test]
    async fn test_list_posts() {
        let resolver = resolver(&[
            ("a.md", "---\ntitle: A\n---\nBody A"),
            ("b.md", "---\ntitle: B\n---\nBody B"),
        ]);

        let mut posts = resolver.list_posts().await.unwrap();
        posts.sort_by(|x, y| x.slug.cmp(&y.slug));

        assert_eq!(
            posts,
            vec![
                PostSummary {
                    slug: "a".to_string(),
                    title: "A".to_string()
                },
                PostSummary {
                    slug: "b".to_string(),
                    title: "B".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_posts_is_fail_fast() {
        let resolver = resolver(&[
            ("good.md", "---\ntitle: Good\n---\nBody"),
            ("bad.md", "no front-matter here"),
        ]);

        let err = resolver.list_posts().await.unwrap_err();
        assert!(
            matches!(err, ContentError::InvalidContent { ref filename, .. } if filename == "bad.md")
        );
    }

    #[tokio::test]
    async fn test_get_post() {
        let resolver = resolver(&[(
            "hello-world.md",
            "---\ntitle: Hello World\ndescription: First post\n---\n# Hi",
        )]);

        let post = resolver.get_post("hello-world").await.unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.description.as_deref(), Some("First post"));
        assert_eq!(post.html, "<h1>Hi</h1>\n");
    }

    #[tokio::test]
    async fn test_get_post_without_description() {
        let resolver = resolver(&[("plain.md", "---\ntitle: Plain\n---\nBody")]);

        let post = resolver.get_post("plain").await.unwrap();
        assert_eq!(post.description, None);
    }

    #[tokio::test]
    async fn test_get_post_missing_slug_is_not_found() {
        let resolver = resolver(&[]);

        let err = resolver.get_post("missing").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound { ref name } if name == "missing.md"));
    }

    #[tokio::test]
    async fn test_get_post_without_title_is_invalid() {
        let resolver = resolver(&[("untitled.md", "---\ndescription: no title\n---\nBody")]);

        let err = resolver.get_post("untitled").await.unwrap_err();
        assert!(
            matches!(err, ContentError::InvalidContent { ref filename, .. } if filename == "untitled.md")
        );
    }
}
