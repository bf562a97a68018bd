use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;

use crate::{
    error::{ContentError, Result},
    source::PostSource,
    types::{PostFile, PostFilename},
};

const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub-backed post source
///
/// Fetches content through the GitHub contents API, scoped to one
/// repository directory on one branch:
/// - JSON directory listings for enumerating posts
/// - the raw media type for file downloads
#[derive(Clone)]
pub struct GitHubSource {
    client: Client,
    api_base: String,
    owner: String,
    repo: String,
    branch: String,
    content_dir: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ListingEntry {
    name: String,
}

impl GitHubSource {
    /// Create a new GitHub source
    ///
    /// # Arguments
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `branch` - Branch or ref to fetch from
    /// * `content_dir` - Directory inside the repository holding the posts
    /// * `token` - Optional API token, sent as `Authorization: token <t>`
    pub fn new(
        owner: String,
        repo: String,
        branch: String,
        content_dir: String,
        token: Option<String>,
    ) -> Self {
        let client = Client::builder()
            .user_agent("blog-content/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            owner,
            repo,
            branch,
            content_dir,
            token,
        }
    }

    /// Point the source at a different API host (used by tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Build the listing URL for the content directory
    fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base, self.owner, self.repo, self.content_dir, self.branch
        )
    }

    /// Build the content URL for a single file
    fn file_url(&self, name: &PostFilename) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}/{}?ref={}",
            self.api_base, self.owner, self.repo, self.content_dir, name, self.branch
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("token {}", token)),
            None => request,
        }
    }
}

#[async_trait]
impl PostSource for GitHubSource {
    async fn get_file(&self, name: &PostFilename) -> Result<PostFile> {
        let url = self.file_url(name);

        let response = self
            .authorize(self.client.get(&url))
            .header("Accept", "application/vnd.github.v3.raw")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let contents = response.text().await?;

                Ok(PostFile {
                    name: name.clone(),
                    contents,
                })
            }
            StatusCode::NOT_FOUND => Err(ContentError::NotFound {
                name: name.as_str().to_string(),
            }),
            status => {
                let message = format!(
                    "Unexpected status {} fetching {}: {}",
                    status,
                    name,
                    response.text().await.unwrap_or_default()
                );
                Err(ContentError::SourceUnavailable { message })
            }
        }
    }

    async fn get_files(&self) -> Result<Vec<PostFile>> {
        let url = self.listing_url();

        let response = self
            .authorize(self.client.get(&url))
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let entries: Vec<ListingEntry> = match response.status() {
            StatusCode::OK => response.json().await?,
            StatusCode::NOT_FOUND => {
                return Err(ContentError::NotFound {
                    name: self.content_dir.clone(),
                })
            }
            status => {
                let message = format!(
                    "Unexpected status {} listing {}: {}",
                    status,
                    self.content_dir,
                    response.text().await.unwrap_or_default()
                );
                return Err(ContentError::SourceUnavailable { message });
            }
        };

        // Entries without the recognized extension are excluded, not errors.
        let names: Vec<PostFilename> = entries
            .iter()
            .filter_map(|entry| PostFilename::parse(&entry.name))
            .collect();

        try_join_all(names.iter().map(|name| self.get_file(name))).await
    }

    fn identifier(&self) -> String {
        format!(
            "github://{}/{}/{}/{}",
            self.owner, self.repo, self.branch, self.content_dir
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> GitHubSource {
        GitHubSource::new(
            "owner".to_string(),
            "repo".to_string(),
            "main".to_string(),
            "posts".to_string(),
            None,
        )
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(
            source().listing_url(),
            "https://api.github.com/repos/owner/repo/contents/posts?ref=main"
        );
    }

    #[test]
    fn test_file_url() {
        let name = PostFilename::from_slug("hello-world");
        assert_eq!(
            source().file_url(&name),
            "https://api.github.com/repos/owner/repo/contents/posts/hello-world.md?ref=main"
        );
    }

    #[test]
    fn test_identifier_excludes_token() {
        let source = GitHubSource::new(
            "owner".to_string(),
            "repo".to_string(),
            "main".to_string(),
            "posts".to_string(),
            Some("secret-token".to_string()),
        );

        let id = source.identifier();
        assert_eq!(id, "github://owner/repo/main/posts");
        assert!(!id.contains("secret-token"));
    }
}
