use std::path::PathBuf;

use async_trait::async_trait;
use futures::future::try_join_all;
use tokio::fs;

use crate::{
    error::{ContentError, Result},
    source::PostSource,
    types::{PostFile, PostFilename},
};

/// Local-directory post source, for offline and development use
///
/// Reads content files from a single flat directory; subdirectories are
/// ignored. The directory path is taken as-is — resolving it relative to
/// the deployed process belongs to the configuration layer.
#[derive(Clone)]
pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl PostSource for LocalSource {
    async fn get_file(&self, name: &PostFilename) -> Result<PostFile> {
        let path = self.dir.join(name.as_str());

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(PostFile {
                name: name.clone(),
                contents,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ContentError::NotFound {
                name: name.as_str().to_string(),
            }),
            Err(e) => Err(ContentError::SourceUnavailable {
                message: format!("Failed to read {}: {}", path.display(), e),
            }),
        }
    }

    async fn get_files(&self) -> Result<Vec<PostFile>> {
        let mut entries = fs::read_dir(&self.dir).await.map_err(|e| {
            ContentError::SourceUnavailable {
                message: format!("Failed to list {}: {}", self.dir.display(), e),
            }
        })?;

        // Same extension filter as the remote listing.
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str().and_then(PostFilename::parse) {
                names.push(name);
            }
        }

        try_join_all(names.iter().map(|name| self.get_file(name))).await
    }

    fn identifier(&self) -> String {
        format!("local://{}", self.dir.display())
    }
}
