use async_trait::async_trait;

use crate::{
    error::Result,
    types::{PostFile, PostFilename},
};

/// Core abstraction over where markdown post files live
///
/// Implementors provide read-only access to a flat directory of content
/// files from various backends (a hosted repository API, the local
/// filesystem). Both operations return fully-hydrated contents, not lazy
/// handles; downstream code reads `.contents` directly after the call.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch a single named file
    ///
    /// Returns `ContentError::NotFound` if the file doesn't exist, and
    /// `ContentError::SourceUnavailable` on transport failure.
    async fn get_file(&self, name: &PostFilename) -> Result<PostFile>;

    /// Fetch every recognized content file in the source's content directory
    ///
    /// Order is unspecified. The fetch is all-or-nothing: one failed file
    /// fails the whole call.
    async fn get_files(&self) -> Result<Vec<PostFile>>;

    /// Get a human-readable identifier for this source (for diagnostics)
    ///
    /// Never includes credentials.
    fn identifier(&self) -> String;
}
