//! Content retrieval and post resolution for a markdown blog
//!
//! Posts are markdown files with YAML front-matter, served from one of two
//! interchangeable sources: the GitHub contents API or a local directory.
//! [`PostResolver`] turns raw files into [`PostSummary`] and [`PostDetail`]
//! records for the presentation layer; nothing is cached, every call
//! re-fetches and re-parses.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod github;
pub mod local;
pub mod markdown;
pub mod resolver;
pub mod source;
pub mod types;

pub use config::SourceConfig;
pub use error::{ContentError, Result};
pub use github::GitHubSource;
pub use local::LocalSource;
pub use resolver::PostResolver;
pub use source::PostSource;
pub use types::{PostDetail, PostFile, PostFilename, PostSummary, POST_EXTENSION};
