//! Front-matter parsing and validation

use serde::Deserialize;

use crate::error::{ContentError, Result};

/// Metadata block at the head of a content file
///
/// `title` is required for a post to resolve; `description` is optional and
/// simply omitted downstream when absent. Both are modelled as options so
/// parsing and validation stay separate steps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostAttributes {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PostAttributes {
    /// Validate that a non-empty title was authored
    pub fn require_title(&self, filename: &str) -> Result<&str> {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => Ok(title),
            _ => Err(ContentError::InvalidContent {
                filename: filename.to_string(),
                reason: "front-matter is missing the required `title` field".to_string(),
            }),
        }
    }
}

/// A content file split into its metadata and markdown body
#[derive(Debug)]
pub struct Document<'a> {
    pub attributes: PostAttributes,
    pub body: &'a str,
}

/// Split a content file into front-matter attributes and markdown body
///
/// The front-matter block is YAML delimited by `---` lines. A file without
/// one parses to empty attributes and the full text as body; validation then
/// rejects it for want of a title. Malformed YAML inside the block is an
/// `InvalidContent` error naming the file.
pub fn parse<'a>(filename: &str, contents: &'a str) -> Result<Document<'a>> {
    let Some(rest) = contents.strip_prefix("---") else {
        return Ok(Document {
            attributes: PostAttributes::default(),
            body: contents,
        });
    };
    let rest = rest.trim_start_matches(['\r', '\n']);

    let Some(end) = rest.find("\n---") else {
        // Unterminated marker, treat the whole file as body
        return Ok(Document {
            attributes: PostAttributes::default(),
            body: contents,
        });
    };

    let yaml = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);

    let attributes = if yaml.trim().is_empty() {
        PostAttributes::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| ContentError::InvalidContent {
            filename: filename.to_string(),
            reason: format!("malformed front-matter: {}", e),
        })?
    };

    Ok(Document { attributes, body })
}
