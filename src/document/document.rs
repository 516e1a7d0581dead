use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content of {0} must be valid UTF-8")]
    InvalidUtf8(String, #[source] std::string::FromUtf8Error),
}

/// One source document of a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub source: String,
    pub content: String,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// The version is the content hash of the verified text, so two documents
    /// with identical text share a version regardless of where they came from.
    pub fn ingest(
        id: DocumentId,
        source: String,
        raw_content: Vec<u8>,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)
            .map_err(|e| DocumentError::InvalidUtf8(source.clone(), e))?;

        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(Document {
            id,
            version,
            source,
            content,
        })
    }

    /// Convenience for in-memory text.
    pub fn from_text(name: &str, text: &str) -> Self {
        Document {
            id: DocumentId::named(name),
            version: DocumentVersion::from_content(text.as_bytes()),
            source: name.to_string(),
            content: text.to_string(),
        }
    }
}
