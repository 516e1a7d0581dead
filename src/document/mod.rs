pub mod document;
pub mod sentence;
pub mod terms;

pub use crate::types::identifiers::{DocumentId, DocumentVersion, SentenceId};
pub use document::{Document, DocumentError};
pub use sentence::{count_tokens, Sentence, SentenceSplitter};
