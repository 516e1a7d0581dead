pub mod loader;
pub mod similarity;

use std::cell::OnceCell;
use std::sync::Arc;

use thiserror::Error;

use crate::document::{Document, DocumentError, Sentence, SentenceSplitter};
use crate::types::identifiers::DocumentIdError;
pub use similarity::SimilarityMatrix;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    DocumentId(#[from] DocumentIdError),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Corpus root is not a directory: {0}")]
    NotADirectory(std::path::PathBuf),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
}

/// Ordered collection of candidate sentences for one summarization run.
///
/// Documents are kept sorted by id, and sentences follow document order, so
/// two loads of the same directory produce the same candidate order.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    sentences: Vec<Sentence>,
    similarity: OnceCell<Arc<SimilarityMatrix>>,
}

impl Corpus {
    pub fn from_documents(
        documents: Vec<Document>,
        splitter: &SentenceSplitter,
    ) -> Result<Self, CorpusError> {
        let mut documents = documents;
        documents.sort_by(|a, b| a.id.cmp(&b.id));

        for pair in documents.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(CorpusError::DuplicateDocumentId(
                    pair[0].id.as_str().to_string(),
                ));
            }
        }

        let mut sentences = Vec::new();
        for doc in &documents {
            for (position, text) in splitter.split(&doc.content).into_iter().enumerate() {
                sentences.push(Sentence::new(sentences.len(), doc.id.clone(), position, text));
            }
        }

        Ok(Self {
            documents,
            sentences,
            similarity: OnceCell::new(),
        })
    }

    /// Build a corpus directly from sentences. Indices are reassigned to
    /// match the given order.
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        let sentences = sentences
            .into_iter()
            .enumerate()
            .map(|(index, mut sentence)| {
                sentence.index = index;
                sentence
            })
            .collect();

        Self {
            documents: Vec::new(),
            sentences,
            similarity: OnceCell::new(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Pairwise sentence similarity, computed on first use.
    pub fn similarity(&self) -> Arc<SimilarityMatrix> {
        self.similarity
            .get_or_init(|| Arc::new(SimilarityMatrix::from_sentences(&self.sentences)))
            .clone()
    }
}
