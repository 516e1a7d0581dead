use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::config::CorpusConfig;
use crate::corpus::{Corpus, CorpusError};
use crate::document::{Document, DocumentId, SentenceSplitter};

impl Corpus {
    /// Load every matching file under `root` (recursively) into a corpus.
    ///
    /// Hidden files and directories are skipped and symlinks are followed.
    /// An empty directory is a valid corpus with zero sentences.
    pub fn load(root: &Path, config: &CorpusConfig) -> Result<Self, CorpusError> {
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root.to_path_buf()));
        }

        let mut documents = Vec::new();
        for path in document_paths(root, config)? {
            let id = DocumentId::from_path(root, &path)?;
            let raw = fs::read(&path)?;
            let doc = Document::ingest(id, path.display().to_string(), raw)?;
            debug!(document = %doc.id, version = doc.version.as_str(), "document loaded");
            documents.push(doc);
        }

        let splitter = SentenceSplitter::new(config.min_sentence_tokens);
        Corpus::from_documents(documents, &splitter)
    }
}

/// Files under `root` accepted by `config`, sorted by path.
fn document_paths(root: &Path, config: &CorpusConfig) -> Result<Vec<PathBuf>, CorpusError> {
    // Only hidden entries are filtered; ignore files have no meaning for a corpus.
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && config.accepts(path) {
            paths.push(path.to_path_buf());
        }
    }

    paths.sort();
    Ok(paths)
}
