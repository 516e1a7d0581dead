use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::corpus::CorpusError;
use crate::objective::ObjectiveError;
use crate::selection::budgeting::SizeUnit;
use crate::summary::TranslationError;

/// A sentence chosen for the summary, in presentation order.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub id: String,
    pub document: String,
    pub position: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    /// Objective value that won the round this sentence was selected in.
    pub score: f64,
    pub tokens: usize,
    pub chars: usize,
}

/// Metadata describing how the summary was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub budget: i64,
    pub unit: SizeUnit,

    pub size_used: usize,
    pub tokens_used: usize,
    pub chars_used: usize,

    pub sentences_considered: usize,
    pub sentences_selected: usize,
    pub sentences_rejected_by_budget: usize,
    pub sentences_pruned: usize,
    pub rounds: usize,

    pub source_lang: String,
    pub target_lang: String,

    pub generated_at: DateTime<Utc>, // informational only
}

/// The final result of a summarization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub sentences: Vec<SelectedSentence>,
    pub summary: SummaryMetadata,
}

impl SummaryReport {
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn target_text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.translation.as_deref().unwrap_or(&s.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Objective error: {0}")]
    Objective(#[from] ObjectiveError),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
