//! Objective functions scored by the greedy optimizer.
//!
//! An objective is bound once to a corpus, then asked for a scorer for each
//! summary state. The scorer maps a candidate sentence to a real number; the
//! built-in objectives return the marginal gain of adding that sentence to
//! the current summary. Aggregation is itself an objective, so the optimizer
//! never knows how many criteria are combined.

pub mod aggregate;
pub mod coverage;
pub mod diversity;
pub mod redundancy;

use thiserror::Error;

use crate::corpus::{Corpus, SimilarityMatrix};
use crate::document::Sentence;
use crate::summary::Summary;
use crate::types::identifiers::SentenceId;

pub use aggregate::AggregateObjective;
pub use coverage::CoverageObjective;
pub use diversity::DiversityObjective;
pub use redundancy::RedundancyObjective;

#[derive(Debug, Error)]
pub enum ObjectiveError {
    #[error("Objective {0} scored before being bound to a corpus")]
    Unbound(&'static str),

    #[error("Sentence {sentence} is not part of the bound corpus")]
    UnknownSentence { sentence: SentenceId },

    #[error("Objective produced NaN for sentence {sentence}")]
    NanScore { sentence: SentenceId },

    #[error("Invalid weight {weight} for objective {name}")]
    InvalidWeight { name: String, weight: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Per-round scoring function returned by [`Objective::scorer`].
pub type SentenceScorer<'a> = Box<dyn Fn(&Sentence) -> Result<f64, ObjectiveError> + 'a>;

pub trait Objective {
    /// Short, stable name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Associate the objective with a corpus. Called once, before scoring.
    fn bind(&mut self, corpus: &Corpus) -> Result<(), ObjectiveError>;

    /// Scoring function for the given summary state. Must be deterministic
    /// for a fixed state.
    fn scorer<'a>(&'a self, summary: &'a Summary) -> Result<SentenceScorer<'a>, ObjectiveError>;
}

impl<O: Objective + ?Sized> Objective for Box<O> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn bind(&mut self, corpus: &Corpus) -> Result<(), ObjectiveError> {
        (**self).bind(corpus)
    }

    fn scorer<'a>(&'a self, summary: &'a Summary) -> Result<SentenceScorer<'a>, ObjectiveError> {
        (**self).scorer(summary)
    }
}

/// Row of `sentence` in `similarity`, or an error when the sentence does not
/// belong to the corpus the matrix was built from.
pub(crate) fn checked_index(
    sentence: &Sentence,
    similarity: &SimilarityMatrix,
) -> Result<usize, ObjectiveError> {
    if similarity.contains(sentence) {
        Ok(sentence.index)
    } else {
        Err(ObjectiveError::UnknownSentence {
            sentence: sentence.id.clone(),
        })
    }
}
