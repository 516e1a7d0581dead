use std::sync::Arc;

use crate::corpus::{Corpus, SimilarityMatrix};
use crate::document::Sentence;
use crate::objective::{checked_index, Objective, ObjectiveError, SentenceScorer};
use crate::summary::Summary;

/// Penalizes a candidate by its highest similarity to any sentence already
/// in the summary. Scores are `<= 0`; an empty summary penalizes nothing.
#[derive(Debug, Clone, Default)]
pub struct RedundancyObjective {
    similarity: Option<Arc<SimilarityMatrix>>,
}

impl RedundancyObjective {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Objective for RedundancyObjective {
    fn name(&self) -> &'static str {
        "redundancy"
    }

    fn bind(&mut self, corpus: &Corpus) -> Result<(), ObjectiveError> {
        self.similarity = Some(corpus.similarity());
        Ok(())
    }

    fn scorer<'a>(&'a self, summary: &'a Summary) -> Result<SentenceScorer<'a>, ObjectiveError> {
        let similarity = self
            .similarity
            .as_deref()
            .ok_or(ObjectiveError::Unbound("redundancy"))?;
        let n = similarity.len();
        let selected: Vec<usize> = summary.indices().filter(|&j| j < n).collect();

        Ok(Box::new(move |sentence: &Sentence| {
            let s = checked_index(sentence, similarity)?;
            let closest = selected
                .iter()
                .map(|&j| similarity.get(s, j))
                .fold(0.0, f64::max);
            Ok(-closest)
        }))
    }
}
