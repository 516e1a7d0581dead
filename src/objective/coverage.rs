use std::sync::Arc;

use crate::corpus::{Corpus, SimilarityMatrix};
use crate::document::Sentence;
use crate::objective::{checked_index, Objective, ObjectiveError, SentenceScorer};
use crate::summary::Summary;

/// Saturated coverage of the corpus by the summary:
/// `L(S) = Σ_i min(C_i(S), α · C_i(V))` with `C_i(S) = Σ_{j∈S} w_ij`.
///
/// Each sentence `i` stops rewarding coverage once the summary covers an
/// `alpha` fraction of what the whole corpus would, which is what makes the
/// function saturate instead of rewarding one theme forever.
#[derive(Debug, Clone)]
pub struct CoverageObjective {
    alpha: f64,
    bound: Option<CoverageTables>,
}

#[derive(Debug, Clone)]
struct CoverageTables {
    similarity: Arc<SimilarityMatrix>,
    caps: Vec<f64>,
}

impl CoverageObjective {
    pub const DEFAULT_ALPHA: f64 = 0.5;

    pub fn new(alpha: f64) -> Result<Self, ObjectiveError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ObjectiveError::InvalidParameter(format!(
                "coverage alpha must be in (0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha, bound: None })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for CoverageObjective {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            bound: None,
        }
    }
}

impl Objective for CoverageObjective {
    fn name(&self) -> &'static str {
        "coverage"
    }

    fn bind(&mut self, corpus: &Corpus) -> Result<(), ObjectiveError> {
        let similarity = corpus.similarity();
        let caps = (0..similarity.len())
            .map(|i| self.alpha * similarity.row(i).iter().sum::<f64>())
            .collect();

        self.bound = Some(CoverageTables { similarity, caps });
        Ok(())
    }

    fn scorer<'a>(&'a self, summary: &'a Summary) -> Result<SentenceScorer<'a>, ObjectiveError> {
        let tables = self.bound.as_ref().ok_or(ObjectiveError::Unbound("coverage"))?;
        let n = tables.similarity.len();

        let mut covered = vec![0.0; n];
        for j in summary.indices().filter(|&j| j < n) {
            for (i, c) in covered.iter_mut().enumerate() {
                *c += tables.similarity.get(i, j);
            }
        }

        Ok(Box::new(move |sentence: &Sentence| {
            let s = checked_index(sentence, &tables.similarity)?;
            let row = tables.similarity.row(s);

            let gain = covered
                .iter()
                .zip(&tables.caps)
                .zip(row)
                .map(|((&c, &cap), &w)| (c + w).min(cap) - c.min(cap))
                .sum::<f64>();
            Ok(gain)
        }))
    }
}
