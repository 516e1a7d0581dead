use std::collections::BTreeMap;
use std::sync::Arc;

use crate::corpus::{Corpus, SimilarityMatrix};
use crate::document::Sentence;
use crate::objective::{checked_index, Objective, ObjectiveError, SentenceScorer};
use crate::summary::Summary;

/// Diversity reward `R(S) = Σ_k sqrt(Σ_{j∈P_k∩S} r_j)`.
///
/// Partitions are the source documents; `r_j` is the mean similarity of
/// sentence `j` to the whole corpus. The square root gives each partition
/// diminishing returns, so a second sentence from an untouched document
/// usually beats a third from a covered one.
#[derive(Debug, Clone, Default)]
pub struct DiversityObjective {
    bound: Option<DiversityTables>,
}

#[derive(Debug, Clone)]
struct DiversityTables {
    similarity: Arc<SimilarityMatrix>,
    partition_of: Vec<usize>,
    partitions: usize,
    rewards: Vec<f64>,
}

impl DiversityObjective {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Objective for DiversityObjective {
    fn name(&self) -> &'static str {
        "diversity"
    }

    fn bind(&mut self, corpus: &Corpus) -> Result<(), ObjectiveError> {
        let mut ids = BTreeMap::new();
        let partition_of: Vec<usize> = corpus
            .sentences()
            .iter()
            .map(|s| {
                let next = ids.len();
                *ids.entry(s.document.clone()).or_insert(next)
            })
            .collect();

        let similarity = corpus.similarity();
        let n = similarity.len().max(1) as f64;
        let rewards = (0..similarity.len())
            .map(|j| similarity.row(j).iter().sum::<f64>() / n)
            .collect();

        self.bound = Some(DiversityTables {
            similarity,
            partition_of,
            partitions: ids.len(),
            rewards,
        });
        Ok(())
    }

    fn scorer<'a>(&'a self, summary: &'a Summary) -> Result<SentenceScorer<'a>, ObjectiveError> {
        let tables = self.bound.as_ref().ok_or(ObjectiveError::Unbound("diversity"))?;
        let n = tables.rewards.len();

        let mut mass = vec![0.0; tables.partitions];
        for j in summary.indices().filter(|&j| j < n) {
            mass[tables.partition_of[j]] += tables.rewards[j];
        }

        Ok(Box::new(move |sentence: &Sentence| {
            let s = checked_index(sentence, &tables.similarity)?;
            let current = mass[tables.partition_of[s]];
            Ok((current + tables.rewards[s]).sqrt() - current.sqrt())
        }))
    }
}
