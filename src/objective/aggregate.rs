use tracing::debug;

use crate::config::ObjectiveConfig;
use crate::corpus::Corpus;
use crate::document::Sentence;
use crate::objective::{
    CoverageObjective, DiversityObjective, Objective, ObjectiveError, RedundancyObjective,
    SentenceScorer,
};
use crate::summary::Summary;

struct Weighted {
    weight: f64,
    objective: Box<dyn Objective>,
}

/// Weighted sum of sub-objectives.
#[derive(Default)]
pub struct AggregateObjective {
    members: Vec<Weighted>,
}

impl AggregateObjective {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sub-objective. Zero weights are accepted and dropped.
    pub fn with(
        mut self,
        weight: f64,
        objective: impl Objective + 'static,
    ) -> Result<Self, ObjectiveError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ObjectiveError::InvalidWeight {
                name: objective.name().to_string(),
                weight,
            });
        }
        if weight > 0.0 {
            self.members.push(Weighted {
                weight,
                objective: Box::new(objective),
            });
        }
        Ok(self)
    }

    pub fn from_config(config: &ObjectiveConfig) -> Result<Self, ObjectiveError> {
        Self::new()
            .with(config.coverage_weight, CoverageObjective::new(config.coverage_alpha)?)?
            .with(config.diversity_weight, DiversityObjective::new())?
            .with(config.redundancy_weight, RedundancyObjective::new())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `(name, weight)` of every active sub-objective, in evaluation order.
    pub fn weights(&self) -> Vec<(&'static str, f64)> {
        self.members
            .iter()
            .map(|m| (m.objective.name(), m.weight))
            .collect()
    }
}

impl std::fmt::Debug for AggregateObjective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateObjective")
            .field("members", &self.weights())
            .finish()
    }
}

impl Objective for AggregateObjective {
    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn bind(&mut self, corpus: &Corpus) -> Result<(), ObjectiveError> {
        for member in &mut self.members {
            member.objective.bind(corpus)?;
            debug!(objective = member.objective.name(), weight = member.weight, "objective bound");
        }
        Ok(())
    }

    fn scorer<'a>(&'a self, summary: &'a Summary) -> Result<SentenceScorer<'a>, ObjectiveError> {
        let scorers = self
            .members
            .iter()
            .map(|m| Ok((m.weight, m.objective.scorer(summary)?)))
            .collect::<Result<Vec<_>, ObjectiveError>>()?;

        Ok(Box::new(move |sentence: &Sentence| {
            let mut total = 0.0;
            for (weight, score) in &scorers {
                total += weight * score(sentence)?;
            }
            Ok(total)
        }))
    }
}
