use crate::corpus::Corpus;
use crate::document::Sentence;
use crate::objective::{Objective, ObjectiveError};
use crate::selection::budgeting::{SizeBudget, SizeUnit};
use crate::selection::observer::{GreedyObserver, NoopObserver, RoundReport};
use crate::summary::Summary;

/// Budgeted greedy maximizer.
///
/// Each round re-scores every remaining candidate against the current
/// summary, takes the best one (ties: smaller size, then pool order), removes
/// it from the pool, and appends it only if it still fits. A candidate that
/// does not fit is dropped and the run continues. After every round the pool
/// keeps only sentences strictly smaller than the remaining budget, so the run
/// ends after at most `corpus.len()` rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimizer;

/// The chosen candidate of one round.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Choice {
    position: usize,
    score: f64,
    tied: usize,
}

impl Optimizer {
    pub fn new() -> Self {
        Self
    }

    /// Bind `objective` to `corpus` and build a summary within `budget`.
    ///
    /// Errors come only from the objective and are returned as-is.
    pub fn greedy<O>(
        &self,
        budget: SizeBudget,
        objective: &mut O,
        corpus: &Corpus,
    ) -> Result<Summary, ObjectiveError>
    where
        O: Objective + ?Sized,
    {
        self.greedy_observed(budget, objective, corpus, &mut NoopObserver)
    }

    pub fn greedy_observed<O, W>(
        &self,
        budget: SizeBudget,
        objective: &mut O,
        corpus: &Corpus,
        observer: &mut W,
    ) -> Result<Summary, ObjectiveError>
    where
        O: Objective + ?Sized,
        W: GreedyObserver + ?Sized,
    {
        objective.bind(corpus)?;

        let unit = budget.unit;
        let mut summary = Summary::new();
        let mut pool: Vec<&Sentence> = corpus.sentences().iter().collect();
        let mut round = 0;

        observer.on_start(&budget, pool.len());

        while !budget.is_exhausted(summary.size(unit)) && !pool.is_empty() {
            round += 1;
            let pool_size = pool.len();

            let scores = {
                let score = objective.scorer(&summary)?;
                pool.iter()
                    .map(|&sentence| match score(sentence)? {
                        v if v.is_nan() => Err(ObjectiveError::NanScore {
                            sentence: sentence.id.clone(),
                        }),
                        v => Ok(v),
                    })
                    .collect::<Result<Vec<f64>, _>>()?
            };

            let Some(choice) = choose(&pool, &scores, unit) else {
                break;
            };

            let selected = pool.remove(choice.position);
            let size = selected.size(unit);
            let accepted = budget.admits(summary.size(unit), size);
            if accepted {
                summary.add_sentence(selected.clone());
            }

            let used = summary.size(unit);
            let before = pool.len();
            pool.retain(|s| budget.keeps(used, s.size(unit)));

            observer.on_round(&RoundReport {
                round,
                pool_size,
                max_score: choice.score,
                tied: choice.tied,
                selected,
                size,
                accepted,
                remaining: budget.remaining(used),
                pruned: before - pool.len(),
            });
        }

        observer.on_finish(&summary);
        Ok(summary)
    }
}

/// Highest score wins; among equal scores (exact `==`) the smallest sentence
/// wins, and among those the earliest in the pool.
fn choose(pool: &[&Sentence], scores: &[f64], unit: SizeUnit) -> Option<Choice> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut best: Option<(usize, usize)> = None;
    let mut tied = 0;
    for (position, (sentence, &score)) in pool.iter().zip(scores).enumerate() {
        if score != max {
            continue;
        }
        tied += 1;
        let size = sentence.size(unit);
        match best {
            Some((_, best_size)) if best_size <= size => {}
            _ => best = Some((position, size)),
        }
    }

    best.map(|(position, _)| Choice {
        position,
        score: max,
        tied,
    })
}
