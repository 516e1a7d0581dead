//! Round-boundary hooks for the greedy optimizer.
//!
//! Observers see every round after pruning, without being able to influence
//! it. [`TracingObserver`] reproduces the usual progress log,
//! [`RoundRecorder`] keeps the rounds for reporting, and a pair of observers
//! is itself an observer.

use tracing::{debug, info};

use crate::document::Sentence;
use crate::selection::budgeting::SizeBudget;
use crate::summary::Summary;
use crate::types::identifiers::SentenceId;

/// Outcome of one selection round.
#[derive(Debug, Clone)]
pub struct RoundReport<'a> {
    /// 1-based round number.
    pub round: usize,
    /// Candidates scored this round.
    pub pool_size: usize,
    pub max_score: f64,
    /// Number of candidates that reached `max_score`.
    pub tied: usize,
    pub selected: &'a Sentence,
    /// Size of `selected` in the budget unit.
    pub size: usize,
    pub accepted: bool,
    /// Budget left after this round.
    pub remaining: i64,
    /// Candidates dropped by the post-round size filter.
    pub pruned: usize,
}

pub trait GreedyObserver {
    fn on_start(&mut self, _budget: &SizeBudget, _candidates: usize) {}

    fn on_round(&mut self, _report: &RoundReport<'_>) {}

    fn on_finish(&mut self, _summary: &Summary) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GreedyObserver for NoopObserver {}

impl<O: GreedyObserver + ?Sized> GreedyObserver for &mut O {
    fn on_start(&mut self, budget: &SizeBudget, candidates: usize) {
        (**self).on_start(budget, candidates)
    }

    fn on_round(&mut self, report: &RoundReport<'_>) {
        (**self).on_round(report)
    }

    fn on_finish(&mut self, summary: &Summary) {
        (**self).on_finish(summary)
    }
}

impl<A: GreedyObserver, B: GreedyObserver> GreedyObserver for (A, B) {
    fn on_start(&mut self, budget: &SizeBudget, candidates: usize) {
        self.0.on_start(budget, candidates);
        self.1.on_start(budget, candidates);
    }

    fn on_round(&mut self, report: &RoundReport<'_>) {
        self.0.on_round(report);
        self.1.on_round(report);
    }

    fn on_finish(&mut self, summary: &Summary) {
        self.0.on_finish(summary);
        self.1.on_finish(summary);
    }
}

/// Logs progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GreedyObserver for TracingObserver {
    fn on_start(&mut self, budget: &SizeBudget, candidates: usize) {
        info!(limit = budget.limit, unit = %budget.unit, candidates, "greedily optimizing the objective");
    }

    fn on_round(&mut self, report: &RoundReport<'_>) {
        if report.accepted {
            info!(
                sentence = %report.selected.id,
                score = report.max_score,
                size = report.size,
                "sentence added"
            );
        } else {
            debug!(
                sentence = %report.selected.id,
                score = report.max_score,
                size = report.size,
                remaining = report.remaining,
                "sentence rejected by budget"
            );
        }
        debug!(
            round = report.round,
            pool = report.pool_size,
            tied = report.tied,
            pruned = report.pruned,
            "round complete"
        );
    }

    fn on_finish(&mut self, summary: &Summary) {
        info!(
            sentences = summary.len(),
            chars = summary.char_count(),
            tokens = summary.token_count(),
            "optimization done"
        );
    }
}

/// Owned copy of a [`RoundReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub round: usize,
    pub pool_size: usize,
    pub sentence: SentenceId,
    pub index: usize,
    pub score: f64,
    pub tied: usize,
    pub size: usize,
    pub accepted: bool,
    pub remaining: i64,
    pub pruned: usize,
}

/// Collects every round, e.g. to build a report or to inspect a run in tests.
#[derive(Debug, Clone, Default)]
pub struct RoundRecorder {
    pub candidates: usize,
    pub rounds: Vec<RoundRecord>,
}

impl RoundRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter().filter(|r| r.accepted)
    }

    pub fn rejected_by_budget(&self) -> usize {
        self.rounds.iter().filter(|r| !r.accepted).count()
    }

    pub fn pruned(&self) -> usize {
        self.rounds.iter().map(|r| r.pruned).sum()
    }

    /// Score a sentence had in the round it was accepted.
    pub fn score_of(&self, index: usize) -> Option<f64> {
        self.accepted().find(|r| r.index == index).map(|r| r.score)
    }
}

impl GreedyObserver for RoundRecorder {
    fn on_start(&mut self, _budget: &SizeBudget, candidates: usize) {
        self.candidates = candidates;
        self.rounds.clear();
    }

    fn on_round(&mut self, report: &RoundReport<'_>) {
        self.rounds.push(RoundRecord {
            round: report.round,
            pool_size: report.pool_size,
            sentence: report.selected.id.clone(),
            index: report.selected.index,
            score: report.max_score,
            tied: report.tied,
            size: report.size,
            accepted: report.accepted,
            remaining: report.remaining,
            pruned: report.pruned,
        });
    }
}
