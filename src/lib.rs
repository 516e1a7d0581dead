//! Budgeted greedy extractive summarization.
//!
//! `summary-core` loads a document collection, splits it into candidate
//! sentences, and greedily builds a summary that maximizes a composable
//! objective (coverage, diversity, redundancy, or your own) under a size
//! budget in characters or tokens. Selection is deterministic: identical
//! inputs always produce the same sentences in the same order.

pub mod config;
pub mod corpus;
pub mod document;
pub mod objective;
pub mod selection;
pub mod summary;
pub mod types;

pub use config::SummarizerConfig;
pub use corpus::Corpus;
pub use objective::{AggregateObjective, Objective, ObjectiveError};
pub use selection::{Optimizer, SizeBudget, SizeUnit, Summarizer};
pub use summary::Summary;
