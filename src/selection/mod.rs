pub mod budgeting;
pub mod greedy;
pub mod observer;

use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::config::SummarizerConfig;
use crate::corpus::Corpus;
use crate::objective::AggregateObjective;
use crate::summary::{PassthroughTranslator, Summary, TranslationError, Translator};
use crate::types::summary_report::{
    SelectedSentence, SummarizeError, SummaryMetadata, SummaryReport,
};
pub use budgeting::{SizeBudget, SizeUnit};
pub use greedy::Optimizer;
pub use observer::{
    GreedyObserver, NoopObserver, RoundRecord, RoundRecorder, RoundReport, TracingObserver,
};

/// End-to-end summarization: load, bind, optimize, translate, report.
pub struct Summarizer<T = PassthroughTranslator> {
    config: SummarizerConfig,
    optimizer: Optimizer,
    translator: T,
}

impl Default for Summarizer<PassthroughTranslator> {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}

impl Summarizer<PassthroughTranslator> {
    pub fn new(config: SummarizerConfig) -> Self {
        Self::with_translator(config, PassthroughTranslator)
    }
}

impl<T> Summarizer<T>
where
    T: Translator,
{
    pub fn with_translator(config: SummarizerConfig, translator: T) -> Self {
        Self {
            config,
            optimizer: Optimizer::new(),
            translator,
        }
    }

    pub fn summarize(&self, dir: &Path) -> Result<SummaryReport, SummarizeError> {
        // 0. Fail on configuration problems before touching the corpus
        self.check_languages()?;
        let objective = AggregateObjective::from_config(&self.config.objectives)?;

        info!("Loading documents from {}", dir.display());
        let corpus = Corpus::load(dir, &self.config.corpus)?;

        self.run(&corpus, objective)
    }

    pub fn summarize_corpus(&self, corpus: &Corpus) -> Result<SummaryReport, SummarizeError> {
        self.check_languages()?;
        let objective = AggregateObjective::from_config(&self.config.objectives)?;

        self.run(corpus, objective)
    }

    fn check_languages(&self) -> Result<(), TranslationError> {
        let languages = &self.config.languages;
        if languages.needs_translation()
            && !self.translator.supports(&languages.source, languages.target())
        {
            return Err(TranslationError::Unsupported {
                source_lang: languages.source.clone(),
                target_lang: languages.target().to_string(),
            });
        }
        Ok(())
    }

    fn run(
        &self,
        corpus: &Corpus,
        mut objective: AggregateObjective,
    ) -> Result<SummaryReport, SummarizeError> {
        let budget = self.config.budget.size_budget();
        info!(
            sentences = corpus.len(),
            documents = corpus.documents().len(),
            objectives = ?objective.weights(),
            "Setting up summarizer"
        );

        // 1. Optimization Phase
        let mut recorder = RoundRecorder::new();
        let mut summary = self.optimizer.greedy_observed(
            budget,
            &mut objective,
            corpus,
            &mut (TracingObserver, &mut recorder),
        )?;

        // 2. Translation Phase
        let languages = &self.config.languages;
        if languages.needs_translation() {
            info!("Translating summary");
            summary.translate(&self.translator, &languages.source, languages.target())?;
        }

        // 3. Reporting Phase
        Ok(build_report(
            &summary,
            &recorder,
            budget,
            corpus,
            languages.source.clone(),
            languages.target().to_string(),
        ))
    }
}

fn build_report(
    summary: &Summary,
    recorder: &RoundRecorder,
    budget: SizeBudget,
    corpus: &Corpus,
    source_lang: String,
    target_lang: String,
) -> SummaryReport {
    let sentences = summary
        .sentences()
        .iter()
        .enumerate()
        .map(|(i, s)| SelectedSentence {
            id: s.id.as_str().to_string(),
            document: s.document.as_str().to_string(),
            position: s.position,
            text: s.text.clone(),
            translation: summary.translation(i).map(str::to_string),
            score: recorder.score_of(s.index).unwrap_or(0.0),
            tokens: s.token_count(),
            chars: s.char_count(),
        })
        .collect();

    let metadata = SummaryMetadata {
        budget: budget.limit,
        unit: budget.unit,
        size_used: summary.size(budget.unit),
        tokens_used: summary.token_count(),
        chars_used: summary.char_count(),
        sentences_considered: corpus.len(),
        sentences_selected: summary.len(),
        sentences_rejected_by_budget: recorder.rejected_by_budget(),
        sentences_pruned: recorder.pruned(),
        rounds: recorder.rounds.len(),
        source_lang,
        target_lang,
        generated_at: Utc::now(),
    };

    SummaryReport {
        sentences,
        summary: metadata,
    }
}
