use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use summary_core::config::SummarizerConfig;
use summary_core::corpus::Corpus;
use summary_core::document::{Document, SentenceSplitter};
use summary_core::selection::{SizeUnit, Summarizer};
use summary_core::summary::{GlossaryTranslator, TranslationError};
use summary_core::types::{SummarizeError, SummaryReport};
use tempfile::tempdir;

fn write_corpus(root: &Path) {
    fs::write(
        root.join("storm.txt"),
        "A storm hit the coast on Monday. Thousands of homes lost power.\n\
         Crews worked through the night to restore power to the coast.",
    )
    .unwrap();
    fs::write(
        root.join("election.txt"),
        "Voters went to the polls on Tuesday. Turnout was the highest in decades.\n\n\
         Counting of the votes continued into Wednesday morning.",
    )
    .unwrap();
    fs::write(
        root.join("markets.txt"),
        "Markets fell after the storm hit the coast. Energy stocks rose sharply.",
    )
    .unwrap();
}

fn config(limit: i64, unit: SizeUnit) -> SummarizerConfig {
    let mut config = SummarizerConfig::default();
    config.budget.limit = limit;
    config.budget.unit = unit;
    config
}

fn without_timestamp(mut report: SummaryReport) -> SummaryReport {
    report.summary.generated_at = Utc.timestamp_opt(0, 0).unwrap();
    report
}

#[test]
fn end_to_end_summary_respects_budget_and_reports_counts() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let summarizer = Summarizer::new(config(150, SizeUnit::Chars));
    let report = summarizer.summarize(dir.path()).unwrap();
    let meta = &report.summary;

    assert!(!report.sentences.is_empty());
    assert!(meta.chars_used <= 150);
    assert_eq!(meta.size_used, meta.chars_used);
    assert_eq!(meta.unit, SizeUnit::Chars);
    assert_eq!(meta.sentences_considered, 8);
    assert_eq!(meta.sentences_selected, report.sentences.len());
    assert!(meta.rounds <= meta.sentences_considered);
    assert_eq!(
        meta.rounds,
        meta.sentences_selected + meta.sentences_rejected_by_budget
    );

    let chars: usize = report.sentences.iter().map(|s| s.chars).sum();
    let tokens: usize = report.sentences.iter().map(|s| s.tokens).sum();
    assert_eq!(chars, meta.chars_used);
    assert_eq!(tokens, meta.tokens_used);

    for s in &report.sentences {
        assert!(s.id.starts_with(&s.document));
        assert!(s.translation.is_none());
    }
    assert_eq!(report.target_text(), report.text());
}

#[test]
fn end_to_end_output_is_deterministic() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let summarizer = Summarizer::new(config(20, SizeUnit::Tokens));
    let first = without_timestamp(summarizer.summarize(dir.path()).unwrap());
    let second = without_timestamp(summarizer.summarize(dir.path()).unwrap());

    assert_eq!(
        serde_json::to_string_pretty(&first).unwrap(),
        serde_json::to_string_pretty(&second).unwrap(),
        "Summary output is not deterministic"
    );
    assert!(first.summary.tokens_used <= 20);
}

#[test]
fn end_to_end_empty_inputs_yield_empty_summary() {
    let dir = tempdir().unwrap();

    let report = Summarizer::default().summarize(dir.path()).unwrap();
    assert!(report.sentences.is_empty());
    assert_eq!(report.summary.rounds, 0);

    write_corpus(dir.path());
    let report = Summarizer::new(config(0, SizeUnit::Chars))
        .summarize(dir.path())
        .unwrap();
    assert!(report.sentences.is_empty());
    assert_eq!(report.summary.size_used, 0);
    assert_eq!(report.summary.sentences_considered, 8);
}

#[test]
fn end_to_end_unsupported_translation_fails_before_loading() {
    let mut config = config(100, SizeUnit::Chars);
    config.languages.target = Some("de".to_string());

    // The directory does not exist: the language check must fire first.
    let err = Summarizer::new(config)
        .summarize(Path::new("/definitely/not/here"))
        .unwrap_err();

    assert!(matches!(
        err,
        SummarizeError::Translation(TranslationError::Unsupported { .. })
    ));
}

#[test]
fn end_to_end_glossary_translation() {
    let mut config = config(1_000, SizeUnit::Chars);
    config.languages.target = Some("de".to_string());

    let glossary = GlossaryTranslator::new(BTreeMap::from([
        ("storm".to_string(), "sturm".to_string()),
        ("coast".to_string(), "küste".to_string()),
    ]));

    let corpus = Corpus::from_documents(
        vec![Document::from_text(
            "storm.txt",
            "The storm hit the coast. Storm warnings remain.",
        )],
        &SentenceSplitter::default(),
    )
    .unwrap();

    let report = Summarizer::with_translator(config, glossary)
        .summarize_corpus(&corpus)
        .unwrap();

    assert_eq!(report.summary.target_lang, "de");
    assert_eq!(report.sentences.len(), 2);

    let mut translations: Vec<&str> = report
        .sentences
        .iter()
        .map(|s| s.translation.as_deref().unwrap())
        .collect();
    translations.sort_unstable();
    assert_eq!(
        translations,
        vec!["Sturm warnings remain.", "The sturm hit the küste."]
    );
}

#[test]
fn end_to_end_config_file_drives_the_run() {
    let dir = tempdir().unwrap();
    let corpus_dir = dir.path().join("docs");
    fs::create_dir(&corpus_dir).unwrap();
    write_corpus(&corpus_dir);
    fs::write(corpus_dir.join("notes.md"), "Ignored because of the extension filter.").unwrap();

    let config_path = dir.path().join("summarizer.toml");
    fs::write(
        &config_path,
        r#"
[budget]
limit = 12
unit = "tokens"

[corpus]
extensions = ["txt"]

[objectives]
diversity_weight = 0.0
redundancy_weight = 2.0
"#,
    )
    .unwrap();

    let config = SummarizerConfig::load(&config_path).unwrap();
    assert_eq!(config.languages.source, "en");
    assert_eq!(config.objectives.coverage_weight, 1.0);

    let report = Summarizer::new(config).summarize(&corpus_dir).unwrap();
    assert_eq!(report.summary.unit, SizeUnit::Tokens);
    assert_eq!(report.summary.budget, 12);
    assert!(report.summary.tokens_used <= 12);
    assert_eq!(report.summary.sentences_considered, 8);
}
