use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use summary_core::config::{
    ConfigError, ConfigOverrides, CorpusConfig, LanguageConfig, SummarizerConfig,
};
use summary_core::document::{DocumentId, Sentence};
use summary_core::selection::{SizeBudget, SizeUnit};
use summary_core::summary::{
    GlossaryTranslator, PassthroughTranslator, Summary, TranslationError, Translator,
};
use tempfile::tempdir;

#[test]
fn config_defaults() {
    let config = SummarizerConfig::default();

    assert_eq!(config.budget.size_budget(), SizeBudget::chars(665));
    assert_eq!(config.languages.source, "en");
    assert_eq!(config.languages.target(), "en");
    assert!(!config.languages.needs_translation());
    assert!(config.corpus.extensions.is_empty());
    assert_eq!(config.corpus.min_sentence_tokens, 1);
    assert_eq!(config.objectives.coverage_weight, 1.0);
    assert_eq!(config.objectives.coverage_alpha, 0.5);
    assert_eq!(config.objectives.diversity_weight, 6.0);
    assert_eq!(config.objectives.redundancy_weight, 0.0);

    assert_eq!(SummarizerConfig::from_toml_str("").unwrap(), config);
}

#[test]
fn config_partial_toml_keeps_other_defaults() {
    let config = SummarizerConfig::from_toml_str(
        r#"
[budget]
unit = "tokens"

[languages]
target = "fr"

[objectives]
coverage_alpha = 0.25
"#,
    )
    .unwrap();

    assert_eq!(config.budget.limit, 665);
    assert_eq!(config.budget.unit, SizeUnit::Tokens);
    assert_eq!(config.languages.source, "en");
    assert_eq!(config.languages.target(), "fr");
    assert!(config.languages.needs_translation());
    assert_eq!(config.objectives.coverage_alpha, 0.25);
    assert_eq!(config.objectives.diversity_weight, 6.0);
}

#[test]
fn config_negative_limit_is_accepted() {
    let config = SummarizerConfig::from_toml_str("[budget]\nlimit = -10\n").unwrap();
    assert_eq!(config.budget.size_budget(), SizeBudget::chars(-10));
}

#[test]
fn config_errors() {
    assert!(matches!(
        SummarizerConfig::from_toml_str("[budget]\nunit = \"pages\"\n"),
        Err(ConfigError::Parse(_))
    ));

    let dir = tempdir().unwrap();
    assert!(matches!(
        SummarizerConfig::load(&dir.path().join("absent.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn config_overrides_replace_only_what_they_set() {
    let file = SummarizerConfig::from_toml_str(
        r#"
[budget]
limit = 50
unit = "tokens"

[languages]
source = "fr"
target = "en"

[objectives]
coverage_weight = 3.0
coverage_alpha = 0.9
diversity_weight = 2.0
redundancy_weight = 1.0
"#,
    )
    .unwrap();

    let mut config = file.clone();
    config.apply_overrides(&ConfigOverrides::default());
    assert_eq!(config, file);

    config.apply_overrides(&ConfigOverrides {
        limit: Some(200),
        unit: Some(SizeUnit::Chars),
        source_lang: Some("de".to_string()),
        target_lang: Some("es".to_string()),
        coverage_weight: Some(0.5),
        coverage_alpha: Some(0.2),
        diversity_weight: Some(0.0),
        redundancy_weight: Some(4.0),
    });
    assert_eq!(config.budget.size_budget(), SizeBudget::chars(200));
    assert_eq!(config.languages.source, "de");
    assert_eq!(config.languages.target(), "es");
    assert_eq!(config.objectives.coverage_weight, 0.5);
    assert_eq!(config.objectives.coverage_alpha, 0.2);
    assert_eq!(config.objectives.diversity_weight, 0.0);
    assert_eq!(config.objectives.redundancy_weight, 4.0);
    assert_eq!(config.corpus, file.corpus);

    let mut partial = file.clone();
    partial.apply_overrides(&ConfigOverrides {
        limit: Some(-1),
        ..ConfigOverrides::default()
    });
    assert_eq!(partial.budget.size_budget(), SizeBudget::tokens(-1));
    assert_eq!(partial.languages, file.languages);
    assert_eq!(partial.objectives, file.objectives);
}

#[test]
fn language_target_equal_to_source_needs_no_translation() {
    let languages = LanguageConfig {
        source: "de".to_string(),
        target: Some("de".to_string()),
    };
    assert_eq!(languages.target(), "de");
    assert!(!languages.needs_translation());
}

#[test]
fn corpus_config_accepts_extensions_case_insensitively() {
    let config = CorpusConfig {
        extensions: vec!["txt".to_string(), "MD".to_string()],
        ..CorpusConfig::default()
    };

    assert!(config.accepts(Path::new("a/b.txt")));
    assert!(config.accepts(Path::new("README.md")));
    assert!(config.accepts(Path::new("NOTES.TXT")));
    assert!(!config.accepts(Path::new("data.json")));
    assert!(!config.accepts(Path::new("Makefile")));

    assert!(CorpusConfig::default().accepts(Path::new("Makefile")));
}

#[test]
fn size_unit_from_words_flag() {
    assert_eq!(SizeUnit::from_words_flag(true), SizeUnit::Tokens);
    assert_eq!(SizeUnit::from_words_flag(false), SizeUnit::Chars);
    assert_eq!(SizeUnit::Tokens.to_string(), "tokens");
}

#[test]
fn budget_admission_and_pruning_bounds() {
    let budget = SizeBudget::chars(10);

    assert!(budget.admits(4, 6));
    assert!(!budget.admits(4, 7));
    assert!(budget.keeps(4, 5));
    assert!(!budget.keeps(4, 6));
    assert_eq!(budget.remaining(12), -2);
    assert!(budget.is_exhausted(10));
    assert!(!budget.is_exhausted(9));

    let negative = SizeBudget::tokens(-1);
    assert!(negative.is_exhausted(0));
    assert!(!negative.admits(0, 0));
}

#[test]
fn passthrough_only_handles_the_identity_pair() {
    let t = PassthroughTranslator;
    assert!(t.supports("en", "en"));
    assert!(!t.supports("en", "de"));
    assert_eq!(t.translate("Hello.", "en", "en").unwrap(), "Hello.");
    assert!(matches!(
        t.translate("Hello.", "en", "de"),
        Err(TranslationError::Unsupported { ref target_lang, .. }) if target_lang == "de"
    ));
}

#[test]
fn glossary_preserves_punctuation_and_capitalization() {
    let glossary = GlossaryTranslator::new(BTreeMap::from([
        ("Hello".to_string(), "bonjour".to_string()),
        ("world".to_string(), "monde".to_string()),
    ]));

    let out = glossary
        .translate("Hello, (world)!  Unknown words stay.", "en", "fr")
        .unwrap();
    assert_eq!(out, "Bonjour, (monde)! Unknown words stay.");

    assert_eq!(glossary.translate("...", "en", "fr").unwrap(), "...");
}

#[test]
fn glossary_loads_from_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glossary.json");
    fs::write(&path, r#"{"storm": "tempête", "coast": "côte"}"#).unwrap();

    let glossary = GlossaryTranslator::from_json_file(&path).unwrap();
    assert_eq!(
        glossary.translate("Storm on the coast.", "en", "fr").unwrap(),
        "Tempête on the côte."
    );

    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        GlossaryTranslator::from_json_file(&path),
        Err(TranslationError::Glossary(_))
    ));
    assert!(matches!(
        GlossaryTranslator::from_json_file(&dir.path().join("missing.json")),
        Err(TranslationError::Io(_))
    ));
}

#[test]
fn summary_translation_keeps_source_sizes() {
    let mut summary = Summary::new();
    summary.add_sentence(Sentence::new(0, DocumentId::named("a"), 0, "The storm."));
    summary.add_sentence(Sentence::new(1, DocumentId::named("a"), 1, "Quiet now."));

    assert_eq!(summary.translation(0), None);
    assert_eq!(summary.target_text(), summary.text());

    let glossary = GlossaryTranslator::new(BTreeMap::from([(
        "storm".to_string(),
        "tempest".to_string(),
    )]));
    summary.translate(&glossary, "en", "xx").unwrap();

    assert_eq!(summary.translation(0), Some("The tempest."));
    assert_eq!(summary.translation(1), Some("Quiet now."));
    assert_eq!(summary.text(), "The storm.\nQuiet now.");
    assert_eq!(summary.target_text(), "The tempest.\nQuiet now.");
    assert_eq!(summary.char_count(), 20);
    assert_eq!(summary.token_count(), 4);
}
