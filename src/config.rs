use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::objective::CoverageObjective;
use crate::selection::budgeting::{SizeBudget, SizeUnit};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level summarizer configuration, usually read from a TOML file.
///
/// Every section is optional; missing values fall back to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub budget: BudgetConfig,
    pub languages: LanguageConfig,
    pub corpus: CorpusConfig,
    pub objectives: ObjectiveConfig,
}

impl SummarizerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace every value that `overrides` sets; unset ones keep their
    /// current value.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(limit) = overrides.limit {
            self.budget.limit = limit;
        }
        if let Some(unit) = overrides.unit {
            self.budget.unit = unit;
        }
        if let Some(lang) = &overrides.source_lang {
            self.languages.source = lang.clone();
        }
        if let Some(lang) = &overrides.target_lang {
            self.languages.target = Some(lang.clone());
        }

        let objectives = &mut self.objectives;
        if let Some(w) = overrides.coverage_weight {
            objectives.coverage_weight = w;
        }
        if let Some(a) = overrides.coverage_alpha {
            objectives.coverage_alpha = a;
        }
        if let Some(w) = overrides.diversity_weight {
            objectives.diversity_weight = w;
        }
        if let Some(w) = overrides.redundancy_weight {
            objectives.redundancy_weight = w;
        }
    }
}

/// Values given on the command line, layered over a configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub limit: Option<i64>,
    pub unit: Option<SizeUnit>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub coverage_weight: Option<f64>,
    pub coverage_alpha: Option<f64>,
    pub diversity_weight: Option<f64>,
    pub redundancy_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub limit: i64,
    pub unit: SizeUnit,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            limit: 665,
            unit: SizeUnit::Chars,
        }
    }
}

impl BudgetConfig {
    pub fn size_budget(&self) -> SizeBudget {
        SizeBudget::new(self.limit, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub source: String,
    /// Defaults to the source language.
    pub target: Option<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source: "en".into(),
            target: None,
        }
    }
}

impl LanguageConfig {
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.source)
    }

    pub fn needs_translation(&self) -> bool {
        self.target() != self.source
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// File extensions to load, without the dot. Empty accepts every file.
    pub extensions: Vec<String>,
    /// Sentences shorter than this many tokens never become candidates.
    pub min_sentence_tokens: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            min_sentence_tokens: 1,
        }
    }
}

impl CorpusConfig {
    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| {
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
            })
    }
}

/// Weights of the built-in objectives. A weight of zero disables one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveConfig {
    pub coverage_weight: f64,
    pub coverage_alpha: f64,
    pub diversity_weight: f64,
    pub redundancy_weight: f64,
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            coverage_weight: 1.0,
            coverage_alpha: CoverageObjective::DEFAULT_ALPHA,
            diversity_weight: 6.0,
            redundancy_weight: 0.0,
        }
    }
}
