use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid glossary: {0}")]
    Glossary(#[from] serde_json::Error),
    #[error("No translator available from {source_lang} to {target_lang}")]
    Unsupported {
        source_lang: String,
        target_lang: String,
    },
}

/// Post-hoc translation of a finished summary.
pub trait Translator {
    /// Whether this translator can handle the language pair. Checked before a
    /// run starts so an unusable pair fails fast.
    fn supports(&self, _source_lang: &str, _target_lang: &str) -> bool {
        true
    }

    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError>;
}

/// Only handles the identity case; anything else is unsupported.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn supports(&self, source_lang: &str, target_lang: &str) -> bool {
        source_lang == target_lang
    }

    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        if self.supports(source_lang, target_lang) {
            Ok(text.to_string())
        } else {
            Err(TranslationError::Unsupported {
                source_lang: source_lang.to_string(),
                target_lang: target_lang.to_string(),
            })
        }
    }
}

/// Word-for-word substitution from a lowercase glossary.
///
/// Surrounding punctuation is preserved and a capitalized source word yields
/// a capitalized translation. Unknown words pass through unchanged.
#[derive(Debug, Default, Clone)]
pub struct GlossaryTranslator {
    entries: BTreeMap<String, String>,
}

impl GlossaryTranslator {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self { entries }
    }

    /// Load a JSON object mapping source words to target words.
    pub fn from_json_file(path: &Path) -> Result<Self, TranslationError> {
        let f = std::fs::File::open(path)?;
        let entries: BTreeMap<String, String> = serde_json::from_reader(f)?;
        Ok(Self::new(entries))
    }

    fn translate_word(&self, word: &str) -> String {
        let start = word.find(char::is_alphanumeric);
        let end = word.rfind(char::is_alphanumeric);
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e + word[e..].chars().next().map_or(1, char::len_utf8)),
            _ => return word.to_string(),
        };

        let core = &word[start..end];
        let Some(replacement) = self.entries.get(&core.to_lowercase()) else {
            return word.to_string();
        };

        let replacement = if core.chars().next().map_or(false, char::is_uppercase) {
            capitalize(replacement)
        } else {
            replacement.clone()
        };

        format!("{}{}{}", &word[..start], replacement, &word[end..])
    }
}

impl Translator for GlossaryTranslator {
    fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, TranslationError> {
        Ok(text
            .split_whitespace()
            .map(|w| self.translate_word(w))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn supports(&self, source_lang: &str, target_lang: &str) -> bool {
        (**self).supports(source_lang, target_lang)
    }

    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, source_lang, target_lang)
    }
}
