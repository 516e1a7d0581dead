pub mod translation;

use crate::document::Sentence;
use crate::selection::budgeting::SizeUnit;
pub use translation::{GlossaryTranslator, PassthroughTranslator, TranslationError, Translator};

/// Append-only summary owned by one optimizer run.
///
/// Sentences are kept in acceptance order, which is also presentation order.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    sentences: Vec<Sentence>,
    translations: Vec<Option<String>>,
    token_count: usize,
    char_count: usize,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.token_count += sentence.token_count();
        self.char_count += sentence.char_count();
        self.sentences.push(sentence);
        self.translations.push(None);
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Corpus indices of the selected sentences, in selection order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.sentences.iter().map(|s| s.index)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn size(&self, unit: SizeUnit) -> usize {
        match unit {
            SizeUnit::Tokens => self.token_count,
            SizeUnit::Chars => self.char_count,
        }
    }

    /// Source-language text, one sentence per line.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Translated text; untranslated sentences fall back to their source text.
    pub fn target_text(&self) -> String {
        self.sentences
            .iter()
            .zip(&self.translations)
            .map(|(s, t)| t.as_deref().unwrap_or(&s.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn translation(&self, position: usize) -> Option<&str> {
        self.translations.get(position).and_then(|t| t.as_deref())
    }

    /// Translate every sentence in place. Sizes keep referring to the source
    /// text; the budget applies to what was selected, not to its rendering.
    pub fn translate(
        &mut self,
        translator: &dyn Translator,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<(), TranslationError> {
        let translated = self
            .sentences
            .iter()
            .map(|s| translator.translate(&s.text, source_lang, target_lang))
            .collect::<Result<Vec<_>, _>>()?;

        self.translations = translated.into_iter().map(Some).collect();
        Ok(())
    }
}
