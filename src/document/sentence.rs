use serde::{Deserialize, Serialize};

use crate::document::terms::extract_terms;
use crate::selection::budgeting::SizeUnit;
use crate::types::identifiers::{DocumentId, SentenceId};

/// The unit of selection. Immutable once the corpus is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position of the sentence in the corpus; objectives index their
    /// precomputed tables with it.
    pub index: usize,
    pub id: SentenceId,
    pub document: DocumentId,
    /// Position of the sentence inside its document.
    pub position: usize,
    pub text: String,
    /// Normalized content terms (lowercased, stopwords removed).
    pub terms: Vec<String>,
    token_count: usize,
    char_count: usize,
}

impl Sentence {
    pub fn new(index: usize, document: DocumentId, position: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let token_count = count_tokens(&text);
        let char_count = text.chars().count();
        let terms = extract_terms(&text);

        Sentence {
            index,
            id: SentenceId::new(&document, position),
            document,
            position,
            text,
            terms,
            token_count,
            char_count,
        }
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
}

/// Tokens are whitespace-separated words.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits document text into sentence strings.
///
/// Paragraphs are separated by blank lines; line breaks inside a paragraph
/// are folded into single spaces. A sentence ends after `.`, `!` or `?` when
/// the next character is whitespace or the end of the paragraph.
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter {
    min_tokens: usize,
}

impl SentenceSplitter {
    pub fn new(min_tokens: usize) -> Self {
        Self { min_tokens }
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();

        for paragraph in paragraphs(text) {
            let mut current = String::new();
            let mut chars = paragraph.chars().peekable();

            while let Some(c) = chars.next() {
                current.push(c);
                let at_boundary = chars.peek().map_or(true, |next| next.is_whitespace());
                if matches!(c, '.' | '!' | '?') && at_boundary {
                    self.flush(&mut current, &mut sentences);
                }
            }
            self.flush(&mut current, &mut sentences);
        }

        sentences
    }

    fn flush(&self, current: &mut String, sentences: &mut Vec<String>) {
        let trimmed = current.trim();
        if !trimmed.is_empty() && count_tokens(trimmed) >= self.min_tokens {
            sentences.push(trimmed.to_string());
        }
        current.clear();
    }
}

fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !words.is_empty() {
                paragraphs.push(words.join(" "));
                words.clear();
            }
            continue;
        }
        words.extend(line.split_whitespace());
    }
    if !words.is_empty() {
        paragraphs.push(words.join(" "));
    }

    paragraphs
}
