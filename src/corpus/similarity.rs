use std::collections::BTreeMap;

use crate::document::Sentence;
use crate::types::identifiers::SentenceId;

/// Dense, symmetric TF-IDF cosine similarity between every pair of sentences.
///
/// Built once per corpus and shared by every objective bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    ids: Vec<SentenceId>,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let n = sentences.len();
        let vectors = tfidf_vectors(sentences);
        let mut values = vec![0.0; n * n];

        for i in 0..n {
            if vectors[i].norm > 0.0 {
                values[i * n + i] = 1.0;
            }
            for j in i + 1..n {
                let sim = cosine(&vectors[i], &vectors[j]);
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }

        Self {
            n,
            ids: sentences.iter().map(|s| s.id.clone()).collect(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Whether `sentence` is the one this matrix was built for at its index.
    pub fn contains(&self, sentence: &Sentence) -> bool {
        self.ids.get(sentence.index) == Some(&sentence.id)
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

struct TermVector {
    // (term id, weight), sorted by term id
    weights: Vec<(usize, f64)>,
    norm: f64,
}

fn tfidf_vectors(sentences: &[Sentence]) -> Vec<TermVector> {
    // BTreeMap keeps term ids independent of hash seeds.
    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for sentence in sentences {
        let mut seen: Vec<&str> = sentence.terms.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    let term_ids: BTreeMap<&str, usize> = document_frequency
        .keys()
        .enumerate()
        .map(|(id, term)| (*term, id))
        .collect();

    let idf: Vec<f64> = {
        let n = sentences.len() as f64;
        document_frequency
            .values()
            .map(|&df| (1.0 + n / df as f64).ln())
            .collect()
    };

    sentences
        .iter()
        .map(|sentence| {
            let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
            for term in &sentence.terms {
                *counts.entry(term_ids[term.as_str()]).or_insert(0.0) += 1.0;
            }

            let weights: Vec<(usize, f64)> = counts
                .into_iter()
                .map(|(id, tf)| (id, tf * idf[id]))
                .collect();
            let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();

            TermVector { weights, norm }
        })
        .collect()
}

fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    if a.norm == 0.0 || b.norm == 0.0 {
        return 0.0;
    }

    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.weights.len() && j < b.weights.len() {
        let (ta, wa) = a.weights[i];
        let (tb, wb) = b.weights[j];
        if ta == tb {
            dot += wa * wb;
            i += 1;
            j += 1;
        } else if ta < tb {
            i += 1;
        } else {
            j += 1;
        }
    }

    (dot / (a.norm * b.norm)).clamp(0.0, 1.0)
}
