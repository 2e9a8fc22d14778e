//! Skill similarity scoring: TF-IDF cosine with a set-overlap fallback.
//!
//! Default: `TfidfScorer`. Treats each skill string as a short document,
//! builds a TF-IDF vector space over the union of both skill lists, and takes
//! the cosine of the two side means. If the vector path fails for any reason,
//! the scorer falls back to Jaccard similarity over lower-cased skill sets.
//! Scoring never surfaces an error to callers.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;
use tracing::debug;

/// Common English stop words excluded from the TF-IDF vocabulary.
#[rustfmt::skip]
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "did", "do", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "you",
    "your", "yours",
];

/// The similarity scorer trait. Implement this to swap scoring backends
/// without touching the pipeline or handlers.
///
/// Carried in `AppState` as `Arc<dyn SimilarityScorer>`.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity in [0, 1] between a user's skills and a job's required skills.
    fn score(&self, user_skills: &[String], job_skills: &[String]) -> f64;
}

/// TF-IDF cosine scorer with a blanket Jaccard fallback.
///
/// Algorithm:
/// 1. Tokenize every skill string (lowercase, word characters, length >= 2,
///    stop words removed); each skill is one document.
/// 2. Smoothed idf over the union vocabulary; L2-normalized tf-idf rows.
/// 3. Cosine between the mean user vector and the mean job vector.
/// 4. On any failure of steps 1-3: Jaccard over lower-cased skill sets.
pub struct TfidfScorer;

impl SimilarityScorer for TfidfScorer {
    fn score(&self, user_skills: &[String], job_skills: &[String]) -> f64 {
        match tfidf_cosine(user_skills, job_skills) {
            Ok(score) => score,
            Err(err) => {
                debug!("vector similarity unavailable ({err}); using Jaccard fallback");
                jaccard_similarity(user_skills, job_skills)
            }
        }
    }
}

/// Ways the vector-space path can fail. Any of them triggers the fallback.
#[derive(Debug, Error)]
enum VectorizeError {
    #[error("vocabulary is empty after stop-word removal")]
    EmptyVocabulary,

    #[error("one side has no documents")]
    EmptySide,

    #[error("similarity is not finite")]
    NonFinite,
}

fn tfidf_cosine(user_skills: &[String], job_skills: &[String]) -> Result<f64, VectorizeError> {
    if user_skills.is_empty() || job_skills.is_empty() {
        return Err(VectorizeError::EmptySide);
    }

    let user_docs: Vec<Vec<String>> = user_skills.iter().map(|s| tokenize(s)).collect();
    let job_docs: Vec<Vec<String>> = job_skills.iter().map(|s| tokenize(s)).collect();

    // Union vocabulary over both sides; indices assigned in first-seen order.
    let mut vocab: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in user_docs.iter().chain(job_docs.iter()) {
        for term in doc {
            let next = vocab.len();
            vocab.entry(term.as_str()).or_insert(next);
        }
    }
    if vocab.is_empty() {
        return Err(VectorizeError::EmptyVocabulary);
    }

    // Document frequency per term across all documents.
    let n_docs = user_docs.len() + job_docs.len();
    let mut df = vec![0usize; vocab.len()];
    for doc in user_docs.iter().chain(job_docs.iter()) {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            df[vocab[term]] += 1;
        }
    }

    // Smoothed idf: ln((1 + n) / (1 + df)) + 1
    let idf: Vec<f64> = df
        .iter()
        .map(|&d| ((1 + n_docs) as f64 / (1 + d) as f64).ln() + 1.0)
        .collect();

    let user_mean = mean_tfidf(&user_docs, &vocab, &idf);
    let job_mean = mean_tfidf(&job_docs, &vocab, &idf);

    let dot: f64 = user_mean.iter().zip(&job_mean).map(|(u, j)| u * j).sum();
    let norm_user = l2_norm(&user_mean);
    let norm_job = l2_norm(&job_mean);
    if norm_user == 0.0 || norm_job == 0.0 {
        // A zero vector has no direction; cosine against it is 0, not an error.
        return Ok(0.0);
    }

    let cosine = dot / (norm_user * norm_job);
    if !cosine.is_finite() {
        return Err(VectorizeError::NonFinite);
    }

    // Non-negative weights keep cosine within [0, 1]; clamp guards float fuzz.
    Ok(cosine.clamp(0.0, 1.0))
}

/// Mean of the L2-normalized tf-idf rows for one side's documents.
/// Rows with no surviving tokens stay zero.
fn mean_tfidf(docs: &[Vec<String>], vocab: &BTreeMap<&str, usize>, idf: &[f64]) -> Vec<f64> {
    let mut mean = vec![0.0; idf.len()];
    for doc in docs {
        let mut row = vec![0.0; idf.len()];
        for term in doc {
            row[vocab[term.as_str()]] += 1.0;
        }
        for (i, weight) in row.iter_mut().enumerate() {
            *weight *= idf[i];
        }
        let norm = l2_norm(&row);
        if norm > 0.0 {
            for weight in row.iter_mut() {
                *weight /= norm;
            }
        }
        for (acc, weight) in mean.iter_mut().zip(&row) {
            *acc += weight;
        }
    }
    for acc in mean.iter_mut() {
        *acc /= docs.len() as f64;
    }
    mean
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Lowercases and splits into word tokens, dropping single-character tokens
/// and stop words.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity over lower-cased skill sets: intersection over union.
/// Returns 0.0 when both sets are empty.
fn jaccard_similarity(user_skills: &[String], job_skills: &[String]) -> f64 {
    let user_set: HashSet<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    let job_set: HashSet<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let intersection = user_set.intersection(&job_set).count();
    let union = user_set.union(&job_set).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
