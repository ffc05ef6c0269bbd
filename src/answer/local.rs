use std::collections::HashSet;

use async_trait::async_trait;

use super::{AnswerError, Answerer};
use crate::similarity::tokenize;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "did", "do", "does", "for", "from", "how",
    "in", "is", "it", "of", "on", "or", "the", "to", "was", "were", "what", "when", "where",
    "which", "who", "whom", "why", "with",
];

/// In-process extractive answerer: returns the context sentence sharing the
/// most distinct terms with the question.
#[derive(Debug, Default, Clone)]
pub struct LocalAnswerer;

impl LocalAnswerer {
    pub fn new() -> Self {
        Self
    }

    fn key_terms(text: &str) -> HashSet<String> {
        tokenize(text)
            .into_iter()
            .filter(|t| !STOP_WORDS.contains(&t.as_str()))
            .collect()
    }

    fn best_sentence<'a>(question: &str, context: &'a str) -> Option<&'a str> {
        let wanted = Self::key_terms(question);
        let mut best: Option<(usize, &str)> = None;

        for sentence in context.split_inclusive(|c: char| matches!(c, '.' | '!' | '?' | '\n')) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            let score = Self::key_terms(sentence).intersection(&wanted).count();
            // strict comparison keeps the earliest sentence on ties
            if score > 0 && best.map_or(true, |(top, _)| score > top) {
                best = Some((score, sentence));
            }
        }

        best.map(|(_, sentence)| sentence)
    }
}

#[async_trait]
impl Answerer for LocalAnswerer {
    async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        Self::best_sentence(question, context)
            .map(str::to_string)
            .ok_or(AnswerError::NoMatch)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
