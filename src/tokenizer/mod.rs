// WHY: Three independent tokenizer passes over one shared, read-only source buffer.

use std::sync::Arc;

use tracing::debug;

use crate::error::{AnalysisError, Result};

pub mod characters;
pub mod sentences;
pub mod words;

pub use characters::{tokenize_characters, CharacterStream, TerminatorState};
pub use sentences::{tokenize_sentences, SentenceList, SentenceParseState};
pub use words::{tokenize_words, WordList, WordParseState};

/// Output of all three passes for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub characters: CharacterStream,
    pub words: WordList,
    pub sentences: SentenceList,
}

impl Tokenized {
    pub fn line_terminator_count(&self) -> usize {
        self.characters.line_terminator_count()
    }
}

/// Run the three passes one after another on the calling thread.
pub fn tokenize(source: &str) -> Tokenized {
    Tokenized {
        characters: tokenize_characters(source),
        words: tokenize_words(source),
        sentences: tokenize_sentences(source),
    }
}

/// Run each pass on its own blocking worker and wait for all three.
///
/// If any worker fails the other outputs are dropped with it.
pub async fn tokenize_concurrently(source: Arc<str>) -> Result<Tokenized> {
    run_passes(source, tokenize_characters, tokenize_words, tokenize_sentences).await
}

type Pass<T> = fn(&str) -> T;

async fn run_passes(
    source: Arc<str>,
    characters_pass: Pass<CharacterStream>,
    words_pass: Pass<WordList>,
    sentences_pass: Pass<SentenceList>,
) -> Result<Tokenized> {
    debug!("Spawning tokenizer passes over {} bytes", source.len());

    let chars_source = Arc::clone(&source);
    let words_source = Arc::clone(&source);
    let sentences_source = source;

    let characters = tokio::task::spawn_blocking(move || characters_pass(&chars_source));
    let words = tokio::task::spawn_blocking(move || words_pass(&words_source));
    let sentences = tokio::task::spawn_blocking(move || sentences_pass(&sentences_source));

    let (characters, words, sentences) = tokio::try_join!(characters, words, sentences)
        .map_err(|e| AnalysisError::Worker(e.to_string()))?;

    debug!(
        chars = characters.len(),
        words = words.len(),
        sentences = sentences.len(),
        line_terminators = characters.line_terminator_count(),
        "Tokenizer passes complete"
    );

    Ok(Tokenized { characters, words, sentences })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The cat sat.\r\nIt was pleased, mostly.\rThe end";

    #[test]
    fn test_sequential_tokenize() {
        let tokens = tokenize(SAMPLE);
        assert_eq!(tokens.line_terminator_count(), 2);
        assert_eq!(
            tokens.words,
            vec!["The", "cat", "sat", "It", "was", "pleased", "mostly", "The", "end"]
        );
        assert_eq!(
            tokens.sentences,
            vec!["The cat sat.", "It was pleased, mostly.", "The end"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let tokens = tokenize_concurrently(Arc::from(SAMPLE)).await.unwrap();
        assert_eq!(tokens, tokenize(SAMPLE));
    }

    #[tokio::test]
    async fn test_concurrent_empty_source() {
        let tokens = tokenize_concurrently(Arc::from("")).await.unwrap();
        assert_eq!(tokens, Tokenized::default());
    }

    fn failing_word_pass(_: &str) -> WordList {
        panic!("word pass failed");
    }

    #[tokio::test]
    async fn test_failed_worker_discards_all_output() {
        let result = run_passes(
            Arc::from(SAMPLE),
            tokenize_characters,
            failing_word_pass,
            tokenize_sentences,
        )
        .await;

        match result {
            Err(AnalysisError::Worker(message)) => assert!(message.contains("panic")),
            other => panic!("Expected a worker error, got {other:?}"),
        }
    }
}
