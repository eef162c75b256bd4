// WHY: Sentence pass: runs over the normalised character stream and keeps the closing full stop.

use crate::classifier::{is_whitespace, SENTENCE_TERMINATOR};

use super::characters::tokenize_characters;

pub type SentenceList = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceParseState {
    ListenForNewSentence,
    ReadAndStoreChars,
}

impl SentenceParseState {
    fn step(self, c: char, current: &mut String, sentences: &mut SentenceList) -> Self {
        let next = match self {
            SentenceParseState::ListenForNewSentence
                if is_whitespace(c) || c == SENTENCE_TERMINATOR =>
            {
                SentenceParseState::ListenForNewSentence
            }
            SentenceParseState::ListenForNewSentence => {
                current.push(c);
                SentenceParseState::ReadAndStoreChars
            }
            SentenceParseState::ReadAndStoreChars => {
                current.push(c);
                if c == SENTENCE_TERMINATOR {
                    sentences.push(std::mem::take(current));
                    SentenceParseState::ListenForNewSentence
                } else {
                    SentenceParseState::ReadAndStoreChars
                }
            }
        };

        #[cfg(feature = "debug-states")]
        tracing::trace!(?c, from = ?self, to = ?next, "sentence transition");

        next
    }
}

/// Run the sentence pass over `source`.
pub fn tokenize_sentences(source: &str) -> SentenceList {
    let stream = tokenize_characters(source);
    let mut sentences = SentenceList::new();
    let mut current = String::new();
    let mut state = SentenceParseState::ListenForNewSentence;

    for &c in stream.chars() {
        state = state.step(c, &mut current, &mut sentences);
    }

    if state == SentenceParseState::ReadAndStoreChars {
        sentences.push(current);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_sentences_keep_full_stop() {
        assert_eq!(
            tokenize_sentences("This phrase. contains. multiple sentences."),
            vec!["This phrase.", "contains.", "multiple sentences."]
        );
    }

    #[test]
    fn test_unterminated_sentence_is_flushed() {
        assert_eq!(
            tokenize_sentences("First one. second without stop"),
            vec!["First one.", "second without stop"]
        );
    }

    #[test]
    fn test_only_full_stop_terminates() {
        assert_eq!(tokenize_sentences("Really? Yes! Fine."), vec!["Really? Yes! Fine."]);
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(
            tokenize_sentences("Split across\r\nlines. Next\rone."),
            vec!["Split across lines.", "Next one."]
        );
    }

    #[test]
    fn test_leading_stops_and_whitespace_are_skipped() {
        assert_eq!(tokenize_sentences("...  \n. Hello."), vec!["Hello."]);
        assert!(tokenize_sentences(" . . ").is_empty());
        assert!(tokenize_sentences("").is_empty());
    }

    #[test]
    fn test_trailing_whitespace_stays_in_last_sentence() {
        assert_eq!(tokenize_sentences("No stop\n"), vec!["No stop "]);
    }
}
