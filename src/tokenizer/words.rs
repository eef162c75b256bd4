// WHY: Word pass: maximal runs of characters that are neither whitespace nor word punctuation.

use crate::classifier::is_word_separator;

pub type WordList = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordParseState {
    ListenForNewWord,
    ReadAndStoreChars,
}

impl WordParseState {
    fn step(self, c: char, current: &mut String, words: &mut WordList) -> Self {
        let next = match self {
            WordParseState::ListenForNewWord if is_word_separator(c) => WordParseState::ListenForNewWord,
            WordParseState::ListenForNewWord => {
                current.push(c);
                WordParseState::ReadAndStoreChars
            }
            WordParseState::ReadAndStoreChars if is_word_separator(c) => {
                words.push(std::mem::take(current));
                WordParseState::ListenForNewWord
            }
            WordParseState::ReadAndStoreChars => {
                current.push(c);
                WordParseState::ReadAndStoreChars
            }
        };

        #[cfg(feature = "debug-states")]
        tracing::trace!(?c, from = ?self, to = ?next, "word transition");

        next
    }
}

/// `\n` and `\r` become one space each; Windows pairs are not collapsed here.
fn replace_line_terminator(c: char) -> char {
    match c {
        '\n' | '\r' => ' ',
        other => other,
    }
}

/// Run the word pass over `source`.
pub fn tokenize_words(source: &str) -> WordList {
    let mut words = WordList::new();
    let mut current = String::new();
    let mut state = WordParseState::ListenForNewWord;

    for c in source.chars().map(replace_line_terminator) {
        state = state.step(c, &mut current, &mut words);
    }

    if state == WordParseState::ReadAndStoreChars {
        words.push(current);
    }
    words
}
