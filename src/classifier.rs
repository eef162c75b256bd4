// WHY: Character classes used by the tokenizer passes and the statistics engine.
// Classification is extended-ASCII only; anything above U+00FF is just "international".

/// Symbols counted as non-alphanumeric characters.
pub const NON_ALPHANUMERIC_SYMBOLS: &[char] = &[
    '`', '\u{AC}', '!', '"', '\u{A3}', '$', '%', '^', '&', '*', '(', ')', '_', '-', '+', '=',
    '{', '}', '[', ']', '\\', '|', ',', '.', '<', '>', '/', '?', ';', ':', '\'', '@', '#', '~',
];

/// Marks that end a word.
pub const WORD_PUNCTUATION: &[char] = &['!', '?', '/', ':', ';', ',', '.'];

/// Marks that end a sentence.
pub const SENTENCE_TERMINATOR: char = '.';

/// ASCII whitespace plus the Latin-1 no-break space.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{A0}')
}

/// `[a-zA-Z0-9]`
pub fn is_english_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_non_alphanumeric_symbol(c: char) -> bool {
    NON_ALPHANUMERIC_SYMBOLS.contains(&c)
}

/// Anything above U+0080.
pub fn is_international(c: char) -> bool {
    c > '\u{80}'
}

pub fn is_word_punctuation(c: char) -> bool {
    WORD_PUNCTUATION.contains(&c)
}

/// Characters that never belong to a word.
pub fn is_word_separator(c: char) -> bool {
    is_whitespace(c) || is_word_punctuation(c)
}
