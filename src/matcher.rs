// WHY: Boyer-Moore occurrence counting with the bad-character rule only.
// Matches may overlap: after a full match the window moves by one.

use crate::error::InvalidInputError;

/// Extended-ASCII alphabet, one symbol per Latin-1 code point.
pub const EXTENDED_ASCII_ALPHABET: usize = 256;

/// Counts (possibly overlapping) occurrences of a fixed pattern.
#[derive(Debug, Clone)]
pub struct StringMatcher {
    pattern: Vec<char>,
    /// Last index of each symbol in the pattern, -1 when absent.
    bad_char_table: Vec<isize>,
}

impl StringMatcher {
    /// Build the skip table for `pattern` over an alphabet of `alphabet_size` symbols.
    ///
    /// Every pattern symbol must have a code point below `alphabet_size`.
    pub fn new(pattern: &str, alphabet_size: usize) -> Result<Self, InvalidInputError> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Err(InvalidInputError::EmptyPattern);
        }

        let mut bad_char_table = vec![-1isize; alphabet_size];
        for (index, &symbol) in pattern.iter().enumerate() {
            let slot = bad_char_table
                .get_mut(symbol as usize)
                .ok_or(InvalidInputError::SymbolOutOfRange { symbol, alphabet_size })?;
            *slot = index as isize;
        }

        Ok(Self { pattern, bad_char_table })
    }

    /// Matcher over the default 256-symbol alphabet.
    pub fn extended_ascii(pattern: &str) -> Result<Self, InvalidInputError> {
        Self::new(pattern, EXTENDED_ASCII_ALPHABET)
    }

    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    pub fn alphabet_size(&self) -> usize {
        self.bad_char_table.len()
    }

    /// Number of occurrences of the pattern in `text`, overlapping ones included.
    pub fn count_occurrences(&self, text: &[char]) -> usize {
        let m = self.pattern.len();
        let n = text.len();
        if m > n {
            return 0;
        }

        let mut matches = 0;
        let mut window = 0;
        while window <= n - m {
            match self.mismatch(&text[window..window + m]) {
                None => {
                    matches += 1;
                    window += 1;
                }
                Some((j, symbol)) => {
                    let shift = j as isize - self.last_index(symbol);
                    window += shift.max(1) as usize;
                }
            }
        }
        matches
    }

    /// Convenience wrapper for string input.
    pub fn count_in_str(&self, text: &str) -> usize {
        let chars: Vec<char> = text.chars().collect();
        self.count_occurrences(&chars)
    }

    /// Right-to-left comparison; returns the first mismatching pattern index and text symbol.
    fn mismatch(&self, window: &[char]) -> Option<(usize, char)> {
        (0..self.pattern.len())
            .rev()
            .find(|&j| self.pattern[j] != window[j])
            .map(|j| (j, window[j]))
    }

    // Text symbols outside the alphabet cannot occur in the pattern.
    fn last_index(&self, symbol: char) -> isize {
        self.bad_char_table
            .get(symbol as usize)
            .copied()
            .unwrap_or(-1)
    }
}
