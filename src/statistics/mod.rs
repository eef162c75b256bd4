// WHY: Statistics computed from the tokenizer output, gated by the option set.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::classifier::{
    is_english_alphanumeric, is_international, is_non_alphanumeric_symbol, is_whitespace,
};
use crate::error::InvalidInputError;
use crate::matcher::StringMatcher;
use crate::options::OptionSet;
use crate::tokenizer::{tokenize_characters, CharacterStream, Tokenized};

pub mod metric;
pub mod report;

pub use metric::Metric;
pub use report::{parse_whole_numbers, WholeNumbers};

/// Word endings counted as suffixes.
pub const SUFFIXES: &[&str] = &["ed", "ing", "ly"];

/// How often one character occurs in the character stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharFrequency {
    pub count: usize,
    /// Share of the whole stream, out of 100.
    pub percent: f64,
}

pub type CharFrequencies = BTreeMap<char, CharFrequency>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternOccurrences {
    pub pattern: String,
    pub count: usize,
}

/// Every metric one analysis run can produce.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatisticsReport {
    pub avg_sentence_length: Metric<f64>,
    pub avg_word_length: Metric<f64>,
    pub char_frequency: Metric<CharFrequencies>,
    pub english_alphanumeric_count: Metric<usize>,
    pub non_alphanumeric_count: Metric<usize>,
    pub whitespace_count: Metric<usize>,
    pub international_char_count: Metric<usize>,
    pub suffix_count: Metric<usize>,
    pub pattern_occurrences: Metric<PatternOccurrences>,
}

impl StatisticsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every metric as not computed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_reset(&self) -> bool {
        *self == Self::default()
    }

    /// Reset, then compute every metric the options ask for.
    ///
    /// The pattern is checked before anything is computed, so on error the
    /// report is left reset rather than half filled. Its line terminators are
    /// collapsed the same way as the text's before searching.
    pub fn compute(
        &mut self,
        tokens: &Tokenized,
        options: &OptionSet,
        alphabet_size: usize,
    ) -> Result<(), InvalidInputError> {
        self.reset();

        let matcher = options
            .pattern()
            .map(|pattern| StringMatcher::new(&tokenize_characters(pattern).to_string(), alphabet_size))
            .transpose()?;

        if options.averages {
            self.avg_sentence_length = average_length(&tokens.sentences).into();
            self.avg_word_length = average_length(&tokens.words).into();
        }

        if options.frequencies {
            let chars = tokens.characters.chars();
            self.char_frequency = Metric::Computed(char_frequencies(chars));
            self.english_alphanumeric_count =
                Metric::Computed(count_matching(chars, is_english_alphanumeric));
            self.non_alphanumeric_count =
                Metric::Computed(count_matching(chars, is_non_alphanumeric_symbol));
            self.whitespace_count = Metric::Computed(count_whitespace(&tokens.characters));
            self.international_char_count = Metric::Computed(count_matching(chars, is_international));
            self.suffix_count = Metric::Computed(count_suffixes(&tokens.words));
        }

        if let Some(matcher) = matcher {
            let count = matcher.count_occurrences(tokens.characters.chars());
            self.pattern_occurrences = Metric::Computed(PatternOccurrences {
                pattern: matcher.pattern(),
                count,
            });
        }

        debug!(options = ?options.flags(), "Statistics computed");
        Ok(())
    }

    pub fn has_averages(&self) -> bool {
        self.avg_sentence_length.is_requested() || self.avg_word_length.is_requested()
    }

    pub fn has_frequencies(&self) -> bool {
        self.char_frequency.is_requested()
            || self.english_alphanumeric_count.is_requested()
            || self.non_alphanumeric_count.is_requested()
            || self.whitespace_count.is_requested()
            || self.international_char_count.is_requested()
            || self.suffix_count.is_requested()
    }

    pub fn has_occurrences(&self) -> bool {
        self.pattern_occurrences.is_requested()
    }

    /// The whole-number fields, as they appear in a rendered report.
    pub fn whole_numbers(&self) -> WholeNumbers {
        WholeNumbers {
            english_alphanumeric: self.english_alphanumeric_count.value().copied(),
            non_alphanumeric: self.non_alphanumeric_count.value().copied(),
            whitespace: self.whitespace_count.value().copied(),
            international: self.international_char_count.value().copied(),
            suffixes: self.suffix_count.value().copied(),
            occurrences: self.pattern_occurrences.value().map(|o| o.count),
        }
    }
}

/// Mean length in characters, `None` for an empty list.
pub fn average_length<S: AsRef<str>>(items: &[S]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let total: usize = items.iter().map(|s| s.as_ref().chars().count()).sum();
    Some(total as f64 / items.len() as f64)
}

/// Occurrence count and percentage of every distinct character.
pub fn char_frequencies(chars: &[char]) -> CharFrequencies {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for &c in chars {
        *counts.entry(c).or_insert(0) += 1;
    }

    let total = chars.len() as f64;
    counts
        .into_iter()
        .map(|(c, count)| {
            let percent = count as f64 / total * 100.0;
            (c, CharFrequency { count, percent })
        })
        .collect()
}

pub fn count_matching(chars: &[char], predicate: impl Fn(char) -> bool) -> usize {
    chars.iter().filter(|&&c| predicate(c)).count()
}

/// Whitespace in the source text.
///
/// The stream holds exactly one space per collapsed line terminator, so this
/// is the literal whitespace plus `line_terminator_count`.
pub fn count_whitespace(stream: &CharacterStream) -> usize {
    count_matching(stream.chars(), is_whitespace)
}

pub fn count_suffixes<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|w| SUFFIXES.iter().any(|suffix| w.as_ref().ends_with(*suffix)))
        .count()
}
