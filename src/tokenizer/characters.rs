// WHY: Character pass: line terminators collapse to spaces and are counted on the side.

use std::fmt;

/// State of the line terminator normaliser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminatorState {
    Idle,
    /// A `\r` was read and may be the first half of `\r\n`.
    PendingCarriageReturn,
}

/// Source characters with every line terminator replaced by a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterStream {
    chars: Vec<char>,
    line_terminator_count: usize,
}

impl CharacterStream {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of spaces in the stream that stand in for a line terminator.
    pub fn line_terminator_count(&self) -> usize {
        self.line_terminator_count
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for CharacterStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Incremental normaliser driven one character at a time.
#[derive(Debug)]
struct TerminatorNormalizer {
    state: TerminatorState,
    stream: CharacterStream,
}

impl TerminatorNormalizer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            state: TerminatorState::Idle,
            stream: CharacterStream {
                chars: Vec::with_capacity(capacity),
                line_terminator_count: 0,
            },
        }
    }

    fn push(&mut self, c: char) {
        let next = match (self.state, c) {
            (TerminatorState::PendingCarriageReturn, '\n') => {
                self.emit_terminator();
                TerminatorState::Idle
            }
            // Two spaces and the flag is not re-armed, so a following `\n`
            // becomes a terminator of its own.
            (TerminatorState::PendingCarriageReturn, '\r') => {
                self.emit_terminator();
                self.emit_terminator();
                TerminatorState::Idle
            }
            (TerminatorState::PendingCarriageReturn, other) => {
                self.emit_terminator();
                self.stream.chars.push(other);
                TerminatorState::Idle
            }
            (TerminatorState::Idle, '\n') => {
                self.emit_terminator();
                TerminatorState::Idle
            }
            (TerminatorState::Idle, '\r') => TerminatorState::PendingCarriageReturn,
            (TerminatorState::Idle, other) => {
                self.stream.chars.push(other);
                TerminatorState::Idle
            }
        };

        #[cfg(feature = "debug-states")]
        tracing::trace!(?c, from = ?self.state, to = ?next, "character transition");

        self.state = next;
    }

    fn emit_terminator(&mut self) {
        self.stream.chars.push(' ');
        self.stream.line_terminator_count += 1;
    }

    fn finish(mut self) -> CharacterStream {
        // A trailing lone `\r` is an old Mac-style terminator.
        if self.state == TerminatorState::PendingCarriageReturn {
            self.emit_terminator();
        }
        self.stream
    }
}

/// Run the character pass over `source`.
pub fn tokenize_characters(source: &str) -> CharacterStream {
    let mut normalizer = TerminatorNormalizer::with_capacity(source.len());
    for c in source.chars() {
        normalizer.push(c);
    }
    normalizer.finish()
}
