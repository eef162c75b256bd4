// Known texts with hand-checked statistics.

/// Counting example with many overlapping runs.
pub const MATCHER_TEXT: &str = "bbbabbaabaababbcdfgbbababababbbbaaaaaaaaabaaa";

pub const SIMPLE_TEXT: &str = "This is a test.";

pub const MULTI_SENTENCE_TEXT: &str = "This phrase. contains. multiple sentences.";

/// Mixed line endings: Windows, old Mac, Unix.
pub const MIXED_LINE_ENDINGS: &str =
    "First line walked.\r\nSecond line talking.\rThird line slowly.\nEnd";

pub const MIXED_LINE_TERMINATORS: usize = 3;

pub const MIXED_WORDS: &[&str] = &[
    "First", "line", "walked", "Second", "line", "talking", "Third", "line", "slowly", "End",
];

pub const MIXED_SENTENCES: &[&str] = &[
    "First line walked.",
    "Second line talking.",
    "Third line slowly.",
    "End",
];
