// WHY: Human-readable rendition of a StatisticsReport, and a reader for its whole-number fields.

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::classifier::is_whitespace;

use super::{Metric, StatisticsReport};

const NEWLINE: &str = "\n";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %I:%M:%S %p %Z";

const ENGLISH_ALPHANUMERIC_LABEL: &str = "English alphanumeric characters";
const NON_ALPHANUMERIC_LABEL: &str = "Non-alphanumeric characters";
const WHITESPACE_LABEL: &str = "Whitespaces";
const INTERNATIONAL_LABEL: &str = "International/Accented characters";
const SUFFIX_LABEL: &str = "No. of suffixes 'ed' 'ing' 'ly'";
const OCCURRENCES_PREFIX: &str = "Number of occurrences of ";

impl StatisticsReport {
    /// Render with the current local time in the header.
    pub fn render(&self) -> String {
        self.render_at(Local::now())
    }

    /// Render with a fixed header time. Empty when nothing was requested.
    pub fn render_at<Tz>(&self, timestamp: DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.is_reset() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str(&timestamp.format(TIMESTAMP_FORMAT).to_string());
        out.push_str(NEWLINE);
        self.write_averages(&mut out);
        self.write_frequencies(&mut out);
        self.write_occurrences(&mut out);
        out
    }

    fn write_averages(&self, out: &mut String) {
        if !self.has_averages() {
            return;
        }
        section(out, "=== Average Lengths ===");
        decimal_line(out, "Average sentence length", &self.avg_sentence_length);
        decimal_line(out, "Average word length", &self.avg_word_length);
    }

    fn write_frequencies(&self, out: &mut String) {
        if !self.has_frequencies() {
            return;
        }
        section(out, "=== Frequencies ===");

        if let Metric::Computed(table) = &self.char_frequency {
            let _ = writeln!(out, "--- Character frequencies (out of 100%) ---");
            let mut whitespace_percent = 0.0;
            for (c, freq) in table {
                if is_whitespace(*c) {
                    whitespace_percent += freq.percent;
                } else {
                    let _ = writeln!(out, "{c}: {:.2}%", freq.percent);
                }
            }
            let _ = writeln!(out, "{WHITESPACE_LABEL}: {whitespace_percent:.2}%");
        }

        let _ = writeln!(out, "--- Other numbers ---");
        count_line(out, ENGLISH_ALPHANUMERIC_LABEL, &self.english_alphanumeric_count);
        count_line(out, NON_ALPHANUMERIC_LABEL, &self.non_alphanumeric_count);
        count_line(out, WHITESPACE_LABEL, &self.whitespace_count);
        count_line(out, INTERNATIONAL_LABEL, &self.international_char_count);
        count_line(out, SUFFIX_LABEL, &self.suffix_count);
    }

    fn write_occurrences(&self, out: &mut String) {
        if let Metric::Computed(occurrences) = &self.pattern_occurrences {
            section(out, "=== Text Occurrences ===");
            let _ = writeln!(
                out,
                "{OCCURRENCES_PREFIX}{} in text file: {}",
                occurrences.pattern, occurrences.count
            );
        }
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(NEWLINE);
    out.push_str(title);
    out.push_str(NEWLINE);
}

fn decimal_line(out: &mut String, label: &str, metric: &Metric<f64>) {
    match metric {
        Metric::Computed(value) => {
            let _ = writeln!(out, "{label}: {value:.2}");
        }
        Metric::Undefined => {
            let _ = writeln!(out, "{label}: undefined");
        }
        Metric::NotRequested => {}
    }
}

fn count_line(out: &mut String, label: &str, metric: &Metric<usize>) {
    if let Metric::Computed(value) = metric {
        let _ = writeln!(out, "{label}: {value}");
    }
}

/// Whole-number fields recovered from a rendered report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WholeNumbers {
    pub english_alphanumeric: Option<usize>,
    pub non_alphanumeric: Option<usize>,
    pub whitespace: Option<usize>,
    pub international: Option<usize>,
    pub suffixes: Option<usize>,
    pub occurrences: Option<usize>,
}

/// Read the count lines back out of a rendered report.
///
/// Percentages and averages are rounded to two places when rendered and are not recovered.
pub fn parse_whole_numbers(rendered: &str) -> WholeNumbers {
    let mut numbers = WholeNumbers::default();

    for line in rendered.lines() {
        if let Some(rest) = line.strip_prefix(OCCURRENCES_PREFIX) {
            numbers.occurrences = rest
                .rsplit_once(": ")
                .and_then(|(_, count)| count.trim().parse().ok());
            continue;
        }

        let Some((label, value)) = line.split_once(": ") else {
            continue;
        };
        // Percentage lines share the whitespace label but do not parse as integers.
        let Ok(value) = value.trim().parse::<usize>() else {
            continue;
        };
        let slot = match label {
            ENGLISH_ALPHANUMERIC_LABEL => &mut numbers.english_alphanumeric,
            NON_ALPHANUMERIC_LABEL => &mut numbers.non_alphanumeric,
            WHITESPACE_LABEL => &mut numbers.whitespace,
            INTERNATIONAL_LABEL => &mut numbers.international,
            SUFFIX_LABEL => &mut numbers.suffixes,
            _ => continue,
        };
        *slot = Some(value);
    }

    numbers
}
