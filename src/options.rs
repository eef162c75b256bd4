// WHY: Which statistic categories a run computes, and the occurrence search pattern

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Which statistic categories one analysis run computes.
///
/// The occurrence category carries its own pattern, so a set flag without a
/// pattern cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    /// Average word and sentence lengths.
    pub averages: bool,
    /// Character frequencies and the aggregate counts.
    pub frequencies: bool,
    /// Pattern whose occurrences are counted, if that category is on.
    pub occurrences: Option<String>,
}

impl OptionSet {
    pub fn new(averages: bool, frequencies: bool, occurrences: Option<String>) -> Self {
        Self { averages, frequencies, occurrences }
    }

    /// Build from the positional three-flag form `[averages, frequencies, occurrences]`.
    ///
    /// A pattern given while the occurrence flag is off is ignored.
    pub fn from_flags(flags: &[bool], pattern: Option<String>) -> Result<Self, ConfigurationError> {
        let &[averages, frequencies, occurrences] = flags else {
            return Err(ConfigurationError::WrongArity(flags.len()));
        };

        let occurrences = match (occurrences, pattern) {
            (true, Some(pattern)) => Some(pattern),
            (true, None) => return Err(ConfigurationError::MissingPattern),
            (false, _) => None,
        };

        Ok(Self { averages, frequencies, occurrences })
    }

    /// Every category except text occurrences.
    pub fn all_statistics() -> Self {
        Self::new(true, true, None)
    }

    pub fn flags(&self) -> [bool; 3] {
        [self.averages, self.frequencies, self.occurrences.is_some()]
    }

    /// The pattern to count, when the category is on and the pattern is non-empty.
    pub fn pattern(&self) -> Option<&str> {
        self.occurrences.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_valid() {
        let options = OptionSet::from_flags(&[true, false, true], Some("the".into())).unwrap();
        assert!(options.averages);
        assert!(!options.frequencies);
        assert_eq!(options.pattern(), Some("the"));
        assert_eq!(options.flags(), [true, false, true]);
    }

    #[test]
    fn test_from_flags_wrong_arity() {
        assert_eq!(
            OptionSet::from_flags(&[true, true], None).unwrap_err(),
            ConfigurationError::WrongArity(2)
        );
        assert_eq!(
            OptionSet::from_flags(&[true, true, false, false], None).unwrap_err(),
            ConfigurationError::WrongArity(4)
        );
    }

    #[test]
    fn test_from_flags_missing_pattern() {
        assert_eq!(
            OptionSet::from_flags(&[false, false, true], None).unwrap_err(),
            ConfigurationError::MissingPattern
        );
    }

    #[test]
    fn test_pattern_ignored_when_flag_off() {
        let options = OptionSet::from_flags(&[true, true, false], Some("x".into())).unwrap();
        assert_eq!(options.occurrences, None);
        assert_eq!(options, OptionSet::all_statistics());
    }

    #[test]
    fn test_empty_pattern_is_not_counted() {
        let options = OptionSet::new(false, false, Some(String::new()));
        assert_eq!(options.flags(), [false, false, true]);
        assert_eq!(options.pattern(), None);
    }
}
