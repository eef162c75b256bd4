// WHY: One statistic slot that tells apart not requested, undefined and computed values

use serde::Serialize;

/// One statistic slot in a report.
///
/// Zero is a legitimate count, so "not computed" is a variant rather than a magic value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Metric<T> {
    /// The governing option was off, or the report was reset.
    NotRequested,
    /// Requested but has no value, e.g. an average over an empty list.
    Undefined,
    Computed(T),
}

impl<T> Default for Metric<T> {
    fn default() -> Self {
        Metric::NotRequested
    }
}

impl<T> Metric<T> {
    pub fn is_requested(&self) -> bool {
        !matches!(self, Metric::NotRequested)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Metric::Computed(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Metric<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Metric::Undefined, Metric::Computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_requested() {
        let metric: Metric<usize> = Metric::default();
        assert!(!metric.is_requested());
        assert_eq!(metric.value(), None);
    }

    #[test]
    fn test_zero_is_a_real_value() {
        let metric = Metric::Computed(0usize);
        assert!(metric.is_requested());
        assert_eq!(metric.value(), Some(&0));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Metric::from(None::<f64>), Metric::Undefined);
        assert_eq!(Metric::from(Some(2.5)), Metric::Computed(2.5));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Metric::Computed(3usize)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "computed", "value": 3}));
        let json = serde_json::to_value(Metric::<usize>::NotRequested).unwrap();
        assert_eq!(json, serde_json::json!({"status": "not_requested"}));
    }
}
