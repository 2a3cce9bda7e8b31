use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Backend-reported aggregate accuracy/progress metrics.
///
/// A read-only snapshot, refreshed after each submission; the client never
/// computes any of these values itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub accuracy: f64,
    pub classified_count: u64,
    pub total_count: u64,
    #[serde(default)]
    pub confidence_distribution: BTreeMap<String, f64>,
    #[serde(default)]
    pub learning_curve: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_distribution: Option<BTreeMap<String, u64>>,
}

impl ModelStats {
    /// Fraction of the collection classified so far, in `0.0..=1.0`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.classified_count as f64 / self.total_count as f64;
        fraction.clamp(0.0, 1.0)
    }

    /// Accuracy rounded to a whole percent.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.accuracy * 100.0).round().clamp(0.0, 100.0) as u32;
        percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_for_empty_collection() {
        let stats = ModelStats::default();
        assert!(stats.progress_fraction().abs() < f64::EPSILON);
    }

    #[test]
    fn progress_and_accuracy_round_trip() {
        let stats = ModelStats {
            accuracy: 0.847,
            classified_count: 30,
            total_count: 120,
            ..ModelStats::default()
        };
        assert!((stats.progress_fraction() - 0.25).abs() < f64::EPSILON);
        assert_eq!(stats.accuracy_percent(), 85);
    }

    #[test]
    fn decodes_without_optional_distributions() {
        let json = r#"{"accuracy": 0.5, "classified_count": 1, "total_count": 4}"#;
        let stats: ModelStats = serde_json::from_str(json).unwrap();
        assert!(stats.confidence_distribution.is_empty());
        assert!(stats.learning_curve.is_empty());
        assert!(stats.class_distribution.is_none());
    }
}
