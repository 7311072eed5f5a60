//! Confidence scoring from the set of extracted fields.

use serde::{Deserialize, Serialize};

use super::fields::FieldMap;

/// Per-field weights for confidence scoring.
///
/// Externalized so the scoring policy can change without touching the
/// extraction rules. Weights reflect diagnosticity: dimensions and a year
/// are much stronger artwork signals than a bare title, which any page can
/// fake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub title: f32,
    pub artist: f32,
    pub year: f32,
    pub medium: f32,
    pub dimensions: f32,
    pub price: f32,
}

impl ConfidenceWeights {
    /// Sum of all weights, the normalization denominator.
    pub fn total(&self) -> f32 {
        self.title + self.artist + self.year + self.medium + self.dimensions + self.price
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            title: 0.15,
            artist: 0.15,
            year: 0.20,
            medium: 0.15,
            dimensions: 0.25,
            price: 0.10,
        }
    }
}

/// Compute the confidence score for a field map.
///
/// Pure function of the field-presence set: the weighted sum of presence
/// indicators normalized by the total weight. Always in [0, 1] and
/// monotonically non-decreasing as fields are added.
pub fn score(fields: &FieldMap, weights: &ConfidenceWeights) -> f32 {
    let total = weights.total();
    if total <= 0.0 {
        return 0.0;
    }

    let mut sum = 0.0;
    if fields.title.is_some() {
        sum += weights.title;
    }
    if fields.artist.is_some() {
        sum += weights.artist;
    }
    if fields.year.is_some() {
        sum += weights.year;
    }
    if fields.medium.is_some() {
        sum += weights.medium;
    }
    if fields.dimensions.is_some() {
        sum += weights.dimensions;
    }
    if fields.price.is_some() {
        sum += weights.price;
    }

    (sum / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_scores_zero() {
        let fields = FieldMap::default();
        assert_eq!(score(&fields, &ConfidenceWeights::default()), 0.0);
    }

    #[test]
    fn test_full_map_scores_one() {
        let fields = FieldMap {
            title: Some("t".into()),
            artist: Some("a".into()),
            year: Some(1999),
            medium: Some("m".into()),
            dimensions: Some("d".into()),
            price: Some("p".into()),
        };
        let s = score(&fields, &ConfidenceWeights::default());
        assert!((s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotone_under_field_addition() {
        let weights = ConfidenceWeights::default();
        let mut fields = FieldMap::default();
        let mut previous = score(&fields, &weights);

        fields.price = Some("$100".into());
        let s = score(&fields, &weights);
        assert!(s >= previous);
        previous = s;

        fields.title = Some("Untitled".into());
        let s = score(&fields, &weights);
        assert!(s >= previous);
        previous = s;

        fields.dimensions = Some("10 x 10 cm".into());
        let s = score(&fields, &weights);
        assert!(s >= previous);
        previous = s;

        fields.year = Some(2001);
        let s = score(&fields, &weights);
        assert!(s >= previous);
    }

    #[test]
    fn test_deterministic() {
        let weights = ConfidenceWeights::default();
        let fields = FieldMap {
            artist: Some("E. Hopper".into()),
            year: Some(1942),
            ..FieldMap::default()
        };
        assert_eq!(score(&fields, &weights), score(&fields, &weights));
    }

    #[test]
    fn test_dimensions_outweigh_title() {
        let weights = ConfidenceWeights::default();
        let title_only = FieldMap {
            title: Some("t".into()),
            ..FieldMap::default()
        };
        let dims_only = FieldMap {
            dimensions: Some("d".into()),
            ..FieldMap::default()
        };
        assert!(score(&dims_only, &weights) > score(&title_only, &weights));
    }
}
