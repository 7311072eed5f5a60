//! The output unit: one structured artwork record per qualifying page.

use serde::{Deserialize, Serialize};

/// A structured artwork record extracted from one catalog page.
///
/// Immutable after assembly. Absent optional fields are omitted from the
/// JSON output rather than serialized as placeholders. Every record emitted
/// by the extractor has at least one populated field besides `source_file`
/// and `page_number` — pages that yield nothing are rejected upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    /// Artwork title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Artist name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Year of creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Medium (e.g., "Oil on canvas")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    /// Physical dimensions as printed (e.g., "73.7 x 92.1 cm")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Asking price as printed (e.g., "$12,000")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Extraction confidence in [0, 1]
    pub confidence: f32,

    /// Base64 data URI of the dominant page image, if embedding is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,

    /// Set when an embedded payload was dropped for exceeding the size limit
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub image_truncated: bool,

    /// Path of the extracted image file, if image saving is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// Name of the source PDF file
    pub source_file: String,

    /// Page number within the source file (1-indexed)
    pub page_number: u32,
}

impl ArtworkRecord {
    /// Create an empty record for a page of a source file.
    pub fn new(source_file: impl Into<String>, page_number: u32) -> Self {
        Self {
            title: None,
            artist: None,
            year: None,
            medium: None,
            dimensions: None,
            price: None,
            confidence: 0.0,
            image_base64: None,
            image_truncated: false,
            image_path: None,
            source_file: source_file.into(),
            page_number,
        }
    }

    /// Number of populated descriptive fields (title, artist, year, medium,
    /// dimensions, price).
    pub fn field_count(&self) -> usize {
        [
            self.title.is_some(),
            self.artist.is_some(),
            self.year.is_some(),
            self.medium.is_some(),
            self.dimensions.is_some(),
            self.price.is_some(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }

    /// Check whether the record carries any descriptive field at all.
    pub fn has_fields(&self) -> bool {
        self.field_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count() {
        let mut record = ArtworkRecord::new("catalog.pdf", 3);
        assert_eq!(record.field_count(), 0);
        assert!(!record.has_fields());

        record.title = Some("Starry Night".to_string());
        record.year = Some(1889);
        assert_eq!(record.field_count(), 2);
        assert!(record.has_fields());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let mut record = ArtworkRecord::new("catalog.pdf", 1);
        record.artist = Some("Vincent van Gogh".to_string());

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"artist\""));
        assert!(!json.contains("\"title\""));
        assert!(!json.contains("\"price\""));
        assert!(!json.contains("\"image_truncated\""));
        assert!(json.contains("\"page_number\":1"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut record = ArtworkRecord::new("spring_show.pdf", 7);
        record.title = Some("Composition IV".to_string());
        record.artist = Some("Wassily Kandinsky".to_string());
        record.year = Some(1911);
        record.dimensions = Some("159.5 x 250.5 cm".to_string());
        record.confidence = 0.75;

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ArtworkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
