//! Extraction options and configuration.

use std::path::PathBuf;

use super::confidence::ConfidenceWeights;

/// Options controlling record extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Whether to save image files alongside the JSON output
    pub save_images: bool,

    /// Directory for saved image files
    pub image_dir: Option<PathBuf>,

    /// Whether to embed the dominant image as base64 in the record
    pub embed_images: bool,

    /// Byte limit for an embedded base64 payload (0 = unlimited)
    pub embed_limit: usize,

    /// Line-count threshold above which a page is treated as text-heavy
    pub max_artwork_lines: usize,

    /// Minimum width/height in pixels for an embedded image to count;
    /// filters icons and decorations
    pub min_image_px: u32,

    /// Per-field confidence weights
    pub weights: ConfidenceWeights,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable saving image files.
    pub fn with_saved_images(mut self, save: bool) -> Self {
        self.save_images = save;
        self
    }

    /// Set the image output directory and enable image saving.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self.save_images = true;
        self
    }

    /// Enable or disable base64 embedding.
    pub fn with_embedded_images(mut self, embed: bool) -> Self {
        self.embed_images = embed;
        self
    }

    /// Set the embedded-payload byte limit (0 = unlimited).
    pub fn with_embed_limit(mut self, limit: usize) -> Self {
        self.embed_limit = limit;
        self
    }

    /// Set the text-heavy line threshold.
    pub fn with_max_artwork_lines(mut self, max: usize) -> Self {
        self.max_artwork_lines = max;
        self
    }

    /// Set the minimum pixel dimension for candidate images.
    pub fn with_min_image_px(mut self, px: u32) -> Self {
        self.min_image_px = px;
        self
    }

    /// Set the confidence weights.
    pub fn with_weights(mut self, weights: ConfidenceWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            save_images: false,
            image_dir: None,
            embed_images: false,
            embed_limit: 2 * 1024 * 1024,
            max_artwork_lines: 40,
            min_image_px: 100,
            weights: ConfidenceWeights::default(),
        }
    }
}
