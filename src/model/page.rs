//! Page-level types.
//!
//! A [`RawPage`] is the ephemeral unit of processing: the text layer and
//! embedded images of one PDF page. It exists only while that page is being
//! turned into a record (or rejected) and carries no derived state.

/// A single page pulled out of a catalog PDF.
#[derive(Debug, Clone)]
pub struct RawPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Raw text layer of the page (may be empty)
    pub text: String,

    /// Embedded images in page order
    pub images: Vec<PageImage>,
}

impl RawPage {
    /// Create a page with text and no images.
    pub fn with_text(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            images: Vec::new(),
        }
    }

    /// Add an embedded image.
    pub fn add_image(&mut self, image: PageImage) {
        self.images.push(image);
    }

    /// Check if the page has no text layer at all.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.images.is_empty()
    }
}

/// An image embedded in a page.
///
/// Never serialized itself; records carry the image as a base64 data URI
/// or a file path instead.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Raw encoded image bytes
    pub data: Vec<u8>,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// MIME type (e.g., "image/jpeg")
    pub mime_type: String,
}

impl PageImage {
    /// Create a new image.
    pub fn new(data: Vec<u8>, width: u32, height: u32, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            width,
            height,
            mime_type: mime_type.into(),
        }
    }

    /// Pixel area, the selection key for the dominant artwork image.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// File extension for the MIME type.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/tiff" => "tiff",
            "image/bmp" => "bmp",
            "image/jp2" | "image/jpeg2000" => "jp2",
            _ => "raw",
        }
    }

    /// Detect MIME type from data magic bytes.
    pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
        if data.len() < 8 {
            return None;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("image/jpeg");
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("image/png");
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("image/gif");
        }

        // TIFF: little- or big-endian marker
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some("image/tiff");
        }

        // JPEG 2000: 00 00 00 0C 6A 50 20 20
        if data.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20]) {
            return Some("image/jp2");
        }

        None
    }
}
