//! JSON and image file output.
//!
//! Mechanical plumbing around the engine: writing record arrays and
//! extracted image files with deterministic, filesystem-safe names.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{ArtworkRecord, PageImage};

/// Maximum length of a generated image filename.
const MAX_FILENAME_LEN: usize = 200;

/// Write records as a pretty-printed JSON array.
///
/// An empty slice still writes a valid `[]` — a catalog with no artwork
/// pages is a normal outcome.
pub fn write_records<P: AsRef<Path>>(records: &[ArtworkRecord], path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deterministic image filename from source stem and page number.
pub fn image_filename(stem: &str, page_number: u32, extension: &str) -> String {
    sanitize_filename(&format!("{}_page{}.{}", stem, page_number, extension))
}

/// Write an extracted image next to the JSON output and return its path.
pub fn write_image<P: AsRef<Path>>(
    image: &PageImage,
    dir: P,
    stem: &str,
    page_number: u32,
) -> Result<PathBuf> {
    let filename = image_filename(stem, page_number, image.extension());
    let path = dir.as_ref().join(filename);
    fs::write(&path, &image.data)?;
    Ok(path)
}

/// Make a filename filesystem-safe: replace reserved and non-ASCII
/// characters with underscores and cap the length, keeping the extension.
pub fn sanitize_filename(filename: &str) -> String {
    const RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    let mut sanitized: String = filename
        .chars()
        .map(|c| {
            if RESERVED.contains(&c) || !c.is_ascii() || c.is_ascii_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if sanitized.len() > MAX_FILENAME_LEN {
        let (base, ext) = match sanitized.rfind('.') {
            Some(dot) => {
                let (b, e) = sanitized.split_at(dot);
                (b.to_string(), e.to_string())
            }
            None => (sanitized.clone(), String::new()),
        };
        sanitized = format!("{}{}", &base[..MAX_FILENAME_LEN - ext.len()], ext);
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_filename_deterministic() {
        let a = image_filename("spring_show", 7, "jpg");
        let b = image_filename("spring_show", 7, "jpg");
        assert_eq!(a, b);
        assert_eq!(a, "spring_show_page7.jpg");
    }

    #[test]
    fn test_sanitize_reserved_chars() {
        assert_eq!(sanitize_filename("a/b:c*d.jpg"), "a_b_c_d.jpg");
        assert_eq!(sanitize_filename("caf\u{e9}.png"), "caf_.png");
    }

    #[test]
    fn test_sanitize_caps_length() {
        let long = format!("{}.jpg", "x".repeat(300));
        let sanitized = sanitize_filename(&long);
        assert_eq!(sanitized.len(), MAX_FILENAME_LEN);
        assert!(sanitized.ends_with(".jpg"));
    }

    #[test]
    fn test_write_records_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut record = ArtworkRecord::new("catalog.pdf", 3);
        record.title = Some("Nighthawks".to_string());
        record.year = Some(1942);
        record.confidence = 0.5;

        write_records(&[record.clone()], &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<ArtworkRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn test_write_records_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_records(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_write_image() {
        let dir = tempfile::tempdir().unwrap();
        let image = PageImage::new(vec![0xFF, 0xD8, 0xFF], 200, 100, "image/jpeg");
        let path = write_image(&image, dir.path(), "catalog", 2).unwrap();
        assert!(path.ends_with("catalog_page2.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }
}
