//! PDF format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Validate that a file starts with a PDF header and return its version.
///
/// # Returns
/// * `Ok(version)` (e.g., "1.7") if the file is a valid PDF
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    reader.read_exact(&mut header).map_err(|_| Error::UnknownFormat)?;
    detect_version_from_bytes(&header)
}

/// Validate a PDF header in a byte slice and return its version.
pub fn detect_version_from_bytes(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    let chars: Vec<char> = version.chars().collect();
    if chars.len() != 3 || !chars[0].is_ascii_digit() || chars[1] != '.' || !chars[2].is_ascii_digit()
    {
        return Err(Error::UnknownFormat);
    }

    Ok(version)
}

/// Check if a file is a valid PDF.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_version(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_header() {
        let version = detect_version_from_bytes(b"%PDF-1.7\n%test").unwrap();
        assert_eq!(version, "1.7");

        let version = detect_version_from_bytes(b"%PDF-2.0\n%test").unwrap();
        assert_eq!(version, "2.0");
    }

    #[test]
    fn test_detect_invalid_header() {
        assert!(matches!(
            detect_version_from_bytes(b""),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_version_from_bytes(b"%PDF-"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_version_from_bytes(b"<!DOCTYPE html><html></html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(
            detect_version_from_bytes(b"%PDF-x.y rest"),
            Err(Error::UnknownFormat)
        ));
    }
}
