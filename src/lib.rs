//! # catalographer
//!
//! Heuristic extraction of structured artwork records from gallery-catalog
//! PDFs with extractable text layers.
//!
//! The core is a pure, per-page pipeline: normalize the text layer into
//! lines, classify the page as artwork entry or skippable (bio, cover,
//! index), match ordered pattern rules for title/artist/year/medium/
//! dimensions/price, score the result, and pick the dominant embedded image.
//! File I/O stays at the edges.
//!
//! ## Quick Start
//!
//! ```no_run
//! use catalographer::{extract_file, output};
//!
//! fn main() -> catalographer::Result<()> {
//!     let records = extract_file("spring_show.pdf")?;
//!     output::write_records(&records, "spring_show_artworks.json")?;
//!     Ok(())
//! }
//! ```
//!
//! No OCR is attempted: a scanned catalog without a text layer yields an
//! empty record set, not an error.

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod pdf;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    assemble_record, ConfidenceWeights, ExtractOptions, FieldMap, FieldMatcher,
};
pub use model::{ArtworkRecord, PageImage, RawPage};
pub use pdf::Catalog;

use std::path::Path;

/// Extract artwork records from a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use catalographer::extract_file;
///
/// let records = extract_file("catalog.pdf").unwrap();
/// println!("{} artworks", records.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<ArtworkRecord>> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Extract artwork records from a PDF file.
///
/// Pages are processed in document order; a page that fails extraction or
/// is classified as non-artwork is skipped with a logged warning and never
/// aborts the file. When `options.save_images` is set and an image
/// directory is configured, the dominant image of each record's page is
/// written there and the record's `image_path` points at it.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Vec<ArtworkRecord>> {
    let path = path.as_ref();
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_file.clone());

    let catalog = Catalog::open(path)?;
    extract_catalog(&catalog, &source_file, &stem, options)
}

/// Extract artwork records from PDF bytes with default options.
pub fn extract_bytes(data: &[u8], source_file: &str) -> Result<Vec<ArtworkRecord>> {
    extract_bytes_with_options(data, source_file, &ExtractOptions::default())
}

/// Extract artwork records from PDF bytes.
pub fn extract_bytes_with_options(
    data: &[u8],
    source_file: &str,
    options: &ExtractOptions,
) -> Result<Vec<ArtworkRecord>> {
    let catalog = Catalog::from_bytes(data)?;
    let stem = source_file.trim_end_matches(".pdf");
    extract_catalog(&catalog, source_file, stem, options)
}

/// Run the per-page pipeline over an open catalog.
fn extract_catalog(
    catalog: &Catalog,
    source_file: &str,
    stem: &str,
    options: &ExtractOptions,
) -> Result<Vec<ArtworkRecord>> {
    let matcher = FieldMatcher::new();
    let mut records = Vec::new();

    for page in catalog.pages(options.min_image_px) {
        let Some(mut record) = assemble_record(&page, source_file, &matcher, options) else {
            continue;
        };

        if options.save_images {
            if let (Some(dir), Some(image)) = (
                options.image_dir.as_deref(),
                extract::select_artwork_image(&page.images),
            ) {
                match output::write_image(image, dir, stem, page.number) {
                    Ok(path) => record.image_path = Some(path.display().to_string()),
                    Err(e) => {
                        log::warn!(
                            "{} page {}: failed to save image: {}",
                            source_file,
                            page.number,
                            e
                        );
                    }
                }
            }
        }

        records.push(record);
    }

    log::info!("{}: extracted {} artwork records", source_file, records.len());
    Ok(records)
}
