//! Per-page orchestration: normalize, classify, extract, score, embed.

use crate::model::{ArtworkRecord, RawPage};

use super::classify::is_artwork_page;
use super::fields::FieldMatcher;
use super::image::{embed_base64, select_artwork_image};
use super::normalize::normalize_lines;
use super::options::ExtractOptions;
use super::{confidence, fields::FieldMap};

/// Assemble a record from one page, or reject the page.
///
/// `None` means the page was classified as non-artwork (cover, bio, index)
/// or yielded no fields; both are normal outcomes, not errors. The returned
/// record always carries at least one descriptive field.
pub fn assemble_record(
    page: &RawPage,
    source_file: &str,
    matcher: &FieldMatcher,
    options: &ExtractOptions,
) -> Option<ArtworkRecord> {
    let lines = normalize_lines(&page.text);
    let fields = matcher.match_lines(&lines);

    if !is_artwork_page(&lines, &fields, options.max_artwork_lines) {
        log::debug!(
            "{} page {}: rejected ({} lines, {} fields)",
            source_file,
            page.number,
            lines.len(),
            fields.len()
        );
        return None;
    }

    let mut record = build_record(fields, source_file, page.number, options);

    if options.embed_images {
        if let Some(image) = select_artwork_image(&page.images) {
            let (payload, truncated) = embed_base64(image, options.embed_limit);
            if truncated {
                log::warn!(
                    "{} page {}: embedded image exceeds {} bytes, omitted",
                    source_file,
                    page.number,
                    options.embed_limit
                );
            }
            record.image_base64 = payload;
            record.image_truncated = truncated;
        }
    }

    Some(record)
}

fn build_record(
    fields: FieldMap,
    source_file: &str,
    page_number: u32,
    options: &ExtractOptions,
) -> ArtworkRecord {
    let mut record = ArtworkRecord::new(source_file, page_number);
    record.confidence = confidence::score(&fields, &options.weights);
    record.title = fields.title;
    record.artist = fields.artist;
    record.year = fields.year;
    record.medium = fields.medium;
    record.dimensions = fields.dimensions;
    record.price = fields.price;
    record
}
