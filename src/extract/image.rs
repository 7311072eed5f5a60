//! Selection and embedding of the dominant page image.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::model::PageImage;

/// Pick the image most likely to be the artwork reproduction: the one with
/// the largest pixel area. Ties go to the earlier image in page order.
/// An empty slice yields `None` — text-only catalog entries are valid.
pub fn select_artwork_image(images: &[PageImage]) -> Option<&PageImage> {
    let mut best: Option<&PageImage> = None;
    for image in images {
        match best {
            Some(current) if image.area() <= current.area() => {}
            _ => best = Some(image),
        }
    }
    best
}

/// Base64-encode an image as a data URI for JSON embedding.
///
/// `limit` bounds the encoded payload in bytes (0 = unlimited). When the
/// payload would exceed the limit it is omitted entirely and the second
/// element of the return value flags the truncation, so output JSON size
/// stays bounded without silently losing the signal that an image existed.
pub fn embed_base64(image: &PageImage, limit: usize) -> (Option<String>, bool) {
    let mut uri = format!("data:image/{};base64,", image.extension());
    uri.push_str(&STANDARD.encode(&image.data));

    if limit > 0 && uri.len() > limit {
        return (None, true);
    }

    (Some(uri), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(width: u32, height: u32) -> PageImage {
        PageImage::new(vec![1, 2, 3], width, height, "image/jpeg")
    }

    #[test]
    fn test_selects_largest_area() {
        // areas: 200, 50, 400
        let images = vec![img(20, 10), img(10, 5), img(20, 20)];
        let selected = select_artwork_image(&images).unwrap();
        assert_eq!(selected.area(), 400);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let mut first = img(10, 10);
        first.data = vec![0xAA];
        let second = img(10, 10);
        let images = vec![first, second];
        let selected = select_artwork_image(&images).unwrap();
        assert_eq!(selected.data, vec![0xAA]);
    }

    #[test]
    fn test_no_images() {
        assert!(select_artwork_image(&[]).is_none());
    }

    #[test]
    fn test_embed_data_uri() {
        let image = img(10, 10);
        let (uri, truncated) = embed_base64(&image, 0);
        assert!(!truncated);
        let uri = uri.unwrap();
        assert!(uri.starts_with("data:image/jpg;base64,"));
        assert!(uri.ends_with(&STANDARD.encode([1u8, 2, 3])));
    }

    #[test]
    fn test_embed_respects_limit() {
        let mut image = img(100, 100);
        image.data = vec![0u8; 1024];
        let (uri, truncated) = embed_base64(&image, 64);
        assert!(uri.is_none());
        assert!(truncated);

        // Generous limit keeps the payload
        let (uri, truncated) = embed_base64(&image, 1 << 20);
        assert!(uri.is_some());
        assert!(!truncated);
    }
}
