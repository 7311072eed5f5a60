//! PDF collaborator: per-page text and embedded-image access via lopdf.
//!
//! This module is deliberately free of extraction heuristics; it hands each
//! page to the engine as an in-memory [`RawPage`] and keeps all lopdf
//! details here. Page-level failures are logged and degrade the page, never
//! the document.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::detect_version;
use crate::error::{Error, Result};
use crate::model::{PageImage, RawPage};

/// An open catalog PDF. The underlying document is released when the value
/// is dropped, whatever the exit path.
pub struct Catalog {
    doc: LopdfDocument,
}

impl Catalog {
    /// Open a catalog PDF from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Cheap header check before handing the file to lopdf
        detect_version(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Ok(Self { doc })
    }

    /// Open a catalog PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Ok(Self { doc })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Pull all pages in document order.
    ///
    /// A page whose text or images cannot be extracted is returned with
    /// that part empty after a logged warning; only the document failing to
    /// enumerate pages at all is an error.
    pub fn pages(&self, min_image_px: u32) -> Vec<RawPage> {
        let mut pages = Vec::new();

        for (page_num, page_id) in self.doc.get_pages() {
            let text = match self.page_text(page_num) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    String::new()
                }
            };

            let mut page = RawPage::with_text(page_num, text);
            match self.page_images(page_id, min_image_px) {
                Ok(images) => page.images = images,
                Err(e) => {
                    log::warn!("Failed to extract images from page {}: {}", page_num, e);
                }
            }

            pages.push(page);
        }

        pages
    }

    /// Extract the text layer of a page.
    fn page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::PageExtract(format!("page {}: {}", page_num, e)))
    }

    /// Extract embedded images from a page's XObject resources.
    ///
    /// Images smaller than `min_px` in either dimension are dropped; they
    /// are icons and page furniture, not artwork reproductions.
    fn page_images(&self, page_id: lopdf::ObjectId, min_px: u32) -> Result<Vec<PageImage>> {
        let mut images = Vec::new();

        let Ok(page_dict) = self.doc.get_dictionary(page_id) else {
            return Ok(images);
        };
        let Ok(res) = page_dict.get(b"Resources") else {
            return Ok(images);
        };

        let res_dict = match res {
            lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            lopdf::Object::Dictionary(d) => Some(d),
            _ => None,
        };
        let Some(res_dict) = res_dict else {
            return Ok(images);
        };
        let Ok(xobjects) = res_dict.get(b"XObject") else {
            return Ok(images);
        };

        let xobj_dict = match xobjects {
            lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            lopdf::Object::Dictionary(d) => Some(d),
            _ => None,
        };
        let Some(xobj_dict) = xobj_dict else {
            return Ok(images);
        };

        for (_name, obj) in xobj_dict.iter() {
            let Ok(obj_ref) = obj.as_reference() else {
                continue;
            };
            match self.image_xobject(obj_ref) {
                Ok(Some(image)) if image.width >= min_px && image.height >= min_px => {
                    images.push(image);
                }
                Ok(_) => {}
                Err(e) => log::debug!("Skipping malformed XObject: {}", e),
            }
        }

        Ok(images)
    }

    /// Decode one XObject stream into a [`PageImage`], or `None` for
    /// non-image XObjects (forms, etc.).
    fn image_xobject(&self, obj_ref: lopdf::ObjectId) -> Result<Option<PageImage>> {
        let object = self
            .doc
            .get_object(obj_ref)
            .map_err(|e| Error::ImageExtract(e.to_string()))?;

        let lopdf::Object::Stream(stream) = object else {
            return Err(Error::ImageExtract("not a stream XObject".to_string()));
        };
        let dict = &stream.dict;

        if let Ok(subtype) = dict.get(b"Subtype") {
            if !matches!(subtype.as_name_str(), Ok("Image")) {
                return Ok(None);
            }
        }

        let width = dict
            .get(b"Width")
            .ok()
            .and_then(|w| w.as_i64().ok())
            .unwrap_or(0) as u32;
        let height = dict
            .get(b"Height")
            .ok()
            .and_then(|h| h.as_i64().ok())
            .unwrap_or(0) as u32;

        let filter = dict
            .get(b"Filter")
            .ok()
            .and_then(|f| f.as_name_str().ok())
            .unwrap_or("");

        let (mime_type, data) = match filter {
            "DCTDecode" => ("image/jpeg".to_string(), stream.content.clone()),
            "JPXDecode" => ("image/jp2".to_string(), stream.content.clone()),
            _ => {
                let decoded = stream
                    .decompressed_content()
                    .unwrap_or_else(|_| stream.content.clone());
                let mime = PageImage::detect_mime_type(&decoded)
                    .unwrap_or("application/octet-stream")
                    .to_string();
                (mime, decoded)
            }
        };

        Ok(Some(PageImage::new(data, width, height, mime_type)))
    }
}
