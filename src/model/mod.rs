//! Data model for catalog pages and extracted artwork records.

mod page;
mod record;

pub use page::{PageImage, RawPage};
pub use record::ArtworkRecord;
