//! The heuristic extraction engine.
//!
//! Pure, in-memory pipeline over one page at a time:
//!
//! ```text
//! raw text ─ normalize ─ lines ─ classify ─ fields ─ score ─ image ─ record
//! ```
//!
//! Every stage short of image embedding is a pure function, so the engine is
//! testable without PDF fixtures. File and page I/O live in [`crate::pdf`]
//! and [`crate::output`].

pub mod assemble;
pub mod classify;
pub mod confidence;
pub mod fields;
pub mod image;
pub mod normalize;
pub mod options;

pub use assemble::assemble_record;
pub use classify::is_artwork_page;
pub use confidence::{score, ConfidenceWeights};
pub use fields::{Field, FieldCandidate, FieldMap, FieldMatcher};
pub use image::{embed_base64, select_artwork_image};
pub use normalize::normalize_lines;
pub use options::ExtractOptions;
