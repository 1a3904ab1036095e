//! Per-modality heuristics. Each scorer is independent of the others.

mod filename;
mod metadata;
mod text;

pub use filename::{
    hash_offset, image_quality, score_filename, ImageQuality, EVIDENCE_WORDS, IMAGE_EXTENSIONS,
};
pub use metadata::{metadata_validation, score_metadata, MetadataValidation};
pub use text::{
    authenticity, char_length, contains_positive_keyword, score_text, specificity, Authenticity,
    Specificity, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
};

/// Upper bound every modality score is capped at.
pub const SCORE_CEILING: i32 = 95;

/// Score assigned when a modality has nothing to inspect.
pub const NEUTRAL_SCORE: i32 = 50;
