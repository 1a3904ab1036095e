use serde::Serialize;
use md5::{Digest, Md5};

use super::{NEUTRAL_SCORE, SCORE_CEILING};

pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".pdf"];
pub const EVIDENCE_WORDS: [&str; 4] = ["receipt", "invoice", "proof", "evidence"];

const BASE_SCORE: i32 = 65;
const EXTENSION_BONUS: i32 = 10;
const NAMING_BONUS: i32 = 10;
const OFFSET_MODULUS: u8 = 20;

/// Scores an attachment from its name alone; file bytes are never read.
pub fn score_filename(filename: Option<&str>) -> i32 {
    let filename = match filename {
        Some(name) if !name.is_empty() => name,
        _ => return NEUTRAL_SCORE,
    };

    let lowered = filename.to_lowercase();
    let mut score = BASE_SCORE;

    if IMAGE_EXTENSIONS.iter().any(|ext| lowered.contains(ext)) {
        score += EXTENSION_BONUS;
    }
    if EVIDENCE_WORDS.iter().any(|word| lowered.contains(word)) {
        score += NAMING_BONUS;
    }

    (score + hash_offset(filename)).min(SCORE_CEILING)
}

/// Pseudo-random "quality" offset in `0..20`, stable for a given filename.
///
/// Taken from the first byte of the MD5 digest, i.e. its first two hex
/// digits read as an integer.
pub fn hash_offset(filename: &str) -> i32 {
    let digest = Md5::digest(filename.as_bytes());
    i32::from(digest[0] % OFFSET_MODULUS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Good,
    Poor,
}

pub fn image_quality(score: i32) -> ImageQuality {
    if score > 70 {
        ImageQuality::Good
    } else {
        ImageQuality::Poor
    }
}
