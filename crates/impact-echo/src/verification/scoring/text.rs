use serde::Serialize;

use super::{NEUTRAL_SCORE, SCORE_CEILING};

pub const POSITIVE_KEYWORDS: [&str; 15] = [
    "receipt",
    "invoice",
    "donation",
    "thank you",
    "confirmed",
    "school",
    "hospital",
    "charity",
    "ngo",
    "organization",
    "verified",
    "official",
    "stamp",
    "signature",
    "date",
];

pub const NEGATIVE_KEYWORDS: [&str; 6] = ["scam", "fake", "fraud", "suspicious", "unclear", "blurry"];

const BASE_SCORE: i32 = 60;
const KEYWORD_BONUS: i32 = 5;
const KEYWORD_PENALTY: i32 = 10;

/// Keyword and length heuristic over a free-text description.
///
/// Only the upper bound is capped: a description stuffed with negative
/// keywords keeps its low score and is floored later by the aggregate clamp.
pub fn score_text(text: Option<&str>) -> i32 {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return NEUTRAL_SCORE,
    };

    let lowered = text.to_lowercase();
    let positives = count_matches(&lowered, &POSITIVE_KEYWORDS);
    let negatives = count_matches(&lowered, &NEGATIVE_KEYWORDS);

    let mut score = BASE_SCORE + positives * KEYWORD_BONUS - negatives * KEYWORD_PENALTY;

    let length = char_length(text);
    if length > 100 {
        score += 10;
    } else if length > 50 {
        score += 5;
    }

    score.min(SCORE_CEILING)
}

fn count_matches(lowered: &str, keywords: &[&str]) -> i32 {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count() as i32
}

/// Length in characters, not bytes.
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

pub fn contains_positive_keyword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    POSITIVE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Authenticity {
    High,
    Medium,
    Low,
}

pub fn authenticity(score: i32) -> Authenticity {
    if score > 75 {
        Authenticity::High
    } else if score > 60 {
        Authenticity::Medium
    } else {
        Authenticity::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Specificity {
    Detailed,
    Basic,
}

pub fn specificity(text: &str) -> Specificity {
    if char_length(text) > 100 {
        Specificity::Detailed
    } else {
        Specificity::Basic
    }
}
