use serde::Serialize;

use super::SCORE_CEILING;
use crate::verification::domain::Submission;

const BASE_SCORE: i32 = 60;
const LOCATION_BONUS: i32 = 15;
const CAMPAIGN_BONUS: i32 = 10;
const AMOUNT_BONUS: i32 = 10;

/// Completeness check over the structured fields. Always in `60..=95`.
pub fn score_metadata(submission: &Submission) -> i32 {
    let mut score = BASE_SCORE;

    if submission.has_location() {
        score += LOCATION_BONUS;
    }
    if submission.has_campaign() {
        score += CAMPAIGN_BONUS;
    }
    if submission.positive_amount().is_some() {
        score += AMOUNT_BONUS;
    }

    score.min(SCORE_CEILING)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataValidation {
    Passed,
    Partial,
}

pub fn metadata_validation(score: i32) -> MetadataValidation {
    if score > 70 {
        MetadataValidation::Passed
    } else {
        MetadataValidation::Partial
    }
}
