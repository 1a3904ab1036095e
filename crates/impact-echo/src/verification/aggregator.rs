use std::sync::Arc;

use tracing::info;

use super::domain::{DonationId, Submission};
use super::error::VerificationError;
use super::policy::{classify, VerificationStatus};
use super::randomness::RandomnessProvider;
use super::report::AnalysisDetails;
use super::scoring::{score_filename, score_metadata, score_text, NEUTRAL_SCORE, SCORE_CEILING};

pub const VISION_WEIGHT: f64 = 0.5;
pub const METADATA_WEIGHT: f64 = 0.3;
pub const NLP_WEIGHT: f64 = 0.2;

/// Jitter is drawn from `-JITTER_SPREAD..=JITTER_SPREAD`.
pub const JITTER_SPREAD: i32 = 5;
/// Lowest final score; equal to the review threshold.
pub const SCORE_FLOOR: i32 = 40;

/// Raw output of the three scorers before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalityScores {
    /// Mean filename score over the evidence files.
    pub vision: f64,
    pub metadata: i32,
    pub nlp: i32,
}

impl ModalityScores {
    pub fn from_submission(submission: &Submission) -> Self {
        let nlp = score_text(submission.description.as_deref());
        let vision = vision_score(submission);
        let metadata = score_metadata(submission);

        Self {
            vision,
            metadata,
            nlp,
        }
    }

    pub fn weighted(&self) -> f64 {
        self.vision * VISION_WEIGHT
            + f64::from(self.metadata) * METADATA_WEIGHT
            + f64::from(self.nlp) * NLP_WEIGHT
    }
}

fn vision_score(submission: &Submission) -> f64 {
    if submission.evidence_files.is_empty() {
        return f64::from(NEUTRAL_SCORE);
    }

    let total: i32 = submission
        .evidence_files
        .iter()
        .map(|file| score_filename(file.filename.as_deref()))
        .sum();
    f64::from(total) / submission.evidence_files.len() as f64
}

/// Truncates the weighted score, adds jitter, then clamps into `40..=95`.
pub fn finalize_score(raw: f64, jitter: i32) -> i32 {
    (raw.trunc() as i32 + jitter).clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Scored submission, before response formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub donation_id: Option<DonationId>,
    pub score: i32,
    pub status: VerificationStatus,
    pub scores: ModalityScores,
    pub details: AnalysisDetails,
}

/// Combines the modality scores into the final verdict.
pub struct Aggregator<R> {
    randomness: Arc<R>,
}

impl<R> Aggregator<R>
where
    R: RandomnessProvider,
{
    pub fn new(randomness: Arc<R>) -> Self {
        Self { randomness }
    }

    pub fn aggregate(&self, submission: &Submission) -> Result<Assessment, VerificationError> {
        let scores = ModalityScores::from_submission(submission);
        let raw = scores.weighted();
        if !raw.is_finite() {
            return Err(VerificationError::internal(format!(
                "weighted score is not a finite number ({raw})"
            )));
        }

        let jitter = self.randomness.int_in(-JITTER_SPREAD, JITTER_SPREAD);
        let score = finalize_score(raw, jitter);
        let status = classify(score);
        let details = AnalysisDetails::build(submission, &scores);

        let donation = submission
            .donation_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unassigned".to_string());
        info!(
            donation_id = %donation,
            score,
            status = status.label(),
            vision = scores.vision,
            metadata = scores.metadata,
            nlp = scores.nlp,
            "donation verification completed"
        );

        Ok(Assessment {
            donation_id: submission.donation_id.clone(),
            score,
            status,
            scores,
            details,
        })
    }
}
