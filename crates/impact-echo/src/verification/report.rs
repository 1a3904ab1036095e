use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aggregator::{ModalityScores, METADATA_WEIGHT, NLP_WEIGHT, VISION_WEIGHT};
use super::domain::{DonationId, Submission};
use super::policy::{Recommendation, VerificationStatus};
use super::scoring::{
    authenticity, image_quality, metadata_validation, specificity, Authenticity, ImageQuality,
    MetadataValidation, Specificity,
};

/// Label reported as the model behind every verdict.
pub const AI_MODEL_LABEL: &str = "ImpactEcho Mock AI v1.0 (FREE)";
pub const MODEL_VERSION: &str = "1.0.0";

const VISION_FEATURES: [&str; 4] = ["receipt", "document", "text", "logo"];
const UNCLEAR_VISION: [&str; 1] = ["unclear image"];
const IMAGE_OBJECTS: [&str; 3] = ["receipt", "document", "text"];
const UNCLEAR_OBJECTS: [&str; 1] = ["unclear"];
const FEATURE_THRESHOLD: f64 = 70.0;

/// Full response of the multi-modal verification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    #[serde(rename = "donationId")]
    pub donation_id: Option<DonationId>,
    pub score: i32,
    pub status: VerificationStatus,
    pub recommendation: Recommendation,
    pub reason: &'static str,
    pub details: AnalysisDetails,
    pub confidence: String,
    pub verified_at: DateTime<Utc>,
    pub ai_model: &'static str,
    pub processing_time: String,
}

/// Per-modality breakdown with the decorative qualitative labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisDetails {
    pub vision_analysis: VisionAnalysis,
    pub nlp_analysis: NlpAnalysis,
    pub metadata_analysis: MetadataAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisionAnalysis {
    pub score: f64,
    pub weight: String,
    pub detected_features: Vec<&'static str>,
    pub image_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NlpAnalysis {
    pub score: i32,
    pub weight: String,
    pub authenticity: Authenticity,
    pub specificity: Specificity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataAnalysis {
    pub score: i32,
    pub weight: String,
    pub has_location: bool,
    pub has_campaign: bool,
    pub validation: MetadataValidation,
}

impl AnalysisDetails {
    pub fn build(submission: &Submission, scores: &ModalityScores) -> Self {
        let detected_features = if scores.vision > FEATURE_THRESHOLD {
            VISION_FEATURES.to_vec()
        } else {
            UNCLEAR_VISION.to_vec()
        };

        Self {
            vision_analysis: VisionAnalysis {
                score: round_to_cents(scores.vision),
                weight: weight_label(VISION_WEIGHT),
                detected_features,
                image_count: submission.evidence_files.len(),
            },
            nlp_analysis: NlpAnalysis {
                score: scores.nlp,
                weight: weight_label(NLP_WEIGHT),
                authenticity: authenticity(scores.nlp),
                specificity: specificity(submission.description_text()),
            },
            metadata_analysis: MetadataAnalysis {
                score: scores.metadata,
                weight: weight_label(METADATA_WEIGHT),
                has_location: submission.has_location(),
                has_campaign: submission.has_campaign(),
                validation: metadata_validation(scores.metadata),
            },
        }
    }
}

/// Reduced response of the image-only endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ImageVerification {
    pub filename: String,
    pub score: i32,
    pub confidence: String,
    pub detected_objects: Vec<&'static str>,
    pub quality: ImageQuality,
    pub timestamp: DateTime<Utc>,
}

impl ImageVerification {
    pub fn new(filename: String, score: i32, timestamp: DateTime<Utc>) -> Self {
        let detected_objects = if score > 70 {
            IMAGE_OBJECTS.to_vec()
        } else {
            UNCLEAR_OBJECTS.to_vec()
        };

        Self {
            filename,
            score,
            confidence: confidence_label(score),
            detected_objects,
            quality: image_quality(score),
            timestamp,
        }
    }
}

/// Reduced response of the text-only endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TextVerification {
    pub text_length: usize,
    pub score: i32,
    pub confidence: String,
    pub authenticity: Authenticity,
    pub contains_keywords: bool,
    pub timestamp: DateTime<Utc>,
}

/// Service statistics. The figures are simulated, not derived from history.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    pub total_verifications: i32,
    pub average_score: i32,
    pub verification_rate: String,
    pub average_processing_time: String,
    pub model_version: &'static str,
    pub last_updated: DateTime<Utc>,
}

pub fn confidence_label(score: i32) -> String {
    format!("{score}%")
}

pub fn seconds_label(secs: f64) -> String {
    format!("{secs:.2}s")
}

fn weight_label(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
