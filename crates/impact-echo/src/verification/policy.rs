use serde::Serialize;

/// Final scores at or above this are approved outright.
pub const APPROVAL_THRESHOLD: i32 = 70;
/// Final scores at or above this (and below approval) go to a human.
pub const REVIEW_THRESHOLD: i32 = 40;

/// Outcome attached to a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    ManualReview,
    Rejected,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::ManualReview => "manual_review",
            VerificationStatus::Rejected => "rejected",
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        match self {
            VerificationStatus::Verified => Recommendation::Approve,
            VerificationStatus::ManualReview => Recommendation::Review,
            VerificationStatus::Rejected => Recommendation::Reject,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Strong evidence and authentic documentation detected.",
            VerificationStatus::ManualReview => "Evidence requires manual verification by team.",
            VerificationStatus::Rejected => "Insufficient or unclear evidence provided.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Approve,
    Review,
    Reject,
}

/// Maps a final score onto a status.
///
/// `Rejected` cannot be produced from a clamped aggregate (the floor equals
/// the review threshold) but stays part of the contract for consumers that
/// match on it.
pub fn classify(score: i32) -> VerificationStatus {
    if score >= APPROVAL_THRESHOLD {
        VerificationStatus::Verified
    } else if score >= REVIEW_THRESHOLD {
        VerificationStatus::ManualReview
    } else {
        VerificationStatus::Rejected
    }
}
