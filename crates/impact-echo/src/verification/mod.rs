//! Heuristic trust scoring for donation evidence.
//!
//! Three independent scorers look at the description text, the evidence
//! filenames and the structured metadata. The [`Aggregator`] weights them
//! (vision 50%, metadata 30%, text 20%), adds a small random jitter drawn from
//! the injected [`RandomnessProvider`], clamps the result into `40..=95` and
//! classifies it. Nothing here reads file contents or understands text; the
//! scores are surface heuristics only.

pub mod aggregator;
pub mod domain;
pub mod error;
pub mod latency;
pub mod policy;
pub mod randomness;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregator::{finalize_score, Aggregator, Assessment, ModalityScores};
pub use domain::{DonationId, EvidenceFile, FieldValue, FormSubmission, Submission, TextSubmission};
pub use error::{VerificationError, VerificationErrorKind};
pub use latency::{LatencyProfile, LatencySimulator};
pub use policy::{classify, Recommendation, VerificationStatus};
pub use randomness::{FixedRandomness, RandomnessProvider, SeededRandomness, ThreadRandomness};
pub use report::{
    AnalysisDetails, ImageVerification, ServiceStats, TextVerification, VerificationReport,
};
pub use router::verification_router;
pub use service::VerificationService;
