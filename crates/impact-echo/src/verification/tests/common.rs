use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::response::Response;
use serde_json::Value;

use crate::verification::domain::{DonationId, EvidenceFile, FieldValue, Submission};
use crate::verification::latency::LatencySimulator;
use crate::verification::randomness::FixedRandomness;
use crate::verification::service::VerificationService;
use crate::verification::verification_router;

pub(super) const FLOOD_RELIEF_DESCRIPTION: &str =
    "Official donation receipt from verified charity, thank you for confirmed support";

/// Submission from the flood relief drive: strong text, no attachments, no geo.
pub(super) fn flood_relief_submission() -> Submission {
    Submission {
        donation_id: Some(DonationId::Text("DON-2024-0042".to_string())),
        description: Some(FLOOD_RELIEF_DESCRIPTION.to_string()),
        evidence_files: Vec::new(),
        campaign: Some(FieldValue::from("Flood Relief")),
        geo_lat: None,
        geo_lng: None,
        amount: Some(FieldValue::from("50")),
    }
}

pub(super) fn complete_submission() -> Submission {
    Submission {
        donation_id: Some(DonationId::Numeric(7)),
        description: Some(
            "Official receipt from the school charity with stamp, signature and date. \
             Thank you for the confirmed donation to the hospital wing."
                .to_string(),
        ),
        evidence_files: vec![
            EvidenceFile::named("receipt_jan2024.pdf"),
            EvidenceFile::named("evidence_photo.jpg"),
        ],
        campaign: Some(FieldValue::from("School Meals")),
        geo_lat: Some(FieldValue::Number(19.076)),
        geo_lng: Some(FieldValue::Number(72.8777)),
        amount: Some(FieldValue::Number(250.0)),
    }
}

pub(super) fn fixed_service(jitter: i32) -> Arc<VerificationService<FixedRandomness>> {
    Arc::new(VerificationService::new(
        Arc::new(FixedRandomness::new(jitter)),
        LatencySimulator::disabled(),
    ))
}

pub(super) fn router(jitter: i32) -> axum::Router {
    verification_router(fixed_service(jitter))
}

pub(super) async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn multipart_body(boundary: &str, field: &str, filename: &str) -> Body {
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         not-really-a-receipt\r\n\
         --{boundary}--\r\n"
    );
    Body::from(body)
}
