use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use impact_echo::verification::{
    classify, verification_router, EvidenceFile, FieldValue, LatencySimulator, Submission,
    ThreadRandomness, VerificationService, VerificationStatus,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn live_service() -> Arc<VerificationService<ThreadRandomness>> {
    Arc::new(VerificationService::new(
        Arc::new(ThreadRandomness),
        LatencySimulator::disabled(),
    ))
}

#[tokio::test]
async fn flood_relief_submission_lands_in_range_with_consistent_status() {
    let service = live_service();
    let submission = Submission {
        description: Some(
            "Official donation receipt from verified charity, thank you for confirmed support"
                .to_string(),
        ),
        campaign: Some(FieldValue::from("Flood Relief")),
        amount: Some(FieldValue::from("50")),
        ..Submission::default()
    };

    for _ in 0..50 {
        let report = service
            .verify(submission.clone())
            .await
            .expect("verification succeeds");

        assert!((40..=95).contains(&report.score));
        assert_eq!(report.status, classify(report.score));
        assert_eq!(report.recommendation, report.status.recommendation());
        assert_eq!(report.reason, report.status.reason());
    }
}

#[tokio::test]
async fn strong_evidence_package_is_approved() {
    let service = live_service();
    let submission = Submission {
        description: Some(
            "Official invoice and receipt from the hospital charity, stamped and signed with \
             the date of the confirmed donation. Thank you to every verified supporter."
                .to_string(),
        ),
        evidence_files: vec![
            EvidenceFile::named("invoice_march.pdf"),
            EvidenceFile::named("proof_of_delivery.jpg"),
        ],
        campaign: Some(FieldValue::from("Hospital Beds")),
        geo_lat: Some(FieldValue::Number(12.97)),
        geo_lng: Some(FieldValue::Number(77.59)),
        amount: Some(FieldValue::Number(1200.0)),
        ..Submission::default()
    };

    let report = service.verify(submission).await.expect("verifies");
    assert_eq!(report.status, VerificationStatus::Verified);
    assert!(report.score >= 85);
}

#[tokio::test]
async fn router_serves_every_endpoint() {
    let router = verification_router(live_service());

    let verify = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verify")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "description": "school supplies" }))
                        .expect("serialize"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(verify.status(), StatusCode::OK);
    let body = to_bytes(verify.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    let score = payload["score"].as_i64().expect("integer score");
    assert!((40..=95).contains(&score));
    assert!(matches!(
        payload["status"].as_str(),
        Some("verified") | Some("manual_review") | Some("rejected")
    ));

    let stats = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/stats")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    assert_eq!(stats.status(), StatusCode::OK);
    let body = to_bytes(stats.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    let total = payload["total_verifications"].as_i64().expect("total");
    assert!((100..=500).contains(&total));
}
