use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request")
}

#[tokio::test]
async fn post_verify_returns_full_report() {
    let response = router(0)
        .oneshot(post_json(
            "/verify",
            json!({
                "donation_id": "DON-2024-0042",
                "description": FLOOD_RELIEF_DESCRIPTION,
                "campaign": "Flood Relief",
                "amount": "50",
            }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["donationId"], json!("DON-2024-0042"));
    assert_eq!(payload["score"], json!(68));
    assert_eq!(payload["status"], json!("manual_review"));
    assert_eq!(payload["recommendation"], json!("REVIEW"));
    assert_eq!(payload["confidence"], json!("68%"));
    assert_eq!(payload["details"]["vision_analysis"]["weight"], json!("50%"));
    assert_eq!(
        payload["details"]["vision_analysis"]["detected_features"],
        json!(["unclear image"])
    );
    assert_eq!(payload["details"]["nlp_analysis"]["authenticity"], json!("high"));
    assert_eq!(payload["details"]["nlp_analysis"]["specificity"], json!("basic"));
    assert_eq!(payload["details"]["metadata_analysis"]["validation"], json!("passed"));
    assert_eq!(payload["details"]["metadata_analysis"]["has_location"], json!(false));
    assert!(payload.get("verified_at").and_then(Value::as_str).is_some());
    assert!(payload.get("processing_time").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn post_verify_accepts_camel_case_and_evidence_files() {
    let response = router(0)
        .oneshot(post_json(
            "/verify",
            json!({
                "donationId": 99,
                "evidenceFiles": [{ "filename": "receipt_jan2024.pdf" }],
                "geoLat": 28.61,
                "geoLng": 77.2,
            }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["donationId"], json!(99));
    assert_eq!(payload["details"]["vision_analysis"]["image_count"], json!(1));
    assert_eq!(payload["details"]["metadata_analysis"]["has_location"], json!(true));
}

#[tokio::test]
async fn post_verify_accepts_form_posts() {
    let request = Request::builder()
        .method("POST")
        .uri("/verify")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(
            "donation_id=DON-9&campaign=Flood+Relief&amount=50&geo_lat=&geo_lng=72.8",
        ))
        .expect("request");

    let response = router(0).oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["donationId"], json!("DON-9"));
    assert_eq!(payload["details"]["metadata_analysis"]["score"], json!(80));
    assert_eq!(payload["details"]["metadata_analysis"]["has_location"], json!(false));
    assert_eq!(payload["details"]["vision_analysis"]["image_count"], json!(0));
}

#[tokio::test]
async fn post_verify_tolerates_unusual_field_shapes() {
    let bodies = [
        json!({ "donation_id": 12.5 }),
        json!({ "donation_id": true }),
        json!({ "campaign": ["Flood"] }),
        json!({ "amount": { "v": 1 } }),
        json!({ "geo_lat": [19.07], "geo_lng": { "deg": 72 } }),
    ];

    for body in bodies {
        let response = router(0)
            .oneshot(post_json("/verify", body.clone()))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK, "body {body}");
    }
}

#[tokio::test]
async fn post_verify_echoes_any_donation_id_and_degrades_fields() {
    let response = router(0)
        .oneshot(post_json(
            "/verify",
            json!({
                "donation_id": { "ref": "A-1" },
                "campaign": ["Flood"],
                "amount": { "v": 1 },
            }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["donationId"], json!({ "ref": "A-1" }));
    assert_eq!(payload["details"]["metadata_analysis"]["has_campaign"], json!(true));
    // campaign bonus only; the amount bonus is skipped
    assert_eq!(payload["details"]["metadata_analysis"]["score"], json!(70));
}

#[tokio::test]
async fn post_verify_rejects_unparseable_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/verify")
        .header("content-type", "application/json")
        .body(Body::from("{\"description\": "))
        .expect("request");

    let response = router(0).oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload["error"], json!("Verification failed"));
    assert_eq!(payload["status"], json!("error"));
    assert!(payload["message"].as_str().is_some_and(|message| !message.is_empty()));
}

#[tokio::test]
async fn post_verify_rejects_mistyped_fields() {
    let response = router(0)
        .oneshot(post_json("/verify", json!({ "description": 12 })))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_verify_image_scores_the_upload_name() {
    let request = Request::builder()
        .method("POST")
        .uri("/verify/image")
        .header("content-type", "multipart/form-data; boundary=EVIDENCE")
        .body(multipart_body("EVIDENCE", "file", "receipt_jan2024.pdf"))
        .expect("request");

    let response = router(0).oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["filename"], json!("receipt_jan2024.pdf"));
    assert!(payload["score"].as_i64().is_some_and(|score| score >= 85));
    assert_eq!(payload["quality"], json!("good"));
    assert_eq!(payload["detected_objects"], json!(["receipt", "document", "text"]));
}

#[tokio::test]
async fn post_verify_image_without_file_part_is_a_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/verify/image")
        .header("content-type", "multipart/form-data; boundary=EVIDENCE")
        .body(multipart_body("EVIDENCE", "attachment", "receipt.pdf"))
        .expect("request");

    let response = router(0).oneshot(request).await.expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload, json!({ "error": "No file provided" }));
}

#[tokio::test]
async fn post_verify_image_without_multipart_body_is_a_client_error() {
    let response = router(0)
        .oneshot(post_json("/verify/image", json!({ "file": "receipt.pdf" })))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = json_body(response).await;
    assert_eq!(payload["error"], json!("No file provided"));
}

#[tokio::test]
async fn post_verify_text_returns_reduced_shape() {
    let response = router(0)
        .oneshot(post_json(
            "/verify/text",
            json!({ "text": "Official hospital receipt" }),
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["text_length"], json!(25));
    assert_eq!(payload["score"], json!(75));
    assert_eq!(payload["confidence"], json!("75%"));
    assert_eq!(payload["authenticity"], json!("medium"));
    assert_eq!(payload["contains_keywords"], json!(true));
}

#[tokio::test]
async fn post_verify_text_without_text_is_neutral() {
    let response = router(0)
        .oneshot(post_json("/verify/text", json!({})))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["text_length"], json!(0));
    assert_eq!(payload["score"], json!(50));
    assert_eq!(payload["contains_keywords"], json!(false));
}

#[tokio::test]
async fn get_stats_returns_simulated_figures() {
    let response = router(0)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/stats")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = json_body(response).await;
    assert_eq!(payload["total_verifications"], json!(100));
    assert_eq!(payload["verification_rate"], json!("85%"));
    assert_eq!(payload["model_version"], json!("1.0.0"));
}
