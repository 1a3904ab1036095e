use std::sync::Arc;

use axum::{
    async_trait,
    extract::{multipart::MultipartRejection, FromRequest, Multipart, Request, State},
    http::header,
    routing::{get, post},
    Form, Json, Router,
};
use tracing::{error, warn};

use super::domain::{FormSubmission, Submission, TextSubmission};
use super::error::VerificationError;
use super::randomness::RandomnessProvider;
use super::report::{ImageVerification, ServiceStats, TextVerification, VerificationReport};
use super::service::VerificationService;

/// Router builder exposing the verification endpoints.
pub fn verification_router<R>(service: Arc<VerificationService<R>>) -> Router
where
    R: RandomnessProvider + 'static,
{
    Router::new()
        .route("/verify", post(verify_handler::<R>))
        .route("/verify/image", post(verify_image_handler::<R>))
        .route("/verify/text", post(verify_text_handler::<R>))
        .route("/stats", get(stats_handler::<R>))
        .with_state(service)
}

/// Submission decoded from either a JSON or a form-encoded body.
#[derive(Debug)]
pub struct SubmissionPayload(pub Submission);

#[async_trait]
impl<S> FromRequest<S> for SubmissionPayload
where
    S: Send + Sync,
{
    type Rejection = VerificationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<FormSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| rejected_payload(rejection.body_text()))?;
            Ok(Self(form.into()))
        } else {
            let Json(submission) = Json::<Submission>::from_request(req, state)
                .await
                .map_err(|rejection| rejected_payload(rejection.body_text()))?;
            Ok(Self(submission))
        }
    }
}

fn rejected_payload(message: String) -> VerificationError {
    warn!(%message, "rejected verification payload");
    VerificationError::malformed(message)
}

pub(crate) async fn verify_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    SubmissionPayload(submission): SubmissionPayload,
) -> Result<Json<VerificationReport>, VerificationError>
where
    R: RandomnessProvider + 'static,
{
    match service.verify(submission).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            error!(error = %err, "verification failed");
            Err(err)
        }
    }
}

pub(crate) async fn verify_image_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageVerification>, VerificationError>
where
    R: RandomnessProvider + 'static,
{
    let filename = match multipart {
        Ok(multipart) => uploaded_filename(multipart).await?,
        Err(_) => None,
    };
    let filename =
        filename.ok_or_else(|| VerificationError::missing_attachment("No file provided"))?;

    Ok(Json(service.verify_image(filename).await))
}

/// Filename of the `file` part, if the upload carried one.
async fn uploaded_filename(mut multipart: Multipart) -> Result<Option<String>, VerificationError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| rejected_payload(err.to_string()))?
    {
        if field.name() == Some("file") {
            return Ok(Some(field.file_name().unwrap_or_default().to_string()));
        }
    }
    Ok(None)
}

pub(crate) async fn verify_text_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
    payload: Result<Json<TextSubmission>, axum::extract::rejection::JsonRejection>,
) -> Result<Json<TextVerification>, VerificationError>
where
    R: RandomnessProvider + 'static,
{
    let Json(payload) = payload.map_err(|rejection| rejected_payload(rejection.body_text()))?;
    let text = payload.text.unwrap_or_default();
    Ok(Json(service.verify_text(&text).await))
}

pub(crate) async fn stats_handler<R>(
    State(service): State<Arc<VerificationService<R>>>,
) -> Json<ServiceStats>
where
    R: RandomnessProvider + 'static,
{
    Json(service.stats())
}
