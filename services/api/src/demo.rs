use crate::infra::{cli_service, text_field, CliRandomness};
use clap::Args;
use impact_echo::error::AppError;
use impact_echo::verification::{
    DonationId, EvidenceFile, FieldValue, Submission, VerificationService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct VerifyArgs {
    /// Free-text description of the donation
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// Evidence filename; repeat the flag for several attachments
    #[arg(long = "file")]
    pub(crate) files: Vec<String>,
    /// Campaign the donation belongs to
    #[arg(long)]
    pub(crate) campaign: Option<String>,
    /// Donated amount
    #[arg(long)]
    pub(crate) amount: Option<String>,
    /// Latitude where the donation was delivered
    #[arg(long)]
    pub(crate) geo_lat: Option<String>,
    /// Longitude where the donation was delivered
    #[arg(long)]
    pub(crate) geo_lng: Option<String>,
    /// Identifier echoed back in the report
    #[arg(long)]
    pub(crate) donation_id: Option<String>,
    /// Seed the jitter so repeated runs print the same score
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Sleep like the HTTP service does before answering
    #[arg(long)]
    pub(crate) with_latency: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the jitter so repeated runs print the same scores
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

impl VerifyArgs {
    fn submission(self) -> Submission {
        Submission {
            donation_id: self.donation_id.map(DonationId::Text),
            description: self.description,
            evidence_files: self.files.into_iter().map(EvidenceFile::named).collect(),
            campaign: text_field(self.campaign),
            geo_lat: text_field(self.geo_lat),
            geo_lng: text_field(self.geo_lng),
            amount: text_field(self.amount),
        }
    }
}

pub(crate) async fn run_verify(args: VerifyArgs) -> Result<(), AppError> {
    let service = cli_service(args.seed, args.with_latency);
    let report = service.verify(args.submission()).await?;

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Verification report unavailable: {err}"),
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = cli_service(args.seed, false);

    println!("ImpactEcho verification demo");
    for (label, submission) in sample_submissions() {
        render_sample(&service, label, submission).await?;
    }

    let image = service.verify_image("receipt_jan2024.pdf".to_string()).await;
    println!("\nImage-only check");
    println!(
        "- {} -> {} ({:?}, detected {})",
        image.filename,
        image.confidence,
        image.quality,
        image.detected_objects.join(", ")
    );

    let text = service
        .verify_text("Thank you note from the school principal")
        .await;
    println!("\nText-only check");
    println!(
        "- {} characters -> {} ({:?}, keywords {})",
        text.text_length,
        text.confidence,
        text.authenticity,
        if text.contains_keywords { "found" } else { "none" }
    );

    Ok(())
}

async fn render_sample(
    service: &VerificationService<CliRandomness>,
    label: &str,
    submission: Submission,
) -> Result<(), AppError> {
    let report = service.verify(submission).await?;
    let details = &report.details;

    println!("\n{label}");
    println!(
        "- score {} -> {} ({:?})",
        report.score,
        report.status.label(),
        report.recommendation
    );
    println!("  {}", report.reason);
    println!(
        "  vision {:.2} | metadata {} | text {}",
        details.vision_analysis.score,
        details.metadata_analysis.score,
        details.nlp_analysis.score
    );
    Ok(())
}

fn sample_submissions() -> Vec<(&'static str, Submission)> {
    vec![
        (
            "Flood relief pledge (no attachments)",
            Submission {
                donation_id: Some(DonationId::Text("DON-FLOOD-01".to_string())),
                description: Some(
                    "Official donation receipt from verified charity, thank you for confirmed support"
                        .to_string(),
                ),
                campaign: Some(FieldValue::from("Flood Relief")),
                amount: Some(FieldValue::from("50")),
                ..Submission::default()
            },
        ),
        (
            "Hospital equipment with full evidence",
            Submission {
                donation_id: Some(DonationId::Text("DON-HOSP-07".to_string())),
                description: Some(
                    "Official invoice from the hospital charity with stamp and signature, dated \
                     on delivery. Thank you for the confirmed donation of two ventilators."
                        .to_string(),
                ),
                evidence_files: vec![
                    EvidenceFile::named("invoice_ventilators.pdf"),
                    EvidenceFile::named("delivery_proof.jpg"),
                ],
                campaign: Some(FieldValue::from("Hospital Beds")),
                geo_lat: Some(FieldValue::Number(12.9716)),
                geo_lng: Some(FieldValue::Number(77.5946)),
                amount: Some(FieldValue::Number(1800.0)),
            },
        ),
        (
            "Sparse submission",
            Submission {
                evidence_files: vec![EvidenceFile::named("IMG_2231")],
                ..Submission::default()
            },
        ),
        (
            "Suspicious description",
            Submission {
                description: Some("blurry photo, unclear who received it, maybe fake".to_string()),
                amount: Some(FieldValue::from("abc")),
                ..Submission::default()
            },
        ),
    ]
}
