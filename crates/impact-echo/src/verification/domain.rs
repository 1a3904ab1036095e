use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier the caller attached to the donation, echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DonationId {
    Numeric(i64),
    Text(String),
    /// Any other JSON shape; never inspected.
    Other(Value),
}

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonationId::Numeric(value) => write!(f, "{value}"),
            DonationId::Text(value) => f.write_str(value),
            DonationId::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Loosely typed scalar as sent by browsers and the donation backend.
///
/// Coordinates and amounts arrive as numbers from JSON clients and as strings
/// from form posts, so scoring only cares whether a value is present and
/// non-empty, or whether it parses as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    /// Lists and objects: only their emptiness matters.
    Other(Value),
}

impl FieldValue {
    /// Zero, the empty string and `false` count as "not provided".
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Flag(value) => *value,
            FieldValue::Number(value) => *value != 0.0,
            FieldValue::Text(value) => !value.is_empty(),
            FieldValue::Other(value) => match value {
                Value::Null => false,
                Value::Array(items) => !items.is_empty(),
                Value::Object(entries) => !entries.is_empty(),
                _ => true,
            },
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Flag(value) => Some(if *value { 1.0 } else { 0.0 }),
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(value) => value.trim().parse::<f64>().ok(),
            FieldValue::Other(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Attachment reference; only the filename takes part in scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceFile {
    #[serde(default)]
    pub filename: Option<String>,
}

impl EvidenceFile {
    pub fn named(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }
}

/// Donation evidence package submitted for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, alias = "donationId")]
    pub donation_id: Option<DonationId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "evidenceFiles",
        deserialize_with = "deserialize_nullable_list"
    )]
    pub evidence_files: Vec<EvidenceFile>,
    #[serde(default)]
    pub campaign: Option<FieldValue>,
    #[serde(default, alias = "geoLat")]
    pub geo_lat: Option<FieldValue>,
    #[serde(default, alias = "geoLng")]
    pub geo_lng: Option<FieldValue>,
    #[serde(default)]
    pub amount: Option<FieldValue>,
}

impl Submission {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn has_location(&self) -> bool {
        is_truthy(&self.geo_lat) && is_truthy(&self.geo_lng)
    }

    pub fn has_campaign(&self) -> bool {
        is_truthy(&self.campaign)
    }

    /// Amount when it parses to a strictly positive number.
    pub fn positive_amount(&self) -> Option<f64> {
        self.amount
            .as_ref()
            .filter(|value| value.is_truthy())
            .and_then(FieldValue::as_number)
            .filter(|amount| *amount > 0.0)
    }
}

fn is_truthy(value: &Option<FieldValue>) -> bool {
    value.as_ref().map(FieldValue::is_truthy).unwrap_or(false)
}

fn deserialize_nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flat key/value submission posted as `application/x-www-form-urlencoded`.
///
/// Form posts cannot carry the evidence list, so those submissions are
/// always scored without attachments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub donation_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub geo_lat: Option<String>,
    #[serde(default)]
    pub geo_lng: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl From<FormSubmission> for Submission {
    fn from(form: FormSubmission) -> Self {
        let text = |value: Option<String>| value.map(FieldValue::Text);
        Submission {
            donation_id: form.donation_id.map(DonationId::Text),
            description: form.description,
            evidence_files: Vec::new(),
            campaign: text(form.campaign),
            geo_lat: text(form.geo_lat),
            geo_lng: text(form.geo_lng),
            amount: text(form.amount),
        }
    }
}

/// Body accepted by the text-only endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextSubmission {
    #[serde(default)]
    pub text: Option<String>,
}
