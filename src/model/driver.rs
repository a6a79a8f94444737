//! Driver applications and their documents

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverDocument {
    pub document_type: String,
    pub document_photo_url: String,
    pub expiry_date: NaiveDate,
}

/// An application to become a driver. The summary list omits the
/// review fields and documents; the detail endpoint fills them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverApplication {
    pub id: i32,
    pub status: String,
    pub submitted_at: NaiveDateTime,
    #[serde(default)]
    pub driver_email: Option<String>,
    #[serde(default, rename = "reviewerID")]
    pub reviewer_id: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub driver_documents: Vec<DriverDocument>,
}

/// One document in a new application: the photo travels as base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDriverDocument {
    pub base64_image: String,
    pub document_type: String,
    pub expiration_date: NaiveDate,
}
