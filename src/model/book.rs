//! Books, delivery quotes, and the catalog lookup lists

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub category_name: String,
    #[serde(default)]
    pub author_names: Vec<String>,
    pub release_year: i32,
    pub publisher_name: String,
    pub isbn: String,
    pub language_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A server-computed delivery offer for fulfilling a rental from one
/// library: price and distance are backend-owned, the client only picks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOption {
    pub quote_option_id: i32,
    pub library_name: String,
    pub distance_km: f64,
    pub total_delivery_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub valid_until: NaiveDateTime,
    pub book: Book,
    pub quantity: u32,
    pub options: Vec<QuoteOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublisherSummary {
    pub id: i32,
    pub name: String,
}
