//! Rentals, rental returns, and late fees

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::book::Book;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub rental_id: i32,
    pub book: Book,
    pub library_name: String,
    #[serde(default)]
    pub library_address: Option<String>,
    #[serde(default)]
    pub order_id: Option<i32>,
    pub quantity: u32,
    pub rented_at: NaiveDateTime,
    pub return_deadline: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalReturnItem {
    pub id: i32,
    pub rental_id: i32,
    pub book: Book,
    pub returned_quantity: u32,
}

/// A request to send borrowed books back, in person or via driver pickup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalReturn {
    pub id: i32,
    pub library_name: String,
    #[serde(default)]
    pub order_id: Option<i32>,
    #[serde(default)]
    pub order_status: Option<String>,
    pub status: String,
    #[serde(default)]
    pub returned_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub rental_return_items: Vec<RentalReturnItem>,
}

/// How many copies of one rental the user wants to send back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnQuantity {
    pub rental_id: i32,
    pub quantity_to_return: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// Body for creating a rental return or calculating its price. The address
/// is only present for driver-pickup returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalReturnRequest {
    pub rental_return_requests: Vec<ReturnQuantity>,
    #[serde(rename = "createAddressDTO", skip_serializing_if = "Option::is_none")]
    pub address: Option<CreateAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LateFee {
    pub rental: Rental,
    pub late_fee: f64,
}

/// Server-computed return cost, late fees included. The client displays
/// these numbers verbatim; the formula lives in the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalReturnCost {
    pub total_price: f64,
    pub delivery_cost: f64,
    pub total_late_fees: f64,
    #[serde(default)]
    pub late_fees: Vec<LateFee>,
}
