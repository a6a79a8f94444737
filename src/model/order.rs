//! Orders and delivery navigation

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::book::Book;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub book: Book,
    pub quantity: u32,
}

/// An order as the backend reports it. `status` and `payment_status` are
/// server-owned enumerations; legal transitions are enforced server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_id: i32,
    pub user_id: String,
    pub library_name: String,
    #[serde(default)]
    pub pickup_address: Option<String>,
    #[serde(default)]
    pub destination_address: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub is_return: Option<bool>,
    pub status: String,
    pub amount: f64,
    pub payment_status: String,
    #[serde(default)]
    pub note_to_driver: Option<String>,
    #[serde(default)]
    pub delivery_photo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub accepted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub driver_assigned_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub picked_up_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub delivered_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

/// The user-side order history wraps each order with the user's payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserOrder {
    pub user_payment: f64,
    #[serde(rename = "orderResponseDTO")]
    pub order: OrderDetails,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportProfile {
    Car,
    Bike,
    Foot,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Request body for pickup/delivery navigation: the driver's current
/// position plus how they are travelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    pub transport_profile: TransportProfile,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub step_distance: f64,
    pub step_duration: f64,
    pub instruction: String,
    #[serde(default)]
    pub way_points: Vec<Coordinate>,
}

/// Server-computed route; rendered by the dashboard map, never recomputed
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRoute {
    pub total_distance: f64,
    pub total_duration: f64,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverOrderRequest {
    pub location: Coordinate,
    pub photo_base64: String,
}
