//! Shopping cart aggregate
//!
//! The cart is server-owned and always re-fetched in full after any
//! mutation; the client never patch-merges line items.

use serde::{Deserialize, Serialize};

use super::book::Book;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSubItem {
    pub sub_item_id: i32,
    pub book: Book,
    pub quantity: u32,
}

/// One library's slice of the cart with its share of the delivery cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub library_id: Option<i32>,
    #[serde(default)]
    pub library_name: Option<String>,
    pub total_item_delivery_cost: f64,
    #[serde(default)]
    pub books: Vec<CartSubItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    pub total_cart_delivery_cost: f64,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub items: Vec<CartItem>,
}
