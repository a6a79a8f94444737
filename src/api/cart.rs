//! Shopping cart and checkout
//!
//! Mutations never return the updated cart; the screen re-fetches the
//! whole aggregate afterwards so client and server cannot diverge.

use crate::error::ApiResult;
use crate::model::{CreateAddress, ShoppingCart};

use super::client::ApiClient;

impl ApiClient {
    /// `GET /api/shopping-cart`.
    pub async fn fetch_shopping_cart(&self) -> ApiResult<ShoppingCart> {
        self.get("/api/shopping-cart", &[]).await
    }

    /// `POST /api/shopping-cart/add-quote-option/{id}`.
    pub async fn add_quote_option_to_cart(&self, quote_option_id: i32) -> ApiResult<()> {
        self.post_no_response::<()>(
            &format!("/api/shopping-cart/add-quote-option/{}", quote_option_id),
            &[],
            None,
        )
        .await
    }

    /// `DELETE /api/shopping-cart/delete-sub-item/{id}`.
    pub async fn remove_cart_sub_item(&self, sub_item_id: i32) -> ApiResult<()> {
        self.delete_no_response(&format!(
            "/api/shopping-cart/delete-sub-item/{}",
            sub_item_id
        ))
        .await
    }

    /// `POST /api/shopping-cart/address`.
    pub async fn update_delivery_address(&self, address: &CreateAddress) -> ApiResult<()> {
        self.post_no_response("/api/shopping-cart/address", &[], Some(address))
            .await
    }

    /// `POST /api/checkout` - turns the cart into orders.
    pub async fn checkout(&self) -> ApiResult<()> {
        self.post_no_response::<()>("/api/checkout", &[], None).await
    }
}
