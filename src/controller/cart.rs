//! Shopping cart screen
//!
//! The cart aggregate is always server-authoritative: every mutation is
//! followed by a full re-fetch instead of patching the local copy.

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::load::{LoadSnapshot, Loader};
use crate::model::{CreateAddress, ShoppingCart};
use crate::validation;

#[derive(Clone)]
pub struct CartController {
    api: ApiClient,
    cart: Loader<ShoppingCart>,
}

impl CartController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cart: Loader::new(),
        }
    }

    pub async fn load(&self) -> bool {
        self.cart.run(self.api.fetch_shopping_cart()).await
    }

    /// Remove a line item, then re-fetch the whole cart.
    pub async fn remove_item(&self, sub_item_id: i32) -> ApiResult<()> {
        self.api.remove_cart_sub_item(sub_item_id).await?;
        self.load().await;
        Ok(())
    }

    /// Set the delivery address, then re-fetch so the server-computed
    /// delivery costs update.
    pub async fn update_address(&self, street: &str, city: &str, postal_code: &str) -> ApiResult<()> {
        validation::required("Street", street)?;
        validation::required("City", city)?;
        validation::required("Postal code", postal_code)?;

        let address = CreateAddress {
            street: street.trim().to_string(),
            city: city.trim().to_string(),
            postal_code: postal_code.trim().to_string(),
        };
        self.api.update_delivery_address(&address).await?;
        self.load().await;
        Ok(())
    }

    /// Checkout turns the cart into orders; the re-fetch afterwards
    /// shows the now-empty cart.
    pub async fn checkout(&self) -> ApiResult<()> {
        self.api.checkout().await?;
        self.load().await;
        Ok(())
    }

    pub async fn cart(&self) -> LoadSnapshot<ShoppingCart> {
        self.cart.snapshot().await
    }

    pub async fn detach(&self) {
        self.cart.detach().await;
    }
}
