//! Rentals screen: what the user has out, and building a return
//!
//! The user marks rentals with a quantity to send back, previews the
//! server-computed price (which differs for in-person drop-off vs.
//! driver pickup), and then creates the return with the same selection.

use std::collections::BTreeMap;

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::load::{LoadSnapshot, Loader};
use crate::model::{CreateAddress, Page, Rental, RentalReturnCost, RentalReturnRequest, ReturnQuantity};
use crate::validation;

#[derive(Clone)]
pub struct RentalsController {
    api: ApiClient,
    rentals: Loader<Page<Rental>>,
    price: Loader<RentalReturnCost>,
    // rental id -> quantity to return, kept ordered for stable request bodies
    marked: BTreeMap<i32, u32>,
    page: u32,
}

impl RentalsController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            rentals: Loader::new(),
            price: Loader::new(),
            marked: BTreeMap::new(),
            page: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub async fn load(&self) -> bool {
        self.rentals.run(self.api.fetch_rentals(self.page)).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> bool {
        let total_pages = self.rentals.data().await.map(|p| p.total_pages).unwrap_or(0);
        if total_pages > 0 && page >= total_pages {
            return false;
        }
        self.page = page;
        self.load().await
    }

    pub async fn next_page(&mut self) -> bool {
        let Some(current) = self.rentals.data().await else {
            return false;
        };
        if !current.has_next() {
            return false;
        }
        self.go_to_page(self.page + 1).await
    }

    pub async fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.go_to_page(self.page - 1).await
    }

    /// Mark `quantity` copies of a rental for return; zero unmarks it.
    pub fn mark_for_return(&mut self, rental_id: i32, quantity: u32) {
        if quantity == 0 {
            self.marked.remove(&rental_id);
        } else {
            self.marked.insert(rental_id, quantity);
        }
    }

    pub fn marked(&self) -> &BTreeMap<i32, u32> {
        &self.marked
    }

    pub fn clear_marks(&mut self) {
        self.marked.clear();
    }

    fn build_request(&self, address: Option<CreateAddress>) -> ApiResult<RentalReturnRequest> {
        if self.marked.is_empty() {
            return Err(ApiError::Validation(
                "Select at least one rental to return".to_string(),
            ));
        }
        Ok(RentalReturnRequest {
            rental_return_requests: self
                .marked
                .iter()
                .map(|(&rental_id, &quantity_to_return)| ReturnQuantity {
                    rental_id,
                    quantity_to_return,
                })
                .collect(),
            address,
        })
    }

    fn pickup_address(street: &str, city: &str, postal_code: &str) -> ApiResult<CreateAddress> {
        validation::required("Street", street)?;
        validation::required("City", city)?;
        validation::required("Postal code", postal_code)?;
        Ok(CreateAddress {
            street: street.trim().to_string(),
            city: city.trim().to_string(),
            postal_code: postal_code.trim().to_string(),
        })
    }

    /// Price preview for dropping the marked rentals off in person.
    pub async fn price_in_person(&self) -> bool {
        let request = match self.build_request(None) {
            Ok(request) => request,
            Err(e) => {
                self.price.fail_local(e).await;
                return false;
            }
        };
        self.price
            .run(async move { self.api.rental_return(&request, true, true).await })
            .await
    }

    /// Price preview for a driver pickup from the given address.
    pub async fn price_pickup(&self, street: &str, city: &str, postal_code: &str) -> bool {
        let request = match Self::pickup_address(street, city, postal_code)
            .and_then(|address| self.build_request(Some(address)))
        {
            Ok(request) => request,
            Err(e) => {
                self.price.fail_local(e).await;
                return false;
            }
        };
        self.price
            .run(async move { self.api.rental_return(&request, false, true).await })
            .await
    }

    /// Create an in-person return for the marked rentals.
    pub async fn create_in_person(&mut self) -> ApiResult<RentalReturnCost> {
        let request = self.build_request(None)?;
        let cost = self.api.rental_return(&request, true, false).await?;
        self.marked.clear();
        self.load().await;
        Ok(cost)
    }

    /// Create a driver-pickup return for the marked rentals.
    pub async fn create_pickup(
        &mut self,
        street: &str,
        city: &str,
        postal_code: &str,
    ) -> ApiResult<RentalReturnCost> {
        let address = Self::pickup_address(street, city, postal_code)?;
        let request = self.build_request(Some(address))?;
        let cost = self.api.rental_return(&request, false, false).await?;
        self.marked.clear();
        self.load().await;
        Ok(cost)
    }

    pub async fn rentals(&self) -> LoadSnapshot<Page<Rental>> {
        self.rentals.snapshot().await
    }

    pub async fn price(&self) -> LoadSnapshot<RentalReturnCost> {
        self.price.snapshot().await
    }

    pub async fn detach(&self) {
        self.rentals.detach().await;
        self.price.detach().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;

    fn controller() -> RentalsController {
        let config = ClientConfig::default();
        let session = SessionStore::new(std::env::temp_dir().join("bookrider-rentals-test.json"));
        RentalsController::new(ApiClient::new(config, session))
    }

    #[test]
    fn marking_zero_unmarks() {
        let mut controller = controller();
        controller.mark_for_return(7, 2);
        controller.mark_for_return(9, 1);
        controller.mark_for_return(7, 0);
        assert_eq!(controller.marked().len(), 1);
        assert_eq!(controller.marked().get(&9), Some(&1));
    }

    #[tokio::test]
    async fn price_with_nothing_marked_fails_locally() {
        let controller = controller();
        assert!(!controller.price_in_person().await);
        let snapshot = controller.price().await;
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Select at least one rental to return")
        );
    }

    #[tokio::test]
    async fn pickup_price_requires_an_address() {
        let mut controller = controller();
        controller.mark_for_return(1, 1);
        assert!(!controller.price_pickup("", "Sofia", "1000").await);
        let snapshot = controller.price().await;
        assert_eq!(snapshot.error.as_deref(), Some("Street is required"));
    }
}
