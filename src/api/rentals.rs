//! Rentals and rental returns

use crate::error::ApiResult;
use crate::model::{Page, Rental, RentalReturn, RentalReturnCost, RentalReturnRequest};

use super::client::{ApiClient, PAGE_SIZE, paging};

impl ApiClient {
    /// `GET /api/rentals?page&size`.
    pub async fn fetch_rentals(&self, page: u32) -> ApiResult<Page<Rental>> {
        self.get("/api/rentals", &paging(page, PAGE_SIZE)).await
    }

    /// `GET /api/rental-returns?page&size`.
    pub async fn fetch_rental_returns(&self, page: u32) -> ApiResult<Page<RentalReturn>> {
        self.get("/api/rental-returns", &paging(page, PAGE_SIZE))
            .await
    }

    /// `POST /api/rental-returns[/in-person][/calculate-price]`.
    ///
    /// The same body drives four calls: in-person vs. driver pickup, and
    /// price preview vs. actually creating the return. The cost, late
    /// fees included, is always server-computed.
    pub async fn rental_return(
        &self,
        request: &RentalReturnRequest,
        in_person: bool,
        price_only: bool,
    ) -> ApiResult<RentalReturnCost> {
        let mut path = String::from("/api/rental-returns");
        if in_person {
            path.push_str("/in-person");
        }
        if price_only {
            path.push_str("/calculate-price");
        }
        self.post(&path, &[], Some(request)).await
    }

    /// `PUT /api/rental-returns/{id}/handover?driverId` - the user scans
    /// the driver's id barcode and confirms the pickup.
    pub async fn handover_rental_return(&self, return_id: i32, driver_id: &str) -> ApiResult<()> {
        self.put_no_response(
            &format!("/api/rental-returns/{}/handover", return_id),
            &[("driverId", driver_id.to_string())],
        )
        .await
    }
}
