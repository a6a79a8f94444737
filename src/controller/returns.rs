//! Rental return tracking and driver handover

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::load::{LoadSnapshot, Loader};
use crate::model::{Page, RentalReturn};
use crate::validation;

#[derive(Clone)]
pub struct RentalReturnsController {
    api: ApiClient,
    returns: Loader<Page<RentalReturn>>,
    page: u32,
}

impl RentalReturnsController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            returns: Loader::new(),
            page: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub async fn load(&self) -> bool {
        self.returns.run(self.api.fetch_rental_returns(self.page)).await
    }

    pub async fn go_to_page(&mut self, page: u32) -> bool {
        let total_pages = self.returns.data().await.map(|p| p.total_pages).unwrap_or(0);
        if total_pages > 0 && page >= total_pages {
            return false;
        }
        self.page = page;
        self.load().await
    }

    pub async fn next_page(&mut self) -> bool {
        let Some(current) = self.returns.data().await else {
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

    /// Confirm a driver pickup: the scanned barcode is the driver's id.
    /// Re-fetches the list so the return's status moves along.
    pub async fn handover(&self, return_id: i32, scanned_driver_id: &str) -> ApiResult<()> {
        validation::required("Driver id", scanned_driver_id)
            .map_err(|_| ApiError::Validation("Scan the driver's id first".to_string()))?;
        self.api
            .handover_rental_return(return_id, scanned_driver_id.trim())
            .await?;
        self.load().await;
        Ok(())
    }

    pub async fn returns(&self) -> LoadSnapshot<Page<RentalReturn>> {
        self.returns.snapshot().await
    }

    pub async fn detach(&self) {
        self.returns.detach().await;
    }
}
