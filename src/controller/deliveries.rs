//! Driver delivery workflow
//!
//! Two lists side by side: orders the driver is already working on, and
//! pending orders within a search radius of their position. Actions
//! never mutate local state; they call the backend and re-fetch the
//! affected lists.

use crate::api::{ApiClient, DriverOrderBucket};
use crate::error::{ApiError, ApiResult};
use crate::load::{LoadSnapshot, Loader};
use crate::model::{
    Coordinate, DeliverOrderRequest, NavigationRequest, NavigationRoute, OrderDetails, Page,
    TransportProfile,
};

#[derive(Clone)]
pub struct DeliveriesController {
    api: ApiClient,
    in_realization: Loader<Page<OrderDetails>>,
    pending: Loader<Page<OrderDetails>>,
}

impl DeliveriesController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            in_realization: Loader::new(),
            pending: Loader::new(),
        }
    }

    pub async fn load_in_realization(&self) -> bool {
        self.in_realization
            .run(
                self.api
                    .fetch_driver_orders(DriverOrderBucket::InRealization, 0),
            )
            .await
    }

    /// Search pending orders around the driver. A zero radius is a valid
    /// search that the backend answers with an empty page; the screen
    /// shows an empty state, not an error.
    pub async fn search_pending(&self, location: Coordinate, max_distance_in_meters: u32) -> bool {
        self.pending
            .run(
                self.api
                    .fetch_pending_driver_orders(0, location, max_distance_in_meters),
            )
            .await
    }

    /// Claim a pending order, then re-fetch both lists so the order
    /// moves buckets without any local patching.
    pub async fn assign(&self, order_id: i32, location: Coordinate, max_distance: u32) -> ApiResult<()> {
        self.api.assign_order(order_id).await?;
        self.search_pending(location, max_distance).await;
        self.load_in_realization().await;
        Ok(())
    }

    /// Route to the pickup or delivery point depending on where the
    /// order is in its lifecycle. `DRIVER_PICKED` means the books are
    /// not collected yet, so navigate to the library.
    pub async fn navigation(
        &self,
        order: &OrderDetails,
        position: Coordinate,
    ) -> ApiResult<NavigationRoute> {
        let request = NavigationRequest {
            transport_profile: TransportProfile::Car,
            latitude: position.latitude,
            longitude: position.longitude,
        };
        if order.status == "DRIVER_PICKED" {
            self.api
                .fetch_pickup_navigation(order.order_id, &request)
                .await
        } else {
            self.api
                .fetch_delivery_navigation(order.order_id, &request)
                .await
        }
    }

    /// Confirm delivery with a proof photo, then re-fetch the working
    /// list.
    pub async fn deliver(
        &self,
        order_id: i32,
        location: Coordinate,
        photo_base64: &str,
    ) -> ApiResult<()> {
        if photo_base64.is_empty() {
            return Err(ApiError::Validation(
                "A delivery photo is required".to_string(),
            ));
        }
        let request = DeliverOrderRequest {
            location,
            photo_base64: photo_base64.to_string(),
        };
        self.api.deliver_order(order_id, &request).await?;
        self.load_in_realization().await;
        Ok(())
    }

    pub async fn in_realization(&self) -> LoadSnapshot<Page<OrderDetails>> {
        self.in_realization.snapshot().await
    }

    pub async fn pending(&self) -> LoadSnapshot<Page<OrderDetails>> {
        self.pending.snapshot().await
    }

    pub async fn detach(&self) {
        self.in_realization.detach().await;
        self.pending.detach().await;
    }
}
