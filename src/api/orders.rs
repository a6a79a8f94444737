//! Order buckets and driver actions
//!
//! The backend owns the order state machine. Drivers never set a status
//! directly; they request an action (assign, navigate, deliver) and the
//! screen re-fetches the affected buckets.

use crate::error::ApiResult;
use crate::model::{
    Coordinate, DeliverOrderRequest, NavigationRequest, NavigationRoute, OrderDetails, Page,
    UserOrder,
};

use super::client::{ApiClient, PAGE_SIZE, paging};

/// Status buckets of the user-side order history tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOrderBucket {
    Pending,
    InRealization,
    Completed,
}

impl UserOrderBucket {
    fn as_path_segment(&self) -> &'static str {
        match self {
            UserOrderBucket::Pending => "pending",
            UserOrderBucket::InRealization => "in-realization",
            UserOrderBucket::Completed => "completed",
        }
    }
}

/// Status buckets of the driver-side screens. `Pending` additionally
/// takes the driver's position and a search radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverOrderBucket {
    InRealization,
    Completed,
}

impl DriverOrderBucket {
    fn as_path_segment(&self) -> &'static str {
        match self {
            DriverOrderBucket::InRealization => "in-realization",
            DriverOrderBucket::Completed => "completed",
        }
    }
}

impl ApiClient {
    /// `GET /api/orders/user/{bucket}?page&size`.
    pub async fn fetch_user_orders(
        &self,
        bucket: UserOrderBucket,
        page: u32,
    ) -> ApiResult<Page<UserOrder>> {
        self.get(
            &format!("/api/orders/user/{}", bucket.as_path_segment()),
            &paging(page, PAGE_SIZE),
        )
        .await
    }

    /// `GET /api/orders/driver/{bucket}?page&size`.
    pub async fn fetch_driver_orders(
        &self,
        bucket: DriverOrderBucket,
        page: u32,
    ) -> ApiResult<Page<OrderDetails>> {
        self.get(
            &format!("/api/orders/driver/{}", bucket.as_path_segment()),
            &paging(page, PAGE_SIZE),
        )
        .await
    }

    /// `GET /api/orders/driver/pending?page&size&locationString&maxDistanceInMeters`.
    /// An empty `content` array is a normal answer (nothing in radius),
    /// not an error.
    pub async fn fetch_pending_driver_orders(
        &self,
        page: u32,
        location: Coordinate,
        max_distance_in_meters: u32,
    ) -> ApiResult<Page<OrderDetails>> {
        let mut query: Vec<(&str, String)> = paging(page, PAGE_SIZE).to_vec();
        query.push((
            "locationString",
            format!("{},{}", location.latitude, location.longitude),
        ));
        query.push(("maxDistanceInMeters", max_distance_in_meters.to_string()));
        self.get("/api/orders/driver/pending", &query).await
    }

    /// `PUT /api/orders/{id}/assign` - claim a pending order.
    pub async fn assign_order(&self, order_id: i32) -> ApiResult<()> {
        self.put_no_response(&format!("/api/orders/{}/assign", order_id), &[])
            .await
    }

    /// `POST /api/orders/{id}/pickup-navigation` - route to the library.
    pub async fn fetch_pickup_navigation(
        &self,
        order_id: i32,
        request: &NavigationRequest,
    ) -> ApiResult<NavigationRoute> {
        self.post(
            &format!("/api/orders/{}/pickup-navigation", order_id),
            &[],
            Some(request),
        )
        .await
    }

    /// `POST /api/orders/{id}/delivery-navigation` - route to the
    /// delivery address.
    pub async fn fetch_delivery_navigation(
        &self,
        order_id: i32,
        request: &NavigationRequest,
    ) -> ApiResult<NavigationRoute> {
        self.post(
            &format!("/api/orders/{}/delivery-navigation", order_id),
            &[],
            Some(request),
        )
        .await
    }

    /// `POST /api/orders/{id}/deliver` - confirm handover with location
    /// and a proof-of-delivery photo.
    pub async fn deliver_order(
        &self,
        order_id: i32,
        request: &DeliverOrderRequest,
    ) -> ApiResult<()> {
        self.post_no_response(&format!("/api/orders/{}/deliver", order_id), &[], Some(request))
            .await
    }
}
