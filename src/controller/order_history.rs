//! Order history with status tabs and live refresh
//!
//! Backs both the user and driver order-history screens: a tab per
//! status bucket, server-driven pagination, and a re-fetch of page 0 of
//! the current tab whenever the push channel signals a change.

use crate::api::{ApiClient, DriverOrderBucket, UserOrderBucket};
use crate::load::{LoadSnapshot, Loader};
use crate::model::{OrderDetails, Page, UserOrder};

#[derive(Clone)]
pub struct OrderHistoryController {
    api: ApiClient,
    user_orders: Loader<Page<UserOrder>>,
    driver_orders: Loader<Page<OrderDetails>>,
    tab: UserOrderBucket,
    page: u32,
}

impl OrderHistoryController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user_orders: Loader::new(),
            driver_orders: Loader::new(),
            tab: UserOrderBucket::InRealization,
            page: 0,
        }
    }

    pub fn current_tab(&self) -> UserOrderBucket {
        self.tab
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Load the current tab/page of the user-side history.
    pub async fn load_user_orders(&self) -> bool {
        self.user_orders
            .run(self.api.fetch_user_orders(self.tab, self.page))
            .await
    }

    /// Switching tabs resets to page 0, then re-fetches.
    pub async fn select_tab(&mut self, tab: UserOrderBucket) -> bool {
        self.tab = tab;
        self.page = 0;
        self.load_user_orders().await
    }

    /// Move to `page` if the server reported it exists. Out-of-range
    /// requests are ignored rather than sent.
    pub async fn go_to_page(&mut self, page: u32) -> bool {
        let current = self.user_orders.data().await;
        let total_pages = current.map(|p| p.total_pages).unwrap_or(0);
        if total_pages > 0 && page >= total_pages {
            return false;
        }
        self.page = page;
        self.load_user_orders().await
    }

    pub async fn next_page(&mut self) -> bool {
        let Some(current) = self.user_orders.data().await else {
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

    /// Channel callback: something changed server-side, re-read page 0
    /// of whatever tab is visible.
    pub async fn on_channel_event(&mut self) -> bool {
        self.page = 0;
        self.load_user_orders().await
    }

    pub async fn user_orders(&self) -> LoadSnapshot<Page<UserOrder>> {
        self.user_orders.snapshot().await
    }

    /// Driver-side completed deliveries list.
    pub async fn load_driver_history(&self, page: u32) -> bool {
        self.driver_orders
            .run(self.api.fetch_driver_orders(DriverOrderBucket::Completed, page))
            .await
    }

    pub async fn driver_orders(&self) -> LoadSnapshot<Page<OrderDetails>> {
        self.driver_orders.snapshot().await
    }

    /// Screen unmount: discard any in-flight loads.
    pub async fn detach(&self) {
        self.user_orders.detach().await;
        self.driver_orders.detach().await;
    }
}
