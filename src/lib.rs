//! BookRider client
//!
//! Client-side orchestration for the BookRider book-delivery platform:
//! authenticated requests, load/error/loading state, live channel
//! subscriptions, and one data controller per screen. The crate renders
//! nothing; a UI layer drives the controllers and draws their snapshots.
//!
//! Modules:
//! - `config`: API base URL and derived endpoints
//! - `error`: the error taxonomy every screen renders from
//! - `session`: persisted bearer token, cached user id, verified flag
//! - `validation`: pre-dispatch form rules
//! - `model`: wire types shared with the backend
//! - `api`: the authenticated request helper and endpoint groups
//! - `load`: the Load/Error/Loading state machine
//! - `channel`: live server-push subscriptions
//! - `controller`: per-screen data controllers
//! - `logging`: rotating file logs

pub mod api;
pub mod channel;
pub mod config;
pub mod controller;
pub mod error;
pub mod load;
pub mod logging;
pub mod model;
pub mod session;
pub mod validation;

use std::path::Path;

use anyhow::Result;

use api::ApiClient;
use channel::ChannelSubscriber;
use config::ClientConfig;
use session::SessionStore;

/// Everything a frontend needs, wired together: one shared session, one
/// HTTP client, and constructors for the per-screen controllers.
#[derive(Clone)]
pub struct BookRiderClient {
    api: ApiClient,
}

impl BookRiderClient {
    /// Build a client with `session_path` as the on-device session file.
    /// Any previously saved session is loaded, so a fresh launch stays
    /// logged in until the stored token expires.
    pub async fn new(config: ClientConfig, session_path: impl AsRef<Path>) -> Result<Self> {
        let session = SessionStore::new(session_path);
        session.load_from_disk().await?;
        Ok(Self {
            api: ApiClient::new(config, session),
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    pub fn channels(&self) -> ChannelSubscriber {
        ChannelSubscriber::new(self.api.config().clone(), self.api.session().clone())
    }

    // ========================================================================
    // Screen controllers
    // ========================================================================

    pub fn auth(&self) -> controller::AuthController {
        controller::AuthController::new(self.api.clone())
    }

    pub fn account(&self) -> controller::AccountController {
        controller::AccountController::new(self.api.clone())
    }

    pub fn book_search(&self) -> controller::BookSearchController {
        controller::BookSearchController::new(self.api.clone())
    }

    pub fn cart(&self) -> controller::CartController {
        controller::CartController::new(self.api.clone())
    }

    pub fn deliveries(&self) -> controller::DeliveriesController {
        controller::DeliveriesController::new(self.api.clone())
    }

    pub fn driver_application(&self) -> controller::DriverApplicationController {
        controller::DriverApplicationController::new(self.api.clone())
    }

    pub fn order_history(&self) -> controller::OrderHistoryController {
        controller::OrderHistoryController::new(self.api.clone())
    }

    pub fn rentals(&self) -> controller::RentalsController {
        controller::RentalsController::new(self.api.clone())
    }

    pub fn rental_returns(&self) -> controller::RentalReturnsController {
        controller::RentalReturnsController::new(self.api.clone())
    }
}
