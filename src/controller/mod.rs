//! Controller module - per-screen data controllers
//!
//! One controller per screen, each owning its loaders and sharing the
//! session and API client. Screens do not share in-memory state: every
//! controller re-fetches from the server on focus, and mutations are
//! followed by a full re-fetch of the parent resource. It is organized
//! by screen:
//!
//! - `auth`: login, registration, logout, post-login routing
//! - `account`: profile, user id barcode, library cards, deposits
//! - `books`: catalog search, quotes, add-to-cart
//! - `cart`: shopping cart and checkout
//! - `deliveries`: driver delivery workflow
//! - `driver_application`: driver onboarding documents
//! - `order_history`: user/driver order lists with live refresh
//! - `rentals`: rentals and return creation
//! - `returns`: rental return tracking and handover

mod account;
mod auth;
mod books;
mod cart;
mod deliveries;
mod driver_application;
mod order_history;
mod rentals;
mod returns;

pub use account::AccountController;
pub use auth::{AuthController, PostLoginRoute};
pub use books::BookSearchController;
pub use cart::CartController;
pub use deliveries::DeliveriesController;
pub use driver_application::DriverApplicationController;
pub use order_history::OrderHistoryController;
pub use rentals::RentalsController;
pub use returns::RentalReturnsController;
