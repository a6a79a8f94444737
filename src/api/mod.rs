//! API module - authenticated request helper and typed endpoints
//!
//! One `ApiClient` covers the whole REST surface the screens call. The
//! request core lives in `client`; endpoint methods are grouped by
//! resource, one file per group:
//!
//! - `auth`: login/register (token arrives in a response header)
//! - `users`: profile, id, verified flag, library cards, deposits
//! - `books`: catalog search, lookup lists, delivery quotes
//! - `cart`: shopping cart and checkout
//! - `orders`: user/driver order buckets and driver actions
//! - `rentals`: rentals and rental returns
//! - `drivers`: driver applications

mod auth;
mod books;
mod cart;
mod client;
mod drivers;
mod orders;
mod rentals;
mod users;

pub use auth::{AccountCreated, Role};
pub use books::BookFilter;
pub use client::ApiClient;
pub use orders::{DriverOrderBucket, UserOrderBucket};
