//! Model module - mirrored server DTOs
//!
//! Every entity here is owned by the backend and merely mirrored into a
//! client-side view model. Status fields stay plain strings; the client
//! never computes a next status, it requests an action and re-fetches.
//! It is organized into submodules by resource:
//!
//! - `page`: generic paged-list envelope
//! - `book`: books, quotes, lookup lists
//! - `order`: orders and delivery navigation
//! - `rental`: rentals, rental returns, late fees
//! - `cart`: shopping cart aggregate
//! - `user`: profile, library cards, auth payloads
//! - `driver`: driver applications

mod book;
mod cart;
mod driver;
mod order;
mod page;
mod rental;
mod user;

pub use page::Page;

pub use book::{Book, Category, Language, LibrarySummary, PublisherSummary, Quote, QuoteOption};

pub use order::{
    Coordinate, DeliverOrderRequest, NavigationRequest, NavigationRoute, OrderDetails, OrderItem,
    RouteStep, TransportProfile, UserOrder,
};

pub use rental::{
    CreateAddress, LateFee, Rental, RentalReturn, RentalReturnCost, RentalReturnItem,
    RentalReturnRequest, ReturnQuantity,
};

pub use cart::{CartItem, CartSubItem, ShoppingCart};

pub use user::{LibraryCard, LoginRequest, RegisterRequest, UserProfile};

pub use driver::{DriverApplication, DriverDocument, NewDriverDocument};
