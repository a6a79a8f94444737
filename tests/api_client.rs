//! End-to-end tests against a mock backend: header-token login, error
//! mapping, re-fetch-after-mutation, and the pagination/empty-state
//! behavior of the screen controllers.

use mockito::Matcher;

use bookrider_client::api::{ApiClient, Role};
use bookrider_client::config::ClientConfig;
use bookrider_client::controller::{
    AuthController, CartController, DeliveriesController, OrderHistoryController, PostLoginRoute,
};
use bookrider_client::error::FALLBACK_ERROR_MESSAGE;
use bookrider_client::load::LoadPhase;
use bookrider_client::model::{Coordinate, LoginRequest};
use bookrider_client::session::SessionStore;

fn session_store(name: &str) -> SessionStore {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}.json", name));
    // Leak the dir so the session file outlives the guard.
    std::mem::forget(dir);
    SessionStore::new(path)
}

fn plain_client(server: &mockito::ServerGuard, name: &str) -> ApiClient {
    let config = ClientConfig::new(&server.url()).unwrap();
    ApiClient::new(config, session_store(name))
}

async fn authed_client(server: &mockito::ServerGuard, name: &str) -> ApiClient {
    let api = plain_client(server, name);
    api.session().set_token("test-token".into()).await.unwrap();
    api
}

const ORDER_JSON: &str = r#"{
    "orderId": 1,
    "userId": "u-1",
    "libraryName": "Central",
    "status": "PENDING",
    "amount": 12.5,
    "paymentStatus": "PAID"
}"#;

fn user_order_page(current_page: u32, total_pages: u32) -> String {
    format!(
        r#"{{"content":[{{"userPayment":12.5,"orderResponseDTO":{}}}],"currentPage":{},"totalPages":{}}}"#,
        ORDER_JSON, current_page, total_pages
    )
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_stores_the_token_from_the_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login/user")
        .with_status(200)
        .with_header("Authorization", "Bearer abc123")
        .create_async()
        .await;

    let api = plain_client(&server, "login-header");
    let request = LoginRequest {
        identifier: "reader@example.com".into(),
        password: "hunter2".into(),
    };
    let token = api.login(Role::User, &request).await.unwrap();

    assert_eq!(token, "abc123");
    assert_eq!(api.session().token().await, Some("abc123".into()));
    mock.assert_async().await;
}

#[tokio::test]
async fn login_without_the_header_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/api/auth/login/user")
        .with_status(200)
        .create_async()
        .await;

    let api = plain_client(&server, "login-no-header");
    let request = LoginRequest {
        identifier: "reader@example.com".into(),
        password: "hunter2".into(),
    };
    let err = api.login(Role::User, &request).await.unwrap_err();
    assert_eq!(err.user_message(), "Token not found in response");
    assert_eq!(api.session().token().await, None);
}

#[tokio::test]
async fn unverified_driver_routes_to_the_application_screen() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/api/auth/login/driver")
        .with_status(200)
        .with_header("Authorization", "Bearer drv456")
        .create_async()
        .await;
    let _verified = server
        .mock("GET", "/api/users/is-verified")
        .with_status(200)
        .with_body(r#"{"isVerified":false}"#)
        .create_async()
        .await;

    let api = plain_client(&server, "login-unverified");
    let auth = AuthController::new(api.clone());
    let route = auth
        .login(Role::Driver, "driver@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(route, PostLoginRoute::DriverApplication);
    assert_eq!(api.session().token().await, Some("drv456".into()));
    assert_eq!(api.session().is_verified().await, Some(false));
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn error_body_message_is_surfaced_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let _rentals = server
        .mock("GET", "/api/rentals")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"message":"You have unpaid late fees"}"#)
        .create_async()
        .await;

    let api = authed_client(&server, "error-verbatim").await;
    let err = api.fetch_rentals(0).await.unwrap_err();
    assert_eq!(err.user_message(), "You have unpaid late fees");
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_the_fixed_message() {
    let mut server = mockito::Server::new_async().await;
    let _rentals = server
        .mock("GET", "/api/rentals")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let api = authed_client(&server, "error-fallback").await;
    let err = api.fetch_rentals(0).await.unwrap_err();
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

// ============================================================================
// Deliveries: empty search result is an empty state
// ============================================================================

#[tokio::test]
async fn zero_radius_search_yields_an_empty_state_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _pending = server
        .mock("GET", "/api/orders/driver/pending")
        .match_query(Matcher::UrlEncoded(
            "maxDistanceInMeters".into(),
            "0".into(),
        ))
        .with_status(200)
        .with_body(r#"{"content":[],"currentPage":0,"totalPages":0}"#)
        .create_async()
        .await;

    let api = authed_client(&server, "pending-zero").await;
    let deliveries = DeliveriesController::new(api);
    let position = Coordinate {
        latitude: 42.6977,
        longitude: 23.3219,
    };
    assert!(deliveries.search_pending(position, 0).await);

    let snapshot = deliveries.pending().await;
    assert_eq!(snapshot.phase, LoadPhase::Success);
    assert!(snapshot.error.is_none());
    assert!(snapshot.data.unwrap().is_empty());
}

// ============================================================================
// Cart: mutations re-fetch, nothing is kept optimistically
// ============================================================================

#[tokio::test]
async fn removing_an_item_refetches_the_server_cart() {
    let mut server = mockito::Server::new_async().await;
    let _delete = server
        .mock("DELETE", "/api/shopping-cart/delete-sub-item/5")
        .with_status(200)
        .create_async()
        .await;
    let refetch = server
        .mock("GET", "/api/shopping-cart")
        .with_status(200)
        .with_body(r#"{"totalCartDeliveryCost":0.0,"items":[]}"#)
        .create_async()
        .await;

    let api = authed_client(&server, "cart-remove").await;
    let cart = CartController::new(api);
    cart.remove_item(5).await.unwrap();

    refetch.assert_async().await;
    let snapshot = cart.cart().await;
    assert_eq!(snapshot.phase, LoadPhase::Success);
    assert!(snapshot.data.unwrap().items.is_empty());
}

#[tokio::test]
async fn cart_shows_exactly_what_the_server_returns() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{
        "totalCartDeliveryCost": 4.2,
        "deliveryAddress": "Main St 5, Sofia",
        "items": [{
            "libraryId": 3,
            "libraryName": "Central",
            "totalItemDeliveryCost": 4.2,
            "books": [{
                "subItemId": 9,
                "quantity": 2,
                "book": {
                    "id": 1,
                    "title": "The Trial",
                    "categoryName": "Fiction",
                    "authorNames": ["Franz Kafka"],
                    "releaseYear": 1925,
                    "publisherName": "Verlag",
                    "isbn": "978-0",
                    "languageName": "German"
                }
            }]
        }]
    }"#;
    let _cart = server
        .mock("GET", "/api/shopping-cart")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let api = authed_client(&server, "cart-load").await;
    let cart = CartController::new(api);
    assert!(cart.load().await);

    let data = cart.cart().await.data.unwrap();
    assert_eq!(data.total_cart_delivery_cost, 4.2);
    assert_eq!(data.items.len(), 1);
    assert_eq!(data.items[0].books[0].book.title, "The Trial");
}

// ============================================================================
// Order history: pagination and channel-driven refresh
// ============================================================================

#[tokio::test]
async fn channel_event_refetches_page_zero_of_the_current_tab() {
    let mut server = mockito::Server::new_async().await;
    let page_zero = server
        .mock("GET", "/api/orders/user/in-realization")
        .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
        .with_status(200)
        .with_body(user_order_page(0, 2))
        .expect(2)
        .create_async()
        .await;
    let _page_one = server
        .mock("GET", "/api/orders/user/in-realization")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(user_order_page(1, 2))
        .create_async()
        .await;

    let api = authed_client(&server, "history-channel").await;
    let mut history = OrderHistoryController::new(api);

    assert!(history.load_user_orders().await);
    assert!(history.next_page().await);
    assert_eq!(history.current_page(), 1);

    // A push message arrived: back to page 0.
    assert!(history.on_channel_event().await);
    assert_eq!(history.current_page(), 0);
    page_zero.assert_async().await;
}

#[tokio::test]
async fn next_page_is_blocked_on_the_last_page() {
    let mut server = mockito::Server::new_async().await;
    let _page_zero = server
        .mock("GET", "/api/orders/user/in-realization")
        .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
        .with_status(200)
        .with_body(user_order_page(0, 1))
        .expect(1)
        .create_async()
        .await;

    let api = authed_client(&server, "history-last-page").await;
    let mut history = OrderHistoryController::new(api);
    assert!(history.load_user_orders().await);

    // Single page: the control is disabled, no request goes out.
    assert!(!history.next_page().await);
    assert_eq!(history.current_page(), 0);

    // Jumping past the end is ignored rather than sent.
    assert!(!history.go_to_page(7).await);
    assert_eq!(history.current_page(), 0);
}
