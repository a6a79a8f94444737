//! Request core: bearer token, JSON headers, error mapping
//!
//! Every call goes through here. The helper attaches the stored token,
//! parses the JSON body on success, and maps failures onto the
//! [`ApiError`] taxonomy. It does not retry, does not refresh tokens,
//! and does not queue.

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn endpoint(&self, path: &str) -> Url {
        self.config.endpoint(path)
    }

    /// Request builder for an unauthenticated call (login, register).
    pub(crate) fn plain(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Request builder with the stored bearer token attached. Fails with
    /// `Unauthenticated` when the session holds no usable token.
    pub(crate) async fn authed(&self, method: Method, url: Url) -> ApiResult<RequestBuilder> {
        let token = self.session.token().await.ok_or(ApiError::Unauthenticated)?;
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    /// Send a request and parse the JSON body of a 2xx response.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }
        Ok(response.json().await?)
    }

    /// Send a request where the caller does not consume the body; the
    /// screen re-fetches the parent resource instead.
    pub(crate) async fn execute_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }
        Ok(())
    }

    /// Non-2xx responses carry a JSON body with an optional `message`
    /// field; anything else falls back to a fixed string.
    pub(crate) async fn error_from_response(
        status: StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                }),
            Err(_) => None,
        };
        tracing::warn!(status = status.as_u16(), ?message, "API request rejected");
        ApiError::http(status.as_u16(), message)
    }

    // ========================================================================
    // Convenience wrappers used by the endpoint groups
    // ========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let mut url = self.endpoint(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let request = self.authed(Method::GET, url).await?;
        self.execute(request).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<T> {
        let mut url = self.endpoint(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let mut request = self.authed(Method::POST, url).await?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    pub(crate) async fn post_no_response<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<()> {
        let mut url = self.endpoint(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let mut request = self.authed(Method::POST, url).await?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute_empty(request).await
    }

    pub(crate) async fn put_no_response(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<()> {
        let mut url = self.endpoint(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        let request = self.authed(Method::PUT, url).await?;
        self.execute_empty(request).await
    }

    pub(crate) async fn delete_no_response(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path);
        let request = self.authed(Method::DELETE, url).await?;
        self.execute_empty(request).await
    }
}

/// Standard `page`/`size` query pair for list endpoints.
pub(crate) fn paging(page: u32, size: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("size", size.to_string())]
}

/// The page size every screen in the apps uses.
pub(crate) const PAGE_SIZE: u32 = 10;
