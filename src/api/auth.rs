//! Login and registration
//!
//! Login is the one call whose result does not arrive in the body: the
//! backend puts `Bearer <token>` in the `Authorization` response header.
//! On success the token is written into the session store, making it the
//! single writer path for credentials.

use reqwest::Method;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::model::{LoginRequest, RegisterRequest};

use super::client::ApiClient;

/// The mobile roles this client logs in as. Other roles (librarian,
/// library administrator) exist server-side but belong to the web admin
/// frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Driver,
}

impl Role {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Driver => "driver",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreated {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl ApiClient {
    /// `POST /api/auth/login/{role}`. Stores the returned bearer token in
    /// the session and returns it.
    pub async fn login(&self, role: Role, request: &LoginRequest) -> ApiResult<String> {
        let url = self.endpoint(&format!("/api/auth/login/{}", role.as_path_segment()));
        let response = self.plain(Method::POST, url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        let token = response
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string)
            .ok_or_else(|| ApiError::http(status.as_u16(), Some("Token not found in response".to_string())))?;

        self.session()
            .set_token(token.clone())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to persist session token");
                ApiError::Validation("Could not save the session".to_string())
            })?;

        tracing::info!(role = role.as_path_segment(), "login succeeded");
        Ok(token)
    }

    /// `POST /api/auth/register/{role}`.
    pub async fn register(
        &self,
        role: Role,
        request: &RegisterRequest,
    ) -> ApiResult<AccountCreated> {
        let url = self.endpoint(&format!("/api/auth/register/{}", role.as_path_segment()));
        let request = self.plain(Method::POST, url).json(request);
        let result = self.execute(request).await;
        crate::log_api_result!("register", result);
        result
    }
}
