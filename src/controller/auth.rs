//! Login, registration, and post-login routing

use crate::api::{AccountCreated, ApiClient, Role};
use crate::error::ApiResult;
use crate::model::{LoginRequest, RegisterRequest};
use crate::validation;

/// Where the app navigates after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostLoginRoute {
    /// User home screen (catalog search).
    BookSearch,
    /// Driver home screen; only for verified drivers.
    Dashboard,
    /// Unverified drivers land on the application screen instead.
    DriverApplication,
}

#[derive(Clone)]
pub struct AuthController {
    api: ApiClient,
}

impl AuthController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Validate, log in, store the token, and decide the landing screen.
    /// For drivers the `is-verified` check runs right after login; a
    /// check that fails still routes to the application screen rather
    /// than stranding the driver on the login form.
    pub async fn login(&self, role: Role, email: &str, password: &str) -> ApiResult<PostLoginRoute> {
        validation::required("Email", email)?;
        validation::email(email)?;
        validation::required("Password", password)?;

        let request = LoginRequest {
            identifier: email.trim().to_string(),
            password: password.to_string(),
        };
        self.api.login(role, &request).await?;

        match role {
            Role::User => Ok(PostLoginRoute::BookSearch),
            Role::Driver => match self.api.fetch_is_verified().await {
                Ok(true) => Ok(PostLoginRoute::Dashboard),
                Ok(false) => Ok(PostLoginRoute::DriverApplication),
                Err(e) => {
                    tracing::warn!(error = %e, "verified check failed after login");
                    Ok(PostLoginRoute::DriverApplication)
                }
            },
        }
    }

    pub async fn register(
        &self,
        role: Role,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
        password_confirmation: &str,
    ) -> ApiResult<AccountCreated> {
        validation::required("Email", email)?;
        validation::email(email)?;
        validation::required("First name", first_name)?;
        validation::required("Last name", last_name)?;
        validation::required("Password", password)?;
        validation::passwords_match(password, password_confirmation)?;

        let request = RegisterRequest {
            email: email.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            password: password.to_string(),
        };
        self.api.register(role, &request).await
    }

    /// Logout: clear the session, in memory and on disk.
    pub async fn logout(&self) -> ApiResult<()> {
        self.api.session().clear().await.map_err(|e| {
            tracing::error!(error = %e, "failed to clear session");
            crate::error::ApiError::Validation("Could not clear the session".to_string())
        })
    }

    /// Whether a screen can skip the login form entirely.
    pub async fn has_session(&self) -> bool {
        self.api.session().token().await.is_some()
    }
}
