//! Profile, user id, verified flag, library cards, deposits

use serde::Deserialize;

use crate::error::ApiResult;
use crate::model::{LibraryCard, Page, UserProfile};

use super::client::{ApiClient, PAGE_SIZE, paging};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserIdResponse {
    user_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IsVerifiedResponse {
    is_verified: bool,
}

impl ApiClient {
    /// `GET /api/users/profile`.
    pub async fn fetch_profile(&self) -> ApiResult<UserProfile> {
        self.get("/api/users/profile", &[]).await
    }

    /// `GET /api/users/id`, cached: the first successful fetch writes the
    /// id into the session store and later calls read it locally.
    pub async fn fetch_user_id(&self) -> ApiResult<String> {
        if let Some(cached) = self.session().user_id().await {
            return Ok(cached);
        }
        let response: UserIdResponse = self.get("/api/users/id", &[]).await?;
        if let Err(e) = self.session().set_user_id(response.user_id.clone()).await {
            tracing::warn!(error = %e, "could not cache user id");
        }
        Ok(response.user_id)
    }

    /// `GET /api/users/is-verified`. The flag is mirrored into the
    /// session so the launcher can route without a network round trip.
    pub async fn fetch_is_verified(&self) -> ApiResult<bool> {
        let response: IsVerifiedResponse = self.get("/api/users/is-verified", &[]).await?;
        if let Err(e) = self.session().set_verified(response.is_verified).await {
            tracing::warn!(error = %e, "could not cache verified flag");
        }
        Ok(response.is_verified)
    }

    /// `GET /api/library-cards/{userId}?page&size`.
    pub async fn fetch_library_cards(&self, page: u32) -> ApiResult<Page<LibraryCard>> {
        let user_id = self.fetch_user_id().await?;
        self.get(
            &format!("/api/library-cards/{}", user_id),
            &paging(page, PAGE_SIZE),
        )
        .await
    }

    /// `POST /api/transactions/deposit?amount`. The new balance shows up
    /// on the next profile fetch.
    pub async fn deposit(&self, amount: u32) -> ApiResult<()> {
        self.post_no_response::<()>(
            "/api/transactions/deposit",
            &[("amount", amount.to_string())],
            None,
        )
        .await
    }
}
