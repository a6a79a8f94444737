//! Account screen: profile, id barcode, library cards, deposits

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::load::{LoadSnapshot, Loader};
use crate::model::{LibraryCard, Page, UserProfile};

#[derive(Clone)]
pub struct AccountController {
    api: ApiClient,
    profile: Loader<UserProfile>,
    cards: Loader<Page<LibraryCard>>,
}

impl AccountController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            profile: Loader::new(),
            cards: Loader::new(),
        }
    }

    pub async fn load_profile(&self) -> bool {
        self.profile.run(self.api.fetch_profile()).await
    }

    /// The id rendered as the user's barcode. Cached in the session after
    /// the first fetch, so this is usually local.
    pub async fn user_id(&self) -> ApiResult<String> {
        self.api.fetch_user_id().await
    }

    pub async fn load_library_cards(&self, page: u32) -> bool {
        self.cards.run(self.api.fetch_library_cards(page)).await
    }

    /// Top up the balance, then re-fetch the profile so the new balance
    /// comes from the server rather than local arithmetic.
    pub async fn deposit(&self, amount: u32) -> ApiResult<()> {
        if amount == 0 {
            return Err(ApiError::Validation(
                "Deposit amount must be at least 1".to_string(),
            ));
        }
        self.api.deposit(amount).await?;
        self.load_profile().await;
        Ok(())
    }

    pub async fn profile(&self) -> LoadSnapshot<UserProfile> {
        self.profile.snapshot().await
    }

    pub async fn library_cards(&self) -> LoadSnapshot<Page<LibraryCard>> {
        self.cards.snapshot().await
    }

    pub async fn detach(&self) {
        self.profile.detach().await;
        self.cards.detach().await;
    }
}
