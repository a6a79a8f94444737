//! Driver application screen
//!
//! Unverified drivers land here after login: they see their submitted
//! applications and can file a new one with document photos.

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::load::{LoadSnapshot, Loader};
use crate::model::{DriverApplication, NewDriverDocument, Page};
use crate::validation;

#[derive(Clone)]
pub struct DriverApplicationController {
    api: ApiClient,
    applications: Loader<Page<DriverApplication>>,
    details: Loader<DriverApplication>,
}

impl DriverApplicationController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            applications: Loader::new(),
            details: Loader::new(),
        }
    }

    pub async fn load_applications(&self, page: u32) -> bool {
        self.applications
            .run(self.api.fetch_my_driver_applications(page))
            .await
    }

    pub async fn load_details(&self, application_id: i32) -> bool {
        self.details
            .run(self.api.fetch_driver_application(application_id))
            .await
    }

    /// Validate and submit a new application, then re-fetch the list so
    /// the pending entry shows up.
    pub async fn submit(&self, documents: &[NewDriverDocument]) -> ApiResult<()> {
        if documents.is_empty() {
            return Err(ApiError::Validation(
                "Attach at least one document".to_string(),
            ));
        }
        for document in documents {
            validation::required("Document type", &document.document_type)?;
            if document.base64_image.is_empty() {
                return Err(ApiError::Validation(
                    "Every document needs a photo".to_string(),
                ));
            }
            validation::future_date("Expiration date", document.expiration_date)?;
        }
        self.api.submit_driver_application(documents).await?;
        self.load_applications(0).await;
        Ok(())
    }

    pub async fn applications(&self) -> LoadSnapshot<Page<DriverApplication>> {
        self.applications.snapshot().await
    }

    pub async fn details(&self) -> LoadSnapshot<DriverApplication> {
        self.details.snapshot().await
    }

    pub async fn detach(&self) {
        self.applications.detach().await;
        self.details.detach().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;
    use chrono::{Duration, NaiveDate, Utc};

    fn controller() -> DriverApplicationController {
        let config = ClientConfig::default();
        let session =
            SessionStore::new(std::env::temp_dir().join("bookrider-driver-app-test.json"));
        DriverApplicationController::new(ApiClient::new(config, session))
    }

    fn document(expiration: NaiveDate) -> NewDriverDocument {
        NewDriverDocument {
            base64_image: "aGVsbG8=".to_string(),
            document_type: "DRIVER_LICENSE".to_string(),
            expiration_date: expiration,
        }
    }

    #[tokio::test]
    async fn submit_rejects_empty_document_list() {
        let err = controller().submit(&[]).await.unwrap_err();
        assert_eq!(err.user_message(), "Attach at least one document");
    }

    #[tokio::test]
    async fn submit_rejects_expired_documents() {
        let expired = document(Utc::now().date_naive() - Duration::days(1));
        let err = controller().submit(&[expired]).await.unwrap_err();
        assert_eq!(err.user_message(), "Expiration date must be a future date");
    }
}
