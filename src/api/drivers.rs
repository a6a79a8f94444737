//! Driver applications

use crate::error::ApiResult;
use crate::model::{DriverApplication, NewDriverDocument, Page};

use super::client::{ApiClient, PAGE_SIZE, paging};

impl ApiClient {
    /// `GET /api/driver-applications/me?page&size`.
    pub async fn fetch_my_driver_applications(
        &self,
        page: u32,
    ) -> ApiResult<Page<DriverApplication>> {
        self.get("/api/driver-applications/me", &paging(page, PAGE_SIZE))
            .await
    }

    /// `GET /api/driver-applications/{id}`.
    pub async fn fetch_driver_application(&self, id: i32) -> ApiResult<DriverApplication> {
        self.get(&format!("/api/driver-applications/{}", id), &[])
            .await
    }

    /// `POST /api/driver-applications` - the body is a bare JSON array of
    /// documents, each photo as base64.
    pub async fn submit_driver_application(
        &self,
        documents: &[NewDriverDocument],
    ) -> ApiResult<()> {
        self.post_no_response("/api/driver-applications", &[], Some(documents))
            .await
    }
}
