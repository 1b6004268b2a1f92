//! Webinar API client
//!
//! Endpoints live under `/webinars/` and always end with a slash.

use tracing::{debug, info};
use crate::config::UploadConfig;
use crate::models::{
    AnalyticsReport, CreateWebinarRequest, Registration, UpdateWebinarRequest, UploadedFile, Webinar, WebinarStatus,
};
use crate::normalize::normalize_one;
use crate::services::http::{path_segment, ApiClient};
use crate::services::query::ListQuery;
use crate::services::upload::{ImageUpload, ImageUploader};
use crate::services::StatusChange;
use crate::utils::errors::Result;

const BASE: &str = "/webinars/";

/// Webinar service
#[derive(Clone, Debug)]
pub struct WebinarService {
    api: ApiClient,
    uploads: UploadConfig,
}

impl WebinarService {
    /// Create a new WebinarService instance
    pub fn new(api: ApiClient, uploads: UploadConfig) -> Self {
        Self { api, uploads }
    }

    fn record_path(id: &str) -> String {
        format!("{}{}/", BASE, path_segment(id))
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Webinar>> {
        debug!(?query, "Loading webinars");
        self.api.fetch_list(BASE, query, "webinars").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Webinar> {
        self.api.fetch_one(&Self::record_path(id), "webinar", id).await
    }

    /// Webinars flagged as featured, as selected by the backend
    pub async fn get_featured(&self) -> Result<Vec<Webinar>> {
        self.api
            .fetch_list(&format!("{}featured/", BASE), &ListQuery::default(), "webinars")
            .await
    }

    pub async fn create(&self, data: &CreateWebinarRequest) -> Result<Webinar> {
        let webinar: Webinar = self.api.create_one(BASE, data, "webinar").await?;
        info!(webinar_id = %webinar.id, title = %webinar.title, "Webinar created");
        Ok(webinar)
    }

    pub async fn update(&self, id: &str, data: &UpdateWebinarRequest) -> Result<Webinar> {
        let webinar: Webinar = self.api.update_one(&Self::record_path(id), data, "webinar", id).await?;
        info!(webinar_id = %id, "Webinar updated");
        Ok(webinar)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.remove(&Self::record_path(id)).await?;
        info!(webinar_id = %id, "Webinar deleted");
        Ok(())
    }

    pub async fn update_status(&self, id: &str, status: WebinarStatus) -> Result<Webinar> {
        let path = format!("{}status/", Self::record_path(id));
        let webinar: Webinar = self
            .api
            .patch_record(&path, &Self::record_path(id), &StatusChange { status }, "webinar", id)
            .await?;
        info!(webinar_id = %id, status = status.label(), "Webinar status updated");
        Ok(webinar)
    }

    /// The backend flips the flag itself
    pub async fn toggle_featured(&self, id: &str) -> Result<Webinar> {
        let path = format!("{}toggle-featured/", Self::record_path(id));
        let webinar: Webinar = self.api.post_action(&path, &Self::record_path(id), "webinar", id).await?;
        info!(webinar_id = %id, featured = webinar.featured, "Webinar featured flag toggled");
        Ok(webinar)
    }

    pub async fn get_analytics(&self, id: &str) -> Result<AnalyticsReport> {
        let body = self
            .api
            .get(&format!("{}analytics/", Self::record_path(id)), &ListQuery::default())
            .await?;
        Ok(normalize_one(&body, "analytics"))
    }

    pub async fn get_registrations(&self, id: &str) -> Result<Vec<Registration>> {
        self.api
            .fetch_list(&format!("{}registrations/", Self::record_path(id)), &ListQuery::default(), "registrations")
            .await
    }

    pub async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedFile> {
        upload.validate(&self.uploads)?;
        let body = self.api.upload(&format!("{}upload-image/", BASE), upload).await?;
        Ok(normalize_one(&body, "file"))
    }
}

impl ImageUploader for WebinarService {
    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedFile> {
        WebinarService::upload_image(self, upload).await
    }
}
