//! Conference API client
//!
//! Endpoints live under `/api/conferences` without trailing slashes.

use tracing::{debug, info};
use crate::config::UploadConfig;
use crate::models::{
    AnalyticsReport, Conference, ConferenceStatus, CreateConferenceRequest, Registration, UpdateConferenceRequest,
    UploadedFile,
};
use crate::normalize::normalize_one;
use crate::services::http::{path_segment, ApiClient};
use crate::services::query::ListQuery;
use crate::services::upload::{ImageUpload, ImageUploader};
use crate::services::{FeaturedChange, StatusChange};
use crate::utils::errors::Result;

const BASE: &str = "/api/conferences";

/// Conference service
#[derive(Clone, Debug)]
pub struct ConferenceService {
    api: ApiClient,
    uploads: UploadConfig,
}

impl ConferenceService {
    /// Create a new ConferenceService instance
    pub fn new(api: ApiClient, uploads: UploadConfig) -> Self {
        Self { api, uploads }
    }

    fn record_path(id: &str) -> String {
        format!("{}/{}", BASE, path_segment(id))
    }

    /// List conferences, optionally filtered server-side
    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Conference>> {
        debug!(?query, "Loading conferences");
        self.api.fetch_list(BASE, query, "conferences").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Conference> {
        self.api.fetch_one(&Self::record_path(id), "conference", id).await
    }

    pub async fn create(&self, data: &CreateConferenceRequest) -> Result<Conference> {
        let conference: Conference = self.api.create_one(BASE, data, "conference").await?;
        info!(conference_id = %conference.id, title = %conference.title, "Conference created");
        Ok(conference)
    }

    pub async fn update(&self, id: &str, data: &UpdateConferenceRequest) -> Result<Conference> {
        let conference: Conference = self.api.update_one(&Self::record_path(id), data, "conference", id).await?;
        info!(conference_id = %id, "Conference updated");
        Ok(conference)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.remove(&Self::record_path(id)).await?;
        info!(conference_id = %id, "Conference deleted");
        Ok(())
    }

    pub async fn update_status(&self, id: &str, status: ConferenceStatus) -> Result<Conference> {
        let path = format!("{}/status", Self::record_path(id));
        let conference: Conference = self
            .api
            .patch_record(&path, &Self::record_path(id), &StatusChange { status }, "conference", id)
            .await?;
        info!(conference_id = %id, status = status.as_str(), "Conference status updated");
        Ok(conference)
    }

    /// Flip the featured flag; the new value is computed from the record held
    pub async fn toggle_featured(&self, conference: &Conference) -> Result<Conference> {
        let change = FeaturedChange { featured: !conference.featured };
        let updated: Conference = self
            .api
            .update_one(&Self::record_path(&conference.id), &change, "conference", &conference.id)
            .await?;
        info!(conference_id = %conference.id, featured = updated.featured, "Conference featured flag changed");
        Ok(updated)
    }

    /// Analytics are returned as the backend computed them
    pub async fn get_analytics(&self, id: &str) -> Result<AnalyticsReport> {
        let body = self
            .api
            .get(&format!("{}/analytics", Self::record_path(id)), &ListQuery::default())
            .await?;
        Ok(normalize_one(&body, "analytics"))
    }

    pub async fn get_registrations(&self, id: &str) -> Result<Vec<Registration>> {
        self.api
            .fetch_list(&format!("{}/registrations", Self::record_path(id)), &ListQuery::default(), "registrations")
            .await
    }

    /// Validate and send a conference image
    pub async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedFile> {
        upload.validate(&self.uploads)?;
        let body = self.api.upload(&format!("{}/upload-image", BASE), upload).await?;
        Ok(normalize_one(&body, "file"))
    }
}

impl ImageUploader for ConferenceService {
    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedFile> {
        ConferenceService::upload_image(self, upload).await
    }
}
