//! Workshop API client

use tracing::{debug, info};
use crate::models::{ConferenceStatus, CreateWorkshopRequest, Registration, UpdateWorkshopRequest, Workshop};
use crate::services::http::{path_segment, ApiClient};
use crate::services::query::ListQuery;
use crate::services::StatusChange;
use crate::utils::errors::Result;

const BASE: &str = "/workshops/";

/// Workshop service
#[derive(Clone, Debug)]
pub struct WorkshopService {
    api: ApiClient,
}

impl WorkshopService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn record_path(id: &str) -> String {
        format!("{}{}/", BASE, path_segment(id))
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Workshop>> {
        debug!(?query, "Loading workshops");
        self.api.fetch_list(BASE, query, "workshops").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Workshop> {
        self.api.fetch_one(&Self::record_path(id), "workshop", id).await
    }

    pub async fn create(&self, data: &CreateWorkshopRequest) -> Result<Workshop> {
        let workshop: Workshop = self.api.create_one(BASE, data, "workshop").await?;
        info!(workshop_id = %workshop.id, title = %workshop.title, "Workshop created");
        Ok(workshop)
    }

    pub async fn update(&self, id: &str, data: &UpdateWorkshopRequest) -> Result<Workshop> {
        let workshop: Workshop = self.api.update_one(&Self::record_path(id), data, "workshop", id).await?;
        info!(workshop_id = %id, "Workshop updated");
        Ok(workshop)
    }

    /// Workshops have no status sub-resource; the status is patched on the record
    pub async fn update_status(&self, id: &str, status: ConferenceStatus) -> Result<Workshop> {
        let workshop: Workshop = self
            .api
            .update_one(&Self::record_path(id), &StatusChange { status }, "workshop", id)
            .await?;
        info!(workshop_id = %id, status = status.as_str(), "Workshop status updated");
        Ok(workshop)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.remove(&Self::record_path(id)).await?;
        info!(workshop_id = %id, "Workshop deleted");
        Ok(())
    }

    pub async fn get_registrations(&self, id: &str) -> Result<Vec<Registration>> {
        self.api
            .fetch_list(&format!("{}registrations/", Self::record_path(id)), &ListQuery::default(), "registrations")
            .await
    }
}
