//! Research project API client

use tracing::{debug, info};
use crate::models::{ResearchProject, ResearchProjectRequest};
use crate::services::http::{path_segment, ApiClient};
use crate::services::query::ListQuery;
use crate::utils::errors::Result;

const BASE: &str = "/research-projects/";

/// Research project service
#[derive(Clone, Debug)]
pub struct ResearchService {
    api: ApiClient,
}

impl ResearchService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn record_path(id: &str) -> String {
        format!("{}{}/", BASE, path_segment(id))
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<ResearchProject>> {
        debug!(?query, "Loading research projects");
        self.api.fetch_list(BASE, query, "projects").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ResearchProject> {
        self.api.fetch_one(&Self::record_path(id), "project", id).await
    }

    pub async fn create(&self, data: &ResearchProjectRequest) -> Result<ResearchProject> {
        let project: ResearchProject = self.api.create_one(BASE, data, "project").await?;
        info!(project_id = %project.id, "Research project created");
        Ok(project)
    }

    pub async fn update(&self, id: &str, data: &ResearchProjectRequest) -> Result<ResearchProject> {
        let project: ResearchProject = self.api.update_one(&Self::record_path(id), data, "project", id).await?;
        info!(project_id = %id, "Research project updated");
        Ok(project)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.remove(&Self::record_path(id)).await?;
        info!(project_id = %id, "Research project deleted");
        Ok(())
    }
}
