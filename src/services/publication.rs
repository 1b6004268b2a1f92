//! Publication and research paper API client
//!
//! Publications are editable; research papers are a read-only listing
//! served from a separate endpoint.

use tracing::{debug, info};
use crate::models::{Publication, PublicationRequest, ResearchPaper};
use crate::services::http::{path_segment, ApiClient};
use crate::services::query::ListQuery;
use crate::utils::errors::Result;

const BASE: &str = "/publications/";
const PAPERS: &str = "/research-papers/";

/// Publication service
#[derive(Clone, Debug)]
pub struct PublicationService {
    api: ApiClient,
}

impl PublicationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn record_path(id: &str) -> String {
        format!("{}{}/", BASE, path_segment(id))
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Publication>> {
        debug!(?query, "Loading publications");
        self.api.fetch_list(BASE, query, "publications").await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Publication> {
        self.api.fetch_one(&Self::record_path(id), "publication", id).await
    }

    pub async fn get_research_papers(&self, query: &ListQuery) -> Result<Vec<ResearchPaper>> {
        self.api.fetch_list(PAPERS, query, "papers").await
    }

    pub async fn get_research_paper(&self, id: &str) -> Result<ResearchPaper> {
        self.api.fetch_one(&format!("{}{}/", PAPERS, path_segment(id)), "paper", id).await
    }

    pub async fn create(&self, data: &PublicationRequest) -> Result<Publication> {
        let publication: Publication = self.api.create_one(BASE, data, "publication").await?;
        info!(publication_id = %publication.id, "Publication created");
        Ok(publication)
    }

    pub async fn update(&self, id: &str, data: &PublicationRequest) -> Result<Publication> {
        let publication: Publication = self.api.update_one(&Self::record_path(id), data, "publication", id).await?;
        info!(publication_id = %id, "Publication updated");
        Ok(publication)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.remove(&Self::record_path(id)).await?;
        info!(publication_id = %id, "Publication deleted");
        Ok(())
    }
}
