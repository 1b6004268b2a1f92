//! Services module
//!
//! One client per backend resource, all sharing a single [`ApiClient`].

pub mod conference;
pub mod http;
pub mod publication;
pub mod query;
pub mod registration;
pub mod research;
pub mod upload;
pub mod webinar;
pub mod workshop;

// Re-export commonly used services
pub use conference::ConferenceService;
pub use http::ApiClient;
pub use publication::PublicationService;
pub use query::ListQuery;
pub use registration::RegistrationService;
pub use research::ResearchService;
pub use upload::{ImageUpload, ImageUploader};
pub use webinar::WebinarService;
pub use workshop::WorkshopService;

use serde::Serialize;
use crate::config::settings::Settings;
use crate::middleware::AuthProvider;
use crate::models::{
    Conference, CreateConferenceRequest, CreateRegistrationRequest, CreateWebinarRequest, CreateWorkshopRequest,
    Identified, Publication, PublicationRequest, Registration, ResearchProject, ResearchProjectRequest,
    UpdateConferenceRequest, UpdateRegistrationRequest, UpdateWebinarRequest, UpdateWorkshopRequest, Webinar, Workshop,
};
use crate::utils::errors::Result;

/// Body of the status endpoints
#[derive(Debug, Serialize)]
pub(crate) struct StatusChange<S: Serialize> {
    pub status: S,
}

#[derive(Debug, Serialize)]
pub(crate) struct FeaturedChange {
    pub featured: bool,
}

/// The CRUD surface shared by every resource client
#[allow(async_fn_in_trait)]
pub trait CrudService {
    type Item: Identified + Clone;
    type Create;
    type Update;

    /// Used in user-facing messages, e.g. "conference"
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    async fn get_all(&self, query: &ListQuery) -> Result<Vec<Self::Item>>;
    async fn get_by_id(&self, id: &str) -> Result<Self::Item>;
    async fn create(&self, data: &Self::Create) -> Result<Self::Item>;
    async fn update(&self, id: &str, data: &Self::Update) -> Result<Self::Item>;
    async fn delete(&self, id: &str) -> Result<()>;
}

macro_rules! crud_service {
    ($service:ty, $item:ty, $create:ty, $update:ty, $singular:literal, $plural:literal) => {
        impl CrudService for $service {
            type Item = $item;
            type Create = $create;
            type Update = $update;

            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            async fn get_all(&self, query: &ListQuery) -> Result<Vec<$item>> {
                <$service>::get_all(self, query).await
            }

            async fn get_by_id(&self, id: &str) -> Result<$item> {
                <$service>::get_by_id(self, id).await
            }

            async fn create(&self, data: &$create) -> Result<$item> {
                <$service>::create(self, data).await
            }

            async fn update(&self, id: &str, data: &$update) -> Result<$item> {
                <$service>::update(self, id, data).await
            }

            async fn delete(&self, id: &str) -> Result<()> {
                <$service>::delete(self, id).await
            }
        }
    };
}

crud_service!(ConferenceService, Conference, CreateConferenceRequest, UpdateConferenceRequest, "conference", "conferences");
crud_service!(WebinarService, Webinar, CreateWebinarRequest, UpdateWebinarRequest, "webinar", "webinars");
crud_service!(WorkshopService, Workshop, CreateWorkshopRequest, UpdateWorkshopRequest, "workshop", "workshops");
crud_service!(RegistrationService, Registration, CreateRegistrationRequest, UpdateRegistrationRequest, "registration", "registrations");
crud_service!(ResearchService, ResearchProject, ResearchProjectRequest, ResearchProjectRequest, "research project", "research projects");
crud_service!(PublicationService, Publication, PublicationRequest, PublicationRequest, "publication", "publications");

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub conference_service: ConferenceService,
    pub webinar_service: WebinarService,
    pub registration_service: RegistrationService,
    pub research_service: ResearchService,
    pub publication_service: PublicationService,
    pub workshop_service: WorkshopService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self::from_client(ApiClient::new(settings)?, settings))
    }

    /// Build the services around an existing client
    pub fn from_client(api: ApiClient, settings: &Settings) -> Self {
        Self {
            conference_service: ConferenceService::new(api.clone(), settings.uploads.clone()),
            webinar_service: WebinarService::new(api.clone(), settings.uploads.clone()),
            registration_service: RegistrationService::new(api.clone()),
            research_service: ResearchService::new(api.clone()),
            publication_service: PublicationService::new(api.clone()),
            workshop_service: WorkshopService::new(api.clone()),
            api,
        }
    }

    /// Same services with a different token source
    pub fn with_auth(&self, auth: AuthProvider, settings: &Settings) -> Self {
        Self::from_client(self.api.clone().with_auth(auth), settings)
    }
}
