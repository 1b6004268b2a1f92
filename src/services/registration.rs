//! Registration API client

use tracing::{debug, info};
use crate::models::{CreateRegistrationRequest, EventRef, PaymentStatus, Registration, UpdateRegistrationRequest};
use crate::services::http::{path_segment, ApiClient};
use crate::services::query::ListQuery;
use crate::utils::errors::Result;
use crate::utils::logging::log_registration;

const BASE: &str = "/registrations/";

/// Registration service
#[derive(Clone, Debug)]
pub struct RegistrationService {
    api: ApiClient,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn record_path(id: &str) -> String {
        format!("{}{}/", BASE, path_segment(id))
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Registration>> {
        debug!(?query, "Loading registrations");
        self.api.fetch_list(BASE, query, "registrations").await
    }

    /// Registrations of one conference or webinar
    pub async fn get_for_event(&self, event: &EventRef) -> Result<Vec<Registration>> {
        let key = match event {
            EventRef::Conference(_) => "conferenceId",
            EventRef::Webinar(_) => "webinarId",
        };
        self.get_all(&ListQuery::new().param(key, event.id())).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Registration> {
        self.api.fetch_one(&Self::record_path(id), "registration", id).await
    }

    pub async fn create(&self, data: &CreateRegistrationRequest) -> Result<Registration> {
        let registration: Registration = self.api.create_one(BASE, data, "registration").await?;
        match registration.event() {
            Some(event) => log_registration(event.kind(), event.id(), &registration.id),
            None => info!(registration_id = %registration.id, "Registration created"),
        }
        Ok(registration)
    }

    pub async fn register_for_conference(&self, conference_id: &str, data: CreateRegistrationRequest) -> Result<Registration> {
        let request = data.for_event(&EventRef::Conference(conference_id.to_string()));
        self.create(&request).await
    }

    pub async fn register_for_webinar(&self, webinar_id: &str, data: CreateRegistrationRequest) -> Result<Registration> {
        let request = data.for_event(&EventRef::Webinar(webinar_id.to_string()));
        self.create(&request).await
    }

    pub async fn update(&self, id: &str, data: &UpdateRegistrationRequest) -> Result<Registration> {
        let registration: Registration = self.api.update_one(&Self::record_path(id), data, "registration", id).await?;
        info!(registration_id = %id, "Registration updated");
        Ok(registration)
    }

    pub async fn update_payment_status(&self, id: &str, status: PaymentStatus) -> Result<Registration> {
        let change = UpdateRegistrationRequest {
            payment_status: Some(status),
            ..Default::default()
        };
        let registration = self.update(id, &change).await?;
        info!(registration_id = %id, payment_status = status.as_str(), "Payment status updated");
        Ok(registration)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.remove(&Self::record_path(id)).await?;
        info!(registration_id = %id, "Registration deleted");
        Ok(())
    }
}
