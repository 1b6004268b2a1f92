//! Admin screen flows
//!
//! An [`AdminBoard`] backs one resource tab of the admin panel: it owns the
//! cached list, calls the resource service, reconciles the cache with every
//! answer and turns failures into the static messages the screen shows.

use serde::Serialize;
use crate::models::{
    AnalyticsReport, Conference, ConferenceStatus, Identified, PaymentStatus, Registration, UploadedFile, Webinar,
    WebinarStatus, Workshop,
};
use crate::normalize::FromDraft;
use crate::services::{
    ConferenceService, CrudService, ImageUpload, ImageUploader, ListQuery, RegistrationService, WebinarService,
    WorkshopService,
};
use crate::state::{DraftMode, FormDraft, ResourceStore, Wizard};
use crate::utils::errors::{Action, EventDeskError, FailureNotice};
use crate::utils::logging::{log_admin_action, log_api_error, log_upload};

/// Result of a screen action
pub type ActionResult<T> = std::result::Result<T, FailureNotice>;

/// Turn a failure into the notice a screen shows. Validation failures stay
/// local to the form and are not logged.
pub fn notice(action: Action, subject: &str, cause: EventDeskError) -> FailureNotice {
    let notice = FailureNotice::new(action, subject, cause);
    if !matches!(notice.cause, EventDeskError::Validation(_)) {
        log_api_error(subject, &notice.cause, &notice.message);
    }
    notice
}

/// Admin state for one resource
pub struct AdminBoard<S: CrudService> {
    service: S,
    store: ResourceStore<S::Item>,
}

impl<S: CrudService> AdminBoard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: ResourceStore::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn store(&self) -> &ResourceStore<S::Item> {
        &self.store
    }

    pub fn items(&self) -> &[S::Item] {
        self.store.items()
    }

    /// Reload the list from the backend
    pub async fn load(&mut self, query: &ListQuery) -> ActionResult<&[S::Item]> {
        let items = self
            .service
            .get_all(query)
            .await
            .map_err(|e| notice(Action::Load, S::PLURAL, e))?;
        self.store.replace_all(items);
        Ok(self.store.items())
    }

    pub async fn create(&mut self, data: &S::Create) -> ActionResult<S::Item> {
        let item = self
            .service
            .create(data)
            .await
            .map_err(|e| notice(Action::Create, S::SINGULAR, e))?;
        log_admin_action("create", S::SINGULAR, Some(item.id()), None);
        self.store.insert_created(item.clone());
        Ok(item)
    }

    pub async fn update(&mut self, id: &str, data: &S::Update) -> ActionResult<S::Item> {
        let item = self
            .service
            .update(id, data)
            .await
            .map_err(|e| notice(Action::Update, S::SINGULAR, e))?;
        log_admin_action("update", S::SINGULAR, Some(id), None);
        self.reconcile(item.clone());
        Ok(item)
    }

    pub async fn delete(&mut self, id: &str) -> ActionResult<()> {
        self.service
            .delete(id)
            .await
            .map_err(|e| notice(Action::Delete, S::SINGULAR, e))?;
        log_admin_action("delete", S::SINGULAR, Some(id), None);
        self.store.remove(id);
        Ok(())
    }

    /// Cached record, or the backend's copy when it is not cached
    pub async fn record(&self, id: &str) -> ActionResult<S::Item> {
        if let Some(item) = self.store.get(id) {
            return Ok(item.clone());
        }
        self.service
            .get_by_id(id)
            .await
            .map_err(|e| notice(Action::Load, S::SINGULAR, e))
    }

    fn reconcile(&mut self, item: S::Item) {
        if !self.store.apply_updated(item.clone()) {
            self.store.insert_created(item);
        }
    }
}

impl<S> AdminBoard<S>
where
    S: CrudService,
    S::Create: FromDraft + Serialize + for<'a> From<&'a S::Item>,
    S::Update: From<S::Create>,
{
    /// Draft for the edit wizard, seeded from the current record
    pub async fn edit_draft(&self, wizard: &Wizard, id: &str) -> ActionResult<FormDraft> {
        let record = self.record(id).await?;
        let seed: S::Create = (&record).into();
        FormDraft::edit(wizard, id, &seed).map_err(|e| notice(Action::Load, S::SINGULAR, e))
    }

    /// Validate the draft and create or update the record it describes
    pub async fn save_draft(&mut self, wizard: &Wizard, draft: &mut FormDraft) -> ActionResult<S::Item> {
        let action = match draft.mode {
            DraftMode::Create => Action::Create,
            DraftMode::Edit { .. } => Action::Update,
        };
        let request: S::Create = draft.submit(wizard).map_err(|e| notice(action, S::SINGULAR, e))?;

        match draft.mode.clone() {
            DraftMode::Create => self.create(&request).await,
            DraftMode::Edit { id } => self.update(&id, &request.into()).await,
        }
    }
}

impl<S: CrudService + ImageUploader> AdminBoard<S> {
    /// Upload an image right away and store its URL in the draft field. The
    /// field is flagged as uploading until the request settles.
    pub async fn upload_image(&self, draft: &mut FormDraft, field: &str, upload: ImageUpload) -> ActionResult<UploadedFile> {
        let filename = upload.filename.clone();
        let size = upload.size();

        draft.begin_upload(field);
        let result = self.service.upload_image(upload).await;
        log_upload(S::SINGULAR, &filename, size, result.is_ok());

        match result {
            Ok(file) => {
                draft.finish_upload(field, Some(&file));
                Ok(file)
            }
            Err(e) => {
                draft.finish_upload(field, None);
                Err(notice(Action::Upload, S::SINGULAR, e))
            }
        }
    }
}

impl AdminBoard<ConferenceService> {
    pub async fn update_status(&mut self, id: &str, status: ConferenceStatus) -> ActionResult<Conference> {
        let conference = self
            .service
            .update_status(id, status)
            .await
            .map_err(|e| notice(Action::UpdateStatus, "conference", e))?;
        log_admin_action("update_status", "conference", Some(id), Some(status.as_str()));
        self.reconcile(conference.clone());
        Ok(conference)
    }

    pub async fn toggle_featured(&mut self, id: &str) -> ActionResult<Conference> {
        let current = self.record(id).await?;
        let conference = self
            .service
            .toggle_featured(&current)
            .await
            .map_err(|e| notice(Action::ToggleFeatured, "conference", e))?;
        log_admin_action("toggle_featured", "conference", Some(id), None);
        self.reconcile(conference.clone());
        Ok(conference)
    }

    pub async fn analytics(&self, id: &str) -> ActionResult<AnalyticsReport> {
        self.service
            .get_analytics(id)
            .await
            .map_err(|e| notice(Action::LoadAnalytics, "conference", e))
    }

    pub async fn registrations(&self, id: &str) -> ActionResult<Vec<Registration>> {
        self.service
            .get_registrations(id)
            .await
            .map_err(|e| notice(Action::LoadRegistrations, "conference", e))
    }
}

impl AdminBoard<WebinarService> {
    pub async fn update_status(&mut self, id: &str, status: WebinarStatus) -> ActionResult<Webinar> {
        let webinar = self
            .service
            .update_status(id, status)
            .await
            .map_err(|e| notice(Action::UpdateStatus, "webinar", e))?;
        log_admin_action("update_status", "webinar", Some(id), Some(status.label()));
        self.reconcile(webinar.clone());
        Ok(webinar)
    }

    pub async fn toggle_featured(&mut self, id: &str) -> ActionResult<Webinar> {
        let webinar = self
            .service
            .toggle_featured(id)
            .await
            .map_err(|e| notice(Action::ToggleFeatured, "webinar", e))?;
        log_admin_action("toggle_featured", "webinar", Some(id), None);
        self.reconcile(webinar.clone());
        Ok(webinar)
    }

    pub async fn analytics(&self, id: &str) -> ActionResult<AnalyticsReport> {
        self.service
            .get_analytics(id)
            .await
            .map_err(|e| notice(Action::LoadAnalytics, "webinar", e))
    }

    pub async fn registrations(&self, id: &str) -> ActionResult<Vec<Registration>> {
        self.service
            .get_registrations(id)
            .await
            .map_err(|e| notice(Action::LoadRegistrations, "webinar", e))
    }
}

impl AdminBoard<WorkshopService> {
    pub async fn update_status(&mut self, id: &str, status: ConferenceStatus) -> ActionResult<Workshop> {
        let workshop = self
            .service
            .update_status(id, status)
            .await
            .map_err(|e| notice(Action::UpdateStatus, "workshop", e))?;
        log_admin_action("update_status", "workshop", Some(id), Some(status.as_str()));
        self.reconcile(workshop.clone());
        Ok(workshop)
    }

    pub async fn registrations(&self, id: &str) -> ActionResult<Vec<Registration>> {
        self.service
            .get_registrations(id)
            .await
            .map_err(|e| notice(Action::LoadRegistrations, "workshop", e))
    }
}

impl AdminBoard<RegistrationService> {
    pub async fn update_payment_status(&mut self, id: &str, status: PaymentStatus) -> ActionResult<Registration> {
        let registration = self
            .service
            .update_payment_status(id, status)
            .await
            .map_err(|e| notice(Action::Update, "registration", e))?;
        log_admin_action("update_payment_status", "registration", Some(id), Some(status.as_str()));
        self.reconcile(registration.clone());
        Ok(registration)
    }
}
