//! Public site flows: browsing the program and registering for events

use tracing::{debug, info};
use crate::filters::{
    bucket_counts, search, sort_by_date, BucketCounts, ConferenceBucket, ConferenceFilter, WebinarBucket,
    WebinarFilter,
};
use crate::models::{
    Conference, CreateRegistrationRequest, EventRef, Publication, Registration, ResearchPaper, ResearchProject,
    Webinar, Workshop,
};
use crate::services::{ListQuery, ServiceFactory};
use crate::state::{FormDraft, WizardManager, REGISTRATION_WIZARD};
use crate::utils::errors::Action;
use super::admin::{notice, ActionResult};

/// Everything the landing page shows. Each list loads independently, so one
/// failing endpoint does not hide the others.
#[derive(Debug)]
pub struct Overview {
    pub conferences: ActionResult<Vec<Conference>>,
    pub webinars: ActionResult<Vec<Webinar>>,
    pub featured_webinars: ActionResult<Vec<Webinar>>,
    pub workshops: ActionResult<Vec<Workshop>>,
}

/// Bucket counts of the program, as printed by the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSnapshot {
    pub conferences: Option<BucketCounts<ConferenceBucket>>,
    pub webinars: Option<BucketCounts<WebinarBucket>>,
    pub workshops: Option<usize>,
}

impl Overview {
    pub fn snapshot(&self) -> ProgramSnapshot {
        ProgramSnapshot {
            conferences: self.conferences.as_ref().ok().map(|items| bucket_counts(items)),
            webinars: self.webinars.as_ref().ok().map(|items| bucket_counts(items)),
            workshops: self.workshops.as_ref().ok().map(Vec::len),
        }
    }

    /// Messages of the lists that failed to load
    pub fn failures(&self) -> Vec<&str> {
        [
            self.conferences.as_ref().err(),
            self.webinars.as_ref().err(),
            self.featured_webinars.as_ref().err(),
            self.workshops.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .map(|notice| notice.message.as_str())
        .collect()
    }
}

/// Read-side flows of the public site
#[derive(Debug, Clone)]
pub struct PublicCatalog {
    services: ServiceFactory,
    wizards: WizardManager,
}

impl PublicCatalog {
    pub fn new(services: ServiceFactory) -> Self {
        Self {
            services,
            wizards: WizardManager::new(),
        }
    }

    /// Load the landing page lists concurrently
    pub async fn overview(&self) -> Overview {
        let query = ListQuery::default();
        let (conferences, webinars, featured_webinars, workshops) = futures::join!(
            self.services.conference_service.get_all(&query),
            self.services.webinar_service.get_all(&query),
            self.services.webinar_service.get_featured(),
            self.services.workshop_service.get_all(&query),
        );

        let overview = Overview {
            conferences: conferences.map_err(|e| notice(Action::Load, "conferences", e)),
            webinars: webinars.map_err(|e| notice(Action::Load, "webinars", e)),
            featured_webinars: featured_webinars.map_err(|e| notice(Action::Load, "featured webinars", e)),
            workshops: workshops.map_err(|e| notice(Action::Load, "workshops", e)),
        };
        debug!(failures = overview.failures().len(), "Overview loaded");
        overview
    }

    /// Conferences matching the filter, soonest first
    pub async fn browse_conferences(&self, filter: &ConferenceFilter) -> ActionResult<Vec<Conference>> {
        let all = self
            .services
            .conference_service
            .get_all(&ListQuery::default())
            .await
            .map_err(|e| notice(Action::Load, "conferences", e))?;
        let mut found = filter.apply(&all);
        sort_by_date(&mut found, true);
        Ok(found.into_iter().cloned().collect())
    }

    /// Webinars matching the filter, soonest first
    pub async fn browse_webinars(&self, filter: &WebinarFilter) -> ActionResult<Vec<Webinar>> {
        let all = self
            .services
            .webinar_service
            .get_all(&ListQuery::default())
            .await
            .map_err(|e| notice(Action::Load, "webinars", e))?;
        let mut found = filter.apply(&all);
        sort_by_date(&mut found, true);
        Ok(found.into_iter().cloned().collect())
    }

    pub async fn conference(&self, id: &str) -> ActionResult<Conference> {
        self.services
            .conference_service
            .get_by_id(id)
            .await
            .map_err(|e| notice(Action::Load, "conference", e))
    }

    pub async fn webinar(&self, id: &str) -> ActionResult<Webinar> {
        self.services
            .webinar_service
            .get_by_id(id)
            .await
            .map_err(|e| notice(Action::Load, "webinar", e))
    }

    /// A fresh registration form
    pub fn registration_draft(&self) -> ActionResult<FormDraft> {
        self.wizards
            .wizard(REGISTRATION_WIZARD)
            .map(FormDraft::new)
            .map_err(|e| notice(Action::Register, "event", e))
    }

    /// Validate the registration form and register the attendee for the event
    pub async fn register(&self, event: &EventRef, draft: &mut FormDraft) -> ActionResult<Registration> {
        let subject = event.kind();
        let wizard = self
            .wizards
            .wizard(REGISTRATION_WIZARD)
            .map_err(|e| notice(Action::Register, subject, e))?;
        let request: CreateRegistrationRequest = draft
            .submit(wizard)
            .map_err(|e| notice(Action::Register, subject, e))?;

        let registrations = &self.services.registration_service;
        let result = match event {
            EventRef::Conference(id) => registrations.register_for_conference(id, request).await,
            EventRef::Webinar(id) => registrations.register_for_webinar(id, request).await,
        };
        let registration = result.map_err(|e| notice(Action::Register, subject, e))?;
        info!(event = subject, event_id = event.id(), registration_id = %registration.id, "Attendee registered");
        Ok(registration)
    }

    pub async fn research_projects(&self, query: &str) -> ActionResult<Vec<ResearchProject>> {
        let all = self
            .services
            .research_service
            .get_all(&ListQuery::default())
            .await
            .map_err(|e| notice(Action::Load, "research projects", e))?;
        Ok(search(&all, query).into_iter().cloned().collect())
    }

    pub async fn research_project(&self, id: &str) -> ActionResult<ResearchProject> {
        self.services
            .research_service
            .get_by_id(id)
            .await
            .map_err(|e| notice(Action::Load, "research project", e))
    }

    /// Publications matching the query, newest first
    pub async fn publications(&self, query: &str) -> ActionResult<Vec<Publication>> {
        let all = self
            .services
            .publication_service
            .get_all(&ListQuery::default())
            .await
            .map_err(|e| notice(Action::Load, "publications", e))?;
        let mut found = search(&all, query);
        sort_by_date(&mut found, false);
        Ok(found.into_iter().cloned().collect())
    }

    pub async fn research_papers(&self, query: &str) -> ActionResult<Vec<ResearchPaper>> {
        let all = self
            .services
            .publication_service
            .get_research_papers(&ListQuery::default())
            .await
            .map_err(|e| notice(Action::Load, "research papers", e))?;
        Ok(search(&all, query).into_iter().cloned().collect())
    }

    pub async fn research_paper(&self, id: &str) -> ActionResult<ResearchPaper> {
        self.services
            .publication_service
            .get_research_paper(id)
            .await
            .map_err(|e| notice(Action::Load, "research paper", e))
    }
}

impl ProgramSnapshot {
    /// Lines printed by the binary
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.conferences {
            Some(counts) => lines.push(format_counts("Conferences", counts)),
            None => lines.push("Conferences: unavailable".to_string()),
        }
        match &self.webinars {
            Some(counts) => lines.push(format_counts("Webinars", counts)),
            None => lines.push("Webinars: unavailable".to_string()),
        }
        match self.workshops {
            Some(total) => lines.push(format!("Workshops: {} total", total)),
            None => lines.push("Workshops: unavailable".to_string()),
        }
        lines
    }
}

fn format_counts<B: crate::filters::Bucket>(title: &str, counts: &BucketCounts<B>) -> String {
    let parts: Vec<String> = counts
        .counts
        .iter()
        .map(|(bucket, count)| format!("{} {}", bucket.label(), count))
        .collect();
    format!("{}: {} total ({})", title, counts.total, parts.join(", "))
}
