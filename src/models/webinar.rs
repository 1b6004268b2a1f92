//! Webinar model

use serde::Serialize;
use super::common::Speaker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Webinar {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub status: WebinarStatus,
    #[serde(rename = "type")]
    pub webinar_type: WebinarType,
    pub speakers: Vec<Speaker>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub target_audience: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub registration_count: u32,
    pub capacity: u32,
    pub image_url: String,
    pub featured: bool,
    pub meeting_link: String,
    pub recording_url: String,
}

/// Webinar statuses travel as display labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
pub enum WebinarStatus {
    #[default]
    Planning,
    #[serde(rename = "Registration Open")]
    RegistrationOpen,
    Live,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum WebinarType {
    #[default]
    Live,
    Recorded,
    Hybrid,
}

impl WebinarStatus {
    pub const ALL: [WebinarStatus; 5] = [
        WebinarStatus::Planning,
        WebinarStatus::RegistrationOpen,
        WebinarStatus::Live,
        WebinarStatus::Completed,
        WebinarStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WebinarStatus::Planning => "Planning",
            WebinarStatus::RegistrationOpen => "Registration Open",
            WebinarStatus::Live => "Live",
            WebinarStatus::Completed => "Completed",
            WebinarStatus::Cancelled => "Cancelled",
        }
    }

    pub fn accepts_registrations(&self) -> bool {
        matches!(self, WebinarStatus::RegistrationOpen | WebinarStatus::Live)
    }
}

impl std::fmt::Display for WebinarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl WebinarType {
    pub const ALL: [WebinarType; 3] = [WebinarType::Live, WebinarType::Recorded, WebinarType::Hybrid];

    pub fn label(&self) -> &'static str {
        match self {
            WebinarType::Live => "Live",
            WebinarType::Recorded => "Recorded",
            WebinarType::Hybrid => "Hybrid",
        }
    }
}

impl Webinar {
    pub fn start(&self) -> Option<chrono::NaiveDate> {
        crate::utils::helpers::parse_date(&self.date)
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.registration_count >= self.capacity
    }
}

/// Body for `POST /webinars/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebinarRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub status: WebinarStatus,
    #[serde(rename = "type")]
    pub webinar_type: WebinarType,
    pub speakers: Vec<Speaker>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub target_audience: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub capacity: u32,
    pub image_url: String,
    pub featured: bool,
    pub meeting_link: String,
}

/// Body for `PATCH /webinars/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebinarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebinarStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub webinar_type: Option<WebinarType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
}

impl From<&Webinar> for CreateWebinarRequest {
    fn from(webinar: &Webinar) -> Self {
        Self {
            title: webinar.title.clone(),
            description: webinar.description.clone(),
            category: webinar.category.clone(),
            date: webinar.date.clone(),
            time: webinar.time.clone(),
            duration: webinar.duration.clone(),
            status: webinar.status,
            webinar_type: webinar.webinar_type,
            speakers: webinar.speakers.clone(),
            tags: webinar.tags.clone(),
            languages: webinar.languages.clone(),
            target_audience: webinar.target_audience.clone(),
            learning_objectives: webinar.learning_objectives.clone(),
            capacity: webinar.capacity,
            image_url: webinar.image_url.clone(),
            featured: webinar.featured,
            meeting_link: webinar.meeting_link.clone(),
        }
    }
}

impl From<CreateWebinarRequest> for UpdateWebinarRequest {
    fn from(request: CreateWebinarRequest) -> Self {
        Self {
            title: Some(request.title),
            description: Some(request.description),
            category: Some(request.category),
            date: Some(request.date),
            time: Some(request.time),
            duration: Some(request.duration),
            status: Some(request.status),
            webinar_type: Some(request.webinar_type),
            speakers: Some(request.speakers),
            tags: Some(request.tags),
            languages: Some(request.languages),
            target_audience: Some(request.target_audience),
            learning_objectives: Some(request.learning_objectives),
            capacity: Some(request.capacity),
            image_url: Some(request.image_url),
            featured: Some(request.featured),
            meeting_link: Some(request.meeting_link),
            recording_url: None,
        }
    }
}
