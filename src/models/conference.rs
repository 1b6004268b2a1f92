//! Conference model

use serde::Serialize;
use super::common::{Speaker, Session};

/// Conference as consumed by the admin and public screens
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub conference_type: ConferenceType,
    pub status: ConferenceStatus,
    pub capacity: u32,
    pub fees: ConferenceFees,
    pub highlights: Vec<String>,
    pub image_url: String,
    pub featured: bool,
    pub speakers: Vec<Speaker>,
    pub sessions: Vec<Session>,
    pub registration_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceFees {
    pub early_bird: f64,
    pub regular: f64,
    pub student: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConferenceType {
    #[default]
    InPerson,
    Virtual,
    Hybrid,
}

/// Lifecycle status shared by conferences and workshops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConferenceStatus {
    #[default]
    Planning,
    RegistrationOpen,
    ComingSoon,
    Completed,
    Cancelled,
}

impl ConferenceType {
    pub const ALL: [ConferenceType; 3] = [ConferenceType::InPerson, ConferenceType::Virtual, ConferenceType::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConferenceType::InPerson => "in_person",
            ConferenceType::Virtual => "virtual",
            ConferenceType::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConferenceType::InPerson => "In Person",
            ConferenceType::Virtual => "Virtual",
            ConferenceType::Hybrid => "Hybrid",
        }
    }
}

impl ConferenceStatus {
    pub const ALL: [ConferenceStatus; 5] = [
        ConferenceStatus::Planning,
        ConferenceStatus::RegistrationOpen,
        ConferenceStatus::ComingSoon,
        ConferenceStatus::Completed,
        ConferenceStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConferenceStatus::Planning => "planning",
            ConferenceStatus::RegistrationOpen => "registration_open",
            ConferenceStatus::ComingSoon => "coming_soon",
            ConferenceStatus::Completed => "completed",
            ConferenceStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConferenceStatus::Planning => "Planning",
            ConferenceStatus::RegistrationOpen => "Registration Open",
            ConferenceStatus::ComingSoon => "Coming Soon",
            ConferenceStatus::Completed => "Completed",
            ConferenceStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ConferenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Conference {
    /// Seats left, if a capacity is set
    pub fn remaining_capacity(&self) -> Option<u32> {
        (self.capacity > 0).then(|| self.capacity.saturating_sub(self.registration_count))
    }

    /// Date used for ordering lists
    pub fn start(&self) -> Option<chrono::NaiveDate> {
        crate::utils::helpers::parse_date(&self.start_date)
    }
}

/// Body for `POST /api/conferences`
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateConferenceRequest {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub venue: String,
    #[serde(rename = "type")]
    pub conference_type: ConferenceType,
    pub status: ConferenceStatus,
    pub capacity: u32,
    pub early_bird_fee: f64,
    pub regular_fee: f64,
    pub student_fee: f64,
    pub highlights: Vec<String>,
    pub image_url: String,
    pub featured: bool,
    pub speakers: Vec<Speaker>,
    pub sessions: Vec<Session>,
}

/// Body for `PATCH /api/conferences/{id}`; absent fields are left untouched
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConferenceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub conference_type: Option<ConferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConferenceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_bird_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<Speaker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<Session>>,
}

impl From<&Conference> for CreateConferenceRequest {
    fn from(conference: &Conference) -> Self {
        Self {
            title: conference.title.clone(),
            description: conference.description.clone(),
            start_date: conference.start_date.clone(),
            end_date: conference.end_date.clone(),
            start_time: conference.start_time.clone(),
            end_time: conference.end_time.clone(),
            location: conference.location.clone(),
            venue: conference.venue.clone(),
            conference_type: conference.conference_type,
            status: conference.status,
            capacity: conference.capacity,
            early_bird_fee: conference.fees.early_bird,
            regular_fee: conference.fees.regular,
            student_fee: conference.fees.student,
            highlights: conference.highlights.clone(),
            image_url: conference.image_url.clone(),
            featured: conference.featured,
            speakers: conference.speakers.clone(),
            sessions: conference.sessions.clone(),
        }
    }
}

impl From<CreateConferenceRequest> for UpdateConferenceRequest {
    fn from(request: CreateConferenceRequest) -> Self {
        Self {
            title: Some(request.title),
            description: Some(request.description),
            start_date: Some(request.start_date),
            end_date: Some(request.end_date),
            start_time: Some(request.start_time),
            end_time: Some(request.end_time),
            location: Some(request.location),
            venue: Some(request.venue),
            conference_type: Some(request.conference_type),
            status: Some(request.status),
            capacity: Some(request.capacity),
            early_bird_fee: Some(request.early_bird_fee),
            regular_fee: Some(request.regular_fee),
            student_fee: Some(request.student_fee),
            highlights: Some(request.highlights),
            image_url: Some(request.image_url),
            featured: Some(request.featured),
            speakers: Some(request.speakers),
            sessions: Some(request.sessions),
        }
    }
}
