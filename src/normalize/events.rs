//! Mapping tables for conferences, webinars and workshops

use serde_json::Value;
use crate::models::{
    Conference, ConferenceFees, ConferenceStatus, ConferenceType, CreateConferenceRequest,
    CreateWebinarRequest, CreateWorkshopRequest, Session, Speaker, Webinar, WebinarStatus,
    WebinarType, Workshop,
};
use super::case::label_key;
use super::payload::{AliasTable, Payload};
use super::{FromDraft, Normalize};

const CONFERENCE_ALIASES: AliasTable = &[
    ("description", &["summary", "details"]),
    ("startDate", &["date", "start"]),
    ("endDate", &["end"]),
    ("location", &["city", "address"]),
    ("venue", &["venueName"]),
    ("type", &["conferenceType", "format", "eventType"]),
    ("capacity", &["maxAttendees", "maxParticipants", "maxCapacity"]),
    ("earlyBirdFee", &["earlyBirdPrice"]),
    ("regularFee", &["regularPrice", "fee", "price"]),
    ("studentFee", &["studentPrice"]),
    ("highlights", &["keyHighlights"]),
    ("imageUrl", &["image", "bannerImage", "banner", "coverImage", "thumbnail"]),
    ("featured", &["isFeatured"]),
    ("sessions", &["agenda", "schedule"]),
    ("registrationCount", &["registrationsCount", "registeredCount", "attendeeCount", "registrations"]),
];

const FEE_ALIASES: AliasTable = &[
    ("earlyBird", &["earlyBirdFee", "earlyBirdPrice", "early"]),
    ("regular", &["regularFee", "regularPrice", "standard"]),
    ("student", &["studentFee", "studentPrice"]),
];

const SPEAKER_ALIASES: AliasTable = &[
    ("name", &["fullName"]),
    ("title", &["position", "role", "designation"]),
    ("organization", &["company", "affiliation", "institution"]),
    ("bio", &["biography", "about"]),
    ("imageUrl", &["image", "photo", "avatar"]),
];

const SESSION_ALIASES: AliasTable = &[
    ("title", &["name", "topic"]),
    ("time", &["startTime", "slot"]),
    ("speaker", &["speakerName", "presenter"]),
];

const WEBINAR_ALIASES: AliasTable = &[
    ("category", &["topic"]),
    ("date", &["startDate", "scheduledDate", "webinarDate"]),
    ("time", &["startTime", "scheduledTime"]),
    ("duration", &["durationMinutes", "length"]),
    ("type", &["webinarType", "format"]),
    ("languages", &["language"]),
    ("targetAudience", &["audience"]),
    ("learningObjectives", &["objectives", "outcomes"]),
    ("registrationCount", &["registrationsCount", "registeredCount", "attendeeCount", "registrations"]),
    ("capacity", &["maxAttendees", "maxParticipants", "seats"]),
    ("imageUrl", &["image", "thumbnail", "coverImage", "banner"]),
    ("featured", &["isFeatured"]),
    ("meetingLink", &["meetingUrl", "joinUrl", "zoomLink", "link"]),
    ("recordingUrl", &["recording", "recordingLink"]),
];

const WORKSHOP_ALIASES: AliasTable = &[
    ("date", &["startDate"]),
    ("time", &["startTime"]),
    ("location", &["venue"]),
    ("facilitator", &["instructor", "host", "trainer"]),
    ("capacity", &["maxAttendees", "maxParticipants", "seats"]),
    ("registrationCount", &["registrationsCount", "registeredCount", "registrations"]),
    ("imageUrl", &["image", "thumbnail"]),
];

impl ConferenceType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label_key(label).as_str() {
            "in_person" | "inperson" | "onsite" | "on_site" | "physical" => Some(ConferenceType::InPerson),
            "virtual" | "online" => Some(ConferenceType::Virtual),
            "hybrid" => Some(ConferenceType::Hybrid),
            _ => None,
        }
    }
}

impl ConferenceStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label_key(label).as_str() {
            "planning" | "draft" | "planned" => Some(ConferenceStatus::Planning),
            "registration_open" | "open" => Some(ConferenceStatus::RegistrationOpen),
            "coming_soon" | "upcoming" => Some(ConferenceStatus::ComingSoon),
            "completed" | "complete" | "past" | "finished" => Some(ConferenceStatus::Completed),
            "cancelled" | "canceled" => Some(ConferenceStatus::Cancelled),
            _ => None,
        }
    }
}

impl WebinarStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label_key(label).as_str() {
            "planning" | "draft" | "scheduled" => Some(WebinarStatus::Planning),
            "registration_open" | "open" | "upcoming" => Some(WebinarStatus::RegistrationOpen),
            "live" | "in_progress" | "ongoing" => Some(WebinarStatus::Live),
            "completed" | "complete" | "past" | "ended" => Some(WebinarStatus::Completed),
            "cancelled" | "canceled" => Some(WebinarStatus::Cancelled),
            _ => None,
        }
    }
}

impl WebinarType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label_key(label).as_str() {
            "live" => Some(WebinarType::Live),
            "recorded" | "on_demand" | "ondemand" => Some(WebinarType::Recorded),
            "hybrid" => Some(WebinarType::Hybrid),
            _ => None,
        }
    }
}

impl Normalize for Speaker {
    fn normalize(value: &Value) -> Self {
        if let Value::String(name) = value {
            return Speaker { name: name.clone(), ..Default::default() };
        }
        let p = Payload::new(value, SPEAKER_ALIASES);
        Speaker {
            name: p.string("name"),
            title: p.string("title"),
            organization: p.string("organization"),
            bio: p.string("bio"),
            image_url: p.string("imageUrl"),
        }
    }
}

impl Normalize for Session {
    fn normalize(value: &Value) -> Self {
        if let Value::String(title) = value {
            return Session { title: title.clone(), ..Default::default() };
        }
        let p = Payload::new(value, SESSION_ALIASES);
        Session {
            title: p.string("title"),
            time: p.string("time"),
            speaker: p.string("speaker"),
            description: p.string("description"),
        }
    }
}

/// String or object entries; anything else is dropped
fn entries<T: Normalize>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.is_object() || item.is_string())
        .map(T::normalize)
        .collect()
}

fn fees(p: &Payload<'_>) -> ConferenceFees {
    match p.object("fees") {
        Some(nested) => {
            let f = Payload::new(nested, FEE_ALIASES);
            ConferenceFees {
                early_bird: f.amount("earlyBird"),
                regular: f.amount("regular"),
                student: f.amount("student"),
            }
        }
        None => ConferenceFees {
            early_bird: p.amount("earlyBirdFee"),
            regular: p.amount("regularFee"),
            student: p.amount("studentFee"),
        },
    }
}

impl Normalize for Conference {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, CONFERENCE_ALIASES);
        Conference {
            id: p.id("id"),
            title: p.string("title"),
            description: p.string("description"),
            start_date: p.string("startDate"),
            end_date: p.string("endDate"),
            start_time: p.string("startTime"),
            end_time: p.string("endTime"),
            location: p.string("location"),
            venue: p.string("venue"),
            conference_type: ConferenceType::from_label(&p.string("type")).unwrap_or_default(),
            status: ConferenceStatus::from_label(&p.string("status")).unwrap_or_default(),
            capacity: p.u32("capacity"),
            fees: fees(&p),
            highlights: p.string_list("highlights"),
            image_url: p.string("imageUrl"),
            featured: p.bool("featured"),
            speakers: entries(p.items("speakers")),
            sessions: entries(p.items("sessions")),
            registration_count: p.count("registrationCount"),
        }
    }
}

impl FromDraft for CreateConferenceRequest {
    fn from_draft(value: &Value) -> Self {
        let p = Payload::new(value, CONFERENCE_ALIASES);
        let fees = fees(&p);
        CreateConferenceRequest {
            title: p.string("title").trim().to_string(),
            description: p.string("description"),
            start_date: p.string("startDate"),
            end_date: p.string("endDate"),
            start_time: p.string("startTime"),
            end_time: p.string("endTime"),
            location: p.string("location"),
            venue: p.string("venue"),
            conference_type: ConferenceType::from_label(&p.string("type")).unwrap_or_default(),
            status: ConferenceStatus::from_label(&p.string("status")).unwrap_or_default(),
            capacity: p.u32("capacity"),
            early_bird_fee: fees.early_bird,
            regular_fee: fees.regular,
            student_fee: fees.student,
            highlights: non_blank(p.string_list("highlights")),
            image_url: p.string("imageUrl"),
            featured: p.bool("featured"),
            speakers: entries(p.items("speakers")),
            sessions: entries(p.items("sessions")),
        }
    }
}

impl Normalize for Webinar {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, WEBINAR_ALIASES);
        Webinar {
            id: p.id("id"),
            title: p.string("title"),
            description: p.string("description"),
            category: p.string("category"),
            date: p.string("date"),
            time: p.string("time"),
            duration: p.string("duration"),
            status: WebinarStatus::from_label(&p.string("status")).unwrap_or_default(),
            webinar_type: WebinarType::from_label(&p.string("type")).unwrap_or_default(),
            speakers: entries(p.items("speakers")),
            tags: p.string_list("tags"),
            languages: p.string_list("languages"),
            target_audience: p.string_list("targetAudience"),
            learning_objectives: p.string_list("learningObjectives"),
            registration_count: p.count("registrationCount"),
            capacity: p.u32("capacity"),
            image_url: p.string("imageUrl"),
            featured: p.bool("featured"),
            meeting_link: p.string("meetingLink"),
            recording_url: p.string("recordingUrl"),
        }
    }
}

impl FromDraft for CreateWebinarRequest {
    fn from_draft(value: &Value) -> Self {
        let p = Payload::new(value, WEBINAR_ALIASES);
        CreateWebinarRequest {
            title: p.string("title").trim().to_string(),
            description: p.string("description"),
            category: p.string("category"),
            date: p.string("date"),
            time: p.string("time"),
            duration: p.string("duration"),
            status: WebinarStatus::from_label(&p.string("status")).unwrap_or_default(),
            webinar_type: WebinarType::from_label(&p.string("type")).unwrap_or_default(),
            speakers: entries::<Speaker>(p.items("speakers"))
                .into_iter()
                .filter(|s| !s.name.trim().is_empty())
                .collect(),
            tags: non_blank(p.string_list("tags")),
            languages: non_blank(p.string_list("languages")),
            target_audience: non_blank(p.string_list("targetAudience")),
            learning_objectives: non_blank(p.string_list("learningObjectives")),
            capacity: p.u32("capacity"),
            image_url: p.string("imageUrl"),
            featured: p.bool("featured"),
            meeting_link: p.string("meetingLink"),
        }
    }
}

impl Normalize for Workshop {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, WORKSHOP_ALIASES);
        Workshop {
            id: p.id("id"),
            title: p.string("title"),
            description: p.string("description"),
            date: p.string("date"),
            time: p.string("time"),
            duration: p.string("duration"),
            location: p.string("location"),
            facilitator: p.string("facilitator"),
            capacity: p.u32("capacity"),
            registration_count: p.count("registrationCount"),
            status: ConferenceStatus::from_label(&p.string("status")).unwrap_or_default(),
            image_url: p.string("imageUrl"),
        }
    }
}

impl FromDraft for CreateWorkshopRequest {
    fn from_draft(value: &Value) -> Self {
        let p = Payload::new(value, WORKSHOP_ALIASES);
        CreateWorkshopRequest {
            title: p.string("title").trim().to_string(),
            description: p.string("description"),
            date: p.string("date"),
            time: p.string("time"),
            duration: p.string("duration"),
            location: p.string("location"),
            facilitator: p.string("facilitator"),
            capacity: p.u32("capacity"),
            status: ConferenceStatus::from_label(&p.string("status")).unwrap_or_default(),
            image_url: p.string("imageUrl"),
        }
    }
}

/// Drafts keep empty rows for list inputs the user has not filled in
fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
