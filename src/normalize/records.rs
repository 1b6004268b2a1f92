//! Mapping tables for registrations, research listings, uploads and analytics

use serde_json::{Map, Value};
use crate::models::{
    AnalyticsReport, Attendee, CreateRegistrationRequest, PaymentStatus, Publication, Registration,
    RegistrationType, ResearchPaper, ResearchProject, UploadedFile,
};
use crate::utils::helpers::parse_date;
use super::case::label_key;
use super::payload::{AliasTable, Payload};
use super::{FromDraft, Normalize};

const REGISTRATION_ALIASES: AliasTable = &[
    ("conferenceId", &["conference"]),
    ("webinarId", &["webinar"]),
    ("registrationType", &["ticketType", "type"]),
    ("paymentStatus", &["payment", "paymentState"]),
    ("specialRequirements", &["requirements", "notes", "dietaryRequirements"]),
    ("createdAt", &["registeredAt", "registrationDate", "createdOn"]),
];

const ATTENDEE_ALIASES: AliasTable = &[
    ("name", &["fullName", "attendeeName"]),
    ("email", &["attendeeEmail", "emailAddress"]),
    ("phone", &["phoneNumber", "mobile"]),
    ("organization", &["company", "affiliation", "institution"]),
    ("jobTitle", &["position", "designation", "role"]),
];

const PROJECT_ALIASES: AliasTable = &[
    ("description", &["summary", "abstract"]),
    ("lead", &["principalInvestigator", "leadResearcher", "pi"]),
    ("authors", &["researchers", "team", "members"]),
    ("status", &["projectStatus"]),
    ("tags", &["keywords"]),
    ("link", &["url", "projectUrl"]),
    ("imageUrl", &["image", "thumbnail"]),
    ("featured", &["isFeatured"]),
];

const PUBLICATION_ALIASES: AliasTable = &[
    ("abstract", &["summary", "description"]),
    ("year", &["publicationYear"]),
    ("publishedDate", &["publicationDate", "publishedAt", "date"]),
    ("journal", &["venue", "publisher", "conference"]),
    ("tags", &["keywords"]),
    ("link", &["url"]),
    ("pdfUrl", &["pdf", "pdfLink", "fileUrl"]),
    ("featured", &["isFeatured"]),
];

const PAPER_ALIASES: AliasTable = &[
    ("abstract", &["summary", "description"]),
    ("keywords", &["tags"]),
    ("publishedDate", &["publicationDate", "publishedAt", "date"]),
    ("pdfUrl", &["pdf", "pdfLink", "fileUrl"]),
    ("downloads", &["downloadCount"]),
];

const UPLOAD_ALIASES: AliasTable = &[
    ("url", &["fileUrl", "imageUrl", "location"]),
    ("filename", &["fileName", "name"]),
    ("path", &["filePath", "key"]),
];

const ANALYTICS_ALIASES: AliasTable = &[
    ("totalRegistrations", &["registrations", "registrationCount", "totalRegistered"]),
    ("totalAttendees", &["attendees", "attendance", "attendedCount"]),
    ("revenue", &["totalRevenue"]),
    ("conversionRate", &["conversion"]),
];

impl RegistrationType {
    pub fn from_label(label: &str) -> Option<Self> {
        match label_key(label).as_str() {
            "standard" | "regular" | "general" => Some(RegistrationType::Standard),
            "early_bird" | "earlybird" => Some(RegistrationType::EarlyBird),
            "student" => Some(RegistrationType::Student),
            "speaker" => Some(RegistrationType::Speaker),
            "vip" => Some(RegistrationType::Vip),
            _ => None,
        }
    }
}

impl PaymentStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label_key(label).as_str() {
            "pending" | "unpaid" | "awaiting_payment" => Some(PaymentStatus::Pending),
            "paid" | "completed" | "success" | "succeeded" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            "failed" | "declined" => Some(PaymentStatus::Failed),
            "waived" | "free" | "complimentary" => Some(PaymentStatus::Waived),
            _ => None,
        }
    }
}

impl Normalize for Attendee {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, ATTENDEE_ALIASES);
        let mut name = p.string("name");
        if name.trim().is_empty() {
            name = [p.string("firstName"), p.string("lastName")]
                .iter()
                .map(|part| part.trim())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
        }
        Attendee {
            name,
            email: p.string("email"),
            phone: p.string("phone"),
            organization: p.string("organization"),
            job_title: p.string("jobTitle"),
        }
    }
}

impl Normalize for Registration {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, REGISTRATION_ALIASES);
        // Attendee details are either nested or flattened into the record
        let attendee = match p.object("attendee") {
            Some(nested) => Attendee::normalize(nested),
            None => Attendee::normalize(value),
        };
        Registration {
            id: p.id("id"),
            conference_id: p.id("conferenceId"),
            webinar_id: p.id("webinarId"),
            attendee,
            registration_type: RegistrationType::from_label(&p.string("registrationType")).unwrap_or_default(),
            payment_status: PaymentStatus::from_label(&p.string("paymentStatus")).unwrap_or_default(),
            special_requirements: p.string("specialRequirements"),
            created_at: p.string("createdAt"),
        }
    }
}

impl FromDraft for CreateRegistrationRequest {
    fn from_draft(value: &Value) -> Self {
        let p = Payload::new(value, REGISTRATION_ALIASES);
        let attendee = Attendee::normalize(value);
        let optional_id = |key: &str| Some(p.id(key)).filter(|id| !id.is_empty());
        CreateRegistrationRequest {
            conference_id: optional_id("conferenceId"),
            webinar_id: optional_id("webinarId"),
            name: attendee.name.trim().to_string(),
            email: attendee.email.trim().to_string(),
            phone: attendee.phone.trim().to_string(),
            organization: attendee.organization,
            job_title: attendee.job_title,
            registration_type: RegistrationType::from_label(&p.string("registrationType")).unwrap_or_default(),
            special_requirements: p.string("specialRequirements"),
        }
    }
}

impl Normalize for ResearchProject {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, PROJECT_ALIASES);
        ResearchProject {
            id: p.id("id"),
            title: p.string("title"),
            description: p.string("description"),
            lead: p.string("lead"),
            authors: p.string_list("authors"),
            category: p.string("category"),
            status: p.string("status"),
            start_date: p.string("startDate"),
            end_date: p.string("endDate"),
            tags: p.string_list("tags"),
            link: p.string("link"),
            image_url: p.string("imageUrl"),
            featured: p.bool("featured"),
        }
    }
}

impl Normalize for Publication {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, PUBLICATION_ALIASES);
        let published_date = p.string("publishedDate");
        let mut year = p.u32("year");
        if year == 0 {
            year = parse_date(&published_date)
                .and_then(|date| u32::try_from(chrono::Datelike::year(&date)).ok())
                .unwrap_or(0);
        }
        Publication {
            id: p.id("id"),
            title: p.string("title"),
            abstract_text: p.string("abstract"),
            authors: p.string_list("authors"),
            year,
            published_date,
            journal: p.string("journal"),
            category: p.string("category"),
            tags: p.string_list("tags"),
            doi: p.string("doi"),
            link: p.string("link"),
            pdf_url: p.string("pdfUrl"),
            featured: p.bool("featured"),
        }
    }
}

impl Normalize for ResearchPaper {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, PAPER_ALIASES);
        ResearchPaper {
            id: p.id("id"),
            title: p.string("title"),
            abstract_text: p.string("abstract"),
            authors: p.string_list("authors"),
            category: p.string("category"),
            keywords: p.string_list("keywords"),
            published_date: p.string("publishedDate"),
            pdf_url: p.string("pdfUrl"),
            downloads: p.u32("downloads"),
        }
    }
}

impl Normalize for UploadedFile {
    fn normalize(value: &Value) -> Self {
        let p = Payload::new(value, UPLOAD_ALIASES);
        UploadedFile {
            url: p.string("url"),
            filename: p.string("filename"),
            path: p.string("path"),
        }
    }
}

impl Normalize for AnalyticsReport {
    fn normalize(value: &Value) -> Self {
        AnalyticsReport {
            metrics: value.as_object().cloned().unwrap_or_else(Map::new),
        }
    }
}

impl AnalyticsReport {
    fn payload(&self) -> Payload<'_> {
        Payload::from_map(&self.metrics, ANALYTICS_ALIASES)
    }

    /// Any metric by canonical name, read leniently as a number
    pub fn number(&self, key: &str) -> f64 {
        self.payload()
            .get(key)
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(0.0)
    }

    pub fn total_registrations(&self) -> u32 {
        self.payload().count("totalRegistrations")
    }

    pub fn total_attendees(&self) -> u32 {
        self.payload().count("totalAttendees")
    }

    pub fn revenue(&self) -> f64 {
        self.payload().amount("revenue")
    }

    pub fn conversion_rate(&self) -> f64 {
        self.number("conversionRate")
    }
}
