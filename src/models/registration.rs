//! Registration model

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    /// Empty when the registration targets a webinar
    pub conference_id: String,
    /// Empty when the registration targets a conference
    pub webinar_id: String,
    pub attendee: Attendee,
    pub registration_type: RegistrationType,
    pub payment_status: PaymentStatus,
    pub special_requirements: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationType {
    #[default]
    Standard,
    EarlyBird,
    Student,
    Speaker,
    Vip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
    Failed,
    Waived,
}

impl RegistrationType {
    pub const ALL: [RegistrationType; 5] = [
        RegistrationType::Standard,
        RegistrationType::EarlyBird,
        RegistrationType::Student,
        RegistrationType::Speaker,
        RegistrationType::Vip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::Standard => "standard",
            RegistrationType::EarlyBird => "early_bird",
            RegistrationType::Student => "student",
            RegistrationType::Speaker => "speaker",
            RegistrationType::Vip => "vip",
        }
    }
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 5] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Refunded,
        PaymentStatus::Failed,
        PaymentStatus::Waived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Waived => "waived",
        }
    }
}

/// Which event a registration is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRef {
    Conference(String),
    Webinar(String),
}

impl EventRef {
    pub fn id(&self) -> &str {
        match self {
            EventRef::Conference(id) | EventRef::Webinar(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EventRef::Conference(_) => "conference",
            EventRef::Webinar(_) => "webinar",
        }
    }
}

impl Registration {
    pub fn event(&self) -> Option<EventRef> {
        if !self.conference_id.is_empty() {
            Some(EventRef::Conference(self.conference_id.clone()))
        } else if !self.webinar_id.is_empty() {
            Some(EventRef::Webinar(self.webinar_id.clone()))
        } else {
            None
        }
    }
}

/// Body for `POST /registrations/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webinar_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub job_title: String,
    pub registration_type: RegistrationType,
    pub special_requirements: String,
}

impl CreateRegistrationRequest {
    /// Point the request at an event, clearing any previous target
    pub fn for_event(mut self, event: &EventRef) -> Self {
        match event {
            EventRef::Conference(id) => {
                self.conference_id = Some(id.clone());
                self.webinar_id = None;
            }
            EventRef::Webinar(id) => {
                self.webinar_id = Some(id.clone());
                self.conference_id = None;
            }
        }
        self
    }
}

/// Partial registration update; used by admins to settle payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_type: Option<RegistrationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}
