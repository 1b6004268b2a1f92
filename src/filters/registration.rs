//! Registration filters; registrations are bucketed by payment status

use chrono::NaiveDate;
use crate::models::{EventRef, PaymentStatus, Registration, RegistrationType};
use crate::utils::helpers::parse_date;
use super::{matches_search, Bucket, Bucketed, Dated, Searchable};

impl Bucket for PaymentStatus {
    const ALL: &'static [Self] = &PaymentStatus::ALL;

    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Waived => "Waived",
        }
    }
}

impl Bucketed for Registration {
    type Bucket = PaymentStatus;

    fn bucket(&self) -> PaymentStatus {
        self.payment_status
    }
}

impl Searchable for Registration {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.attendee.name.as_str(),
            self.attendee.email.as_str(),
            self.attendee.organization.as_str(),
        ]
    }
}

impl Dated for Registration {
    fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.created_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationFilter {
    pub payment_status: Option<PaymentStatus>,
    pub registration_type: Option<RegistrationType>,
    pub event: Option<EventRef>,
    pub search: String,
}

impl RegistrationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn registration_type(mut self, registration_type: RegistrationType) -> Self {
        self.registration_type = Some(registration_type);
        self
    }

    pub fn event(mut self, event: EventRef) -> Self {
        self.event = Some(event);
        self
    }

    pub fn search(mut self, query: &str) -> Self {
        self.search = query.to_string();
        self
    }

    pub fn matches(&self, registration: &Registration) -> bool {
        self.payment_status.map_or(true, |s| registration.payment_status == s)
            && self.registration_type.map_or(true, |t| registration.registration_type == t)
            && self.event.as_ref().map_or(true, |e| registration.event().as_ref() == Some(e))
            && matches_search(registration, &self.search)
    }

    pub fn apply<'a>(&self, registrations: &'a [Registration]) -> Vec<&'a Registration> {
        registrations.iter().filter(|r| self.matches(r)).collect()
    }
}
