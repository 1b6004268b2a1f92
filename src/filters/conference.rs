//! Conference buckets and filters

use chrono::NaiveDate;
use crate::models::{Conference, ConferenceStatus, ConferenceType};
use super::{matches_search, Bucket, Bucketed, Dated, Searchable};

/// Tabs of the conference list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConferenceBucket {
    Upcoming,
    Past,
    Cancelled,
}

impl ConferenceBucket {
    /// Every status maps to exactly one bucket
    pub fn from_status(status: ConferenceStatus) -> Self {
        match status {
            ConferenceStatus::Planning | ConferenceStatus::RegistrationOpen | ConferenceStatus::ComingSoon => {
                ConferenceBucket::Upcoming
            }
            ConferenceStatus::Completed => ConferenceBucket::Past,
            ConferenceStatus::Cancelled => ConferenceBucket::Cancelled,
        }
    }

    pub fn statuses(&self) -> Vec<ConferenceStatus> {
        ConferenceStatus::ALL
            .into_iter()
            .filter(|status| Self::from_status(*status) == *self)
            .collect()
    }
}

impl Bucket for ConferenceBucket {
    const ALL: &'static [Self] = &[ConferenceBucket::Upcoming, ConferenceBucket::Past, ConferenceBucket::Cancelled];

    fn label(&self) -> &'static str {
        match self {
            ConferenceBucket::Upcoming => "Upcoming",
            ConferenceBucket::Past => "Past",
            ConferenceBucket::Cancelled => "Cancelled",
        }
    }
}

impl Bucketed for Conference {
    type Bucket = ConferenceBucket;

    fn bucket(&self) -> ConferenceBucket {
        ConferenceBucket::from_status(self.status)
    }
}

impl Searchable for Conference {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.venue.as_str(),
        ];
        fields.extend(self.speakers.iter().map(|s| s.name.as_str()));
        fields.extend(self.highlights.iter().map(String::as_str));
        fields
    }
}

impl Dated for Conference {
    fn date(&self) -> Option<NaiveDate> {
        self.start()
    }
}

/// Criteria for the conference list; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceFilter {
    pub bucket: Option<ConferenceBucket>,
    pub status: Option<ConferenceStatus>,
    pub conference_type: Option<ConferenceType>,
    pub featured_only: bool,
    pub search: String,
}

impl ConferenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(mut self, bucket: ConferenceBucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    pub fn status(mut self, status: ConferenceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn conference_type(mut self, conference_type: ConferenceType) -> Self {
        self.conference_type = Some(conference_type);
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn search(mut self, query: &str) -> Self {
        self.search = query.to_string();
        self
    }

    pub fn matches(&self, conference: &Conference) -> bool {
        self.bucket.map_or(true, |b| conference.bucket() == b)
            && self.status.map_or(true, |s| conference.status == s)
            && self.conference_type.map_or(true, |t| conference.conference_type == t)
            && (!self.featured_only || conference.featured)
            && matches_search(conference, &self.search)
    }

    pub fn apply<'a>(&self, conferences: &'a [Conference]) -> Vec<&'a Conference> {
        conferences.iter().filter(|c| self.matches(c)).collect()
    }
}
