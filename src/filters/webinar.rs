//! Webinar buckets and filters

use chrono::NaiveDate;
use crate::models::{Webinar, WebinarStatus, WebinarType};
use super::{distinct_values, matches_search, Bucket, Bucketed, Dated, Searchable};

/// Tabs of the webinar list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebinarBucket {
    Upcoming,
    Live,
    Completed,
    Cancelled,
}

impl WebinarBucket {
    pub fn from_status(status: WebinarStatus) -> Self {
        match status {
            WebinarStatus::Planning | WebinarStatus::RegistrationOpen => WebinarBucket::Upcoming,
            WebinarStatus::Live => WebinarBucket::Live,
            WebinarStatus::Completed => WebinarBucket::Completed,
            WebinarStatus::Cancelled => WebinarBucket::Cancelled,
        }
    }
}

impl Bucket for WebinarBucket {
    const ALL: &'static [Self] = &[
        WebinarBucket::Upcoming,
        WebinarBucket::Live,
        WebinarBucket::Completed,
        WebinarBucket::Cancelled,
    ];

    fn label(&self) -> &'static str {
        match self {
            WebinarBucket::Upcoming => "Upcoming",
            WebinarBucket::Live => "Live",
            WebinarBucket::Completed => "Completed",
            WebinarBucket::Cancelled => "Cancelled",
        }
    }
}

impl Bucketed for Webinar {
    type Bucket = WebinarBucket;

    fn bucket(&self) -> WebinarBucket {
        WebinarBucket::from_status(self.status)
    }
}

impl Searchable for Webinar {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str(), self.category.as_str()];
        fields.extend(self.speakers.iter().map(|s| s.name.as_str()));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Dated for Webinar {
    fn date(&self) -> Option<NaiveDate> {
        self.start()
    }
}

/// Categories present in a list, for the category dropdown
pub fn categories(webinars: &[Webinar]) -> Vec<String> {
    distinct_values(webinars.iter().map(|w| w.category.as_str()))
}

/// Criteria for the webinar list; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebinarFilter {
    pub bucket: Option<WebinarBucket>,
    pub category: Option<String>,
    pub webinar_type: Option<WebinarType>,
    pub featured_only: bool,
    pub search: String,
}

impl WebinarFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(mut self, bucket: WebinarBucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    /// Category match is case-insensitive; "all" or blank clears it
    pub fn category(mut self, category: &str) -> Self {
        let category = category.trim();
        self.category = (!category.is_empty() && !category.eq_ignore_ascii_case("all")).then(|| category.to_string());
        self
    }

    pub fn webinar_type(mut self, webinar_type: WebinarType) -> Self {
        self.webinar_type = Some(webinar_type);
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

    pub fn matches(&self, webinar: &Webinar) -> bool {
        self.bucket.map_or(true, |b| webinar.bucket() == b)
            && self
                .category
                .as_ref()
                .map_or(true, |c| webinar.category.trim().eq_ignore_ascii_case(c))
            && self.webinar_type.map_or(true, |t| webinar.webinar_type == t)
            && (!self.featured_only || webinar.featured)
            && matches_search(webinar, &self.search)
    }

    pub fn apply<'a>(&self, webinars: &'a [Webinar]) -> Vec<&'a Webinar> {
        webinars.iter().filter(|w| self.matches(w)).collect()
    }
}
