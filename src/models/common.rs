//! Records shared across resources

use serde::Serialize;
use serde_json::{Map, Value};

/// Speaker entry; on webinars its identity is its position in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub bio: String,
    pub image_url: String,
}

/// Agenda entry of a conference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub title: String,
    pub time: String,
    pub speaker: String,
    pub description: String,
}

/// Response of the upload endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct UploadedFile {
    pub url: String,
    pub filename: String,
    pub path: String,
}

/// Analytics as returned by the backend; the metrics are kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct AnalyticsReport {
    pub metrics: Map<String, Value>,
}

/// Anything the local cache can hold
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(
    super::Conference,
    super::Webinar,
    super::Workshop,
    super::Registration,
    super::ResearchProject,
    super::Publication,
    super::ResearchPaper,
);
