//! Workshop model

use serde::Serialize;
use super::conference::ConferenceStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub location: String,
    pub facilitator: String,
    pub capacity: u32,
    pub registration_count: u32,
    pub status: ConferenceStatus,
    pub image_url: String,
}

impl Workshop {
    pub fn start(&self) -> Option<chrono::NaiveDate> {
        crate::utils::helpers::parse_date(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkshopRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub location: String,
    pub facilitator: String,
    pub capacity: u32,
    pub status: ConferenceStatus,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkshopRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilitator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConferenceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
