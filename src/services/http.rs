//! Backend HTTP client
//!
//! Every resource service goes through [`ApiClient`]: it resolves paths
//! against the base URL, attaches the bearer token and request id, converts
//! request bodies to the wire case and turns non-success responses into
//! [`ApiError::Status`] carrying the backend's own message.

use std::time::Duration;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;
use crate::config::Settings;
use crate::middleware::{AuthProvider, RequestLogger};
use crate::models::Identified;
use crate::normalize::{error_message, normalize_list, normalize_one, to_wire, FieldCase, Normalize};
use crate::services::query::ListQuery;
use crate::services::upload::ImageUpload;
use crate::utils::errors::{ApiError, EventDeskError, Result};
use crate::utils::helpers::image_mime_type;

/// Shared client for the event backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    wire_case: FieldCase,
    auth: AuthProvider,
    logger: RequestLogger,
}

impl ApiClient {
    /// Create a new ApiClient from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(settings.api.user_agent.as_str())
            .build()?;

        let base_url = Url::parse(settings.api.base_url.trim_end_matches('/'))?;

        Ok(Self {
            client,
            base_url,
            wire_case: settings.api.wire_case,
            auth: AuthProvider::new(&settings.auth),
            logger: RequestLogger::default(),
        })
    }

    /// Replace the token source
    pub fn with_auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    pub fn wire_case(&self) -> FieldCase {
        self.wire_case
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Absolute URL for a path such as `/webinars/12/`
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url(), path))?)
    }

    pub async fn get(&self, path: &str, query: &ListQuery) -> Result<Value> {
        let pairs = query.to_pairs(self.wire_case);
        let request = self.client.get(self.url(path)?).query(&pairs);
        self.execute(Method::GET, path, request).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = to_wire(body, self.wire_case)?;
        let request = self.client.post(self.url(path)?).json(&body);
        self.execute(Method::POST, path, request).await
    }

    /// POST without a body, for server-side toggles
    pub async fn post_empty(&self, path: &str) -> Result<Value> {
        let request = self.client.post(self.url(path)?);
        self.execute(Method::POST, path, request).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = to_wire(body, self.wire_case)?;
        let request = self.client.patch(self.url(path)?).json(&body);
        self.execute(Method::PATCH, path, request).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        let request = self.client.delete(self.url(path)?);
        self.execute(Method::DELETE, path, request).await
    }

    /// Send a file as the `file` part of a multipart form
    pub async fn upload(&self, path: &str, upload: ImageUpload) -> Result<Value> {
        let mime = image_mime_type(&upload.filename);
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.filename)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let request = self.client.post(self.url(path)?).multipart(form);
        self.execute(Method::POST, path, request).await
    }

    /// GET a list endpoint and normalize every item
    pub async fn fetch_list<T: Normalize>(&self, path: &str, query: &ListQuery, plural: &str) -> Result<Vec<T>> {
        let body = self.get(path, query).await?;
        let items = normalize_list(&body, plural);
        debug!(path = path, count = items.len(), "Fetched list");
        Ok(items)
    }

    /// GET a single record; a 404 becomes [`EventDeskError::NotFound`]
    pub async fn fetch_one<T: Normalize>(&self, path: &str, singular: &str, id: &str) -> Result<T> {
        match self.get(path, &ListQuery::default()).await {
            Ok(body) => Ok(normalize_one(&body, singular)),
            Err(e) if e.status() == Some(404) => Err(EventDeskError::NotFound {
                resource: singular.to_string(),
                id: id.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// POST a new record; the response must identify the created item
    pub async fn create_one<T, B>(&self, path: &str, body: &B, singular: &str) -> Result<T>
    where
        T: Normalize + Identified,
        B: Serialize + ?Sized,
    {
        let response = self.post(path, body).await?;
        let created: T = normalize_one(&response, singular);
        if created.id().is_empty() {
            return Err(ApiError::InvalidResponse(format!("created {} has no id", singular)).into());
        }
        Ok(created)
    }

    /// PATCH a record. When the backend only acknowledges the change, the
    /// record is read back so the caller always gets the stored version.
    pub async fn update_one<T, B>(&self, path: &str, body: &B, singular: &str, id: &str) -> Result<T>
    where
        T: Normalize + Identified,
        B: Serialize + ?Sized,
    {
        self.patch_record(path, path, body, singular, id).await
    }

    /// PATCH a sub-resource (such as `/status`) of the record at `record_path`
    pub async fn patch_record<T, B>(&self, path: &str, record_path: &str, body: &B, singular: &str, id: &str) -> Result<T>
    where
        T: Normalize + Identified,
        B: Serialize + ?Sized,
    {
        let response = self.patch(path, body).await?;
        self.record_or_refetch(response, record_path, singular, id).await
    }

    /// Like [`update_one`](Self::update_one) for body-less POST actions
    pub async fn post_action<T>(&self, path: &str, record_path: &str, singular: &str, id: &str) -> Result<T>
    where
        T: Normalize + Identified,
    {
        let response = self.post_empty(path).await?;
        self.record_or_refetch(response, record_path, singular, id).await
    }

    pub async fn remove(&self, path: &str) -> Result<()> {
        self.delete(path).await.map(|_| ())
    }

    async fn record_or_refetch<T>(&self, response: Value, record_path: &str, singular: &str, id: &str) -> Result<T>
    where
        T: Normalize + Identified,
    {
        let record: T = normalize_one(&response, singular);
        if record.id().is_empty() {
            debug!(path = record_path, "Mutation response carried no record, reading it back");
            return self.fetch_one(record_path, singular, id).await;
        }
        Ok(record)
    }

    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Value> {
        let request = self.auth.authorize(request).await;
        let (request, trace) = self.logger.start(method.as_str(), path, request);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = classify_transport_error(&e);
                debug!(path = path, error = %err, "Backend request failed");
                return Err(err.into());
            }
        };

        let status = response.status();
        self.logger.finish(trace, status.as_u16());

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &text).into());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::InvalidResponse(e.to_string()).into())
    }
}

fn classify_transport_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::ServiceUnavailable
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}

/// Error for a non-success response: the backend's message when the body
/// carries one, `HTTP <status>` otherwise
fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| error_message(&value))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Percent-encode a record id for use as one path segment
pub fn path_segment(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
