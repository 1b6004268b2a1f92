//! Query-string filters for list endpoints

use crate::normalize::FieldCase;

/// Filters accepted by the `get_all` operations. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub event_type: Option<String>,
    pub featured: Option<bool>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Resource-specific parameters, canonical camelCase keys
    pub extra: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then(|| search.trim().to_string());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page.max(1));
        self.limit = Some(limit);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Query pairs with keys in the wire case
    pub fn to_pairs(&self, case: FieldCase) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: String| pairs.push((case.apply(key), value));

        if let Some(status) = &self.status {
            push("status", status.clone());
        }
        if let Some(search) = &self.search {
            push("search", search.clone());
        }
        if let Some(category) = &self.category {
            push("category", category.clone());
        }
        if let Some(event_type) = &self.event_type {
            push("type", event_type.clone());
        }
        if let Some(featured) = self.featured {
            push("featured", featured.to_string());
        }
        if let Some(page) = self.page {
            push("page", page.to_string());
        }
        if let Some(limit) = self.limit {
            push("limit", limit.to_string());
        }
        for (key, value) in &self.extra {
            push(key, value.clone());
        }
        pairs
    }
}
