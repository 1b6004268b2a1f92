//! Client-side filtering over cached lists
//!
//! Status buckets partition a list: every item lands in exactly one bucket.
//! Search and the category/type filters narrow a list further.

pub mod conference;
pub mod registration;
pub mod webinar;

pub use conference::{ConferenceBucket, ConferenceFilter};
pub use registration::RegistrationFilter;
pub use webinar::{WebinarBucket, WebinarFilter};

use std::cmp::Ordering;
use chrono::NaiveDate;
use crate::models::{Publication, ResearchPaper, ResearchProject, Workshop};
use crate::utils::helpers::{calculate_offset, normalize_whitespace, parse_date};

/// A closed set of mutually exclusive groups
pub trait Bucket: Copy + Eq + 'static {
    const ALL: &'static [Self];
    fn label(&self) -> &'static str;
}

/// Items that fall into exactly one bucket
pub trait Bucketed {
    type Bucket: Bucket;
    fn bucket(&self) -> Self::Bucket;
}

/// Text an item can be found by
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Items with a date to sort by
pub trait Dated {
    fn date(&self) -> Option<NaiveDate>;
}

/// Number of items per bucket, in bucket order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCounts<B> {
    pub counts: Vec<(B, usize)>,
    pub total: usize,
}

impl<B: Bucket> BucketCounts<B> {
    pub fn get(&self, bucket: B) -> usize {
        self.counts
            .iter()
            .find(|(b, _)| *b == bucket)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

pub fn bucket_counts<T: Bucketed>(items: &[T]) -> BucketCounts<T::Bucket> {
    let counts = <T::Bucket as Bucket>::ALL
        .iter()
        .map(|bucket| (*bucket, items.iter().filter(|item| item.bucket() == *bucket).count()))
        .collect();
    BucketCounts {
        counts,
        total: items.len(),
    }
}

pub fn in_bucket<T: Bucketed>(items: &[T], bucket: T::Bucket) -> Vec<&T> {
    items.iter().filter(|item| item.bucket() == bucket).collect()
}

/// Case-insensitive, whitespace-normalized substring match; a blank query matches everything
pub fn matches_search<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let query = normalize_whitespace(query).to_lowercase();
    if query.is_empty() {
        return true;
    }
    item.search_fields()
        .into_iter()
        .any(|field| normalize_whitespace(field).to_lowercase().contains(&query))
}

pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches_search(*item, query)).collect()
}

/// Sort by date; undated items go last in either direction
pub fn sort_by_date<T: Dated>(items: &mut [&T], ascending: bool) {
    items.sort_by(|a, b| match (a.date(), b.date()) {
        (Some(x), Some(y)) if ascending => x.cmp(&y),
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// One page of a filtered list; pages start at 1
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = calculate_offset(page.max(1), page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Distinct non-blank values, sorted, for filter dropdowns
pub fn distinct_values<'a, I: IntoIterator<Item = &'a str>>(values: I) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}

impl Searchable for Workshop {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.location.as_str(), self.facilitator.as_str()]
    }
}

impl Dated for Workshop {
    fn date(&self) -> Option<NaiveDate> {
        self.start()
    }
}

impl Searchable for ResearchProject {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.lead.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.authors.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Publication {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.abstract_text.as_str(),
            self.journal.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.authors.iter().map(String::as_str));
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Dated for Publication {
    fn date(&self) -> Option<NaiveDate> {
        if let Some(date) = parse_date(&self.published_date) {
            return Some(date);
        }
        (self.year > 0)
            .then(|| NaiveDate::from_ymd_opt(self.year as i32, 1, 1))
            .flatten()
    }
}

impl Searchable for ResearchPaper {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.abstract_text.as_str(), self.category.as_str()];
        fields.extend(self.authors.iter().map(String::as_str));
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}
