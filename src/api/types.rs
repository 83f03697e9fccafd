//! Shared DTOs for JSON responses.

use chrono::Utc;
use serde::Serialize;

use crate::{data::news::RawArticle, sanitize};

/// One reshaped time-series observation. `value` is absent when the
/// provider sent its `"."` sentinel or a non-numeric string.
#[derive(Debug, Clone, Serialize)]
pub struct ObservationPoint {
    pub date: String,
    pub value: Option<f64>,
    pub series_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobsRecord {
    pub series_id: String,
    pub year: String,
    /// Month number as reported, prefix stripped: `"03"` for March.
    pub period: String,
    pub value: f64,
    pub footnotes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InflationPoint {
    pub date: String,
    /// Year-over-year percent change, rounded to 2 decimals.
    pub yoy_rate: f64,
    pub index_value: f64,
    pub series_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsArticle {
    pub title: String,
    pub source_name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub published_at: Option<String>,
    pub content_snippet: String,
    pub image_url: Option<String>,
}

impl NewsArticle {
    /// Map a provider article, dropping anything without a title or url.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let title = raw.title.filter(|t| !t.is_empty())?;
        let url = raw.url.filter(|u| !u.is_empty())?;
        Some(Self {
            title,
            source_name: raw.source.name,
            author: raw.author,
            description: raw.description,
            url,
            published_at: raw.published_at,
            content_snippet: sanitize::snippet(raw.content.as_deref()),
            image_url: raw.url_to_image,
        })
    }

    /// Homepage variant: title, description, and content are run through
    /// the sanitizer. Category pages and the JSON endpoint use
    /// [`NewsArticle::from_raw`] instead.
    pub fn cleaned(raw: RawArticle) -> Option<Self> {
        match raw.title.as_deref() {
            Some(t) if !t.is_empty() => {}
            _ => return None,
        }
        let url = raw.url.filter(|u| !u.is_empty())?;
        Some(Self {
            title: sanitize::clean_content(raw.title.as_deref()),
            source_name: raw.source.name,
            author: raw.author,
            description: Some(sanitize::clean_content(raw.description.as_deref())),
            url,
            published_at: raw.published_at,
            content_snippet: sanitize::clean_content(raw.content.as_deref()),
            image_url: raw.url_to_image,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct InterestRatesResponse {
    pub interest_rates: Vec<ObservationPoint>,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct JobsReportResponse {
    pub jobs_data: Vec<JobsRecord>,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct InflationResponse {
    pub inflation_data: Vec<InflationPoint>,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct EconomicNewsResponse {
    pub economic_news: Vec<NewsArticle>,
    pub count: usize,
    pub query: String,
    pub last_updated: String,
}

/// Response-time timestamp stamped on every successful JSON payload.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}
