//! News search client.

use chrono::{Duration, Local, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use urlencoding::encode;

use crate::config::Settings;

use super::UpstreamError;

const SERVICE: &str = "NewsAPI";

/// One article as the provider reports it. Everything is optional at this
/// layer; filtering happens when the article is mapped for output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: Source,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Source {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EverythingPayload {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

/// Search the `everything` index for English articles matching `query`,
/// sorted by popularity, published since local midnight `days` days ago.
pub async fn everything(
    http: &Client,
    settings: &Settings,
    query: &str,
    days: i64,
) -> Result<Vec<RawArticle>, UpstreamError> {
    let url = format!(
        "{base}/everything?q={q}&from={from}&sortBy=popularity&language=en&apiKey={key}",
        base = settings.news_base_url,
        q = encode(query),
        from = window_start(days),
        key = encode(&settings.news_api_key),
    );
    let resp = http
        .get(&url)
        .send()
        .await
        .map_err(|e| UpstreamError::transport(SERVICE, e))?;
    let status = resp.status();
    if !status.is_success() {
        warn!(%status, query, "NewsAPI returned non-success status");
        return Err(UpstreamError::Status {
            service: SERVICE,
            status: status.as_u16(),
        });
    }
    let payload: EverythingPayload = resp
        .json()
        .await
        .map_err(|e| UpstreamError::transport(SERVICE, e))?;
    Ok(payload.articles)
}

/// Local midnight `days` days ago, formatted for the `from` parameter.
pub fn window_start(days: i64) -> String {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    (midnight - Duration::days(days))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
