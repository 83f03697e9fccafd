//! BLS timeseries client (employment statistics).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Settings;

use super::UpstreamError;

const SERVICE: &str = "BLS";
const REQUEST_SUCCEEDED: &str = "REQUEST_SUCCEEDED";

#[derive(Debug, Serialize)]
struct TimeseriesRequest<'a> {
    seriesid: &'a [String],
    startyear: String,
    endyear: String,
    registrationkey: &'a str,
}

#[derive(Debug, Deserialize)]
struct TimeseriesPayload {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Vec<String>,
    #[serde(rename = "Results", default)]
    results: Results,
}

#[derive(Debug, Deserialize, Default)]
struct Results {
    #[serde(default)]
    series: Vec<Series>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    #[serde(rename = "seriesID", default)]
    pub series_id: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPoint {
    pub year: String,
    /// Upstream period code, e.g. `M03` for March.
    pub period: String,
    pub value: String,
    #[serde(default)]
    pub footnotes: Vec<Footnote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footnote {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST a timeseries query for the given series ids over `[start, end]`.
///
/// A 200 response still carries a status field; anything other than
/// `REQUEST_SUCCEEDED` is surfaced as [`UpstreamError::Rejected`] with the
/// provider's own messages.
pub async fn timeseries(
    http: &Client,
    settings: &Settings,
    series_ids: &[String],
    start_year: i32,
    end_year: i32,
) -> Result<Vec<Series>, UpstreamError> {
    let url = format!("{base}/timeseries/data/", base = settings.bls_base_url);
    let body = TimeseriesRequest {
        seriesid: series_ids,
        startyear: start_year.to_string(),
        endyear: end_year.to_string(),
        registrationkey: &settings.bls_api_key,
    };
    let resp = http
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| UpstreamError::transport(SERVICE, e))?;
    let status = resp.status();
    if !status.is_success() {
        warn!(%status, "BLS returned non-success status");
        return Err(UpstreamError::Status {
            service: SERVICE,
            status: status.as_u16(),
        });
    }
    let payload: TimeseriesPayload = resp
        .json()
        .await
        .map_err(|e| UpstreamError::transport(SERVICE, e))?;
    if payload.status != REQUEST_SUCCEEDED {
        warn!(status = %payload.status, messages = ?payload.message, "BLS request failed");
        return Err(UpstreamError::Rejected(payload.message.join("; ")));
    }
    Ok(payload.results.series)
}
