//! FRED series-observations client.

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use urlencoding::encode;

use crate::config::Settings;

use super::UpstreamError;

const SERVICE: &str = "FRED";

/// One raw observation as FRED reports it. Values arrive as strings; the
/// provider uses `"."` for missing data points.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    pub date: String,
    pub value: String,
}

impl Observation {
    /// Numeric value, with the `"."` sentinel and anything else that fails
    /// to parse mapped to `None`.
    pub fn numeric_value(&self) -> Option<f64> {
        if self.value == "." {
            return None;
        }
        self.value.parse().ok()
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsPayload {
    #[serde(default)]
    observations: Vec<Observation>,
}

/// Fetch the `limit` most recent observations for a series, newest first.
pub async fn observations(
    http: &Client,
    settings: &Settings,
    series_id: &str,
    limit: u32,
) -> Result<Vec<Observation>, UpstreamError> {
    let url = format!(
        "{base}/series/observations?series_id={series}&api_key={key}&file_type=json&sort_order=desc&limit={limit}",
        base = settings.fred_base_url,
        series = encode(series_id),
        key = encode(&settings.fred_api_key),
        limit = limit,
    );
    let resp = http
        .get(&url)
        .send()
        .await
        .map_err(|e| UpstreamError::transport(SERVICE, e))?;
    let status = resp.status();
    if !status.is_success() {
        warn!(%status, series_id, "FRED returned non-success status");
        return Err(UpstreamError::Status {
            service: SERVICE,
            status: status.as_u16(),
        });
    }
    let payload: ObservationsPayload = resp
        .json()
        .await
        .map_err(|e| UpstreamError::transport(SERVICE, e))?;
    Ok(payload.observations)
}
