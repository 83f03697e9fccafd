//! JSON route handlers.

use std::cmp::Reverse;

use anyhow::anyhow;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use crate::{
    api::{
        error::ApiError,
        types::{
            now_iso, EconomicNewsResponse, InflationPoint, InflationResponse,
            InterestRatesResponse, JobsRecord, JobsReportResponse, NewsArticle, ObservationPoint,
        },
    },
    data::{bls, fred, news},
    indicators::{inflation, jobs},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Default topic expression for economic news, shared with the homepage.
pub const DEFAULT_NEWS_QUERY: &str =
    r#"economy OR inflation OR "interest rates" OR "federal reserve""#;

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub series: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub query: Option<String>,
    pub days: Option<i64>,
}

pub async fn interest_rates(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> ApiResult<InterestRatesResponse> {
    let series_id = query.series.unwrap_or_else(|| "FEDFUNDS".to_string());
    let observations = fred::observations(&state.http, &state.settings, &series_id, 10)
        .await
        .map_err(|e| ApiError::from_upstream(e, "Could not retrieve interest rate data"))?;
    let interest_rates = observations
        .into_iter()
        .map(|obs| ObservationPoint {
            value: obs.numeric_value(),
            date: obs.date,
            series_id: series_id.clone(),
        })
        .collect();
    Ok(Json(InterestRatesResponse {
        interest_rates,
        last_updated: now_iso(),
    }))
}

pub async fn jobs_report(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> ApiResult<JobsReportResponse> {
    let series_ids: Vec<String> = query
        .series
        .unwrap_or_else(|| "PAYEMS".to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let year = Utc::now().year();
    let series = bls::timeseries(&state.http, &state.settings, &series_ids, year - 1, year)
        .await
        .map_err(|e| ApiError::from_upstream(e, "Could not retrieve jobs report data"))?;

    let mut jobs_data = Vec::new();
    for entry in series {
        for point in entry.data {
            let value: f64 = point.value.parse().map_err(|_| {
                anyhow!(
                    "non-numeric value {:?} in series {}",
                    point.value,
                    entry.series_id
                )
            })?;
            jobs_data.push(JobsRecord {
                series_id: entry.series_id.clone(),
                year: point.year,
                period: jobs::month_number(&point.period),
                value,
                footnotes: point.footnotes.into_iter().filter_map(|f| f.text).collect(),
            });
        }
    }
    jobs_data.sort_by_key(|r| Reverse(jobs::sort_key(&r.year, &r.period)));
    Ok(Json(JobsReportResponse {
        jobs_data,
        last_updated: now_iso(),
    }))
}

pub async fn inflation(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> ApiResult<InflationResponse> {
    let series_id = query.series.unwrap_or_else(|| "CPIAUCSL".to_string());
    let observations = fred::observations(&state.http, &state.settings, &series_id, 24)
        .await
        .map_err(|e| ApiError::from_upstream(e, "Could not retrieve inflation data"))?;
    let values: Vec<Option<f64>> = observations.iter().map(|o| o.numeric_value()).collect();
    let inflation_data = inflation::yoy_rates(&values)
        .into_iter()
        .filter_map(|(i, yoy_rate)| {
            values[i].map(|index_value| InflationPoint {
                date: observations[i].date.clone(),
                yoy_rate,
                index_value,
                series_id: series_id.clone(),
            })
        })
        .collect();
    Ok(Json(InflationResponse {
        inflation_data,
        last_updated: now_iso(),
    }))
}

pub async fn economic_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> ApiResult<EconomicNewsResponse> {
    let query = params
        .query
        .unwrap_or_else(|| DEFAULT_NEWS_QUERY.to_string());
    let days = params.days.unwrap_or(3);
    let articles = news::everything(&state.http, &state.settings, &query, days)
        .await
        .map_err(|e| ApiError::from_upstream(e, "Could not retrieve economic news"))?;
    let economic_news: Vec<NewsArticle> = articles
        .into_iter()
        .filter_map(NewsArticle::from_raw)
        .collect();
    let count = economic_news.len();
    Ok(Json(EconomicNewsResponse {
        economic_news,
        count,
        query,
        last_updated: now_iso(),
    }))
}
