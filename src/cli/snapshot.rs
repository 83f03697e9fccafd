//! CLI entry-point for a one-shot indicator fetch.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    api::{
        types::{InflationPoint, ObservationPoint},
        AppState,
    },
    config::Settings,
    data::fred,
    indicators::inflation,
};

/// Fetch current indicators and print them to stdout as JSON.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Interest-rate series to fetch.
    #[arg(long, default_value = "FEDFUNDS")]
    pub rates_series: String,
    /// Price-index series for the YoY inflation computation.
    #[arg(long, default_value = "CPIAUCSL")]
    pub inflation_series: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let state = AppState::new(settings)?;

    let rate_observations = fred::observations(&state.http, &state.settings, &args.rates_series, 10)
        .await
        .with_context(|| format!("fetch observations for {}", args.rates_series))?;
    let rates: Vec<ObservationPoint> = rate_observations
        .into_iter()
        .map(|obs| ObservationPoint {
            value: obs.numeric_value(),
            date: obs.date,
            series_id: args.rates_series.clone(),
        })
        .collect();

    let index_observations =
        fred::observations(&state.http, &state.settings, &args.inflation_series, 24)
            .await
            .with_context(|| format!("fetch observations for {}", args.inflation_series))?;
    let values: Vec<Option<f64>> = index_observations.iter().map(|o| o.numeric_value()).collect();
    let yoy: Vec<InflationPoint> = inflation::yoy_rates(&values)
        .into_iter()
        .filter_map(|(i, yoy_rate)| {
            values[i].map(|index_value| InflationPoint {
                date: index_observations[i].date.clone(),
                yoy_rate,
                index_value,
                series_id: args.inflation_series.clone(),
            })
        })
        .collect();

    info!(rates = rates.len(), inflation = yoy.len(), "snapshot fetched");
    let snapshot = json!({
        "interest_rates": rates,
        "inflation": yoy,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
