//! HTTP layer: state, router assembly, and serving.

pub mod auth;
pub mod error;
pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{config::Settings, web};

/// Process-wide state shared by every handler: read-only configuration and
/// one pooled HTTP client for all upstream calls.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("econ-pulse/0.1")
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { settings, http })
    }
}

/// Assemble the full router: key-protected JSON endpoints, public pages,
/// and static assets.
pub fn router(state: AppState) -> Router {
    let json_api = Router::new()
        .route("/interest-rates", get(routes::interest_rates))
        .route("/jobs-report", get(routes::jobs_report))
        .route("/inflation", get(routes::inflation))
        .route("/economic-news", get(routes::economic_news))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .merge(json_api)
        .merge(web::pages::router())
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState::new(settings)?;
    let router = router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving econ-pulse");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
