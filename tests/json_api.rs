//! In-process router tests against a stub upstream listener.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use econ_pulse::{
    api::{self, AppState},
    config::Settings,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_KEY: &str = "topsecret";

fn settings_with_base(base: &str) -> Settings {
    Settings {
        secret_key: "signing".to_string(),
        api_key: TEST_KEY.to_string(),
        fred_api_key: "fred-key".to_string(),
        bls_api_key: "bls-key".to_string(),
        news_api_key: "news-key".to_string(),
        fred_base_url: base.to_string(),
        bls_base_url: base.to_string(),
        news_base_url: base.to_string(),
    }
}

async fn serve_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("stub serve");
    });
    format!("http://{addr}")
}

fn happy_stub() -> Router {
    Router::new()
        .route("/series/observations", get(fred_observations))
        .route("/timeseries/data/", post(bls_timeseries))
        .route("/everything", get(news_everything))
}

async fn fred_observations() -> Json<Value> {
    Json(json!({
        "observations": [
            {"date": "2025-08-01", "value": "4.33"},
            {"date": "2025-07-01", "value": "."},
            {"date": "2025-06-01", "value": "n/a"},
        ]
    }))
}

async fn bls_timeseries() -> Json<Value> {
    Json(json!({
        "status": "REQUEST_SUCCEEDED",
        "message": [],
        "Results": {
            "series": [{
                "seriesID": "PAYEMS",
                "data": [
                    {"year": "2024", "period": "M12", "value": "158942", "footnotes": [{"text": "Preliminary"}]},
                    {"year": "2025", "period": "M02", "value": "159100", "footnotes": [{}]},
                    {"year": "2025", "period": "M01", "value": "159000", "footnotes": []},
                ]
            }]
        }
    }))
}

async fn news_everything() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "articles": [
            {
                "source": {"name": "Reuters"},
                "author": "A. Writer",
                "title": "Fed holds rates",
                "description": "Steady for now",
                "url": "https://example.com/a",
                "publishedAt": "2025-08-28T12:00:00Z",
                "content": "Body text [+123 chars]",
                "urlToImage": "https://example.com/a.jpg"
            },
            {"source": {}, "title": "", "url": "https://example.com/b"},
            {"title": "No url anywhere"},
        ]
    }))
}

async fn call(app: &Router, path: &str, key: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(path);
    if let Some(key) = key {
        builder = builder.header("X-API-Key", key);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn missing_or_wrong_key_is_rejected_before_any_upstream_call() {
    // Unroutable upstream: if auth let the request through, the handler
    // would answer 503 instead of 401.
    let app = api::router(AppState::new(settings_with_base("http://127.0.0.1:9")).unwrap());
    for path in ["/interest-rates", "/jobs-report", "/inflation", "/economic-news"] {
        let (status, body) = call(&app, path, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "missing key on {path}");
        assert_eq!(body["error"], "Unauthorized access");

        let (status, _) = call(&app, path, Some("wrong")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "wrong key on {path}");
    }
}

#[tokio::test]
async fn unconfigured_key_fails_closed() {
    let mut settings = settings_with_base("http://127.0.0.1:9");
    settings.api_key = String::new();
    let app = api::router(AppState::new(settings).unwrap());
    let (status, _) = call(&app, "/interest-rates", Some("")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_503() {
    let app = api::router(AppState::new(settings_with_base("http://127.0.0.1:9")).unwrap());
    let (status, body) = call(&app, "/interest-rates", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "External API request failed");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn upstream_status_is_relayed_with_endpoint_message() {
    let stub = Router::new().route(
        "/series/observations",
        get(|| async { (StatusCode::NOT_FOUND, "gone") }),
    );
    let base = serve_stub(stub).await;
    let app = api::router(AppState::new(settings_with_base(&base)).unwrap());
    let (status, body) = call(&app, "/interest-rates", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Could not retrieve interest rate data");
}

#[tokio::test]
async fn interest_rates_preserve_order_and_map_sentinels() {
    let base = serve_stub(happy_stub()).await;
    let app = api::router(AppState::new(settings_with_base(&base)).unwrap());
    let (status, body) = call(&app, "/interest-rates", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::OK);

    let rates = body["interest_rates"].as_array().expect("array");
    assert_eq!(rates.len(), 3);
    assert_eq!(rates[0]["date"], "2025-08-01");
    assert_eq!(rates[0]["value"], 4.33);
    assert!(rates[1]["value"].is_null(), "sentinel maps to null");
    assert!(rates[2]["value"].is_null(), "malformed maps to null");
    assert_eq!(rates[0]["series_id"], "FEDFUNDS");
    assert!(body["last_updated"].is_string());
}

#[tokio::test]
async fn jobs_report_is_sorted_descending_with_period_stripped() {
    let base = serve_stub(happy_stub()).await;
    let app = api::router(AppState::new(settings_with_base(&base)).unwrap());
    let (status, body) = call(&app, "/jobs-report", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::OK);

    let records = body["jobs_data"].as_array().expect("array");
    let keys: Vec<(String, String)> = records
        .iter()
        .map(|r| {
            (
                r["year"].as_str().unwrap().to_string(),
                r["period"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("2025".to_string(), "02".to_string()),
            ("2025".to_string(), "01".to_string()),
            ("2024".to_string(), "12".to_string()),
        ]
    );
    assert_eq!(records[2]["footnotes"], json!(["Preliminary"]));
    assert_eq!(records[0]["footnotes"], json!([]));
    assert_eq!(records[0]["series_id"], "PAYEMS");
}

#[tokio::test]
async fn bls_reported_failure_maps_to_400_with_upstream_message() {
    let stub = Router::new().route(
        "/timeseries/data/",
        post(|| async {
            Json(json!({
                "status": "REQUEST_NOT_PROCESSED",
                "message": ["invalid registration key"],
                "Results": {}
            }))
        }),
    );
    let base = serve_stub(stub).await;
    let app = api::router(AppState::new(settings_with_base(&base)).unwrap());
    let (status, body) = call(&app, "/jobs-report", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid registration key");
}

#[tokio::test]
async fn economic_news_filters_and_truncates() {
    let base = serve_stub(happy_stub()).await;
    let app = api::router(AppState::new(settings_with_base(&base)).unwrap());
    let (status, body) = call(&app, "/economic-news", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["count"], 1, "articles without title or url dropped");
    let article = &body["economic_news"][0];
    assert_eq!(article["title"], "Fed holds rates");
    assert_eq!(article["source_name"], "Reuters");
    assert_eq!(article["content_snippet"], "Body text ");
    assert_eq!(
        body["query"],
        r#"economy OR inflation OR "interest rates" OR "federal reserve""#
    );
}

#[tokio::test]
async fn inflation_pairs_against_twelve_months_prior() {
    // 24 descending observations: 123, 122, ..., 100 with one sentinel.
    let observations: Vec<Value> = (0..24)
        .map(|i| {
            let value = if i == 5 {
                ".".to_string()
            } else {
                format!("{}", 123 - i)
            };
            // Months counted back from 2025-12.
            let months_back = 23 - i;
            let (year, month) = (2024 + months_back / 12, months_back % 12 + 1);
            json!({"date": format!("{year}-{month:02}-01"), "value": value})
        })
        .collect();
    let stub = Router::new().route(
        "/series/observations",
        get(move || {
            let observations = observations.clone();
            async move { Json(json!({"observations": observations})) }
        }),
    );
    let base = serve_stub(stub).await;
    let app = api::router(AppState::new(settings_with_base(&base)).unwrap());
    let (status, body) = call(&app, "/inflation", Some(TEST_KEY)).await;
    assert_eq!(status, StatusCode::OK);

    let points = body["inflation_data"].as_array().expect("array");
    // Twelve candidate pairs minus the sentinel at index 5.
    assert_eq!(points.len(), 11);
    let first = &points[0];
    assert_eq!(first["index_value"], 123.0);
    // (123 - 111) / 111 * 100 = 10.81081... -> 10.81
    assert_eq!(first["yoy_rate"], 10.81);
    assert_eq!(first["series_id"], "CPIAUCSL");
}
