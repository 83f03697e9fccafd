//! Public HTML pages backed by the news search.
//!
//! Pages never fail outward: any upstream or render problem degrades to
//! the same template with an empty article list.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, warn};

use crate::{
    api::{routes::DEFAULT_NEWS_QUERY, types::NewsArticle, AppState},
    data::news,
};

const HOME_WINDOW_DAYS: i64 = 1;
const CATEGORY_WINDOW_DAYS: i64 = 2;

struct CategorySpec {
    label: &'static str,
    blurb: &'static str,
    query: &'static str,
}

const MARKETS: CategorySpec = CategorySpec {
    label: "Markets",
    blurb: "Latest updates from global financial markets",
    query: "stock market OR financial markets OR trading OR market analysis",
};

const STOCKS: CategorySpec = CategorySpec {
    label: "Stocks",
    blurb: "Latest stock market news and analysis",
    query: "stocks OR stock trading OR NYSE OR NASDAQ OR company earnings",
};

const CRYPTO: CategorySpec = CategorySpec {
    label: "Cryptocurrency",
    blurb: "Latest cryptocurrency news and market updates",
    query: "cryptocurrency OR bitcoin OR ethereum OR blockchain OR crypto market",
};

const REAL_ESTATE: CategorySpec = CategorySpec {
    label: "Real Estate",
    blurb: "Latest real estate market news and trends",
    query: "real estate market OR housing market OR property investment OR mortgage rates",
};

const TECH: CategorySpec = CategorySpec {
    label: "Technology",
    blurb: "Latest technology news and innovations",
    query: "technology industry OR tech companies OR innovation OR artificial intelligence OR startups",
};

/// Template-friendly article with every field flattened to a plain string.
pub struct PageArticle {
    pub title: String,
    pub source_name: String,
    pub author: String,
    pub description: String,
    pub url: String,
    pub published_at: String,
    pub content_snippet: String,
    pub image_url: String,
}

impl From<NewsArticle> for PageArticle {
    fn from(article: NewsArticle) -> Self {
        Self {
            title: article.title,
            source_name: article.source_name.unwrap_or_default(),
            author: article.author.unwrap_or_default(),
            description: article.description.unwrap_or_default(),
            url: article.url,
            published_at: article.published_at.unwrap_or_default(),
            content_snippet: article.content_snippet,
            image_url: article.image_url.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    articles: Vec<PageArticle>,
}

#[derive(Template)]
#[template(path = "category.html")]
struct CategoryTemplate {
    articles: Vec<PageArticle>,
    category: &'static str,
    description: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/markets", get(markets))
        .route("/stocks", get(stocks))
        .route("/crypto", get(crypto))
        .route("/real-estate", get(real_estate))
        .route("/tech", get(tech))
}

async fn home(State(state): State<AppState>) -> Response {
    let articles = match news::everything(
        &state.http,
        &state.settings,
        DEFAULT_NEWS_QUERY,
        HOME_WINDOW_DAYS,
    )
    .await
    {
        // The homepage sanitizes article text; category pages do not.
        Ok(raw) => raw
            .into_iter()
            .filter_map(NewsArticle::cleaned)
            .map(PageArticle::from)
            .collect(),
        Err(err) => {
            warn!(%err, "homepage news fetch failed, rendering empty list");
            Vec::new()
        }
    };
    render(IndexTemplate { articles })
}

async fn markets(State(state): State<AppState>) -> Response {
    category_page(state, &MARKETS).await
}

async fn stocks(State(state): State<AppState>) -> Response {
    category_page(state, &STOCKS).await
}

async fn crypto(State(state): State<AppState>) -> Response {
    category_page(state, &CRYPTO).await
}

async fn real_estate(State(state): State<AppState>) -> Response {
    category_page(state, &REAL_ESTATE).await
}

async fn tech(State(state): State<AppState>) -> Response {
    category_page(state, &TECH).await
}

async fn category_page(state: AppState, spec: &'static CategorySpec) -> Response {
    let articles = match news::everything(
        &state.http,
        &state.settings,
        spec.query,
        CATEGORY_WINDOW_DAYS,
    )
    .await
    {
        Ok(raw) => raw
            .into_iter()
            .filter_map(NewsArticle::from_raw)
            .map(PageArticle::from)
            .collect(),
        Err(err) => {
            warn!(%err, category = spec.label, "category news fetch failed, rendering empty list");
            Vec::new()
        }
    };
    render(CategoryTemplate {
        articles,
        category: spec.label,
        description: spec.blurb,
    })
}

/// Render a template into a 200 response. A render failure still returns
/// 200 with an empty body; pages must not surface errors.
fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(%err, "template render error");
            Html(String::new()).into_response()
        }
    }
}
