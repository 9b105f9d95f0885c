// Axum API Server Module
//
// Purpose: read-only REST API over the in-memory article catalog
// Endpoints: articles (list + detail), narratives, pairwise comparison

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::catalog::{Catalog, DEFAULT_LIMIT};
use crate::error::QueryError;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Build the seed catalog, stamping every article with the current time.
    pub fn new() -> anyhow::Result<Self> {
        tracing::info!("Loading article catalog...");
        let catalog = Catalog::seeded(chrono::Utc::now())?;
        tracing::info!(
            "Loaded {} articles, {} narratives",
            catalog.article_count(),
            catalog.list_narratives().len()
        );
        Ok(Self::from_catalog(catalog))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service info
        .route("/", get(read_root))

        // Article endpoints
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:article_id", get(get_article))

        // Narrative clusters
        .route("/api/narratives", get(list_narratives))

        // Pairwise comparison
        .route("/api/comparison/:article_id1/:article_id2", get(compare_articles))

        .fallback(route_not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::very_permissive()) // Any origin, method and header, with credentials
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn read_root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Bias Lab API v0.1",
        "status": "running"
    }))
}

#[derive(Debug, serde::Deserialize)]
struct ArticleFilters {
    limit: Option<i64>,
    narrative: Option<String>,
}

async fn list_articles(
    State(state): State<AppState>,
    filters: Result<Query<ArticleFilters>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(filters) = filters.map_err(|e| AppError::InvalidQuery(e.body_text()))?;

    let limit = filters.limit.unwrap_or(DEFAULT_LIMIT);
    // An empty narrative means no filter
    let narrative = filters.narrative.as_deref().filter(|n| !n.is_empty());

    let articles = state.catalog.list_articles(limit, narrative);
    tracing::debug!(
        "Listing articles (limit: {}, narrative: {:?}) returned {}",
        limit,
        narrative,
        articles.len()
    );

    Ok(Json(articles).into_response())
}

async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Response, AppError> {
    tracing::debug!("Fetching article {}", article_id);
    let article = state.catalog.get_article(&article_id)?;
    Ok(Json(article).into_response())
}

async fn list_narratives(State(state): State<AppState>) -> Response {
    Json(state.catalog.list_narratives()).into_response()
}

async fn compare_articles(
    State(state): State<AppState>,
    Path((article_id1, article_id2)): Path<(String, String)>,
) -> Result<Response, AppError> {
    tracing::debug!("Comparing {} with {}", article_id1, article_id2);
    let comparison = state.catalog.compare(&article_id1, &article_id2)?;
    Ok(Json(comparison).into_response())
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(QueryError),
    InvalidQuery(String),
    RouteNotFound,
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::NotFound(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(err) => {
                if let QueryError::ArticlesNotFound(missing) = &err {
                    tracing::debug!("Comparison missing ids: {:?}", missing);
                }
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::InvalidQuery(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        let body = Json(serde_json::json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}
