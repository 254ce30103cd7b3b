use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::BenchmarkCatalog;
use crate::cli::ServeArgs;
use crate::core::record::BenchmarkRecord;
use crate::core::types::AbilitySelection;
use crate::matching::engine::{BestPairs, SelectionEngine, SelectionError};
use crate::matching::ranking::RankedModel;

/// Request limits
pub const REQUESTS_PER_SECOND: u64 = 10;
pub const BURST_SIZE: u32 = 50;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub catalog: Arc<BenchmarkCatalog>,
}

/// Response envelope shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_count: usize,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: "OK".to_string(),
            message: "Success".to_string(),
            data: Some(data),
            meta: None,
        }
    }

    #[must_use]
    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.meta = Some(Meta { total_count });
        self
    }
}

/// Error body, serialized in the same envelope without `data`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "INVALID_REQUEST",
            message: message.into(),
        }
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::ModelNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                code: "MODEL_NOT_FOUND",
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            code: self.code.to_string(),
            message: self.message,
            data: None,
            meta: None,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Query parameters of the similarity search; absent flags are `false`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub model: Option<String>,
    #[serde(default)]
    pub include_instruction_following: bool,
    #[serde(default)]
    pub include_knowledge: bool,
    #[serde(default)]
    pub include_reasoning: bool,
}

impl From<&SearchQuery> for AbilitySelection {
    fn from(query: &SearchQuery) -> Self {
        Self::new(
            query.include_instruction_following,
            query.include_knowledge,
            query.include_reasoning,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct SimilarModel {
    pub model: String,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes only, without middleware.
///
/// Rate limiting keys on the peer address, which in-process callers do not
/// have; use [`create_router`] for a served application.
pub fn router(catalog: Arc<BenchmarkCatalog>) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        .route("/v1/benchmark/models", get(models_handler))
        .route("/v1/benchmark/best-models", get(best_models_handler))
        .route("/v1/benchmark/ranking", get(ranking_handler))
        .route("/v1/benchmark/similarity/search", get(similarity_search_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(catalog: Arc<BenchmarkCatalog>) -> anyhow::Result<Router> {
    // IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(REQUESTS_PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    let app = router(catalog).layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = args.source.load_shared()?;
    tracing::info!(models = catalog.len(), "Catalog loaded");

    let app = create_router(catalog)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting pair-solver web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}/v1/benchmark/models"));
    }

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Failed to bind {addr}: {e}");
        e
    })?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Every record in the catalog
async fn models_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<BenchmarkRecord>>> {
    let records = state.catalog.all().to_vec();
    let count = records.len();
    Json(ApiResponse::ok(records).with_total_count(count))
}

/// All three pairs for the requested abilities
async fn best_models_handler(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<AbilitySelection>,
) -> Json<ApiResponse<BestPairs>> {
    tracing::debug!(%selection, "best-models request");

    let pairs = SelectionEngine::new(&state.catalog).best_pairs(&selection);
    Json(ApiResponse::ok(pairs))
}

async fn ranking_handler(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<AbilitySelection>,
) -> Json<ApiResponse<Vec<RankedModel>>> {
    let ranking = SelectionEngine::new(&state.catalog).ranking(&selection);
    let count = ranking.len();
    Json(ApiResponse::ok(ranking).with_total_count(count))
}

/// Closest match for the named model
async fn similarity_search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SimilarModel>>, ApiError> {
    let model = query
        .model
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter 'model' is required"))?;

    let selection = AbilitySelection::from(&query);
    let matched = SelectionEngine::new(&state.catalog)
        .most_similar_to(model, &selection)
        .map_err(|err| {
            tracing::warn!(model, "Similarity search for unknown model");
            ApiError::from(err)
        })?;

    Ok(Json(ApiResponse::ok(SimilarModel { model: matched })))
}
