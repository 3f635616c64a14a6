use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::{ReferenceCatalog, DEFAULT_PATHOGEN};
use crate::cli::{load_catalog, ServeArgs};
use crate::scanning::engine::ScanEngine;

/// Error message for uploads without a string `content` field
pub const MISSING_CONTENT_MESSAGE: &str = "Missing content in request";

/// Error message for bodies over the configured limit
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Default request body limit
pub const DEFAULT_MAX_BODY_SIZE: usize = 20 * 1024 * 1024; // 20MB

/// Default request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of requests processed concurrently
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub catalog: ReferenceCatalog,
}

/// Server tuning applied as middleware layers
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub max_body_size: usize,
    pub request_timeout: Duration,
    pub concurrency_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            concurrency_limit: MAX_CONCURRENT_REQUESTS,
        }
    }
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            max_body_size: args.max_body_mb.saturating_mul(1024 * 1024),
            request_timeout: Duration::from_secs(args.timeout_secs),
            ..Self::default()
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create an error response, logging internal details server-side only
pub fn error_response(
    status: StatusCode,
    user_message: &str,
    internal_error: Option<&str>,
) -> Response {
    if let Some(internal_msg) = internal_error {
        tracing::debug!("Rejected request ({}): {}", status, internal_msg);
    }

    (
        status,
        Json(ErrorResponse {
            error: user_message.to_string(),
        }),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the reference catalog cannot be loaded, the tokio runtime
/// cannot be created, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.references.as_ref())?;
    tracing::info!("Loaded {} pathogen references", catalog.len());

    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args, catalog).await })
}

/// Create the application router with all routes and middleware configured.
pub fn create_router(catalog: ReferenceCatalog, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        .route("/api/upload-fasta", post(upload_fasta_handler))
        .route("/api/references", get(references_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
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
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(config.concurrency_limit))
                .layer(DefaultBodyLimit::max(config.max_body_size)),
        )
}

async fn run_server(args: ServeArgs, catalog: ReferenceCatalog) -> anyhow::Result<()> {
    let config = ServerConfig::from(&args);
    let app = create_router(catalog, &config);

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting pathoscan web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down pathoscan web server");
}

/// API endpoint scanning an uploaded FASTA text.
///
/// Body: `{"content": string, "filename"?: string|null, "pathogen"?: string|null}`.
/// Only `content` is validated; a missing or non-string value is a 400.
async fn upload_fasta_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                PAYLOAD_TOO_LARGE_MESSAGE,
                Some(&rejection.body_text()),
            );
        }
        // Non-JSON bodies and missing content types carry no usable content either
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                MISSING_CONTENT_MESSAGE,
                Some(&rejection.body_text()),
            );
        }
    };

    let Some(content) = body.get("content").and_then(Value::as_str) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            MISSING_CONTENT_MESSAGE,
            Some("content field absent or not a string"),
        );
    };
    let filename = body
        .get("filename")
        .and_then(Value::as_str)
        .map(str::to_string);
    let pathogen = body.get("pathogen").and_then(Value::as_str);

    let engine = ScanEngine::new(&state.catalog);
    let report = engine.scan_text(content, pathogen).with_filename(filename);

    if report.used_fallback() {
        tracing::info!(
            "Pathogen '{}' not in catalog; compared against '{}'",
            report.pathogen,
            report.reference
        );
    }

    (StatusCode::OK, Json(report)).into_response()
}

/// Return list of references in catalog
async fn references_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let refs: Vec<Value> = state
        .catalog
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "length": r.length(),
                "md5": r.md5(),
                "description": r.description,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": refs.len(),
        "default_pathogen": DEFAULT_PATHOGEN,
        "references": refs,
    }))
}
