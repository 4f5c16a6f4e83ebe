//! HTTP gateway for the SafeLens frontend.
//!
//! Serves the built frontend and relays uploads to the external analysis
//! service, so the browser can post to a same-origin `/analyze`.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                                  |
//! |--------|-------------|----------------------------------------------|
//! | GET    | `/health`   | Health check                                 |
//! | POST   | `/analyze`  | Relay multipart `file` to the analysis service |
//! | GET    | `/*`        | Static frontend (when a static dir is set)   |

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use reqwest::multipart::{Form, Part};
use safelens_core::FILE_FIELD;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::types::HealthResponse;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// Shared handler state.
#[derive(Clone)]
pub struct GatewayState {
    client: reqwest::Client,
    analyze_url: String,
}

impl GatewayState {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
        })
    }
}

/// Uploaded file extracted from the multipart body.
struct Upload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Build the gateway router.
pub fn build_router(config: &GatewayConfig) -> GatewayResult<Router> {
    // Permissive CORS for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let state = GatewayState::new(config)?;

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state);

    match &config.static_dir {
        Some(dir) => app = app.fallback_service(ServeDir::new(dir)),
        None => app = app.route("/", get(health_root)),
    }

    Ok(app.layer(cors))
}

/// Start the HTTP server
pub async fn start_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 SafeLens gateway running on http://localhost:{}", config.port);
    tracing::info!("   POST /analyze -> {}", config.analyze_url());
    tracing::info!("   GET  /health  - Health check");
    match &config.static_dir {
        Some(dir) => tracing::info!("   GET  /*       - Frontend from {}", dir.display()),
        None => tracing::warn!("No static dir configured; frontend is not served"),
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(&state.analyze_url))
}

async fn health_root() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Relay an upload to the analysis service.
///
/// The upstream status, content type and body are passed back verbatim;
/// interpretation happens in the client.
async fn analyze(
    State(state): State<GatewayState>,
    multipart: Multipart,
) -> GatewayResult<Response> {
    let upload = read_upload(multipart).await?;

    tracing::info!(
        "📄 Upload: {} ({}, {} bytes)",
        upload.file_name,
        upload.content_type,
        upload.bytes.len()
    );

    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)
        .map_err(|e| GatewayError::Multipart(format!("Invalid content type: {}", e)))?;
    let form = Form::new().part(FILE_FIELD, part);

    let response = state
        .client
        .post(&state.analyze_url)
        .multipart(form)
        .send()
        .await?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| GatewayError::Internal(e.to_string()))?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let body = response.bytes().await?;

    tracing::info!("📊 Analysis service answered {} ({} bytes)", status, body.len());

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

async fn read_upload(mut multipart: Multipart) -> GatewayResult<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        // An empty part is still a file; only an absent part is rejected.
        let bytes = field.bytes().await?;

        return Ok(Upload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(GatewayError::MissingFile)
}
