use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use base64::Engine as _;
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use newsreel_core::{FontSet, GenerationRequest, GenerationResult, NewsClient, NewsreelError};

struct AppState {
    client: NewsClient,
    fonts: FontSet,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(flatten)]
    result: GenerationResult,
    video_base64: String,
}

/// Wrapper so pipeline errors can implement axum's response conversion.
/// Only the human-readable message reaches the body.
struct ApiError(NewsreelError);

impl From<NewsreelError> for ApiError {
    fn from(e: NewsreelError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "generation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

async fn generate_handler(
    State(state): State<Arc<AppState>>,
    request: Option<Json<GenerationRequest>>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    tracing::info!(
        category = %request.category,
        seconds_per_slide = request.seconds_per_slide,
        "generation requested"
    );

    let result = newsreel_core::generate(&request, &state.client, &state.fonts).await?;
    let video_base64 = base64::engine::general_purpose::STANDARD.encode(&result.video);

    Ok(Json(GenerateResponse {
        result,
        video_base64,
    }))
}

fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsreel_server=info,newsreel_core=info,tower_http=info".into()),
        )
        .init();

    // A missing font set is a deployment problem; refuse to start.
    let fonts = FontSet::resolve()?;

    let base_url = std::env::var("NEWSREEL_FEED_URL")
        .unwrap_or_else(|_| newsreel_core::news::DEFAULT_BASE_URL.to_string());
    let state = Arc::new(AppState {
        client: NewsClient::new(base_url),
        fonts,
    });

    let port: u16 = std::env::var("NEWSREEL_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "newsreel server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}
