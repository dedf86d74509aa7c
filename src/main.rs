/// API сервер подготовки датасета

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber;

use pulsar_ml::{
    data::dataset_from_rows,
    types::{NormalizeRequest, NormalizeResponse, SampleRequest, SampleResponse, SamplerConfig},
    FeatureNormalizer, PulsarSampler,
};

#[derive(Clone)]
struct AppState {
    sampler: std::sync::Arc<tokio::sync::Mutex<PulsarSampler>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Зерно задается один раз на процесс; поток выборки общий для всех запросов
    let seed = std::env::var("PULSAR_ML_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(70);

    let config = SamplerConfig {
        seed,
        ..SamplerConfig::default()
    };
    let state = AppState {
        sampler: std::sync::Arc::new(tokio::sync::Mutex::new(PulsarSampler::with_config(config))),
    };

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/normalize", post(normalize))
        .route("/api/sample", post(sample))
        .layer(cors)
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://0.0.0.0:8000, seed {}", seed);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Pulsar ML API (Rust)",
        "version": "0.1.0"
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn normalize(
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, (StatusCode, String)> {
    tracing::info!(
        "Normalize request: {} rows, range [{}, {}]",
        request.dataset.len(),
        request.lower,
        request.upper
    );

    let dataset = dataset_from_rows(request.dataset)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let mut normalizer = FeatureNormalizer::with_range(request.lower, request.upper);
    let normalized = normalizer
        .fit_transform(&dataset)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    Ok(Json(NormalizeResponse {
        dataset: normalized.outer_iter().map(|row| row.to_vec()).collect(),
    }))
}

async fn sample(
    State(state): State<AppState>,
    Json(request): Json<SampleRequest>,
) -> Result<Json<SampleResponse>, (StatusCode, String)> {
    tracing::info!(
        "Sample request: {} rows, train {}, test {}, {} sets",
        request.dataset.len(),
        request.train_size,
        request.test_size,
        request.num_sets
    );

    let dataset = dataset_from_rows(request.dataset)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let mut sampler = state.sampler.lock().await;
    match sampler.sample_pulsars(
        &dataset,
        request.train_size,
        request.test_size,
        request.num_sets,
    ) {
        Ok(sets) => Ok(Json(sets.into())),
        Err(e) => {
            tracing::warn!("Sampling failed: {}", e);
            Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}
