use std::sync::Arc;
use std::time::Duration;

use admit_auth::{AuthGate, Credentials};
use admit_config::Config;
use admit_model::store::{ModelStore, LATEST};
use admit_server::state::AppState;
use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = ModelStore::open(&config.model_dir);
    let artifact = store.load(&config.model_name, LATEST).with_context(|| {
        format!(
            "loading model {}:latest from {}",
            config.model_name,
            config.model_dir.display()
        )
    })?;
    info!(model = %config.model_name, tag = %artifact.tag, "loaded model artifact");

    let auth = AuthGate::new(
        &config.secret_key,
        Credentials {
            username: config.username.clone(),
            password: config.password.clone(),
        },
        config.token_ttl_minutes,
    );

    let state = Arc::new(AppState::from_artifact(auth, artifact)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = admit_server::app(state).layer(trace_layer).layer(cors);

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
