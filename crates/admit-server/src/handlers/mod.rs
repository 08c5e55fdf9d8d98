pub mod auth;
pub mod predict;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
