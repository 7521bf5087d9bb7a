use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Protocol the bridge speaks to the broker.
pub const SERVICE: &'static str = "http";

#[derive(Serialize, Debug)]
pub struct VersionInfo {
    pub service: &'static str,
    pub version: &'static str,
}

pub fn router() -> Router {
    Router::new().route("/version", get(version))
}

async fn version() -> Json<VersionInfo> {
    Json(VersionInfo {
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
    })
}
