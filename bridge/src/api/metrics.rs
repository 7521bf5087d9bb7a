use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use log::error;
use std::sync::Arc;
use tokio::sync::oneshot;

use super::ApiState;
use crate::stats::StatsMessage;

const EXPOSITION_CONTENT_TYPE: &'static str = "text/plain; version=0.0.4";

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .with_state(state)
}

async fn metrics(State(state): State<Arc<ApiState>>) -> Response {
    let (reply, snapshot) = oneshot::channel();

    if let Err(err) = state.stats_sender.send(StatsMessage::Snapshot { reply }) {
        error!("[Metrics]: unable to reach stats worker. {:?}", err);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    match snapshot.await {
        Ok(exposition) => (
            StatusCode::OK,
            [(CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
            exposition,
        )
            .into_response(),
        Err(err) => {
            error!("[Metrics]: stats worker dropped a snapshot request. {:?}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
