mod hook_error;
mod hook_types;
mod pipeline;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use bytes::Bytes;
use log::{debug, info, warn};
use std::{sync::Arc, time::Instant};

use super::ApiState;
use crate::stats::StatsMessage;

pub use hook_error::*;
pub use hook_types::*;
pub use pipeline::*;

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(HookType::Register.path(), post(auth_on_register))
        .route(HookType::Publish.path(), post(auth_on_publish))
        .route(HookType::Subscribe.path(), post(auth_on_subscribe))
        .with_state(state)
}

async fn auth_on_register(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    handle(state, HookType::Register, headers, body).await
}

async fn auth_on_publish(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    handle(state, HookType::Publish, headers, body).await
}

async fn auth_on_subscribe(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    handle(state, HookType::Subscribe, headers, body).await
}

async fn handle(state: Arc<ApiState>, hook: HookType, headers: HeaderMap, body: Bytes) -> Response {
    let started = Instant::now();
    let result = run(&state, hook, &headers, &body).await;
    let duration = started.elapsed();

    let status = match result {
        Ok(()) => {
            info!("[Hooks]: {} accepted in {:?}", hook.name(), duration);
            StatusCode::ACCEPTED
        }
        Err(ref err) => {
            let status = err.status_code();
            warn!(
                "[Hooks]: {} rejected with {} in {:?}. {}",
                hook.name(),
                status.as_u16(),
                duration,
                err
            );
            status
        }
    };

    if let Err(err) = state.stats_sender.send(StatsMessage::HookProcessed {
        hook,
        status: status.as_u16(),
        duration,
    }) {
        debug!("[Hooks]: stats worker is gone. {:?}", err);
    }

    match result {
        Ok(()) => status.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn run(state: &ApiState, hook: HookType, headers: &HeaderMap, body: &[u8]) -> HookResult<()> {
    let request = decode(hook, headers, body)?;

    match process(&state.authorizer, request).await? {
        Decision::Accepted { thing_id } => {
            debug!("[Hooks]: {} allowed for thing {}", hook.name(), thing_id);
        }
        Decision::Publish(message) => {
            debug!(
                "[Hooks]: publish allowed for thing {} on channel {}",
                message.publisher, message.channel
            );
            state.publisher.publish(message).await?;
        }
    }

    Ok(())
}
