use axum::http::{header::CONTENT_TYPE, HeaderMap};
use channel_topics::{normalize_subtopic, parse_topic};
use serde_json::from_slice;

use super::{
    hook_error::{HookError, HookResult},
    hook_types::{
        AuthPublishReq, AuthRegisterReq, AuthSubscribeReq, HookRequest, HookType, HOOK_HEADER,
    },
};
use crate::{
    authorizer::Authorizer,
    publisher::{RawMessage, MQTT_PROTOCOL},
};

/// Positive outcome of a hook.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Register or subscribe is allowed. The thing id only gates the hook.
    Accepted { thing_id: String },
    /// Publish is allowed, the message goes to the message bus.
    Publish(RawMessage),
}

/// Decodes a body of `hook`. The hook header is checked before the body is
/// touched.
pub fn decode(hook: HookType, headers: &HeaderMap, body: &[u8]) -> HookResult<HookRequest> {
    let hook_header = headers
        .get(HOOK_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !hook.matches_header(hook_header) {
        return Err(HookError::UnsupportedRequest);
    }

    match hook {
        HookType::Register => Ok(HookRequest::Register(from_slice::<AuthRegisterReq>(body)?)),
        HookType::Publish => Ok(HookRequest::Publish {
            req: from_slice::<AuthPublishReq>(body)?,
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string(),
        }),
        HookType::Subscribe => Ok(HookRequest::Subscribe(from_slice::<AuthSubscribeReq>(
            body,
        )?)),
    }
}

pub async fn process(authorizer: &Authorizer, request: HookRequest) -> HookResult<Decision> {
    match request {
        HookRequest::Register(req) => register(authorizer, req).await,
        HookRequest::Publish { req, content_type } => {
            publish(authorizer, req, content_type).await
        }
        HookRequest::Subscribe(req) => subscribe(authorizer, req).await,
    }
}

pub async fn register(authorizer: &Authorizer, req: AuthRegisterReq) -> HookResult<Decision> {
    let thing_id = authorizer.authenticate(&req.password).await?;
    Ok(Decision::Accepted { thing_id })
}

pub async fn publish(
    authorizer: &Authorizer,
    req: AuthPublishReq,
    content_type: String,
) -> HookResult<Decision> {
    let topic = parse_topic(&req.topic)?;
    let subtopic = normalize_subtopic(&topic.subtopic_path)?;
    let publisher = authorizer
        .authorize(&req.username, &topic.channel_id)
        .await?;

    Ok(Decision::Publish(RawMessage {
        publisher,
        protocol: MQTT_PROTOCOL.to_string(),
        content_type,
        channel: topic.channel_id,
        subtopic,
        payload: req.payload,
    }))
}

pub async fn subscribe(authorizer: &Authorizer, req: AuthSubscribeReq) -> HookResult<Decision> {
    let topic = parse_topic(&req.topic)?;
    let thing_id = authorizer
        .authorize(&req.username, &topic.channel_id)
        .await?;
    Ok(Decision::Accepted { thing_id })
}
