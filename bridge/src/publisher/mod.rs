mod publisher_error;
mod publisher_http;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serde_with::{base64::Base64, serde_as};

pub use publisher_error::*;
pub use publisher_http::HttpPublisher;

pub const MQTT_PROTOCOL: &'static str = "mqtt";

/// Message accepted by `auth_on_publish`, ready for the message bus.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    pub publisher: String,
    pub protocol: String,
    pub content_type: String,
    pub channel: String,
    pub subtopic: String,
    #[serde_as(as = "Base64")]
    pub payload: Vec<u8>,
}

#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish(&self, message: RawMessage) -> PublishResult<()>;
}

/// Publisher used when no message bus is configured.
pub struct DropPublisher;

#[async_trait]
impl MessagePublisher for DropPublisher {
    async fn publish(&self, message: RawMessage) -> PublishResult<()> {
        debug!(
            "[Publisher]: no message bus configured, dropping {} bytes from {} on channel {} subtopic {:?}",
            message.payload.len(),
            message.publisher,
            message.channel,
            message.subtopic
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_message_wire_format() {
        let message = RawMessage {
            publisher: "u1".into(),
            protocol: MQTT_PROTOCOL.into(),
            content_type: "application/senml+json".into(),
            channel: "c1".into(),
            subtopic: "temp".into(),
            payload: b"hi".to_vec(),
        };

        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["publisher"], "u1");
        assert_eq!(json["protocol"], "mqtt");
        assert_eq!(json["contentType"], "application/senml+json");
        assert_eq!(json["channel"], "c1");
        assert_eq!(json["subtopic"], "temp");
        assert_eq!(json["payload"], "aGk=");
    }
}
