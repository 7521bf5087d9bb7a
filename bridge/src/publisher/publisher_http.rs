use async_trait::async_trait;
use log::error;
use reqwest::Client;
use std::time::Duration;

use super::{MessagePublisher, PublishError, PublishResult, RawMessage};

/// Forwards accepted messages as JSON to a message bus endpoint.
///
/// Every message is bounded by `timeout`, a silent bus fails the publish hook
/// instead of holding the broker.
pub struct HttpPublisher {
    url: String,
    client: Client,
}

impl HttpPublisher {
    pub fn new<U: Into<String>>(url: U, timeout: Duration) -> PublishResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(HttpPublisher {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl MessagePublisher for HttpPublisher {
    async fn publish(&self, message: RawMessage) -> PublishResult<()> {
        let res = self
            .client
            .post(self.url.as_str())
            .json(&message)
            .send()
            .await
            .map_err(|err| {
                error!("[Publisher]: message bus did not accept a message. {:?}", err);
                PublishError::from(err)
            })?;

        if !res.status().is_success() {
            error!("[Publisher]: message bus responded with {}", res.status());
            return Err(PublishError(format!(
                "message bus responded with {}",
                res.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{publisher::MQTT_PROTOCOL, test_utils::serve_once};
    use tokio::{net::TcpListener, spawn, time::timeout};

    fn message() -> RawMessage {
        RawMessage {
            publisher: "u1".into(),
            protocol: MQTT_PROTOCOL.into(),
            content_type: "".into(),
            channel: "c1".into(),
            subtopic: "".into(),
            payload: b"1".to_vec(),
        }
    }

    #[tokio::test]
    async fn silent_bus_fails_within_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        spawn(async move {
            let mut open = vec![];
            while let Ok((stream, _)) = listener.accept().await {
                // keep the connection open and never answer
                open.push(stream);
            }
        });

        let publisher =
            HttpPublisher::new(format!("http://{}/messages", addr), Duration::from_millis(300))
                .unwrap();

        let res = timeout(Duration::from_secs(5), publisher.publish(message()))
            .await
            .expect("publish should give up on its own");
        assert!(res.is_err(), "silent bus should fail the publish");
    }

    #[tokio::test]
    async fn bus_error_status_fails_publish() {
        let base_url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let publisher =
            HttpPublisher::new(format!("{}/messages", base_url), Duration::from_secs(2)).unwrap();

        match publisher.publish(message()).await {
            Err(PublishError(description)) => {
                assert!(description.contains("503"), "{}", description)
            }
            Ok(()) => panic!("503 from bus should fail the publish"),
        }
    }

    #[tokio::test]
    async fn accepted_by_bus() {
        let base_url =
            serve_once("HTTP/1.1 202 Accepted\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                .await;
        let publisher =
            HttpPublisher::new(format!("{}/messages", base_url), Duration::from_secs(2)).unwrap();

        assert_eq!(publisher.publish(message()).await, Ok(()));
    }
}
