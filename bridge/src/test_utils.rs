use async_trait::async_trait;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use things_client::{ThingId, ThingsClient, ThingsError, ThingsErrorKind, ThingsResult};
use tokio::time::sleep;

use crate::authorizer::Authorizer;

/// Things service double answering every call with the same outcome.
#[derive(Clone)]
pub struct MockThings {
    outcome: Result<String, ThingsErrorKind>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    last_channel: Arc<Mutex<Option<String>>>,
}

impl MockThings {
    pub fn granting(thing_id: &str) -> Self {
        Self::new(Ok(thing_id.to_string()))
    }

    pub fn failing(kind: ThingsErrorKind) -> Self {
        Self::new(Err(kind))
    }

    fn new(outcome: Result<String, ThingsErrorKind>) -> Self {
        MockThings {
            outcome,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_channel: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn authorizer(&self) -> Authorizer {
        Authorizer::new(Arc::new(self.clone()), Authorizer::DEFAULT_TIMEOUT)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_channel(&self) -> Option<String> {
        self.last_channel.lock().unwrap().clone()
    }

    async fn answer(&self) -> ThingsResult<ThingId> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }

        match self.outcome {
            Ok(ref id) => Ok(ThingId::new(id.as_str())),
            Err(kind) => Err(ThingsError::new(kind, "mock")),
        }
    }
}

#[async_trait]
impl ThingsClient for MockThings {
    async fn identify(&self, _token: &str) -> ThingsResult<ThingId> {
        self.answer().await
    }

    async fn can_access(&self, _token: &str, chan_id: &str) -> ThingsResult<ThingId> {
        *self.last_channel.lock().unwrap() = Some(chan_id.to_string());
        self.answer().await
    }
}

/// Answers the first HTTP request on a local port with a canned `response`
/// and returns the `http://addr` base URL.
pub async fn serve_once(response: &'static str) -> String {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        spawn,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
                if request_complete(&request) {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

fn request_complete(request: &[u8]) -> bool {
    let text = String::from_utf8_lossy(request);
    let head_end = match text.find("\r\n\r\n") {
        Some(i) => i + 4,
        None => return false,
    };
    let content_length = text[..head_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    request.len() >= head_end + content_length
}
