use log::debug;
use std::{future::Future, sync::Arc, time::Duration};
use things_client::{ThingId, ThingsClient, ThingsError, ThingsErrorKind, ThingsResult};
use tokio::time::timeout;

use super::authorizer_error::{AuthError, AuthResult};

/// Turns credentials into thing ids with the help of the things service.
///
/// Every call is a fresh request bounded by `timeout`. Nothing is cached and
/// nothing is retried.
#[derive(Clone)]
pub struct Authorizer {
    things: Arc<dyn ThingsClient>,
    timeout: Duration,
}

impl Authorizer {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    pub fn new(things: Arc<dyn ThingsClient>, timeout: Duration) -> Self {
        Authorizer { things, timeout }
    }

    /// Resolves a thing id for a thing key.
    pub async fn authenticate(&self, credential: &str) -> AuthResult<String> {
        if credential.is_empty() {
            return Err(AuthError::Unauthorized);
        }

        self.bounded(self.things.identify(credential)).await
    }

    /// Resolves a thing id for a thing key if the thing may access a channel.
    pub async fn authorize(&self, credential: &str, chan_id: &str) -> AuthResult<String> {
        if credential.is_empty() {
            return Err(AuthError::Unauthorized);
        }

        self.bounded(self.things.can_access(credential, chan_id))
            .await
    }

    async fn bounded<F>(&self, call: F) -> AuthResult<String>
    where
        F: Future<Output = ThingsResult<ThingId>>,
    {
        match timeout(self.timeout, call).await {
            Ok(Ok(id)) => Ok(id.into_value()),
            Ok(Err(err)) => {
                debug!("[Authorizer]: things service rejected a call. {}", err);
                Err(AuthError::Backend(err))
            }
            Err(_) => Err(AuthError::Backend(ThingsError::new(
                ThingsErrorKind::DeadlineExceeded,
                format!("no answer from things service within {:?}", self.timeout),
            ))),
        }
    }
}
