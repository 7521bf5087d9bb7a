mod things_client_http;
mod things_error;
mod things_types;

use async_trait::async_trait;

pub use things_client_http::HttpThingsClient;
pub use things_error::*;
pub use things_types::*;

/// Identity and access service of things.
///
/// A single client is created on start up and shared between all in-flight
/// hook requests, so implementations must not rely on `&mut self`.
#[async_trait]
pub trait ThingsClient: Send + Sync {
    /// Resolves a thing key into a thing id.
    async fn identify(&self, token: &str) -> ThingsResult<ThingId>;

    /// Resolves a thing key into a thing id if the thing is connected to
    /// a channel.
    async fn can_access(&self, token: &str, chan_id: &str) -> ThingsResult<ThingId>;
}
