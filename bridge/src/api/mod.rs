pub mod hooks;
mod metrics;
mod version;

use axum::Router;
use futures::Future;
use hyper::Error as HyperError;
use std::{net::SocketAddr, sync::Arc};

use crate::{authorizer::Authorizer, publisher::MessagePublisher, stats::StatsSender};

/// Read only state shared by all in-flight requests.
pub struct ApiState {
    pub authorizer: Authorizer,
    pub publisher: Arc<dyn MessagePublisher>,
    pub stats_sender: StatsSender,
}

pub struct Api {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl Api {
    pub fn new(addr: SocketAddr, state: ApiState) -> Self {
        Api {
            addr,
            state: Arc::new(state),
        }
    }

    pub async fn run<F>(self, shutdown: F) -> Result<(), HyperError>
    where
        F: Future<Output = ()>,
    {
        axum::Server::bind(&self.addr)
            .serve(router(self.state).into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
    }
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(hooks::router(state.clone()))
        .merge(metrics::router(state))
        .merge(version::router())
}
