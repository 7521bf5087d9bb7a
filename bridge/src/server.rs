use std::sync::Arc;

use crate::{
    api::{Api, ApiState},
    authorizer::Authorizer,
    config::BridgeConfig,
    publisher::{DropPublisher, HttpPublisher, MessagePublisher},
    server_error::ServerResult,
    stats::Stats,
};

use futures::StreamExt;
use log::{error, info};
use signal_hook::consts::signal::*;
use signal_hook_tokio::Signals;
use things_client::HttpThingsClient;
use tokio::spawn;

pub struct Server {
    config: BridgeConfig,
    api: Api,
}

impl Server {
    pub fn new(config: BridgeConfig) -> ServerResult<Self> {
        info!("[Server]: Initializing with config\n{:?}", config);

        let things = HttpThingsClient::new(config.things_url.clone(), config.things_timeout)?;
        let authorizer = Authorizer::new(Arc::new(things), config.things_timeout);

        let publisher: Arc<dyn MessagePublisher> = match config.publisher_url {
            Some(ref url) => {
                info!("[Server]: publishing accepted messages to {}", url);
                Arc::new(HttpPublisher::new(url.clone(), config.publisher_timeout)?)
            }
            None => {
                info!("[Server]: no publisher_url configured, accepted messages are dropped");
                Arc::new(DropPublisher)
            }
        };

        let (stats, stats_sender) = Stats::new();
        spawn(async move {
            if let Err(err) = stats.run().await {
                error!("[Stats Worker]: finished with error {:?}", err);
            }
        });

        let api = Api::new(
            config.http_addr,
            ApiState {
                authorizer,
                publisher,
                stats_sender,
            },
        );

        Ok(Server { config, api })
    }

    pub async fn start(self) -> ServerResult<()> {
        let signals = Signals::new(&[SIGHUP, SIGTERM, SIGINT, SIGQUIT])?;
        let handle = signals.handle();

        info!("Hook API is listening on {:?}", self.config.http_addr);
        self.api.run(wait_for_shutdown(signals)).await?;

        handle.close();
        info!("[Server]: Shutting down complete. Bye.");
        Ok(())
    }
}

async fn wait_for_shutdown(mut signals: Signals) {
    while let Some(signal) = signals.next().await {
        match signal {
            SIGHUP => {
                info!("[Server]: configuration reload is not supported, restart the bridge instead");
            }
            _ => {
                info!("[Server]: Shutting down... Waiting for in-flight hooks");
                return;
            }
        }
    }
}
