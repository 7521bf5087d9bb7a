use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use super::{
    things_error::{ThingsError, ThingsErrorKind, ThingsResult},
    things_types::{AccessRequest, IdentifyRequest, ThingId},
    ThingsClient,
};

/// `ThingsClient` talking JSON over HTTP to the things service.
pub struct HttpThingsClient {
    base_url: String,
    client: Client,
}

impl HttpThingsClient {
    const IDENTIFY_PATH: &'static str = "/identify";
    const ACCESS_PATH: &'static str = "/access";

    pub fn new<U: Into<String>>(base_url: U, timeout: Duration) -> ThingsResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(HttpThingsClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call<R: Serialize>(&self, path: &str, req: &R) -> ThingsResult<ThingId> {
        let url = format!("{}{}", self.base_url, path);

        let res = match self.client.post(url.as_str()).json(req).send().await {
            Ok(res) => Self::read_thing_id(res).await,
            Err(err) => Err(ThingsError::from(err)),
        };

        res.map_err(|err| {
            error!(
                "[Things Client]: {} call failed ({:?}). {}",
                path, err.kind, err.description
            );
            err
        })
    }

    async fn read_thing_id(res: Response) -> ThingsResult<ThingId> {
        let status = res.status();
        if !status.is_success() {
            debug!("[Things Client]: things service responded with {}", status);
            return Err(ThingsError::new(
                ThingsErrorKind::from_status(status.as_u16()),
                format!("things service responded with {}", status),
            ));
        }

        res.json::<ThingId>().await.map_err(|err| {
            ThingsError::new(
                ThingsErrorKind::Internal,
                format!("unable to read thing id: {}", err),
            )
        })
    }
}

#[async_trait]
impl ThingsClient for HttpThingsClient {
    async fn identify(&self, token: &str) -> ThingsResult<ThingId> {
        self.call(Self::IDENTIFY_PATH, &IdentifyRequest { token })
            .await
    }

    async fn can_access(&self, token: &str, chan_id: &str) -> ThingsResult<ThingId> {
        self.call(Self::ACCESS_PATH, &AccessRequest { token, chan_id })
            .await
    }
}
