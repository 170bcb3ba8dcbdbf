use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::{
    configuration::Config,
    error::{self, Error},
    provider::PoolSource,
    types::{Pool, PoolsBody},
};

#[derive(Debug)]
pub struct HTTP {
    pub config: Config,
    pub http: Client,
}

impl HTTP {
    pub fn new(config: Config) -> Result<HTTP, Error> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let http = match builder.build() {
            Ok(c) => c,
            Err(e) => {
                return Err(error::Error::ReqwestError(e));
            },
        };

        Ok(HTTP { config, http })
    }

    pub async fn get_pools(&self) -> Result<Vec<Pool>, Error> {
        let url = &self.config.api_url;
        info!("Fetching pools from {}", url);

        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let body: PoolsBody = serde_json::from_slice(&bytes)?;

        debug!("Received {} pools", body.data.len());
        Ok(body.data)
    }
}

impl PoolSource for HTTP {
    async fn fetch_pools(&self) -> Result<Vec<Pool>, Error> {
        self.get_pools().await
    }
}
