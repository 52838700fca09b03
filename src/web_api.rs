//! Client for the Steam web API's current player count endpoint.

use anyhow::Context;
use async_trait::async_trait;
use log::*;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tokio::time;
use url::Url;

use crate::config::WebApiSettings;
use crate::model::player_count::{PlayerCount, RawPlayerCountEnvelope};

#[cfg(test)]
mod tests;

const PLAYER_COUNT_PATH: &str = "ISteamUserStats/GetNumberOfCurrentPlayers/v1/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    /// Non-success HTTP status, e.g. "503 Service Unavailable".
    #[error("{0}")]
    Status(String),
    #[error("{0}")]
    Transport(reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Safe to show in chat: never carries the request url, which holds the api key.
    pub fn public_reason(&self) -> String {
        match self {
            ApiError::Timeout(_) => "request timed out".to_owned(),
            ApiError::Status(status) => status.clone(),
            ApiError::Transport(_) => "request failed".to_owned(),
            ApiError::Decode(_) => "malformed response".to_owned(),
        }
    }

    fn from_reqwest(e: reqwest::Error, timeout: Duration) -> Self {
        let e = e.without_url();
        if e.is_timeout() {
            ApiError::Timeout(timeout)
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status(status.to_string())
        } else {
            ApiError::Transport(e)
        }
    }
}

#[async_trait]
pub trait PlayerCountApi: Send + Sync {
    async fn current_players(&self, app_id: u32) -> Result<PlayerCount, ApiError>;
}

pub struct SteamWebApi {
    client: Client,
    endpoint: Url,
    key: Option<String>,
    timeout: Duration,
}

impl SteamWebApi {
    pub fn new(settings: &WebApiSettings) -> anyhow::Result<Self> {
        let mut base_url = settings.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let endpoint = Url::parse(&base_url)
            .and_then(|base| base.join(PLAYER_COUNT_PATH))
            .with_context(|| format!("invalid web api base url '{}'", settings.base_url))?;
        let client = Client::builder()
            .user_agent(concat!("players-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("cannot build http client")?;

        Ok(SteamWebApi {
            client,
            endpoint,
            key: settings.key.clone(),
            timeout: settings.timeout(),
        })
    }

    fn url_for(&self, app_id: u32) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("appid", &app_id.to_string());
            if let Some(key) = &self.key {
                query.append_pair("key", key);
            }
        }
        url
    }
}

#[async_trait]
impl PlayerCountApi for SteamWebApi {
    async fn current_players(&self, app_id: u32) -> Result<PlayerCount, ApiError> {
        let url = self.url_for(app_id);
        debug!("requesting player count for {}", app_id);

        let request = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| ApiError::from_reqwest(e, self.timeout))?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.to_string()));
            }
            response
                .json::<RawPlayerCountEnvelope>()
                .await
                .map_err(|e| ApiError::from_reqwest(e, self.timeout))
        };

        let raw = time::timeout(self.timeout, request)
            .await
            .map_err(|_| ApiError::Timeout(self.timeout))??;
        raw.validate().map_err(ApiError::Decode)
    }
}
