//! HTTP implementation of the gateway traits.
//!
//! [`GatewayHttpClient`] implements every capability trait; the impls live in
//! one submodule per resource.

mod accounts;
mod cards;
mod documents;
mod operations;
mod users;

use std::sync::Arc;

use bankload_config::GatewayHttpConfig;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::GatewayClients;
use crate::error::GatewayError;
use crate::fakers::FakeData;

/// Thin JSON wrapper around a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &GatewayHttpConfig) -> Result<Self, GatewayError> {
        let inner = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| GatewayError::Transport {
                path: config.client_url.clone(),
                source,
            })?;

        Ok(Self {
            inner,
            base_url: config.client_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let request = self.inner.get(self.url(path));
        self.send(path, request).await
    }

    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, GatewayError>
    where
        Q: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.inner.get(self.url(path)).query(query);
        self.send(path, request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.inner.post(self.url(path)).json(body);
        self.send(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let transport = |source| GatewayError::Transport {
            path: path.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            warn!(path, status = status.as_u16(), "Gateway call failed");
            return Err(GatewayError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        debug!(path, status = status.as_u16(), "Gateway call succeeded");
        serde_json::from_str(&body).map_err(|source| GatewayError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Gateway client speaking HTTP/JSON to the banking gateway.
#[derive(Clone)]
pub struct GatewayHttpClient {
    http: HttpClient,
    fakes: Arc<dyn FakeData>,
}

impl GatewayHttpClient {
    pub fn new(config: &GatewayHttpConfig, fakes: Arc<dyn FakeData>) -> Result<Self, GatewayError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            fakes,
        })
    }
}

impl std::fmt::Debug for GatewayHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayHttpClient")
            .field("base_url", &self.http.base_url())
            .finish_non_exhaustive()
    }
}

/// Builds the full client set against the configured gateway URL.
pub fn build_gateway_http_clients(
    config: &GatewayHttpConfig,
    fakes: Arc<dyn FakeData>,
) -> Result<GatewayClients, GatewayError> {
    let client = GatewayHttpClient::new(config, fakes)?;
    Ok(GatewayClients::from_gateway(Arc::new(client)))
}
