use reqwest::{Client, Url};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::EndpointConfig;
use crate::fetch::error::RequestError;

/// Decoded body of a successful response. Its shape is not validated.
pub type Payload = serde_json::Value;

/// HTTP client bound to a single wallets endpoint.
#[derive(Clone)]
pub struct WalletsClient {
    client: Client,
    url: Url,
}

impl WalletsClient {
    /// Builds a client from endpoint settings.
    ///
    /// Query filters are folded into the URL here so every request
    /// made through this client targets the same resource.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, RequestError> {
        let mut url = Url::parse(&config.url).map_err(|e| RequestError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;

        let filters = config.query.pairs();
        if !filters.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &filters {
                query.append_pair(name, value);
            }
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(connect) = config.connect_timeout() {
            builder = builder.connect_timeout(connect);
        }
        let client = builder
            .build()
            .map_err(|source| RequestError::ClientBuild { source })?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issues one GET and decodes the body as JSON.
    ///
    /// No retries. Non-2xx statuses are errors even when the body is JSON.
    pub async fn fetch(&self) -> Result<Payload, RequestError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("fetch", %request_id, url = %self.url);
        self.do_fetch().instrument(span).await
    }

    async fn do_fetch(&self) -> Result<Payload, RequestError> {
        let url = self.url.as_str();
        tracing::debug!("Sending request");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| RequestError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!("Failed to read error body: {}", err);
                    format!("<unreadable body: {}>", err)
                }
            };
            tracing::warn!(status = status.as_u16(), "Endpoint returned non-success status");
            return Err(RequestError::status_body(
                url.to_string(),
                status.as_u16(),
                body,
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RequestError::from_transport(url, e))?;

        let payload: Payload =
            serde_json::from_slice(&bytes).map_err(|e| RequestError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(bytes = bytes.len(), "Response decoded");
        Ok(payload)
    }
}
