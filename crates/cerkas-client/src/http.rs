//! HTTP implementation of [`ViewBackend`].

use async_trait::async_trait;
use cerkas_model::{
    DataPayload, DataQuery, Envelope, Fetched, LayoutPayload, RouteIdentity, Stage,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::backend::ViewBackend;
use crate::config::ClientSettings;
use crate::error::{ClientError, Result};

/// User agent string for backend requests.
const USER_AGENT_VALUE: &str = concat!("cerkas-client/", env!("CARGO_PKG_VERSION"));

/// Talks to the view backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl HttpBackend {
    /// Creates a client for the backend at `settings.base_url`.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    async fn post<B, T>(&self, stage: Stage, path: &str, body: &B) -> Result<Fetched<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.settings.endpoint(path);
        tracing::debug!(%stage, %url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(stage, response).await
    }

    /// Checks the status, unwraps the envelope and parses its `data`.
    async fn handle_response<T: DeserializeOwned>(
        stage: Stage,
        response: reqwest::Response,
    ) -> Result<Fetched<T>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%stage, status = status.as_u16(), %body, "backend rejected request");
            return Err(ClientError::HttpStatus {
                stage,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let raw = Envelope::from_slice(&bytes)
            .and_then(Envelope::into_data)
            .map_err(|e| ClientError::from_model(stage, e))?;
        let payload = serde_json::from_value(raw.clone())?;
        Ok(Fetched::new(payload, raw))
    }
}

#[async_trait]
impl ViewBackend for HttpBackend {
    async fn fetch_layout(&self, route: &RouteIdentity) -> Result<Fetched<LayoutPayload>> {
        self.post(Stage::Layout, &route.layout_path(), &json!({}))
            .await
    }

    async fn fetch_data(
        &self,
        route: &RouteIdentity,
        query: &DataQuery,
    ) -> Result<Fetched<DataPayload>> {
        self.post(Stage::Data, &route.data_path(), query).await
    }
}
