use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::telemetry::{parse_collection, NewTelemetry, TelemetryRecord};

/// Path of the telemetry collection below the base URL.
pub const COLLECTION_PATH: &str = "telemetry";

/// CRUD operations the dashboard needs from the telemetry service.
#[async_trait]
pub trait TelemetryApi: Send + Sync {
    /// `GET /telemetry`: the full collection, malformed entries dropped.
    async fn list(&self) -> Result<Vec<TelemetryRecord>, ApiError>;

    /// `POST /telemetry`: only the status is checked, the body is ignored.
    async fn create(&self, payload: &NewTelemetry) -> Result<(), ApiError>;

    /// `DELETE /telemetry/{id}`: only the status is checked.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpTelemetryApi {
    client: Client,
    collection: Url,
}

impl HttpTelemetryApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let collection = collection_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, collection })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn record_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.collection.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl TelemetryApi for HttpTelemetryApi {
    async fn list(&self) -> Result<Vec<TelemetryRecord>, ApiError> {
        let url = self.collection.clone();
        tracing::debug!(%url, "GET telemetry collection");

        let response = send(self.client.get(url.clone()), &url).await?;
        let body: serde_json::Value = response.json().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        parse_collection(body).map_err(|e| ApiError::MalformedPayload {
            url: url.to_string(),
            source: e,
        })
    }

    async fn create(&self, payload: &NewTelemetry) -> Result<(), ApiError> {
        let url = self.collection.clone();
        tracing::debug!(%url, satellite_id = %payload.satellite_id, "POST telemetry record");

        send(self.client.post(url.clone()).json(payload), &url).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.record_url(id)?;
        tracing::debug!(%url, "DELETE telemetry record");

        send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}

async fn send(request: reqwest::RequestBuilder, url: &Url) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Request {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::UpstreamStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// `{base_url}/telemetry`, tolerating a trailing slash on the base.
fn collection_url(base_url: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot carry path segments".to_string()))?
        .pop_if_empty()
        .push(COLLECTION_PATH);
    Ok(url)
}
