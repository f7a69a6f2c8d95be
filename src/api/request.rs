//! Request execution and failure classification.

use log::{debug, error};
use serde::de::DeserializeOwned;

use super::{ApiError, DogApiClient, Endpoint};

impl DogApiClient {
    /// Performs one exchange against `endpoint` and decodes the JSON body.
    ///
    /// Failures are classified in a fixed order: URL composition, transport,
    /// HTTP status (checked before any decode attempt), empty body, JSON
    /// decode. No retries, no caching.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let url = endpoint.url(&self.base_url)?;
        debug!("{} {url}", endpoint.method.as_str());

        let response = self
            .client
            .request(endpoint.method.into(), url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::Unknown)?;

        let status = response.status();
        debug!("Response status for {url}: {status}");

        if !status.is_success() {
            error!("Request to {url} failed with status {status}");
            return Err(ApiError::Http(status.as_u16()));
        }

        let body = response.text().await.map_err(ApiError::Unknown)?;
        if body.is_empty() {
            error!("Request to {url} returned an empty body");
            return Err(ApiError::NoData);
        }

        serde_json::from_str(&body).map_err(ApiError::Decoding)
    }
}
