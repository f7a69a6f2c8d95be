//! Breed repository orchestrating the API client and domain mapping.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::api::{ApiError, DogApiClient, Endpoint};
use crate::models::{
    Breed, BreedImage, BreedImageResponse, BreedImagesResponse, BreedsListResponse,
};

/// Source of breed data, abstracted so view models can substitute doubles.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Fetches every known breed, sorted ascending by name.
    async fn fetch_breeds(&self) -> Result<Vec<Breed>, ApiError>;

    /// Fetches up to `count` random images for `breed_name`.
    ///
    /// Returned images carry `breed_name` exactly as supplied.
    async fn fetch_random_images(
        &self,
        breed_name: &str,
        count: u32,
    ) -> Result<Vec<BreedImage>, ApiError>;
}

/// Production repository backed by the dog.ceo API.
pub struct BreedRepository {
    api: DogApiClient,
}

impl BreedRepository {
    pub fn new(api: DogApiClient) -> Self {
        Self { api }
    }
}

impl Default for BreedRepository {
    fn default() -> Self {
        Self::new(DogApiClient::new())
    }
}

/// API-safe path token for a breed name: spaces become hyphens, then the
/// whole token is lowercased. Only the request path uses the token; the
/// original name is what gets attached to every resulting image.
pub(crate) fn api_breed_token(breed_name: &str) -> String {
    breed_name.replace(' ', "-").to_lowercase()
}

#[async_trait]
impl BreedProvider for BreedRepository {
    async fn fetch_breeds(&self) -> Result<Vec<Breed>, ApiError> {
        debug!("Fetching breed list");
        let response: BreedsListResponse = self.api.request(&Endpoint::all_breeds()).await?;
        let breeds = response.to_breeds();
        info!("Fetched {} breeds", breeds.len());
        Ok(breeds)
    }

    async fn fetch_random_images(
        &self,
        breed_name: &str,
        count: u32,
    ) -> Result<Vec<BreedImage>, ApiError> {
        let token = api_breed_token(breed_name);
        debug!("Fetching {count} random images for '{breed_name}' (token '{token}')");

        let bulk = self
            .api
            .request::<BreedImagesResponse>(&Endpoint::random_breed_images(&token, count))
            .await;

        match bulk {
            Ok(response) => {
                let images = response.to_breed_images(breed_name);
                info!("Fetched {} images for '{breed_name}'", images.len());
                Ok(images)
            }
            // Any bulk failure gets one fallback attempt against the
            // single-image endpoint; only the fallback's own failure
            // propagates.
            Err(bulk_error) => {
                warn!(
                    "Bulk image fetch for '{breed_name}' failed ({bulk_error}), \
                     falling back to a single image"
                );
                let response: BreedImageResponse = self
                    .api
                    .request(&Endpoint::random_breed_image(&token))
                    .await?;
                Ok(response.to_breed_image(breed_name).into_iter().collect())
            }
        }
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod repository_tests;
