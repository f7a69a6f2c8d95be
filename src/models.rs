//! Domain entities and wire DTOs for the dog.ceo breeds API.
//!
//! The DTOs mirror the API payloads exactly; domain entities are created
//! fresh on every fetch-and-map cycle and carry generated identities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Status value the API reports on every payload it considers successful.
pub const STATUS_SUCCESS: &str = "success";

/// A dog breed and its sub-breed names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breed {
    /// Generated at construction; never derived from `name`.
    pub id: Uuid,
    /// Lowercase, API-native breed name.
    pub name: String,
    pub sub_breeds: Vec<String>,
}

impl Breed {
    pub fn new(name: impl Into<String>, sub_breeds: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sub_breeds,
        }
    }

    /// Title-cased name for display, e.g. "german shepherd" -> "German Shepherd".
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }

    pub fn has_sub_breeds(&self) -> bool {
        !self.sub_breeds.is_empty()
    }

    pub fn sub_breeds_count(&self) -> usize {
        self.sub_breeds.len()
    }
}

/// A random image of a breed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedImage {
    /// Generated at construction; never derived from `url`.
    pub id: Uuid,
    pub url: String,
    /// Breed name exactly as the caller supplied it, original casing kept.
    pub breed_name: String,
}

impl BreedImage {
    pub fn new(url: impl Into<String>, breed_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            breed_name: breed_name.into(),
        }
    }

    /// Best-effort parse of `url`; `None` when it is not a valid URL.
    pub fn image_url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// DTO for `GET /breeds/list/all`: breed name mapped to sub-breed names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedsListResponse {
    pub message: HashMap<String, Vec<String>>,
    pub status: String,
}

/// DTO for `GET /breed/{breed}/images/random/{count}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedImagesResponse {
    pub message: Vec<String>,
    pub status: String,
}

/// DTO for `GET /breed/{breed}/images/random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedImageResponse {
    pub message: String,
    pub status: String,
}

impl BreedsListResponse {
    /// One `Breed` per mapping entry, sorted ascending by name.
    ///
    /// The sort uses plain code-point `String` ordering and must stay
    /// deterministic for identical input. Any status other than `success`
    /// yields an empty list.
    pub fn to_breeds(&self) -> Vec<Breed> {
        if self.status != STATUS_SUCCESS {
            return Vec::new();
        }

        let mut breeds: Vec<Breed> = self
            .message
            .iter()
            .map(|(name, sub_breeds)| Breed::new(name.clone(), sub_breeds.clone()))
            .collect();
        breeds.sort_by(|a, b| a.name.cmp(&b.name));
        breeds
    }
}

impl BreedImagesResponse {
    /// One `BreedImage` per URL in source order, each tagged with
    /// `breed_name` verbatim. Any status other than `success` yields an
    /// empty list.
    pub fn to_breed_images(&self, breed_name: &str) -> Vec<BreedImage> {
        if self.status != STATUS_SUCCESS {
            return Vec::new();
        }

        self.message
            .iter()
            .map(|url| BreedImage::new(url.clone(), breed_name))
            .collect()
    }
}

impl BreedImageResponse {
    /// The single image tagged with `breed_name`, or `None` for any status
    /// other than `success`.
    pub fn to_breed_image(&self, breed_name: &str) -> Option<BreedImage> {
        if self.status != STATUS_SUCCESS {
            return None;
        }

        Some(BreedImage::new(self.message.clone(), breed_name))
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod models_tests;
