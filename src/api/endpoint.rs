//! Request descriptors for the dog.ceo API operations.

use url::Url;

use super::ApiError;

/// Number of random images requested when the caller does not say otherwise.
pub const DEFAULT_IMAGE_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request target: path, method, and query parameters.
///
/// Breed and sub-breed name segments are inserted into the path verbatim;
/// the only escaping applied is whatever URL composition itself performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// `GET /breeds/list/all`
    pub fn all_breeds() -> Self {
        Self::new("/breeds/list/all")
    }

    /// `GET /breed/{breed}/images/random/{count}`
    pub fn random_breed_images(breed: &str, count: u32) -> Self {
        Self::new(format!("/breed/{breed}/images/random/{count}"))
    }

    /// `GET /breed/{breed}/images/random`
    pub fn random_breed_image(breed: &str) -> Self {
        Self::new(format!("/breed/{breed}/images/random"))
    }

    /// `GET /breed/{breed}/{subBreed}/images/random/{count}`
    pub fn random_sub_breed_images(breed: &str, sub_breed: &str, count: u32) -> Self {
        Self::new(format!("/breed/{breed}/{sub_breed}/images/random/{count}"))
    }

    /// Composes the absolute request URL against `base`.
    ///
    /// This is the sole source of [`ApiError::InvalidUrl`].
    pub fn url(&self, base: &str) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&format!("{}{}", base, self.path)).map_err(|_| ApiError::InvalidUrl)?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}
