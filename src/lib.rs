//! Dog Breed Explorer data layer
//!
//! This library provides the data layer of the Dog Breed Explorer client:
//! typed access to the dog.ceo API, the breed repository with its image
//! fallback policy, a bounded in-memory image cache, and the view-state
//! machines that coordinate asynchronous loads.

pub mod api;
pub mod image_cache;
pub mod image_loader;
pub mod models;
pub mod repository;
pub mod view_model;

pub use api::*;
pub use image_cache::*;
pub use image_loader::*;
pub use models::*;
pub use repository::*;
pub use view_model::*;
