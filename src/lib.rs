//! Intern Match - internship recommendation service
//!
//! This library provides the skill/interest recommender behind the
//! internship matching backend. It scores a static catalog against a
//! requester's comma-separated skills and interests and returns the best
//! matches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Recommender, RecommendError, default_catalog, load_catalog};
pub use models::{CatalogItem, QueryTokens, Recommendation, RecommendRequest, RecommendResponse};
