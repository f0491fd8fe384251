// Service exports
pub mod cache;

pub use cache::{RecommendationCache, CacheKey, CacheStats};
