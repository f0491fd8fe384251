use serde::{Deserialize, Serialize};
use crate::models::domain::Recommendation;

/// Response for the profile recommendation endpoint
///
/// Serialized with a `status` discriminator: `"success"` carries the
/// recommendations, `"error"` carries a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecommendResponse {
    Success { recommendations: Vec<Recommendation> },
    Error { message: String },
}

/// Response for the course suggestion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSuggestionsResponse {
    pub status: String,
    pub courses: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Service banner returned from the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
