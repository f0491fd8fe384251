use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to recommend internships for a profile
///
/// Field length is bounded only by the JSON body limit; any string that
/// reaches the handler is scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Comma-separated skills, e.g. "javascript, react"
    #[serde(default)]
    pub skills: Option<String>,
    /// Comma-separated interests, e.g. "design, web development"
    #[serde(default)]
    pub interests: Option<String>,
}

/// Request for upskilling course suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestCoursesRequest {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[validate(range(min = 1, max = 10, message = "top_k must be between 1 and 10"))]
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    3
}
