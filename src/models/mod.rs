// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CatalogItem, QueryTokens, Recommendation, CatalogFilter};
pub use requests::{RecommendRequest, SuggestCoursesRequest};
pub use responses::{RecommendResponse, CourseSuggestionsResponse, HealthResponse, ServiceInfo, ErrorResponse};
