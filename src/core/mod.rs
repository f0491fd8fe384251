// Core algorithm exports
pub mod catalog;
pub mod courses;
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod tokens;

pub use catalog::{default_catalog, load_catalog, parse_catalog, Catalog, CatalogError};
pub use courses::{suggest_courses, COURSE_MAPPING, GENERIC_COURSES};
pub use filters::{filter_catalog, matches_category, matches_any_skill};
pub use recommender::{Recommender, RecommendError, MAX_RECOMMENDATIONS};
pub use scoring::{calculate_match_score, count_matches};
pub use tokens::{parse_tokens, normalize_token};
