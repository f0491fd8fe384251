use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{filter_catalog, suggest_courses, Recommender, RecommendError};
use crate::models::{
    CatalogFilter, CourseSuggestionsResponse, HealthResponse, QueryTokens, RecommendRequest,
    RecommendResponse, ServiceInfo, SuggestCoursesRequest,
};
use crate::services::RecommendationCache;
use std::sync::Arc;

/// Skill vocabulary offered to clients for autocompletion
pub const SKILLS: [&str; 15] = [
    "JavaScript", "Python", "Java", "C++", "React", "Node.js", "SQL",
    "Machine Learning", "Data Analysis", "Web Development", "Mobile Development",
    "UI/UX Design", "Project Management", "Communication", "Problem Solving",
];

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    /// `None` when caching is disabled
    pub cache: Option<Arc<RecommendationCache>>,
}

impl AppState {
    pub fn new(recommender: Recommender, cache: Option<RecommendationCache>) -> Self {
        Self {
            recommender: Arc::new(recommender),
            cache: cache.map(Arc::new),
        }
    }
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend/profile", web::post().to(recommend_profile))
        .route("/recommend/courses", web::post().to(recommend_courses))
        .route("/internships", web::get().to(list_internships))
        .route("/skills", web::get().to(list_skills));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Service banner
pub async fn service_info() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "Internship recommendation API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "POST /api/recommend/profile".to_string(),
            "POST /api/recommend/courses".to_string(),
            "GET /api/internships".to_string(),
            "GET /api/skills".to_string(),
            "GET /api/health".to_string(),
        ],
    })
}

/// Recommend internships for a profile
///
/// POST /api/recommend/profile
///
/// Request body:
/// ```json
/// {
///   "skills": "javascript, react",
///   "interests": "web development"
/// }
/// ```
async fn recommend_profile(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let query = QueryTokens::new(req.skills.as_deref(), req.interests.as_deref());

    if let Some(cache) = &state.cache {
        if let Some(recommendations) = cache.get(&query).await {
            tracing::debug!("Serving {} cached recommendations", recommendations.len());
            return HttpResponse::Ok().json(RecommendResponse::Success { recommendations });
        }
    }

    match state.recommender.recommend_tokens(&query) {
        Ok(recommendations) => {
            tracing::info!(
                "Returning {} recommendations for {} skills and {} interests",
                recommendations.len(),
                query.skills.len(),
                query.interests.len()
            );

            if let Some(cache) = &state.cache {
                cache.insert(&query, recommendations.clone()).await;
            }

            HttpResponse::Ok().json(RecommendResponse::Success { recommendations })
        }
        Err(e @ RecommendError::MissingQueryInput) => {
            tracing::debug!("Rejected recommend request: {}", e);
            HttpResponse::BadRequest().json(RecommendResponse::Error {
                message: e.to_string(),
            })
        }
    }
}

/// Suggest upskilling courses for a profile
///
/// POST /api/recommend/courses
///
/// Request body:
/// ```json
/// {
///   "skills": "python, html",
///   "interests": "cloud",
///   "top_k": 3
/// }
/// ```
async fn recommend_courses(req: web::Json<SuggestCoursesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for course request: {}", errors);
        return HttpResponse::BadRequest().json(RecommendResponse::Error {
            message: errors.to_string(),
        });
    }

    let query = QueryTokens::new(req.skills.as_deref(), req.interests.as_deref());
    let courses: Vec<String> = suggest_courses(&query, req.top_k)
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::info!("Suggesting {} courses for {} query tokens", courses.len(), query.len());

    HttpResponse::Ok().json(CourseSuggestionsResponse {
        status: "success".to_string(),
        courses,
    })
}

/// List catalog internships as a JSON array
///
/// GET /api/internships?category={category}&skills={skills}
async fn list_internships(
    state: web::Data<AppState>,
    query: web::Query<CatalogFilter>,
) -> impl Responder {
    let internships = filter_catalog(state.recommender.catalog(), &query);

    tracing::debug!("Listing {} internships for filter {:?}", internships.len(), query);

    HttpResponse::Ok().json(internships)
}

/// Skill vocabulary endpoint
async fn list_skills() -> impl Responder {
    HttpResponse::Ok().json(SKILLS)
}
