// Route exports
pub mod recommend;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use crate::models::{ErrorResponse, RecommendResponse};

pub use recommend::{AppState, SKILLS};

/// Default cap on JSON request bodies
pub const DEFAULT_JSON_LIMIT: usize = 64 * 1024;

/// JSON extractor config: body size limit plus JSON error bodies
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handle_json_payload_error)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(recommend::service_info))
        .service(
            web::scope("/api")
                .configure(recommend::configure),
        )
        .default_service(web::to(not_found));
}

/// JSON error response for rejected payloads
#[derive(Debug)]
pub struct JsonError {
    pub message: String,
    pub status_code: StatusCode,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(RecommendResponse::Error {
            message: self.message.clone(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let status_code = match &err {
        error::JsonPayloadError::Overflow { .. } | error::JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    JsonError {
        message: format!("Invalid JSON: {}", err),
        status_code,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        message: format!("Invalid query: {}", err),
        status_code: StatusCode::BAD_REQUEST,
    }
    .into()
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Endpoint not found".to_string(),
        message: format!("No route for {} {}", req.method(), req.path()),
        status_code: 404,
    })
}
