use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use intern_match::config::Settings;
use intern_match::core::{default_catalog, load_catalog, Recommender};
use intern_match::routes::{self, AppState};
use intern_match::services::RecommendationCache;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    // Initialize logging (LOG_LEVEL / LOG_FORMAT override the config file)
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting internship recommendation service...");
    info!("Configuration loaded successfully");

    // Build the catalog once; it is shared read-only by every worker
    let catalog = match &settings.recommender.catalog_path {
        Some(path) => load_catalog(path).map_err(|e| {
            error!("Failed to load catalog: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?,
        None => default_catalog(),
    };

    let mut recommender = Recommender::new(catalog);
    if let Some(max_results) = settings.recommender.max_results {
        recommender = recommender.with_limit(max_results);
    }

    info!(
        "Recommender initialized with {} internships (limit: {})",
        recommender.catalog().len(),
        recommender.limit()
    );

    let cache = if settings.cache.enabled {
        let (capacity, ttl_secs) = settings.cache_limits();
        info!("Recommendation cache enabled ({} entries, TTL: {}s)", capacity, ttl_secs);
        Some(RecommendationCache::new(capacity, ttl_secs))
    } else {
        info!("Recommendation cache disabled");
        None
    };

    let app_state = AppState::new(recommender, cache);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let json_limit = settings.server.json_limit_bytes.unwrap_or(routes::DEFAULT_JSON_LIMIT);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config(json_limit))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
