//! Aureus Admin Backend
//!
//! REST backend for the agency admin console: entity collections, status
//! workflows, list queries, analytics and the two site documents, all held
//! in memory by a single process.

#[macro_use]
mod macros;

mod ai;
mod analytics;
mod api;
mod config;
mod errors;
mod export;
mod models;
mod query;
mod store;
mod workflow;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ai::TextGenerator;
use config::Config;
use models::{BlogPost, Devis, Faq, Lead, PricingPackage, Project, Subscriber, TeamMember, Testimonial, User};
use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
    pub ai: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Build state around a fresh repository, seeding it if configured.
    pub async fn new(config: Config) -> Self {
        let repo = Arc::new(Repository::new());
        if config.seed_demo {
            store::seed::seed_demo(&repo).await;
        }
        if let Some(path) = &config.settings_file {
            restore_settings(&repo, path).await;
        }

        Self {
            ai: ai::generator_from_config(&config),
            repo,
            config: Arc::new(config),
        }
    }
}

/// Load a previously saved settings file over the current settings, if one exists.
async fn restore_settings(repo: &Repository, path: &std::path::Path) {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return;
    }

    match export::read_settings_file(path).await {
        Ok(settings) => {
            repo.settings.set(settings).await;
            tracing::info!("Settings restored from {}", path.display());
        }
        Err(e) => tracing::warn!("Ignoring settings file {}: {}", path.display(), e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Aureus Admin Backend");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Demo data: {}", config.seed_demo);

    if config.ai_api_key.is_none() {
        tracing::warn!("No AI API key configured (AUREUS_AI_API_KEY). Text generation returns placeholders.");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config).await;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Collections
        .merge(api::collection_routes::<Project>("/projects"))
        .merge(api::collection_routes::<Lead>("/leads"))
        .merge(api::collection_routes::<BlogPost>("/blog-posts"))
        .merge(api::collection_routes::<TeamMember>("/team-members"))
        .merge(api::collection_routes::<Testimonial>("/testimonials"))
        .merge(api::collection_routes::<PricingPackage>("/pricing-packages"))
        .merge(api::collection_routes::<Faq>("/faqs"))
        .merge(api::collection_routes::<Devis>("/devis"))
        .merge(api::collection_routes::<Subscriber>("/subscribers"))
        .merge(api::collection_routes::<User>("/users"))
        // Workflow
        .route("/leads/{id}/status", put(api::set_lead_status))
        .route("/blog-posts/{id}/toggle-publish", post(api::toggle_publish))
        .route("/devis/{id}/send", post(api::send_devis))
        .route("/subscribers/{id}/unsubscribe", post(api::unsubscribe))
        .route("/users/{id}/reset-password", post(api::reset_password))
        // Newsletter
        .route("/subscribers/stats", get(api::get_subscriber_stats))
        .route("/subscribers/export", get(api::export_subscribers))
        // Documents
        .route(
            "/content/home",
            get(api::get_home_content).put(api::put_home_content),
        )
        .route("/content/home/metrics/edit", post(api::edit_metrics))
        .route("/content/home/steps/edit", post(api::edit_methodology_steps))
        .route("/content/home/why-us/edit", post(api::edit_why_us))
        .route("/settings", get(api::get_settings).put(api::put_settings))
        .route("/settings/export", get(api::export_settings))
        .route("/settings/import", post(api::import_settings))
        .route("/settings/footer/{group}/edit", post(api::edit_footer_links))
        // Analytics
        .route("/analytics/dashboard", get(api::get_dashboard))
        .route("/analytics/trend", get(api::get_trend))
        .route("/analytics/divisions", get(api::get_divisions))
        .route("/analytics/overview", get(api::get_overview))
        .route("/analytics/traffic-sources", get(api::get_traffic_sources))
        .route("/analytics/pages", get(api::get_pages))
        .route("/analytics/behavior", get(api::get_behavior))
        .route("/analytics/leads", get(api::get_lead_analytics))
        .route("/analytics/content", get(api::get_content_performance))
        // AI
        .route("/ai/project-description", post(api::project_description))
        .route("/ai/improve-text", post(api::improve_text))
        // Session
        .route("/login", post(api::login));

    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
