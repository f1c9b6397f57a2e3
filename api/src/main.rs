//! Leão API Server
//!
//! Backend for the Leão income-tax assistant: accounts, an IR chatbot
//! proxying a generative model, document uploads with AI analysis, and a
//! simplified progressive-tax simulator.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{
    GeminiClientImpl, LocalDocumentStore, PostgresConversationRepository,
    PostgresDocumentRepository, PostgresSessionRepository, PostgresSimulationRepository,
    PostgresUserRepository,
};
use app::{AccountService, ChatService, DocumentService, SimulationService};
use config::Config;

/// Maximum accepted multipart body for document uploads
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresUserRepository, PostgresSessionRepository>>,
    pub chat_service: Arc<ChatService<PostgresConversationRepository, GeminiClientImpl>>,
    pub document_service:
        Arc<DocumentService<PostgresDocumentRepository, LocalDocumentStore, GeminiClientImpl>>,
    pub simulation_service: Arc<SimulationService<PostgresSimulationRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HomeResponse {
    message: &'static str,
    status: &'static str,
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Leão API - Assistente de Imposto de Renda",
        status: "online",
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,leao_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Leão API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .context("Failed to create upload directory")?;

    // Create adapters
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let session_repo = Arc::new(PostgresSessionRepository::new(db.clone()));
    let conversation_repo = Arc::new(PostgresConversationRepository::new(db.clone()));
    let document_repo = Arc::new(PostgresDocumentRepository::new(db.clone()));
    let simulation_repo = Arc::new(PostgresSimulationRepository::new(db.clone()));

    let gemini = Arc::new(GeminiClientImpl::new(
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let store = Arc::new(LocalDocumentStore::new(config.upload_dir.clone()));

    // Create application services
    let account_service = Arc::new(AccountService::new(user_repo, session_repo));
    let chat_service = Arc::new(ChatService::new(conversation_repo, gemini.clone()));
    let document_service = Arc::new(DocumentService::new(document_repo, store, gemini));
    let simulation_service = Arc::new(SimulationService::new(simulation_repo));

    // Create app state
    let state = AppState {
        account_service,
        chat_service,
        document_service,
        simulation_service,
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5, keyed by peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Credential endpoints are brute-forceable, so they carry the rate limit
    let credential_routes = Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .layer(GovernorLayer {
            config: governor_config,
        });

    let session_routes = Router::new()
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/me", get(handlers::me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    // Guests may chat; logged-in callers get their own history
    let chatbot_routes = Router::new()
        .route("/chatbot/message", post(handlers::post_message))
        .route("/chatbot/history", get(handlers::chat_history))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional_auth_middleware,
        ));

    // The frontend historically calls these both bare and under /api
    let shared_routes = Router::new()
        .merge(credential_routes)
        .merge(session_routes)
        .merge(chatbot_routes);

    let document_routes = Router::new()
        .route("/documents", get(handlers::list_documents))
        .route("/documents/", get(handlers::list_documents))
        .route("/documents/upload", post(handlers::upload_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let simulation_routes = Router::new()
        .route("/simulation/calculate", post(handlers::calculate))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional_auth_middleware,
        ))
        .merge(
            Router::new()
                .route("/simulation/history", get(handlers::simulation_history))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware,
                )),
        );

    let api_routes = Router::new()
        .route("/", get(home))
        .merge(shared_routes.clone())
        .merge(document_routes)
        .merge(simulation_routes);

    // Build router
    let app = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(shared_routes)
        .nest("/api", api_routes)
        .route("/api/", get(home))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
