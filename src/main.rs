//! Biblioteca Server - Library Loan Management System
//!
//! A Rust REST API server for managing books, clients, copies, and loans.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("biblioteca_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Livros
        .route("/livros", get(api::livros::list_livros))
        .route("/livros", post(api::livros::create_livro))
        .route("/livros/:id", get(api::livros::get_livro))
        .route("/livros/:id", put(api::livros::update_livro))
        .route("/livros/:id", delete(api::livros::delete_livro))
        // Clientes
        .route("/clientes", get(api::clientes::list_clientes))
        .route("/clientes", post(api::clientes::create_cliente))
        .route("/clientes/:id", get(api::clientes::get_cliente))
        .route("/clientes/:id", put(api::clientes::update_cliente))
        .route("/clientes/:id", delete(api::clientes::delete_cliente))
        // Exemplares
        .route("/exemplares", get(api::exemplares::list_exemplares))
        .route("/exemplares", post(api::exemplares::create_exemplar))
        .route("/exemplares/:id", get(api::exemplares::get_exemplar))
        .route("/exemplares/:id", put(api::exemplares::update_exemplar))
        .route("/exemplares/:id", delete(api::exemplares::delete_exemplar))
        // Emprestimos
        .route("/emprestimos", get(api::emprestimos::list_emprestimos))
        .route("/emprestimos", post(api::emprestimos::create_emprestimo))
        .route("/emprestimos/:id", get(api::emprestimos::get_emprestimo))
        .route("/emprestimos/:id", put(api::emprestimos::update_emprestimo))
        .route("/emprestimos/:id", delete(api::emprestimos::delete_emprestimo))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
