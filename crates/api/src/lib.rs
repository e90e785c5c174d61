//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /transactions            (optional `?description=` filter)
//!   POST   /transactions
//!   GET    /transactions/:id
//!   PUT    /transactions/:id
//!   DELETE /transactions/:id

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use db::DbPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use handlers::transactions;

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    // The web frontend is served from its own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/:id",
            get(transactions::get)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `bind` and serve the API until the process is stopped.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState { pool });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

#[cfg(test)]
mod handler_tests;
