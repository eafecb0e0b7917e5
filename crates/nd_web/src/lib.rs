//! Local development backend serving `/api/news` from an in-memory store.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;
pub mod store;

pub use state::AppState;
pub use store::ArticleStore;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::list_news))
        .route("/api/news/:guid", get(handlers::get_news))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves the app on `addr` until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> nd_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("📰 Serving {} articles on http://{}", state.store.len().await, listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState, ArticleStore};
    pub use nd_core::{Article, Error, Result};
}
