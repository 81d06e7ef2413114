//! HTTP front end of the recipe generator.
//!
//! Serves the form page and forwards ingredient lists to whatever
//! `RequestHandler` it is given. It never talks to a completion service
//! directly.

mod error;
pub use error::AppError;
mod form;
mod page;
mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use text_completion::RequestHandler;
use tower_http::trace::TraceLayer;
use tracing::*;

#[derive(Clone)]
pub struct WebHandler {
    request_handler: Arc<dyn RequestHandler + Send + Sync>,
}

pub fn router(request_handler: Arc<dyn RequestHandler + Send + Sync>) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/generate", post(routes::generate))
        .with_state(WebHandler { request_handler })
        .layer(TraceLayer::new_for_http())
}

/// Serves until Ctrl-C.
pub async fn serve(
    addr: &str,
    request_handler: Arc<dyn RequestHandler + Send + Sync>,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(request_handler))
        .with_graceful_shutdown(async {
            let _signal_err = tokio::signal::ctrl_c().await;
            info!("Received Ctrl-C, shutting down.");
        })
        .await
}
