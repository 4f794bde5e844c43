pub mod routes;
pub mod state;

use airmouse_input::MouseDispatcher;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum application router. Cross-origin requests are allowed
/// from any origin; the browser client is served from elsewhere.
pub fn build_router(mouse: MouseDispatcher) -> Router {
    let app_state = Arc::new(state::AppState::new(mouse));

    Router::new()
        .nest("/api", routes::api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the API server.
pub async fn start_server(mouse: MouseDispatcher, bind_addr: &str) -> anyhow::Result<()> {
    let app = build_router(mouse);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Mouse control server listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
