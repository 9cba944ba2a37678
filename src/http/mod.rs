//! JSON-over-HTTP surface.

mod error;
mod handlers;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    core::TourPlanner,
    error::{Result, TourError},
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub planner: Arc<TourPlanner>,
}

impl AppState {
    pub fn new(planner: TourPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tours", post(handlers::create_tour).get(handlers::list_tours))
        .route("/tours/optimize", post(handlers::optimize_route))
        .route(
            "/tours/vehicle-assignments",
            post(handlers::vehicle_assignments),
        )
        .route("/tours/recommendations", post(handlers::recommendations))
        .route("/tours/location/:location", get(handlers::location_info))
        .route("/tours/analytics/:id", get(handlers::analytics))
        .route(
            "/tours/:id",
            get(handlers::get_tour)
                .put(handlers::update_tour)
                .delete(handlers::delete_tour),
        )
        .route("/tours/:id/summary", get(handlers::summary))
        .route("/tours/:id/alternatives", get(handlers::alternatives))
        .route("/tours/:id/weather-impact", post(handlers::weather_impact))
        .with_state(state)
}

/// Serve on an already-bound listener until the process stops.
pub async fn serve_listener(listener: TcpListener, state: AppState) -> Result<()> {
    let app = build_router(state);
    axum::serve(listener, app)
        .await
        .map_err(|err| TourError::Environment(format!("HTTP server failed: {err}")))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| TourError::Environment(format!("Failed to bind {addr}: {err}")))?;
    info!(target: "tour_agent::http", %addr, "listening");
    serve_listener(listener, state).await
}
