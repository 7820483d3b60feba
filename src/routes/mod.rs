//! Rutas HTTP
//!
//! Arma el router completo: rutas públicas, rutas autenticadas y rutas de
//! administración, con sus capas de middleware.

pub mod auth_routes;
pub mod call_routes;
pub mod code_routes;
pub mod stats_routes;
pub mod tool_routes;
pub mod user_routes;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app(state: AppState) -> Router {
    let admin = Router::new()
        .nest("/users", user_routes::create_user_router())
        .nest("/calls", call_routes::create_admin_call_router())
        .nest("/stats", stats_routes::create_admin_stats_router())
        .nest("/codes", code_routes::create_admin_code_router())
        .route_layer(from_fn(admin_only_middleware));

    let protected = Router::new()
        .route("/api/auth/me", get(auth_routes::me))
        .nest("/api/calls", call_routes::create_call_router())
        .nest("/api/stats", stats_routes::create_stats_router())
        .nest("/api/codes", code_routes::create_code_router())
        .nest("/api/ocr", tool_routes::create_ocr_router())
        .nest("/api/vehicle-type", tool_routes::create_vehicle_type_router())
        .nest("/api/admin", admin)
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(auth_routes::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// Endpoint de salud
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "call-log",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
