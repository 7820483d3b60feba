use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::stats_controller::{parse_window, StatsController};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::stats::{StatsQuery, StatsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_stats_router() -> Router<AppState> {
    Router::new().route("/", get(own_stats))
}

/// Rutas de administración: estadísticas globales o por usuario
pub fn create_admin_stats_router() -> Router<AppState> {
    Router::new().route("/", get(admin_stats))
}

async fn own_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let window = parse_window(query.window.as_deref())?;
    let controller = StatsController::new(state.pool.clone());
    let response = controller.window_stats(Some(user.user_id), window).await?;
    Ok(Json(response))
}

async fn admin_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let window = parse_window(query.window.as_deref())?;
    let controller = StatsController::new(state.pool.clone());
    let response = controller.window_stats(query.user_id, window).await?;
    Ok(Json(response))
}
