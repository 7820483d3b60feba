use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::code_controller::CodeController;
use crate::dto::ApiResponse;
use crate::models::codes::{CodeKind, CreateCodeRequest, ReferenceCode, UpdateCodeRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_code_router() -> Router<AppState> {
    Router::new().route("/:kind", get(list_active_codes))
}

/// Rutas de administración de códigos
pub fn create_admin_code_router() -> Router<AppState> {
    Router::new()
        .route("/:kind", get(list_all_codes).post(create_code))
        .route("/:kind/:id", put(update_code).delete(delete_code))
}

fn parse_kind(raw: &str) -> Result<CodeKind, AppError> {
    raw.parse().map_err(AppError::NotFound)
}

async fn list_active_codes(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<ReferenceCode>>, AppError> {
    let controller = CodeController::new(state.pool.clone(), parse_kind(&kind)?);
    Ok(Json(controller.list(true).await?))
}

async fn list_all_codes(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<ReferenceCode>>, AppError> {
    let controller = CodeController::new(state.pool.clone(), parse_kind(&kind)?);
    Ok(Json(controller.list(false).await?))
}

async fn create_code(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<CreateCodeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReferenceCode>>), AppError> {
    let controller = CodeController::new(state.pool.clone(), parse_kind(&kind)?);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))))
}

async fn update_code(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    Json(request): Json<UpdateCodeRequest>,
) -> Result<Json<ApiResponse<ReferenceCode>>, AppError> {
    let controller = CodeController::new(state.pool.clone(), parse_kind(&kind)?);
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_code(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CodeController::new(state.pool.clone(), parse_kind(&kind)?);
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Código eliminado exitosamente".to_string())))
}
