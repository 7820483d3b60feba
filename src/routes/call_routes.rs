use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::call_controller::CallController;
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::call::{CallFilters, CallResponse, CreateCallRequest, UpdateCallRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_call_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_calls).post(create_call))
        .route("/:id", get(get_call).put(update_call).delete(delete_call))
}

/// Rutas de administración: todas las llamadas
pub fn create_admin_call_router() -> Router<AppState> {
    Router::new().route("/", get(list_all_calls))
}

async fn create_call(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateCallRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CallResponse>>), AppError> {
    let controller = CallController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Llamada registrada exitosamente".to_string(),
        )),
    ))
}

async fn list_calls(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(filters): Query<CallFilters>,
) -> Result<Json<Vec<CallResponse>>, AppError> {
    let controller = CallController::new(state.pool.clone());
    let response = controller.list_own(&user, filters).await?;
    Ok(Json(response))
}

async fn list_all_calls(
    State(state): State<AppState>,
    Query(filters): Query<CallFilters>,
) -> Result<Json<Vec<CallResponse>>, AppError> {
    let controller = CallController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_call(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<CallResponse>, AppError> {
    let controller = CallController::new(state.pool.clone());
    let response = controller.get(&user, id).await?;
    Ok(Json(response))
}

async fn update_call(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCallRequest>,
) -> Result<Json<ApiResponse<CallResponse>>, AppError> {
    let controller = CallController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Llamada actualizada exitosamente".to_string(),
    )))
}

async fn delete_call(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CallController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(ApiResponse::message("Llamada eliminada exitosamente".to_string())))
}
