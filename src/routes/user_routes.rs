use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", put(update_user).delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Usuario creado exitosamente".to_string(),
        )),
    ))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    controller.delete(&admin, id).await?;
    Ok(Json(ApiResponse::message("Usuario eliminado exitosamente".to_string())))
}
