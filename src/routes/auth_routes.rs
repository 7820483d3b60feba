use axum::{extract::State, Extension, Json};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::user_controller::UserController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::UserResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login(request, &state.jwt).await?;
    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.me(&user).await?;
    Ok(Json(response))
}
