use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn me(&self, user: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user = self
            .repository
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn create(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let user = self
            .repository
            .create(
                request.username.trim().to_string(),
                request.full_name.trim().to_string(),
                request.mda_code.trim().to_string(),
                request.role,
                password_hash,
            )
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn update(&self, id: Uuid, request: UpdateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let password_hash = request.password.as_deref().map(hash_password).transpose()?;
        let user = self
            .repository
            .update(
                id,
                request.full_name.map(|n| n.trim().to_string()),
                request.mda_code.map(|c| c.trim().to_string()),
                request.role,
                password_hash,
            )
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn delete(&self, admin: &AuthenticatedUser, id: Uuid) -> AppResult<()> {
        if admin.user_id == id {
            return Err(AppError::BadRequest(
                "Un administrador no puede eliminarse a sí mismo".to_string(),
            ));
        }

        if !self.repository.delete(id).await? {
            return Err(not_found_error("User", &id.to_string()));
        }

        tracing::info!("🗑️ Usuario {} eliminado por {}", id, admin.username);
        Ok(())
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST).map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))
}
