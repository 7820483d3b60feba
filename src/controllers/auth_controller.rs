use bcrypt::verify;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::user::UserResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn login(&self, request: LoginRequest, jwt: &JwtConfig) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = self
            .repository
            .find_by_username(request.username.trim())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar password
        let password_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)))?;

        if !password_valid {
            tracing::warn!("🔒 Login fallido para '{}'", user.username);
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.username, user.role(), jwt)?;
        tracing::info!("✅ Login exitoso: {}", user.username);

        Ok(LoginResponse {
            token,
            expires_in: jwt.expiration,
            user: UserResponse::from(user),
        })
    }
}
