//! Modelo de User
//!
//! Este módulo contiene el struct User, su rol y las variantes de request
//! y response que usa la administración de usuarios.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::VehicleCategory;
use crate::services::vehicle_classifier::classify;
use crate::utils::validation::validate_numeric_code;

/// Rol del usuario
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    /// Roles desconocidos se tratan como usuario normal
    pub fn from_db(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub mda_code: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> UserRole {
        UserRole::from_db(&self.role)
    }
}

/// Request para crear un nuevo usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    #[validate(custom = "validate_numeric_code")]
    pub mda_code: String,

    #[serde(default)]
    pub role: UserRole,
}

/// Request para actualizar un usuario existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: Option<String>,

    #[validate(custom = "validate_numeric_code")]
    pub mda_code: Option<String>,

    #[validate(length(min = 6, max = 100))]
    pub password: Option<String>,

    pub role: Option<UserRole>,
}

/// Response de usuario para la API
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub mda_code: String,
    pub role: UserRole,
    pub vehicle_type: VehicleCategory,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let role = user.role();
        let vehicle_type = classify(&user.mda_code);
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            mda_code: user.mda_code,
            role,
            vehicle_type,
            created_at: user.created_at,
        }
    }
}
