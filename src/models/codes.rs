//! Códigos de referencia
//!
//! Tablas `alert_codes` y `medical_codes`. Ambas tienen la misma forma, así
//! que comparten struct y el tipo `CodeKind` elige la tabla.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Tipo de código de referencia
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    Alert,
    Medical,
}

impl CodeKind {
    pub fn table(&self) -> &'static str {
        match self {
            CodeKind::Alert => "alert_codes",
            CodeKind::Medical => "medical_codes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CodeKind::Alert => "Código de alerta",
            CodeKind::Medical => "Código médico",
        }
    }
}

impl FromStr for CodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alert" => Ok(CodeKind::Alert),
            "medical" => Ok(CodeKind::Medical),
            other => Err(format!("Tipo de código desconocido: '{}'", other)),
        }
    }
}

/// Código de referencia
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReferenceCode {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un código
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCodeRequest {
    #[validate(length(min = 1, max = 20))]
    pub code: String,

    #[validate(length(min = 1, max = 200))]
    pub description: String,

    pub is_active: Option<bool>,
}

/// Request para actualizar un código
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCodeRequest {
    #[validate(length(min = 1, max = 20))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub description: Option<String>,

    pub is_active: Option<bool>,
}
