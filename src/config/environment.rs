//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub run_migrations: bool,
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno. Sólo `DATABASE_URL` y `JWT_SECRET`
    /// son obligatorias.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "43200".to_string())
                .parse()
                .context("JWT_EXPIRATION must be a valid number")?,
            cors_origins: parse_origins(&env::var("CORS_ORIGINS").unwrap_or_default()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de logging para tracing, `INFO` si el valor no es reconocido
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
impl EnvironmentConfig {
    /// Configuración fija para tests, sin leer el entorno
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            database_url: "postgres://localhost/call_log_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: Vec::new(),
            log_level: "debug".to_string(),
            run_migrations: false,
        }
    }
}
