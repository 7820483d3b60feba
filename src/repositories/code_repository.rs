use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::codes::{CodeKind, ReferenceCode};
use crate::utils::errors::{map_unique_violation, AppError};

/// Repositorio de códigos de alerta y médicos. El nombre de tabla sale de
/// `CodeKind`, nunca del request.
pub struct CodeRepository {
    pool: PgPool,
    kind: CodeKind,
}

impl CodeRepository {
    pub fn new(pool: PgPool, kind: CodeKind) -> Self {
        Self { pool, kind }
    }

    pub async fn list(&self, only_active: bool) -> Result<Vec<ReferenceCode>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE ($1 = FALSE OR is_active) ORDER BY code ASC",
            self.kind.table()
        );
        let codes = sqlx::query_as::<_, ReferenceCode>(&sql)
            .bind(only_active)
            .fetch_all(&self.pool)
            .await?;

        Ok(codes)
    }

    pub async fn create(&self, code: String, description: String, is_active: bool) -> Result<ReferenceCode, AppError> {
        let sql = format!(
            "INSERT INTO {} (id, code, description, is_active, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING *",
            self.kind.table()
        );
        let created = sqlx::query_as::<_, ReferenceCode>(&sql)
            .bind(Uuid::new_v4())
            .bind(&code)
            .bind(description)
            .bind(is_active)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, self.kind.label(), "code", &code))?;

        log::info!("🏷️ {} '{}' creado", self.kind.label(), created.code);
        Ok(created)
    }

    pub async fn update(
        &self,
        id: Uuid,
        code: Option<String>,
        description: Option<String>,
        is_active: Option<bool>,
    ) -> Result<ReferenceCode, AppError> {
        let sql = format!(
            r#"
            UPDATE {} SET
                code = COALESCE($2, code),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active)
            WHERE id = $1
            RETURNING *
            "#,
            self.kind.table()
        );
        let conflict_value = code.clone().unwrap_or_default();
        let updated = sqlx::query_as::<_, ReferenceCode>(&sql)
            .bind(id)
            .bind(code)
            .bind(description)
            .bind(is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, self.kind.label(), "code", &conflict_value))?
            .ok_or_else(|| AppError::NotFound(format!("{} no encontrado", self.kind.label())))?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.kind.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
