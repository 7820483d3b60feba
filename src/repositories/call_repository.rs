use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::call::{Call, CallFilters, CallStatsRow};
use crate::utils::errors::{map_foreign_key_violation, AppError};

const INVALID_CODE_REFERENCE: &str = "Código de alerta o médico inexistente";

/// Datos ya normalizados para insertar o reemplazar una llamada
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub call_type: String,
    pub call_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub location: Option<String>,
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub alert_code_id: Option<Uuid>,
    pub medical_code_id: Option<Uuid>,
}

impl From<Call> for CallRecord {
    fn from(call: Call) -> Self {
        Self {
            call_type: call.call_type,
            call_date: call.call_date,
            start_time: call.start_time,
            end_time: call.end_time,
            duration_minutes: call.duration_minutes,
            city: call.city,
            street: call.street,
            location: call.location,
            vehicle_number: call.vehicle_number,
            vehicle_type: call.vehicle_type,
            alert_code_id: call.alert_code_id,
            medical_code_id: call.medical_code_id,
        }
    }
}

pub struct CallRepository {
    pool: PgPool,
}

impl CallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, record: CallRecord) -> Result<Call, AppError> {
        let call = sqlx::query_as::<_, Call>(
            r#"
            INSERT INTO calls (
                id, user_id, call_type, call_date, start_time, end_time, duration_minutes,
                city, street, location, vehicle_number, vehicle_type,
                alert_code_id, medical_code_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(record.call_type)
        .bind(record.call_date)
        .bind(record.start_time)
        .bind(record.end_time)
        .bind(record.duration_minutes)
        .bind(record.city)
        .bind(record.street)
        .bind(record.location)
        .bind(record.vehicle_number)
        .bind(record.vehicle_type)
        .bind(record.alert_code_id)
        .bind(record.medical_code_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, INVALID_CODE_REFERENCE))?;

        log::info!("📞 Llamada {} creada para usuario {}", call.id, user_id);
        Ok(call)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Call>, AppError> {
        let call = sqlx::query_as::<_, Call>("SELECT * FROM calls WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(call)
    }

    /// Listar llamadas con filtros de igualdad/rango, más recientes primero
    pub async fn list(&self, filters: &CallFilters, limit: i64, offset: i64) -> Result<Vec<Call>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM calls WHERE TRUE");
        push_filters(&mut builder, filters);
        builder
            .push(" ORDER BY call_date DESC, start_time DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let calls = builder
            .build_query_as::<Call>()
            .fetch_all(&self.pool)
            .await?;

        log::debug!("📋 {} llamadas encontradas", calls.len());
        Ok(calls)
    }

    /// Filas mínimas para estadísticas dentro de un rango de fechas
    pub async fn stats_rows(
        &self,
        user_id: Option<Uuid>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CallStatsRow>, AppError> {
        let filters = CallFilters {
            from: Some(from),
            to: Some(to),
            user_id,
            ..Default::default()
        };

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT call_type, vehicle_number, duration_minutes FROM calls WHERE TRUE",
        );
        push_filters(&mut builder, &filters);

        let rows = builder
            .build_query_as::<CallStatsRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update(&self, id: Uuid, record: CallRecord) -> Result<Call, AppError> {
        let call = sqlx::query_as::<_, Call>(
            r#"
            UPDATE calls SET
                call_type = $2,
                call_date = $3,
                start_time = $4,
                end_time = $5,
                duration_minutes = $6,
                city = $7,
                street = $8,
                location = $9,
                vehicle_number = $10,
                vehicle_type = $11,
                alert_code_id = $12,
                medical_code_id = $13,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(record.call_type)
        .bind(record.call_date)
        .bind(record.start_time)
        .bind(record.end_time)
        .bind(record.duration_minutes)
        .bind(record.city)
        .bind(record.street)
        .bind(record.location)
        .bind(record.vehicle_number)
        .bind(record.vehicle_type)
        .bind(record.alert_code_id)
        .bind(record.medical_code_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, INVALID_CODE_REFERENCE))?
        .ok_or_else(|| AppError::NotFound("Llamada no encontrada".to_string()))?;

        Ok(call)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM calls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &CallFilters) {
    if let Some(user_id) = filters.user_id {
        builder.push(" AND user_id = ").push_bind(user_id);
    }
    if let Some(from) = filters.from {
        builder.push(" AND call_date >= ").push_bind(from);
    }
    if let Some(to) = filters.to {
        builder.push(" AND call_date <= ").push_bind(to);
    }
    if let Some(call_type) = filters.call_type.as_ref() {
        builder.push(" AND call_type = ").push_bind(call_type.clone());
    }
}
