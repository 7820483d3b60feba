//! Modelo de Call
//!
//! Mapea la tabla `calls`. `duration_minutes` y `vehicle_type` son campos
//! derivados que calcula el servidor; el cliente nunca los envía.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::VehicleCategory;
use crate::services::vehicle_classifier::classify;
use crate::utils::validation::{validate_numeric_code, validate_time_str};

/// Call principal - mapea exactamente a la tabla calls
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Call {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columnas mínimas que necesita el agregador de estadísticas
#[derive(Debug, Clone, FromRow)]
pub struct CallStatsRow {
    pub call_type: String,
    pub vehicle_number: String,
    pub duration_minutes: Option<i32>,
}

/// Response de llamada para la API
#[derive(Debug, Clone, Serialize)]
pub struct CallResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub call_type: String,
    pub call_date: NaiveDate,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub location: Option<String>,
    pub vehicle_number: String,
    pub vehicle_type: VehicleCategory,
    pub alert_code_id: Option<Uuid>,
    pub medical_code_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Call> for CallResponse {
    fn from(call: Call) -> Self {
        // La categoría se recalcula desde el número para no depender de la columna
        let vehicle_type = classify(&call.vehicle_number);
        Self {
            id: call.id,
            user_id: call.user_id,
            call_type: call.call_type,
            call_date: call.call_date,
            start_time: call.start_time.format("%H:%M").to_string(),
            end_time: call.end_time.map(|t| t.format("%H:%M").to_string()),
            duration_minutes: call.duration_minutes,
            city: call.city,
            street: call.street,
            location: call.location,
            vehicle_number: call.vehicle_number,
            vehicle_type,
            alert_code_id: call.alert_code_id,
            medical_code_id: call.medical_code_id,
            created_at: call.created_at,
        }
    }
}

/// Filtros para búsqueda de llamadas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallFilters {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub call_type: Option<String>,
    pub user_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request para crear una nueva llamada
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCallRequest {
    #[validate(length(min = 1, max = 50))]
    pub call_type: String,

    pub call_date: NaiveDate,

    #[validate(custom = "validate_time_str")]
    pub start_time: String,

    #[validate(custom = "validate_time_str")]
    pub end_time: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 200))]
    pub street: Option<String>,

    #[validate(length(max = 300))]
    pub location: Option<String>,

    /// Si falta se usa el código MDA del usuario
    #[validate(custom = "validate_numeric_code")]
    pub vehicle_number: Option<String>,

    pub alert_code_id: Option<Uuid>,
    pub medical_code_id: Option<Uuid>,
}

/// Request para actualizar una llamada existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCallRequest {
    #[validate(length(min = 1, max = 50))]
    pub call_type: Option<String>,

    pub call_date: Option<NaiveDate>,

    #[validate(custom = "validate_time_str")]
    pub start_time: Option<String>,

    #[validate(custom = "validate_time_str")]
    pub end_time: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 200))]
    pub street: Option<String>,

    #[validate(length(max = 300))]
    pub location: Option<String>,

    #[validate(custom = "validate_numeric_code")]
    pub vehicle_number: Option<String>,

    pub alert_code_id: Option<Uuid>,
    pub medical_code_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_call(vehicle_number: &str, stored_type: &str) -> Call {
        Call {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            call_type: "דחוף".to_string(),
            call_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(23, 40, 0).unwrap(),
            end_time: Some(NaiveTime::from_hms_opt(0, 10, 30).unwrap()),
            duration_minutes: Some(30),
            city: None,
            street: None,
            location: None,
            vehicle_number: vehicle_number.to_string(),
            vehicle_type: stored_type.to_string(),
            alert_code_id: None,
            medical_code_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_response_ignores_stale_vehicle_type_column() {
        let response = CallResponse::from(stored_call("5123", "ambulance"));
        assert_eq!(response.vehicle_type, VehicleCategory::Motorcycle);

        let response = CallResponse::from(stored_call("12345", "picanto"));
        assert_eq!(response.vehicle_type, VehicleCategory::PersonalStandby);
    }

    #[test]
    fn test_response_formats_times_without_seconds() {
        let response = CallResponse::from(stored_call("6042", "picanto"));
        assert_eq!(response.start_time, "23:40");
        assert_eq!(response.end_time.as_deref(), Some("00:10"));
        assert_eq!(response.vehicle_type, VehicleCategory::Picanto);
    }
}
