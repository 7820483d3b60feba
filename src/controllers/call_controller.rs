use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::AuthenticatedUser;
use crate::models::call::{Call, CallFilters, CallResponse, CreateCallRequest, UpdateCallRequest};
use crate::repositories::call_repository::{CallRecord, CallRepository};
use crate::repositories::user_repository::UserRepository;
use crate::services::call_type_normalizer::normalize;
use crate::services::duration::derive_duration;
use crate::services::vehicle_classifier::classify;
use crate::utils::errors::{forbidden_error, not_found_error, AppError, AppResult};
use crate::utils::validation::{clamp_pagination, parse_time};

pub struct CallController {
    repository: CallRepository,
    users: UserRepository,
}

impl CallController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CallRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateCallRequest,
    ) -> AppResult<CallResponse> {
        request.validate()?;

        // Sin número de vehículo se usa el código MDA del conductor
        let default_vehicle = match request.vehicle_number {
            Some(_) => None,
            None => Some(
                self.users
                    .find_by_id(user.user_id)
                    .await?
                    .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?
                    .mda_code,
            ),
        };

        let record = record_from_create(request, default_vehicle.unwrap_or_default())?;
        let call = self.repository.create(user.user_id, record).await?;

        Ok(CallResponse::from(call))
    }

    pub async fn get(&self, user: &AuthenticatedUser, id: Uuid) -> AppResult<CallResponse> {
        let call = self.find_accessible(user, id, "view call").await?;
        Ok(CallResponse::from(call))
    }

    /// Llamadas del usuario autenticado
    pub async fn list_own(
        &self,
        user: &AuthenticatedUser,
        mut filters: CallFilters,
    ) -> AppResult<Vec<CallResponse>> {
        filters.user_id = Some(user.user_id);
        self.list(filters).await
    }

    /// Listado global para administración, `user_id` opcional
    pub async fn list(&self, mut filters: CallFilters) -> AppResult<Vec<CallResponse>> {
        let (limit, offset) = clamp_pagination(filters.limit, filters.offset);
        filters.call_type = filters.call_type.map(|t| normalize(&t));

        let calls = self.repository.list(&filters, limit, offset).await?;
        Ok(calls.into_iter().map(CallResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateCallRequest,
    ) -> AppResult<CallResponse> {
        request.validate()?;

        let existing = self.find_accessible(user, id, "update call").await?;
        let record = apply_update(existing, request)?;
        let call = self.repository.update(id, record).await?;

        Ok(CallResponse::from(call))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> AppResult<()> {
        self.find_accessible(user, id, "delete call").await?;

        if !self.repository.delete(id).await? {
            return Err(not_found_error("Call", &id.to_string()));
        }

        tracing::info!("🗑️ Llamada {} eliminada por {}", id, user.username);
        Ok(())
    }

    /// El dueño o un admin pueden acceder a la llamada
    async fn find_accessible(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        operation: &str,
    ) -> AppResult<Call> {
        let call = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Call", &id.to_string()))?;

        if call.user_id != user.user_id && !user.is_admin() {
            return Err(forbidden_error(operation, "the call belongs to another user"));
        }

        Ok(call)
    }
}

/// Construir el registro a guardar: tipo normalizado, vehículo clasificado
/// y duración derivada.
fn record_from_create(request: CreateCallRequest, default_vehicle: String) -> AppResult<CallRecord> {
    let start_time = parse_time(&request.start_time)?;
    let end_time = request.end_time.as_deref().map(parse_time).transpose()?;
    let vehicle_number = request
        .vehicle_number
        .unwrap_or(default_vehicle)
        .trim()
        .to_string();

    Ok(CallRecord {
        call_type: normalize(&request.call_type),
        call_date: request.call_date,
        start_time,
        end_time,
        duration_minutes: derive_duration(start_time, end_time),
        city: request.city,
        street: request.street,
        location: request.location,
        vehicle_type: classify(&vehicle_number).as_str().to_string(),
        vehicle_number,
        alert_code_id: request.alert_code_id,
        medical_code_id: request.medical_code_id,
    })
}

/// Mezclar la actualización parcial con la llamada existente y recalcular
/// los campos derivados.
fn apply_update(existing: Call, request: UpdateCallRequest) -> AppResult<CallRecord> {
    let mut record = CallRecord::from(existing);

    if let Some(call_type) = request.call_type {
        record.call_type = normalize(&call_type);
    }
    if let Some(call_date) = request.call_date {
        record.call_date = call_date;
    }
    if let Some(start_time) = request.start_time {
        record.start_time = parse_time(&start_time)?;
    }
    if let Some(end_time) = request.end_time {
        record.end_time = Some(parse_time(&end_time)?);
    }
    if let Some(city) = request.city {
        record.city = Some(city);
    }
    if let Some(street) = request.street {
        record.street = Some(street);
    }
    if let Some(location) = request.location {
        record.location = Some(location);
    }
    if let Some(vehicle_number) = request.vehicle_number {
        record.vehicle_number = vehicle_number.trim().to_string();
    }
    if let Some(alert_code_id) = request.alert_code_id {
        record.alert_code_id = Some(alert_code_id);
    }
    if let Some(medical_code_id) = request.medical_code_id {
        record.medical_code_id = Some(medical_code_id);
    }

    record.vehicle_type = classify(&record.vehicle_number).as_str().to_string();
    record.duration_minutes = derive_duration(record.start_time, record.end_time);

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn create_request() -> CreateCallRequest {
        CreateCallRequest {
            call_type: "urgent".to_string(),
            call_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            start_time: "22:40".to_string(),
            end_time: Some("00:10".to_string()),
            city: Some("תל אביב".to_string()),
            street: None,
            location: None,
            vehicle_number: None,
            alert_code_id: None,
            medical_code_id: None,
        }
    }

    fn existing_call() -> Call {
        Call {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            call_type: "דחוף".to_string(),
            call_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: None,
            duration_minutes: None,
            city: None,
            street: None,
            location: None,
            vehicle_number: "5123".to_string(),
            vehicle_type: "motorcycle".to_string(),
            alert_code_id: None,
            medical_code_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_derives_fields_and_uses_default_vehicle() {
        let record = record_from_create(create_request(), "12345".to_string()).unwrap();
        assert_eq!(record.call_type, "דחוף");
        assert_eq!(record.vehicle_number, "12345");
        assert_eq!(record.vehicle_type, "personal_standby");
        assert_eq!(record.duration_minutes, Some(90));
    }

    #[test]
    fn test_create_prefers_explicit_vehicle() {
        let mut request = create_request();
        request.vehicle_number = Some(" 6100 ".to_string());
        request.end_time = None;
        let record = record_from_create(request, "12345".to_string()).unwrap();
        assert_eq!(record.vehicle_number, "6100");
        assert_eq!(record.vehicle_type, "picanto");
        assert_eq!(record.duration_minutes, None);
    }

    #[test]
    fn test_update_sets_end_time_and_recomputes_duration() {
        let request = UpdateCallRequest {
            call_type: None,
            call_date: None,
            start_time: None,
            end_time: Some("10:45".to_string()),
            city: None,
            street: None,
            location: None,
            vehicle_number: Some("7000".to_string()),
            alert_code_id: None,
            medical_code_id: None,
        };
        let record = apply_update(existing_call(), request).unwrap();
        assert_eq!(record.duration_minutes, Some(45));
        assert_eq!(record.vehicle_number, "7000");
        assert_eq!(record.vehicle_type, "ambulance");
        assert_eq!(record.call_type, "דחוף");
    }

    #[test]
    fn test_update_with_bad_time_is_rejected() {
        let request = UpdateCallRequest {
            call_type: None,
            call_date: None,
            start_time: Some("99:99".to_string()),
            end_time: None,
            city: None,
            street: None,
            location: None,
            vehicle_number: None,
            alert_code_id: None,
            medical_code_id: None,
        };
        assert!(matches!(apply_update(existing_call(), request), Err(AppError::BadRequest(_))));
    }
}
