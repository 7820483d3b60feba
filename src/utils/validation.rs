//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos que usan los requests.

use chrono::NaiveTime;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Formatos de hora aceptados desde el cliente
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Validar que un código MDA / número de vehículo sólo tenga dígitos
pub fn validate_numeric_code(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.len() > 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("numeric_code");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar una hora en formato HH:MM o HH:MM:SS
pub fn validate_time_str(value: &str) -> Result<(), ValidationError> {
    parse_time_opt(value).map(|_| ()).ok_or_else(|| {
        let mut error = ValidationError::new("time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"HH:MM".to_string());
        error
    })
}

fn parse_time_opt(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Convertir string a hora, error de request si no es válida
pub fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    parse_time_opt(value)
        .ok_or_else(|| AppError::BadRequest(format!("Hora inválida: '{}' (formato HH:MM)", value)))
}

/// Limitar paginación a valores razonables
pub fn clamp_pagination(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(50).clamp(1, 500);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_numeric_code() {
        assert!(validate_numeric_code("5123").is_ok());
        assert!(validate_numeric_code(" 12345 ").is_ok());
        assert!(validate_numeric_code("").is_err());
        assert!(validate_numeric_code("51a3").is_err());
        assert!(validate_numeric_code("12345678901").is_err());
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("08:15").unwrap(), NaiveTime::from_hms_opt(8, 15, 0).unwrap());
        assert_eq!(parse_time("23:59:30").unwrap(), NaiveTime::from_hms_opt(23, 59, 30).unwrap());
        assert!(parse_time("25:00").is_err());
        assert!(validate_time_str("8h15").is_err());
    }

    #[test]
    fn test_clamp_pagination() {
        assert_eq!(clamp_pagination(None, None), (50, 0));
        assert_eq!(clamp_pagination(Some(10_000), Some(-5)), (500, 0));
        assert_eq!(clamp_pagination(Some(0), Some(20)), (1, 20));
    }
}
